use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

// See: https://www.uniprot.org/help/uniprotkb
pub const BASE_URL: &str = "https://rest.uniprot.org/uniprotkb";

// Ok(None) when the API answers with a non-success status (unknown
// accession, throttling); the caller logs and moves on.
pub async fn fetch_entry(client: &Client, accession: &str) -> Result<Option<Value>> {
    let url = format!("{BASE_URL}/{accession}.json");
    let resp = client.get(&url).send().await?;
    if !resp.status().is_success() {
        return Ok(None);
    }
    let entry = resp.json::<Value>().await?;
    Ok(Some(entry))
}
