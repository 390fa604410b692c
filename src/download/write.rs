use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

pub async fn write_entry(path: &Path, entry: &Value) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(entry)?;
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
