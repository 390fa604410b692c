use anyhow::Result;
use std::path::Path;

pub fn parse_accessions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_accessions(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_accessions(&text))
}

#[cfg(test)]
mod tests {
    use super::parse_accessions;

    #[test]
    fn trims_and_drops_blank_lines() {
        let parsed = parse_accessions("P69905\n  Q8WZ42\n\n P12345 \n");
        assert_eq!(parsed, vec!["P69905", "Q8WZ42", "P12345"]);
    }
}
