use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::process::record::ProteinRecord;
use crate::util::split::Split;

use super::types::SplitStats;

pub fn split_stats(path: &Path, split: Split) -> Result<SplitStats> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut records = 0usize;
    let mut segments_per_accession: HashMap<String, usize> = HashMap::new();
    let mut min_len = usize::MAX;
    let mut max_len = 0usize;
    let mut total_len = 0usize;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let rec: ProteinRecord = serde_json::from_str(&line)
            .with_context(|| format!("parse record {} in {}", records + 1, path.display()))?;

        let len = rec.sequence.len();
        min_len = min_len.min(len);
        max_len = max_len.max(len);
        total_len += len;
        records += 1;
        *segments_per_accession.entry(rec.accession).or_insert(0) += 1;
    }

    let proteins = segments_per_accession.len();
    let multi = segments_per_accession.values().filter(|&&c| c > 1).count();
    Ok(SplitStats {
        split: split.to_string(),
        records,
        proteins,
        multi_segment_proteins: multi,
        min_len: if records == 0 { 0 } else { min_len },
        max_len,
        mean_len: if records == 0 { 0.0 } else { total_len as f64 / records as f64 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::record::ProteinRecord;

    fn record(accession: &str, sequence: &str) -> ProteinRecord {
        ProteinRecord {
            accession: accession.into(),
            sequence: sequence.into(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_records_and_multi_segment_proteins() {
        let dir = std::env::temp_dir().join("protprep-stats-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.jsonl");
        let lines: Vec<String> = [record("P1", "AAAA"), record("P1", "AABB"), record("P2", "CC")]
            .iter()
            .map(|r| serde_json::to_string(r).unwrap())
            .collect();
        std::fs::write(&path, lines.join("\n")).unwrap();

        let stats = split_stats(&path, Split::Test).unwrap();
        assert_eq!(stats.records, 3);
        assert_eq!(stats.proteins, 2);
        assert_eq!(stats.multi_segment_proteins, 1);
        assert_eq!(stats.min_len, 2);
        assert_eq!(stats.max_len, 4);
    }
}
