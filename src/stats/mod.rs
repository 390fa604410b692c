use std::path::Path;

use anyhow::Result;
use clap::Args;

use crate::telemetry::ops::stats::Phase as StatsPhase;
use crate::telemetry::{self};
use crate::util::paths;
use crate::util::split::Split;

mod scan;
mod types;

use types::SplitStats;

#[derive(Args)]
pub struct StatsCmd {
    /// Restrict to one split (train, val, test)
    #[arg(long)] split: Option<Split>,
}

pub async fn run(data_dir: &Path, args: StatsCmd) -> Result<()> {
    let log = telemetry::stats();
    let _g = log.root_span_kv([("split", format!("{:?}", args.split))]).entered();

    let splits: Vec<Split> = match args.split {
        Some(s) => vec![s],
        None => Split::ALL.to_vec(),
    };

    let mut all: Vec<SplitStats> = Vec::new();
    for split in splits {
        let path = paths::processed_jsonl(data_dir, split);
        if !path.exists() {
            log.warn(format!("⚠️ {} — no processed records at {}", split, path.display()));
            continue;
        }
        let _s = log.span_kv(&StatsPhase::ScanRecords, [("split", split.to_string())]).entered();
        let stats = scan::split_stats(&path, split)?;
        drop(_s);
        all.push(stats);
    }

    let _s = log.span(&StatsPhase::Summarize).entered();
    for s in &all {
        log.info(format!(
            "📊 {} — records={} proteins={} multi_segment={} len min/mean/max = {}/{:.1}/{}",
            s.split, s.records, s.proteins, s.multi_segment_proteins, s.min_len, s.mean_len, s.max_len
        ));
    }
    drop(_s);

    if telemetry::config::json_mode() {
        #[derive(serde::Serialize)]
        struct StatsResult { per_split: Vec<SplitStats> }
        log.result(&StatsResult { per_split: all })?;
    }
    Ok(())
}
