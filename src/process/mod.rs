use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use serde::Serialize;

use crate::segmenter::WindowConfig;
use crate::telemetry::ops::process::Phase as ProcessPhase;
use crate::telemetry::{self};
use crate::util::paths;
use crate::util::split::Split;

mod extract;
pub mod record;
mod scan;
mod write;

use record::{Manifest, ProteinRecord, UniProtEntry};

#[derive(Args)]
pub struct ProcessCmd {
    /// Restrict to one split (train, val, test)
    #[arg(long)] split: Option<Split>,
    /// Encoder window in residues; 1022 leaves room for the two special
    /// tokens of a 1024-position encoder
    #[arg(long, default_value_t = 1022)] window: i64,
    #[arg(long, default_value_t = 256)] overlap: i64,
    #[arg(long)] limit: Option<usize>,
    #[arg(long, default_value_t = false)] apply: bool,
    #[arg(long, default_value_t = 10)] plan_limit: usize,
}

pub async fn run(data_dir: &Path, args: ProcessCmd) -> Result<()> {
    let log = telemetry::process();
    let _g = log.root_span_kv([
        ("split", format!("{:?}", args.split)),
        ("window", args.window.to_string()),
        ("overlap", args.overlap.to_string()),
        ("limit", format!("{:?}", args.limit)),
        ("apply", args.apply.to_string()),
    ]).entered();

    let config = WindowConfig::new(args.window, args.overlap)
        .context("segmentation parameters")?;

    let splits: Vec<Split> = match args.split {
        Some(s) => vec![s],
        None => Split::ALL.to_vec(),
    };

    let _s = log.span(&ProcessPhase::ScanFiles).entered();
    let mut work = Vec::new();
    for split in splits {
        let dir = paths::download_dir(data_dir, split);
        let files = scan::entry_files(&dir)?;
        work.push((split, files));
    }
    drop(_s);

    if !args.apply {
        let _sp = log.span(&ProcessPhase::Plan).entered();
        let total: usize = work.iter().map(|(_, f)| f.len()).sum();
        log.info(format!(
            "📝 Process plan — splits={} entries={} window={} overlap={} stride={}",
            work.len(), total, args.window, args.overlap, config.stride()
        ));
        for (split, files) in &work {
            log.info(format!("  {}: {} entry file(s)", split, files.len()));
            for f in files.iter().take(args.plan_limit) {
                log.info(format!("    {}", f.display()));
            }
            if files.len() > args.plan_limit {
                log.info(format!("    ... ({} more)", files.len() - args.plan_limit));
            }
        }
        log.info("   Use --apply to execute.");
        if telemetry::config::json_mode() {
            #[derive(Serialize)]
            struct ProcessPlan { splits: usize, entries: usize, window: i64, overlap: i64, stride: usize }
            let plan = ProcessPlan {
                splits: work.len(),
                entries: total,
                window: args.window,
                overlap: args.overlap,
                stride: config.stride(),
            };
            log.plan(&plan)?;
        }
        return Ok(());
    }

    let mut total_proteins = 0usize;
    let mut total_records = 0usize;
    let mut total_errors = 0usize;

    #[derive(Serialize)]
    struct SplitResult { split: String, proteins: usize, records: usize, errors: usize }
    let mut per_split: Vec<SplitResult> = Vec::new();

    for (split, files) in work {
        let out_path = paths::processed_jsonl(data_dir, split);
        let mut writer = write::JsonlWriter::create(&out_path)?;

        let mut proteins = 0usize;
        let mut records = 0usize;
        let mut errors = 0usize;

        let take = args.limit.unwrap_or(files.len());
        for path in files.iter().take(take) {
            let _ex = log.span(&ProcessPhase::Extract).entered();
            let entry: UniProtEntry = match std::fs::read_to_string(path)
                .map_err(anyhow::Error::from)
                .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
            {
                Ok(e) => e,
                Err(err) => {
                    log.warn_kv("⚠️ failed to load", [
                        ("file", path.display().to_string()),
                        ("error", format!("{err:#}")),
                    ]);
                    errors += 1;
                    continue;
                }
            };
            let rec = extract::extract_features(&entry);
            drop(_ex);

            // residues index as bytes only for ASCII sequences; anything
            // else has no business in the dataset anyway
            if rec.sequence.is_empty() || !rec.sequence.is_ascii() {
                log.warn_kv("⚠️ unusable sequence", [("accession", rec.accession.clone())]);
                errors += 1;
                continue;
            }

            let _sg = log.span(&ProcessPhase::Segment).entered();
            let spans = config.segment(rec.sequence.len() as i64)?;
            drop(_sg);

            let _wr = log.span(&ProcessPhase::WriteRecord).entered();
            for span in &spans {
                let segmented = ProteinRecord {
                    sequence: rec.sequence[span.start..span.end].to_string(),
                    ..rec.clone()
                };
                writer.write_line(&segmented)?;
                records += 1;
            }
            drop(_wr);

            if spans.len() > 1 {
                log.debug_kv("🧩 segmented", [
                    ("accession", rec.accession.clone()),
                    ("segments", spans.len().to_string()),
                ]);
            }
            proteins += 1;
        }

        writer.finish()?;

        let _mf = log.span(&ProcessPhase::WriteManifest).entered();
        let manifest = Manifest {
            split: split.to_string(),
            proteins,
            records,
            window: args.window,
            overlap: args.overlap,
            written_at: Utc::now(),
        };
        write::write_manifest(&paths::manifest(data_dir, split), &manifest)?;
        drop(_mf);

        total_proteins += proteins;
        total_records += records;
        total_errors += errors;
        log.split_summary(split.as_str(), proteins, records, errors);
        per_split.push(SplitResult { split: split.to_string(), proteins, records, errors });
    }

    log.totals(total_proteins, total_records, total_errors);

    if telemetry::config::json_mode() {
        #[derive(Serialize)]
        struct ProcessResult { proteins: usize, records: usize, errors: usize, per_split: Vec<SplitResult> }
        let res = ProcessResult {
            proteins: total_proteins,
            records: total_records,
            errors: total_errors,
            per_split,
        };
        log.result(&res)?;
    }
    Ok(())
}
