use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::telemetry::ops::download::Phase as DownloadPhase;
use crate::telemetry::{self};
use crate::util::paths;
use crate::util::split::Split;

mod accessions;
mod fetch;
mod types;
mod write;

use types::{DownloadApply, DownloadPlan, DownloadTotals, SplitSample, SplitSummary};

#[derive(Args)]
pub struct DownloadCmd {
    /// Restrict to one split (train, val, test)
    #[arg(long)] split: Option<Split>,
    #[arg(long)] limit: Option<usize>,
    #[arg(long, default_value_t = 4)] concurrency: usize,
    #[arg(long, default_value_t = false)] force_refetch: bool,
    #[arg(long, default_value_t = false)] apply: bool,
    #[arg(long, default_value_t = 10)] plan_limit: usize,
}

enum Outcome { Fetched, Skipped, Failed }

pub async fn run(data_dir: &Path, args: DownloadCmd) -> Result<()> {
    let log = telemetry::download();
    let _g = log.root_span_kv([
        ("split", format!("{:?}", args.split)),
        ("limit", format!("{:?}", args.limit)),
        ("concurrency", args.concurrency.to_string()),
        ("force_refetch", args.force_refetch.to_string()),
        ("apply", args.apply.to_string()),
    ]).entered();

    let splits: Vec<Split> = match args.split {
        Some(s) => vec![s],
        None => Split::ALL.to_vec(),
    };

    let _s = log.span(&DownloadPhase::ReadAccessions).entered();
    let mut work: Vec<(Split, Vec<String>)> = Vec::new();
    for split in splits {
        let path = paths::accession_list(data_dir, split);
        let accs = accessions::read_accessions(&path)
            .with_context(|| format!("read accession list {}", path.display()))?;
        work.push((split, accs));
    }
    drop(_s);

    if !args.apply {
        let _sp = log.span(&DownloadPhase::Plan).entered();
        let total: usize = work.iter().map(|(_, a)| a.len()).sum();
        log.info(format!(
            "📝 Download plan — splits={} accessions={} concurrency={} force_refetch={}",
            work.len(), total, args.concurrency, args.force_refetch
        ));
        for (split, accs) in &work {
            log.info(format!("  {}: {} accession(s)", split, accs.len()));
            for acc in accs.iter().take(args.plan_limit) {
                log.info(format!("    {}", acc));
            }
            if accs.len() > args.plan_limit {
                log.info(format!("    ... ({} more)", accs.len() - args.plan_limit));
            }
        }
        log.info("   Use --apply to execute.");
        if telemetry::config::json_mode() {
            let per_split: Vec<SplitSample> = work.iter()
                .map(|(split, accs)| SplitSample {
                    split: split.to_string(),
                    accessions: accs.len(),
                    sample: accs.iter().take(args.plan_limit).cloned().collect(),
                })
                .collect();
            let plan = DownloadPlan {
                splits: work.len(),
                accessions: total,
                force_refetch: args.force_refetch,
                per_split,
            };
            log.plan(&plan)?;
        }
        return Ok(());
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(20))
        .build()?;

    let mut total_fetched = 0usize;
    let mut total_skipped = 0usize;
    let mut total_errors = 0usize;
    let mut per_split: Vec<SplitSummary> = Vec::new();

    for (split, accs) in work {
        let _split_span = log
            .span_kv(&DownloadPhase::Fetch, [("split", split.to_string())])
            .entered();
        let dir = paths::download_dir(data_dir, split);
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create {}", dir.display()))?;

        let take = args.limit.unwrap_or(accs.len());
        let outcomes = stream::iter(accs.iter().take(take).map(|acc| {
            let client = &client;
            let dir = &dir;
            let log = &log;
            let force = args.force_refetch;
            async move {
                let target = dir.join(format!("{acc}.json"));
                if !force && tokio::fs::try_exists(&target).await.unwrap_or(false) {
                    log.debug_kv("↩️ skip", [("accession", acc.clone())]);
                    return Outcome::Skipped;
                }
                match fetch::fetch_entry(client, acc).await {
                    Ok(Some(entry)) => match write::write_entry(&target, &entry).await {
                        Ok(()) => {
                            log.info_kv("⬇️ fetched", [("accession", acc.clone())]);
                            Outcome::Fetched
                        }
                        Err(err) => {
                            log.warn_kv("⚠️ write failed", [
                                ("accession", acc.clone()),
                                ("error", format!("{err:#}")),
                            ]);
                            Outcome::Failed
                        }
                    },
                    Ok(None) => {
                        log.warn_kv("⚠️ not available", [("accession", acc.clone())]);
                        Outcome::Failed
                    }
                    Err(err) => {
                        log.warn_kv("⚠️ fetch failed", [
                            ("accession", acc.clone()),
                            ("error", format!("{err:#}")),
                        ]);
                        Outcome::Failed
                    }
                }
            }
        }))
        .buffer_unordered(args.concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

        let fetched = outcomes.iter().filter(|o| matches!(o, Outcome::Fetched)).count();
        let skipped = outcomes.iter().filter(|o| matches!(o, Outcome::Skipped)).count();
        let errors = outcomes.iter().filter(|o| matches!(o, Outcome::Failed)).count();

        total_fetched += fetched;
        total_skipped += skipped;
        total_errors += errors;
        log.split_summary(split.as_str(), fetched, skipped, errors);
        per_split.push(SplitSummary { split: split.to_string(), fetched, skipped, errors });
    }

    log.totals(total_fetched, total_skipped, total_errors);

    if telemetry::config::json_mode() {
        let result = DownloadApply {
            totals: DownloadTotals {
                fetched: total_fetched,
                skipped: total_skipped,
                errors: total_errors,
            },
            per_split,
        };
        log.result(&result)?;
    }
    Ok(())
}
