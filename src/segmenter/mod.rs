pub mod spans;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::telemetry::{self};
use crate::telemetry::ops::segment::Phase as SegmentPhase;

pub use spans::{InvalidParameter, Span, WindowConfig, segment};

#[derive(Args)]
pub struct SegmentCmd {
    /// Sequence length in residues
    #[arg(long)]
    len: i64,
    /// Encoder window in residues
    #[arg(long, default_value_t = 1022)]
    window: i64,
    /// Residues shared between consecutive windows
    #[arg(long, default_value_t = 256)]
    overlap: i64,
}

pub fn run(args: SegmentCmd) -> Result<()> {
    let log = telemetry::segment();
    let _g = log
        .root_span_kv([
            ("len", args.len.to_string()),
            ("window", args.window.to_string()),
            ("overlap", args.overlap.to_string()),
        ])
        .entered();

    let _s = log.span(&SegmentPhase::Compute).entered();
    let config = WindowConfig::new(args.window, args.overlap)?;
    let spans = config.segment(args.len)?;
    drop(_s);

    log.info(format!(
        "🧩 {} residue(s) → {} segment(s) (window={} overlap={} stride={})",
        args.len,
        spans.len(),
        config.window(),
        config.overlap(),
        config.stride()
    ));
    for (i, sp) in spans.iter().enumerate() {
        log.info(format!("  segment {}: [{}, {}) len={}", i, sp.start, sp.end, sp.len()));
    }

    if telemetry::config::json_mode() {
        #[derive(Serialize)]
        struct SegmentResult {
            len: i64,
            window: i64,
            overlap: i64,
            stride: usize,
            segments: Vec<Span>,
        }
        let res = SegmentResult {
            len: args.len,
            window: args.window,
            overlap: args.overlap,
            stride: config.stride(),
            segments: spans,
        };
        log.result(&res)?;
    }
    Ok(())
}
