use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Stats;

#[derive(Copy, Clone, Debug)]
pub enum Phase { ScanRecords, Summarize }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::ScanRecords => "scan_records",
        Phase::Summarize => "summarize",
    }}
    fn span(&self) -> Span { match self {
        Phase::ScanRecords => info_span!("scan_records"),
        Phase::Summarize => info_span!("summarize"),
    }}
}

impl OpMarker for Stats {
    const NAME: &'static str = "stats";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("stats") }
}
