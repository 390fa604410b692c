use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Process;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Plan, ScanFiles, Extract, Segment, WriteRecord, WriteManifest }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Plan => "plan",
        Phase::ScanFiles => "scan_files",
        Phase::Extract => "extract",
        Phase::Segment => "segment",
        Phase::WriteRecord => "write_record",
        Phase::WriteManifest => "write_manifest",
    }}
    fn span(&self) -> Span { match self {
        Phase::Plan => info_span!("plan"),
        Phase::ScanFiles => info_span!("scan_files"),
        Phase::Extract => info_span!("extract"),
        Phase::Segment => info_span!("segment"),
        Phase::WriteRecord => info_span!("write_record"),
        Phase::WriteManifest => info_span!("write_manifest"),
    }}
}

impl OpMarker for Process {
    const NAME: &'static str = "process";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("process") }
}
