use serde::Serialize;

// Plan envelope types
#[derive(Serialize)]
pub struct SplitSample { pub split: String, pub accessions: usize, pub sample: Vec<String> }

#[derive(Serialize)]
pub struct DownloadPlan { pub splits: usize, pub accessions: usize, pub force_refetch: bool, pub per_split: Vec<SplitSample> }

// Apply/result envelope types
#[derive(Serialize)]
pub struct SplitSummary { pub split: String, pub fetched: usize, pub skipped: usize, pub errors: usize }

#[derive(Serialize)]
pub struct DownloadTotals { pub fetched: usize, pub skipped: usize, pub errors: usize }

#[derive(Serialize)]
pub struct DownloadApply { pub totals: DownloadTotals, pub per_split: Vec<SplitSummary> }
