use serde::Serialize;

#[derive(Serialize)]
pub struct SplitStats {
    pub split: String,
    pub records: usize,
    pub proteins: usize,
    pub multi_segment_proteins: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub mean_len: f64,
}
