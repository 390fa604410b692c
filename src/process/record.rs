use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Subset of a UniProtKB entry that the processor consumes. Everything
// beyond the accession and the sequence is optional; absent annotations
// become empty strings in the output record.

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniProtEntry {
    pub primary_accession: String,
    pub sequence: SequenceValue,
    pub organism: Option<Organism>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Deserialize)]
pub struct SequenceValue {
    pub value: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    #[serde(default)]
    pub lineage: Vec<String>,
    pub scientific_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_type: String,
    #[serde(default)]
    pub texts: Vec<Text>,
    pub reaction: Option<Reaction>,
    #[serde(default)]
    pub cofactors: Vec<Cofactor>,
    pub note: Option<Note>,
    #[serde(default)]
    pub subcellular_locations: Vec<SubcellularLocation>,
}

#[derive(Deserialize)]
pub struct Text {
    pub value: String,
}

#[derive(Deserialize)]
pub struct Reaction {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct Cofactor {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct Note {
    #[serde(default)]
    pub texts: Vec<Text>,
}

#[derive(Deserialize)]
pub struct SubcellularLocation {
    pub location: Option<ValueField>,
    pub topology: Option<ValueField>,
    pub orientation: Option<ValueField>,
}

#[derive(Deserialize)]
pub struct ValueField {
    pub value: String,
}

/// One JSONL record: a single segment of a protein plus its annotations.
/// A protein longer than the window produces several records that differ
/// only in `sequence`.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub accession: String,
    pub sequence: String,
    pub organism: String,
    pub family: String,
    pub domain: String,
    pub location: String,
    pub subunit: String,
    pub activity: String,
    pub cofactor: String,
    pub ptm: String,
    pub pathway: String,
    pub tissue: String,
    pub induction: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct Manifest {
    pub split: String,
    pub proteins: usize,
    pub records: usize,
    pub window: i64,
    pub overlap: i64,
    pub written_at: DateTime<Utc>,
}
