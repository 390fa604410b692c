use regex::Regex;
use std::sync::OnceLock;

use super::record::{Comment, ProteinRecord, UniProtEntry, ValueField};

fn pubmed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\([^()]*PubMed[^()]*\)").expect("pubmed regex"))
}

/// Strip innermost parentheticals that cite PubMed evidence.
pub fn remove_pubmed_annotations(text: &str) -> String {
    pubmed_re().replace_all(text, "").into_owned()
}

// Texts of all comments of one type, joined with " | ".
fn comment_texts(comments: &[Comment], comment_type: &str) -> String {
    comments
        .iter()
        .filter(|c| c.comment_type == comment_type)
        .flat_map(|c| c.texts.iter())
        .map(|t| t.value.as_str())
        .collect::<Vec<_>>()
        .join(" | ")
}

fn organism(entry: &UniProtEntry) -> String {
    let Some(org) = entry.organism.as_ref() else { return String::new() };
    match (org.lineage.last(), org.scientific_name.as_deref()) {
        (Some(lineage), Some(name)) => format!("lineage: {lineage}, organism: {name}"),
        _ => String::new(),
    }
}

fn activity(comments: &[Comment]) -> String {
    comments
        .iter()
        .filter(|c| c.comment_type == "CATALYTIC ACTIVITY")
        .filter_map(|c| c.reaction.as_ref().and_then(|r| r.name.clone()))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn cofactor(comments: &[Comment]) -> String {
    let mut parts: Vec<String> = Vec::new();
    for c in comments.iter().filter(|c| c.comment_type == "COFACTOR") {
        parts.extend(c.cofactors.iter().filter_map(|cf| cf.name.clone()));
    }
    for c in comments.iter().filter(|c| c.comment_type == "COFACTOR") {
        if let Some(note) = &c.note {
            parts.extend(note.texts.iter().map(|t| t.value.clone()));
        }
    }
    parts.join(" | ")
}

fn location(comments: &[Comment]) -> String {
    fn field(f: &Option<ValueField>) -> &str {
        f.as_ref().map(|v| v.value.as_str()).unwrap_or("unknown")
    }

    let mut parts: Vec<String> = Vec::new();
    for c in comments.iter().filter(|c| c.comment_type == "SUBCELLULAR LOCATION") {
        for sl in &c.subcellular_locations {
            parts.push(format!(
                "location: {}; topology: {}; orientation: {}",
                field(&sl.location),
                field(&sl.topology),
                field(&sl.orientation)
            ));
        }
    }
    for c in comments.iter().filter(|c| c.comment_type == "SUBCELLULAR LOCATION") {
        if let Some(note) = &c.note {
            parts.extend(note.texts.iter().map(|t| t.value.clone()));
        }
    }
    parts.join(" | ")
}

/// Gather the annotation fields from an entry, with PubMed citations
/// stripped. The full-length sequence goes in as-is; segmentation happens
/// in the caller.
pub fn extract_features(entry: &UniProtEntry) -> ProteinRecord {
    let clean = |s: String| remove_pubmed_annotations(&s);
    let comments = &entry.comments;
    ProteinRecord {
        accession: entry.primary_accession.clone(),
        sequence: entry.sequence.value.clone(),
        organism: clean(organism(entry)),
        family: clean(comment_texts(comments, "SIMILARITY")),
        domain: clean(comment_texts(comments, "DOMAIN")),
        location: clean(location(comments)),
        subunit: clean(comment_texts(comments, "SUBUNIT")),
        activity: clean(activity(comments)),
        cofactor: clean(cofactor(comments)),
        ptm: clean(comment_texts(comments, "PTM")),
        pathway: clean(comment_texts(comments, "PATHWAY")),
        tissue: clean(comment_texts(comments, "TISSUE SPECIFICITY")),
        induction: clean(comment_texts(comments, "INDUCTION")),
        description: clean(comment_texts(comments, "FUNCTION")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: serde_json::Value) -> UniProtEntry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn strips_pubmed_parentheticals() {
        assert_eq!(
            remove_pubmed_annotations("Binds DNA (PubMed:1234, PubMed:5678) tightly"),
            "Binds DNA  tightly"
        );
        assert_eq!(remove_pubmed_annotations("No citations (here)"), "No citations (here)");
    }

    #[test]
    fn extracts_annotation_fields() {
        let e = entry(json!({
            "primaryAccession": "P69905",
            "sequence": { "value": "MVLSPADKTN" },
            "organism": { "lineage": ["Eukaryota", "Homo"], "scientificName": "Homo sapiens" },
            "comments": [
                { "commentType": "FUNCTION", "texts": [ { "value": "Oxygen transport (PubMed:1)" } ] },
                { "commentType": "SIMILARITY", "texts": [ { "value": "Belongs to the globin family" } ] },
                { "commentType": "CATALYTIC ACTIVITY", "reaction": { "name": "A = B" } },
                { "commentType": "SUBCELLULAR LOCATION", "subcellularLocations": [
                    { "location": { "value": "Cytoplasm" } }
                ] }
            ]
        }));
        let rec = extract_features(&e);
        assert_eq!(rec.accession, "P69905");
        assert_eq!(rec.sequence, "MVLSPADKTN");
        assert_eq!(rec.organism, "lineage: Homo, organism: Homo sapiens");
        assert_eq!(rec.description, "Oxygen transport ");
        assert_eq!(rec.family, "Belongs to the globin family");
        assert_eq!(rec.activity, "A = B");
        assert_eq!(rec.location, "location: Cytoplasm; topology: unknown; orientation: unknown");
        assert_eq!(rec.tissue, "");
    }

    #[test]
    fn joins_repeated_comments_with_pipes() {
        let e = entry(json!({
            "primaryAccession": "Q1",
            "sequence": { "value": "MA" },
            "comments": [
                { "commentType": "SUBUNIT", "texts": [ { "value": "Homodimer" } ] },
                { "commentType": "SUBUNIT", "texts": [ { "value": "Interacts with X" } ] }
            ]
        }));
        assert_eq!(extract_features(&e).subunit, "Homodimer | Interacts with X");
    }

    #[test]
    fn cofactor_names_come_before_notes() {
        let e = entry(json!({
            "primaryAccession": "Q2",
            "sequence": { "value": "MA" },
            "comments": [
                { "commentType": "COFACTOR",
                  "cofactors": [ { "name": "Zn(2+)" } ],
                  "note": { "texts": [ { "value": "Binds 1 zinc ion" } ] } }
            ]
        }));
        assert_eq!(extract_features(&e).cofactor, "Zn(2+) | Binds 1 zinc ion");
    }
}
