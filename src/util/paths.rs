use std::path::{Path, PathBuf};

use crate::util::split::Split;

// Layout under the data dir:
//   {split}.txt                     accession lists
//   download/{split}/{acc}.json     raw UniProtKB entries
//   processed/{split}.jsonl         segmented records
//   processed/{split}.manifest.json per-split run summary

pub fn accession_list(data_dir: &Path, split: Split) -> PathBuf {
    data_dir.join(format!("{split}.txt"))
}

pub fn download_dir(data_dir: &Path, split: Split) -> PathBuf {
    data_dir.join("download").join(split.as_str())
}

pub fn processed_jsonl(data_dir: &Path, split: Split) -> PathBuf {
    data_dir.join("processed").join(format!("{split}.jsonl"))
}

pub fn manifest(data_dir: &Path, split: Split) -> PathBuf {
    data_dir.join("processed").join(format!("{split}.manifest.json"))
}
