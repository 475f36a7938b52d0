use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Recognition outcome for one image file. `detected` is empty when the file
/// could not be decoded or the engine reported nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResult {
    pub filename: String,
    pub detected: String,
}

impl ImageResult {
    pub fn new(filename: impl Into<String>, detected: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            detected: detected.into(),
        }
    }
}

/// Ordered collection of per-file results for one scan. Insertion order is
/// traversal discovery order, and that order is what gets serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultBatch {
    records: Vec<ImageResult>,
}

impl ResultBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ImageResult) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ImageResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Loads a previously saved results document.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read results file: {}", path.display()))?;
        let batch = serde_json::from_str(&data)
            .with_context(|| format!("failed to parse results file: {}", path.display()))?;
        Ok(batch)
    }

    /// Finds the detected text for an image path by suffix match against the
    /// stored relative filenames.
    pub fn detected_for(&self, image_path: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| image_path.ends_with(&record.filename))
            .map(|record| record.detected.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preserves_insertion_order() {
        let mut batch = ResultBatch::new();
        batch.push(ImageResult::new("/b.png", "second"));
        batch.push(ImageResult::new("/a.png", "first"));

        let names: Vec<_> = batch.records().iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(names, vec!["/b.png", "/a.png"]);
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut batch = ResultBatch::new();
        batch.push(ImageResult::new("/sub/deep.jpeg", "HELLO"));

        let value = serde_json::to_value(&batch).unwrap();
        let entries = value.as_array().expect("batch should serialize as an array");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["filename"], "/sub/deep.jpeg");
        assert_eq!(entries[0]["detected"], "HELLO");
    }

    #[test]
    fn empty_batch_serializes_as_empty_array() {
        let batch = ResultBatch::new();
        assert_eq!(serde_json::to_string(&batch).unwrap(), "[]");
    }

    #[test]
    fn looks_up_detected_text_by_path_suffix() {
        let mut batch = ResultBatch::new();
        batch.push(ImageResult::new("/berlin/sign.jpg", "AErzte"));

        assert_eq!(
            batch.detected_for("/home/user/dataset/berlin/sign.jpg"),
            Some("AErzte")
        );
        assert_eq!(batch.detected_for("/home/user/dataset/other.jpg"), None);
    }
}
