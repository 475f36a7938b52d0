use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::model::ResultBatch;

/// Persists a batch under `<out_root>/results` as a pretty-printed JSON
/// array, named by the Unix-epoch second at which the write happens.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    out_root: PathBuf,
}

impl ResultWriter {
    pub fn new(out_root: PathBuf) -> Self {
        Self { out_root }
    }

    /// Writes the batch using the current wall-clock time for the filename.
    pub fn write(&self, batch: &ResultBatch) -> Result<PathBuf> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .with_context(|| "system clock is before the Unix epoch")?
            .as_secs();
        self.write_at(batch, timestamp)
    }

    /// Same as [`write`](Self::write) with a caller-supplied timestamp, so
    /// tests can fix the clock.
    pub fn write_at(&self, batch: &ResultBatch, epoch_secs: u64) -> Result<PathBuf> {
        let results_dir = self.out_root.join("results");
        fs::create_dir_all(&results_dir)
            .with_context(|| format!("failed to create {}", results_dir.display()))?;

        let data = serde_json::to_string_pretty(batch)?;
        let path = results_dir.join(format!("ocr_result_{epoch_secs}.json"));

        // Staged in the same directory so the rename never crosses
        // filesystems; the final name only ever holds a complete document.
        let staging = results_dir.join(format!("ocr_result_{epoch_secs}.json.tmp"));
        fs::write(&staging, data)
            .with_context(|| format!("failed to write {}", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("failed to finalize {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::ImageResult;
    use pretty_assertions::assert_eq;

    fn temp_root(prefix: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis();
        let pid = std::process::id();
        let root = std::env::temp_dir().join(format!("{prefix}-{pid}-{now}"));
        fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn writes_named_document_under_results() -> Result<()> {
        let root = temp_root("textsweep-writer");
        let mut batch = ResultBatch::new();
        batch.push(ImageResult::new("/sub/deep.jpeg", "HELLO"));

        let writer = ResultWriter::new(root.clone());
        let path = writer.write_at(&batch, 1_700_000_000)?;

        assert_eq!(path, root.join("results").join("ocr_result_1700000000.json"));
        assert!(path.exists());

        let contents = fs::read_to_string(&path)?;
        assert!(contents.contains("\"filename\": \"/sub/deep.jpeg\""));
        assert!(contents.contains("\"detected\": \"HELLO\""));
        // Forward slashes must not be backslash-escaped.
        assert!(!contents.contains("\\/"));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn empty_batch_writes_empty_array() -> Result<()> {
        let root = temp_root("textsweep-writer-empty");
        let writer = ResultWriter::new(root.clone());

        let path = writer.write_at(&ResultBatch::new(), 1_700_000_001)?;
        assert_eq!(fs::read_to_string(&path)?, "[]");

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn distinct_timestamps_never_overwrite() -> Result<()> {
        let root = temp_root("textsweep-writer-stamps");
        let writer = ResultWriter::new(root.clone());

        let mut first = ResultBatch::new();
        first.push(ImageResult::new("/a.png", "ONE"));
        let mut second = ResultBatch::new();
        second.push(ImageResult::new("/a.png", "TWO"));

        let p1 = writer.write_at(&first, 1_700_000_010)?;
        let p2 = writer.write_at(&second, 1_700_000_011)?;

        assert_ne!(p1, p2);
        assert!(fs::read_to_string(&p1)?.contains("ONE"));
        assert!(fs::read_to_string(&p2)?.contains("TWO"));

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }

    #[test]
    fn round_trips_through_load() -> Result<()> {
        let root = temp_root("textsweep-writer-load");
        let mut batch = ResultBatch::new();
        batch.push(ImageResult::new("/good.jpg", "HELLO"));
        batch.push(ImageResult::new("/broken.png", ""));

        let writer = ResultWriter::new(root.clone());
        let path = writer.write_at(&batch, 1_700_000_020)?;

        let loaded = ResultBatch::load(&path)?;
        assert_eq!(loaded.records(), batch.records());

        let _ = fs::remove_dir_all(&root);
        Ok(())
    }
}
