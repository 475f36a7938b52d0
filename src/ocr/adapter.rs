use std::path::Path;

use crate::ocr::{Observation, TextEngine};

/// Wraps a [`TextEngine`] so that every per-file failure mode collapses to an
/// empty string: one undecodable image or engine error never aborts a batch.
#[derive(Debug, Clone)]
pub struct OcrAdapter<E: TextEngine> {
    engine: E,
}

impl<E: TextEngine> OcrAdapter<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Decodes `path` and runs the decoded image through the engine.
    /// `display` is the base-relative name used in diagnostics.
    pub fn recognize_file(&self, path: &Path, display: &str) -> String {
        let image = match image::open(path) {
            Ok(image) => image,
            Err(err) => {
                eprintln!("  [!] Unable to decode {display}: {err}");
                return String::new();
            }
        };

        match self.engine.recognize(&image) {
            Ok(observations) => {
                let detected = join_observations(&observations);
                println!("  [+] {display}: {detected}");
                detected
            }
            Err(err) => {
                eprintln!("  [!] Recognition failed for {display}: {err}");
                String::new()
            }
        }
    }
}

/// Space-joins the best candidate of each region in observation order. No
/// regions means an empty string, not an error.
pub fn join_observations(observations: &[Observation]) -> String {
    observations
        .iter()
        .map(|obs| obs.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
