use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};
use image::DynamicImage;

use crate::ocr::{Observation, TextEngine};

/// Subprocess bridge to the external recognizer. The decoded image is staged
/// as a PNG in a scratch directory and handed to a script that prints a JSON
/// array of `{text, confidence}` observations on stdout.
#[derive(Debug, Clone)]
pub struct BridgeEngine {
    work_dir: PathBuf,
    script_path: PathBuf,
}

impl BridgeEngine {
    pub fn new(work_dir: PathBuf) -> Self {
        let script_path = PathBuf::from("ocr/bridge/recognize.py");
        Self {
            work_dir,
            script_path,
        }
    }

    pub fn with_script(mut self, script_path: PathBuf) -> Self {
        self.script_path = script_path;
        self
    }
}

impl TextEngine for BridgeEngine {
    // `.output()` blocks until the engine process exits, which is what keeps
    // the batch strictly sequential.
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<Observation>> {
        fs::create_dir_all(&self.work_dir)?;
        let staged = self.work_dir.join(format!("frame_{}.png", std::process::id()));
        image
            .save(&staged)
            .with_context(|| "failed to stage image for the OCR engine")?;

        let output = Command::new("python3")
            .arg(&self.script_path)
            .arg("--image")
            .arg(&staged)
            .output()
            .with_context(|| "failed to invoke the OCR engine bridge");

        let _ = fs::remove_file(&staged);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("OCR engine failed: {stderr}");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let observations: Vec<Observation> = serde_json::from_str(&stdout)
            .with_context(|| "failed to parse OCR JSON response")?;
        Ok(observations)
    }
}
