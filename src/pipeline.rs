use std::path::PathBuf;

use anyhow::Result;

use crate::export::ResultWriter;
use crate::ocr::{BridgeEngine, OcrAdapter, TextEngine};
use crate::walk::DirectoryWalker;

/// Configuration for one batch run. The scan root doubles as the base against
/// which record filenames are made relative.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub engine_script: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(root: PathBuf, output: PathBuf) -> Self {
        Self {
            root,
            output,
            engine_script: None,
        }
    }

    pub fn with_engine_script(mut self, script: PathBuf) -> Self {
        self.engine_script = Some(script);
        self
    }
}

/// Runs one scan with the subprocess bridge engine and returns the path of
/// the written results document.
pub fn run_batch(config: &RunConfig) -> Result<PathBuf> {
    let mut engine = BridgeEngine::new(staging_dir());
    if let Some(script) = &config.engine_script {
        engine = engine.with_script(script.clone());
    }
    scan_with_engine(config, engine)
}

/// Same scan with a caller-supplied engine, so tests can substitute a
/// deterministic recognizer.
pub fn scan_with_engine<E: TextEngine>(config: &RunConfig, engine: E) -> Result<PathBuf> {
    let walker = DirectoryWalker::new(OcrAdapter::new(engine));
    let batch = walker.walk(&config.root, &config.root);

    let writer = ResultWriter::new(config.output.clone());
    writer.write(&batch)
}

fn staging_dir() -> PathBuf {
    std::env::temp_dir().join(format!("textsweep-{}", std::process::id()))
}
