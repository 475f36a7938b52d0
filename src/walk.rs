use std::fs;
use std::path::Path;

use crate::core::model::{ImageResult, ResultBatch};
use crate::core::paths::relative_display;
use crate::ocr::{OcrAdapter, TextEngine};

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Recursively scans a directory tree, producing one result record per
/// qualifying image file in discovery order.
#[derive(Debug, Clone)]
pub struct DirectoryWalker<E: TextEngine> {
    adapter: OcrAdapter<E>,
}

impl<E: TextEngine> DirectoryWalker<E> {
    pub fn new(adapter: OcrAdapter<E>) -> Self {
        Self { adapter }
    }

    /// Walks `root`, making record identifiers relative to `base`. An
    /// inaccessible root is reported and yields an empty batch.
    pub fn walk(&self, root: &Path, base: &Path) -> ResultBatch {
        let mut batch = ResultBatch::new();
        self.visit(root, base, &mut batch);
        batch
    }

    fn visit(&self, dir: &Path, base: &Path, batch: &mut ResultBatch) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("[!] Cannot enumerate {}: {err}", dir.display());
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("[!] Unreadable entry under {}: {err}", dir.display());
                    continue;
                }
            };

            let path = entry.path();
            if is_hidden(&path) {
                continue;
            }

            if path.is_dir() {
                println!("[*] Entering directory: {}", relative_display(&path, base));
                self.visit(&path, base, batch);
            } else if is_supported_image(&path) {
                let filename = relative_display(&path, base);
                let detected = self.adapter.recognize_file(&path, &filename);
                batch.push(ImageResult::new(filename, detected));
            }
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
