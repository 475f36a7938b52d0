use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use textsweep::core::model::ResultBatch;
use textsweep::pipeline::{run_batch, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "textsweep")]
#[command(version, about = "Batch OCR over a directory tree of images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a directory tree and persist the recognized text
    Scan {
        /// Root directory to scan
        root: PathBuf,

        /// Output root for the results directory (default: the scan root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the OCR engine bridge script
        #[arg(long)]
        engine: Option<PathBuf>,
    },

    /// Print the recognized text for one image from a saved results file
    Lookup {
        /// Saved results file (ocr_result_<timestamp>.json)
        results: PathBuf,

        /// Image path to look up
        image: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            root,
            output,
            engine,
        } => scan(root, output, engine),
        Commands::Lookup { results, image } => lookup(results, image),
    }
}

fn scan(root: PathBuf, output: Option<PathBuf>, engine: Option<PathBuf>) -> Result<()> {
    if !root.exists() {
        anyhow::bail!("Scan root does not exist: {}", root.display());
    }
    if !root.is_dir() {
        anyhow::bail!("Scan root is not a directory: {}", root.display());
    }

    let output = output.unwrap_or_else(|| root.clone());
    println!("[*] Scanning: {}", root.display());

    let mut config = RunConfig::new(root, output);
    if let Some(script) = engine {
        config = config.with_engine_script(script);
    }

    let written = run_batch(&config)?;
    println!("[✓] Results saved to: {}", written.display());

    Ok(())
}

fn lookup(results: PathBuf, image: String) -> Result<()> {
    let batch = ResultBatch::load(&results)
        .with_context(|| format!("Failed to load results: {}", results.display()))?;

    match batch.detected_for(&image) {
        Some(text) => println!("{text}"),
        None => anyhow::bail!("No record for {image} in {}", results.display()),
    }

    Ok(())
}
