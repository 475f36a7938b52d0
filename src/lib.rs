pub mod core;
pub mod export;
pub mod ocr;
pub mod pipeline;
pub mod walk;

pub use crate::core::model::{ImageResult, ResultBatch};
