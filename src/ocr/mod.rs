pub mod adapter;
pub mod bridge;

use anyhow::Result;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

pub use adapter::OcrAdapter;
pub use bridge::BridgeEngine;

/// One recognized text region: the engine's best candidate for that region,
/// reported in the engine's own observation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub text: String,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    0.5
}

/// Seam to the external recognition capability. Implementations must fully
/// resolve the request (success or failure) before returning, so one image is
/// completely processed before the traversal moves to the next.
pub trait TextEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<Observation>>;
}
