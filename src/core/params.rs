use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{OutputFormat, SmoothParams};

/// Seed used for k-means clustering unless overridden.
pub const DEFAULT_SEED: u64 = 42;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub format: OutputFormat,
    /// Target sprite side length in pixels
    pub size: usize,
    /// Quantize the palette to this many colors before downsampling; None skips clustering
    pub colors: Option<usize>,
    /// Majority-filter pass over the finished sprite; None skips smoothing
    pub smooth: Option<SmoothParams>,
    /// Write a JSON metadata sidecar next to the output
    pub metadata: bool,
    /// Seed for the k-means clusterer
    pub seed: u64,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            size: 64,
            colors: None,
            smooth: None,
            metadata: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl ProcessingParams {
    /// Reject parameter combinations the pipeline cannot run on. The block-span
    /// computation divides by `size`, so a zero size must never reach it.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroSize { size: self.size });
        }
        if let Some(colors) = self.colors {
            if colors == 0 {
                return Err(Error::InvalidArgument {
                    arg: "colors",
                    value: colors.to_string(),
                });
            }
        }
        Ok(())
    }
}
