//! Shared types and enums used across SPRIXEL.
//! Includes the `OutputFormat` of saved sprites and the `SmoothParams`
//! controlling the optional majority filter pass.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
}

impl OutputFormat {
    /// File extension used for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "Png"),
        }
    }
}

/// Settings for the optional majority-filter smoothing pass applied to the
/// finished sprite. A kernel of 1 or zero iterations makes the pass a no-op.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct SmoothParams {
    pub kernel: usize,
    pub iterations: usize,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            kernel: 3,
            iterations: 1,
        }
    }
}
