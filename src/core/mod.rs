//! Core processing building blocks: trimming, color clustering, padding,
//! block resampling, and majority filtering. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
