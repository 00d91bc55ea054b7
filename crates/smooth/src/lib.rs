//! Temporal smoothing for the Cortex connectivity pipeline.
//!
//! Smooths each cell's edge-weight series across frames with one of three
//! kernels (moving average, exponential, gaussian). The frame count is
//! always preserved; only the values change.

mod config;
mod error;
mod smooth;

pub use config::{MAX_MA_WINDOW, MAX_SIGMA, MIN_MA_WINDOW, MIN_SIGMA, SmoothingKernel};
pub use error::SmoothError;
pub use smooth::smooth_sequence;
