//! Temporal interpolation for the Cortex connectivity pipeline.
//!
//! Stretches a matrix sequence in time: each cell's values across the
//! sequence index are treated as a 1-D signal, fitted with one of four
//! kernels, and resampled at `factor` times the original frame density. Used
//! to produce smoother frame-to-frame animation without recomputing
//! correlations.
//!
//! Linear, cubic-spline, and b-spline kernels interpolate: they reproduce
//! the original values exactly at the original frame positions. The
//! univariate-spline kernel smooths slightly and is exempt from that
//! guarantee.

mod config;
mod error;
mod interpolate;
mod spline;

pub use config::{InterpolationConfig, InterpolationKernel, MAX_FACTOR, MIN_FACTOR};
pub use error::InterpolateError;
pub use interpolate::interpolate_sequence;
