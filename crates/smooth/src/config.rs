//! Smoothing kernel configuration.

use crate::error::SmoothError;

/// Smallest accepted moving-average window.
pub const MIN_MA_WINDOW: usize = 2;
/// Largest accepted moving-average window.
pub const MAX_MA_WINDOW: usize = 10;
/// Smallest accepted gaussian sigma.
pub const MIN_SIGMA: f64 = 0.1;
/// Largest accepted gaussian sigma.
pub const MAX_SIGMA: f64 = 5.0;

/// Smoothing kernel with its own bounded sub-parameter.
///
/// Each variant carries exactly the parameter it needs, dispatched by
/// exhaustive matching; there is no shared parameter bag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SmoothingKernel {
    /// Centred moving average over a nominal window of frames.
    MovingAverage {
        /// Window width in frames, `2..=10`.
        window: usize,
    },
    /// Causal exponential filter `y[t] = alpha*x[t] + (1-alpha)*y[t-1]`.
    Exponential {
        /// Mixing weight of the current sample, `0..=1`.
        alpha: f64,
    },
    /// Gaussian kernel of the given width, truncated at radius `ceil(3*sigma)`.
    Gaussian {
        /// Standard deviation in frames, `0.1..=5.0`.
        sigma: f64,
    },
}

impl SmoothingKernel {
    /// Returns the stable identifier used at the boundary layer.
    pub fn name(&self) -> &'static str {
        match self {
            SmoothingKernel::MovingAverage { .. } => "moving_average",
            SmoothingKernel::Exponential { .. } => "exponential",
            SmoothingKernel::Gaussian { .. } => "gaussian",
        }
    }

    /// Validates the kernel's sub-parameter.
    pub fn validate(&self) -> Result<(), SmoothError> {
        match *self {
            SmoothingKernel::MovingAverage { window } => {
                if !(MIN_MA_WINDOW..=MAX_MA_WINDOW).contains(&window) {
                    return Err(SmoothError::InvalidConfig {
                        reason: format!(
                            "window must be {MIN_MA_WINDOW}..={MAX_MA_WINDOW}, got {window}"
                        ),
                    });
                }
            }
            SmoothingKernel::Exponential { alpha } => {
                if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                    return Err(SmoothError::InvalidConfig {
                        reason: format!("alpha must be 0..=1, got {alpha}"),
                    });
                }
            }
            SmoothingKernel::Gaussian { sigma } => {
                if !sigma.is_finite() || !(MIN_SIGMA..=MAX_SIGMA).contains(&sigma) {
                    return Err(SmoothError::InvalidConfig {
                        reason: format!("sigma must be {MIN_SIGMA}..={MAX_SIGMA}, got {sigma}"),
                    });
                }
            }
        }
        Ok(())
    }
}
