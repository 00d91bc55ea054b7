//! Configuration for temporal interpolation.

use crate::error::InterpolateError;

/// Smallest accepted frame multiplication factor.
pub const MIN_FACTOR: usize = 2;
/// Largest accepted frame multiplication factor.
pub const MAX_FACTOR: usize = 10;

/// Interpolation kernel applied to each cell's time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationKernel {
    /// Piecewise linear between consecutive samples.
    Linear,
    /// Natural cubic spline through all samples.
    CubicSpline,
    /// Interpolating cubic basis spline (not-a-knot end conditions).
    BSpline,
    /// Lightly smoothing spline; the only kernel that may deviate from the
    /// original samples.
    UnivariateSpline,
}

impl InterpolationKernel {
    /// Returns the stable identifier used at the boundary layer.
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationKernel::Linear => "linear",
            InterpolationKernel::CubicSpline => "cubic_spline",
            InterpolationKernel::BSpline => "b_spline",
            InterpolationKernel::UnivariateSpline => "univariate_spline",
        }
    }

    /// Returns whether the kernel reproduces the original samples exactly at
    /// the original positions.
    pub fn is_exact(&self) -> bool {
        !matches!(self, InterpolationKernel::UnivariateSpline)
    }
}

/// Parameters for temporal interpolation.
///
/// # Example
///
/// ```
/// use cortex_interpolate::{InterpolationConfig, InterpolationKernel};
///
/// let config = InterpolationConfig::new(InterpolationKernel::Linear).with_factor(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct InterpolationConfig {
    kernel: InterpolationKernel,
    factor: usize,
}

impl InterpolationConfig {
    /// Creates a configuration for `kernel` with the default `factor = 2`.
    pub fn new(kernel: InterpolationKernel) -> Self {
        Self { kernel, factor: 2 }
    }

    /// Sets the frame multiplication factor.
    pub fn with_factor(mut self, factor: usize) -> Self {
        self.factor = factor;
        self
    }

    /// Returns the kernel.
    pub fn kernel(&self) -> InterpolationKernel {
        self.kernel
    }

    /// Returns the factor.
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Validates this configuration. Factor must lie in `[2, 10]`.
    pub fn validate(&self) -> Result<(), InterpolateError> {
        if !(MIN_FACTOR..=MAX_FACTOR).contains(&self.factor) {
            return Err(InterpolateError::InvalidConfig {
                reason: format!("factor must be {MIN_FACTOR}..={MAX_FACTOR}, got {}", self.factor),
            });
        }
        Ok(())
    }
}
