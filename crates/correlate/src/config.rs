//! Configuration for windowed correlation.

use crate::error::CorrelateError;

/// Smallest accepted window size.
pub const MIN_WINDOW_SIZE: usize = 5;
/// Largest accepted window size.
pub const MAX_WINDOW_SIZE: usize = 100;
/// Largest accepted step between window starts.
pub const MAX_STEP: usize = 100;

/// Sliding-window parameters for correlation computation.
///
/// # Example
///
/// ```
/// use cortex_correlate::WindowConfig;
///
/// let config = WindowConfig::new().with_window_size(40).with_step(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct WindowConfig {
    window_size: usize,
    step: usize,
}

impl WindowConfig {
    /// Creates a new configuration with defaults: `window_size = 30`,
    /// `step = 1`.
    pub fn new() -> Self {
        Self {
            window_size: 30,
            step: 1,
        }
    }

    /// Sets the window size (timepoints per window).
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Sets the step between consecutive window starts.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    /// Returns the window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Validates this configuration.
    ///
    /// Window size must lie in `[5, 100]` and step in `[1, 100]`.
    pub fn validate(&self) -> Result<(), CorrelateError> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&self.window_size) {
            return Err(CorrelateError::InvalidConfig {
                reason: format!(
                    "window_size must be {MIN_WINDOW_SIZE}..={MAX_WINDOW_SIZE}, got {}",
                    self.window_size
                ),
            });
        }
        if !(1..=MAX_STEP).contains(&self.step) {
            return Err(CorrelateError::InvalidConfig {
                reason: format!("step must be 1..={MAX_STEP}, got {}", self.step),
            });
        }
        Ok(())
    }

    /// Returns the number of windows a signal of `n_timepoints` yields.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelateError::InsufficientData`] when
    /// `n_timepoints < window_size` (zero windows possible).
    pub fn n_windows(&self, n_timepoints: usize) -> Result<usize, CorrelateError> {
        if n_timepoints < self.window_size {
            return Err(CorrelateError::InsufficientData {
                n_timepoints,
                window_size: self.window_size,
            });
        }
        Ok((n_timepoints - self.window_size) / self.step + 1)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}
