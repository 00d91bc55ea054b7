//! Error types for the cortex-correlate crate.

/// Error type for all fallible operations in the cortex-correlate crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CorrelateError {
    /// Returned when the signal is shorter than the requested window.
    #[error("insufficient data: {n_timepoints} timepoints < window size {window_size}")]
    InsufficientData {
        /// Number of timepoints in the signal.
        n_timepoints: usize,
        /// Requested window size.
        window_size: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when matrix or sequence construction fails validation.
    #[error("invalid matrix data: {reason}")]
    Validation {
        /// Description of the problem.
        reason: String,
    },
}
