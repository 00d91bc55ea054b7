//! Error types for the cortex-interpolate crate.

/// Error type for all fallible operations in the cortex-interpolate crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InterpolateError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Sequence construction error from the correlation layer.
    #[error(transparent)]
    Correlate(#[from] cortex_correlate::CorrelateError),
}
