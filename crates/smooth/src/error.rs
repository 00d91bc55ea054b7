//! Error types for the cortex-smooth crate.

/// Error type for all fallible operations in the cortex-smooth crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SmoothError {
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
