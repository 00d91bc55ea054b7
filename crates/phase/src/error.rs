//! Error types for the cortex-phase crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the cortex-phase crate.
#[derive(Debug, thiserror::Error)]
pub enum PhaseError {
    /// Returned when the dataset file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet library.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when the dataset fails a structural validation check.
    #[error("invalid phase dataset: {reason}")]
    Validation {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a network name does not match the channel catalogue.
    #[error("unknown network name: {name:?}")]
    UnknownNetwork {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when a phase code is outside the known set.
    #[error("invalid phase code: {code} (expected 0, 1, -1, -2, or 2)")]
    InvalidPhaseCode {
        /// The invalid on-disk code.
        code: i8,
    },

    /// Returned when a subject covers fewer channel pairs than required.
    #[error("subject {subject_id}: only {got} of {expected} channel pairs present")]
    MissingPairs {
        /// Subject identifier.
        subject_id: u32,
        /// Pairs found.
        got: usize,
        /// Pairs required.
        expected: usize,
    },

    /// Returned when the requested subject has no entry in the dataset.
    #[error("subject {subject_id} not found in phase dataset")]
    SubjectNotFound {
        /// The missing subject identifier.
        subject_id: u32,
    },

    /// Windowing error from the correlation layer.
    #[error(transparent)]
    Correlate(#[from] cortex_correlate::CorrelateError),
}

impl From<parquet::errors::ParquetError> for PhaseError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        PhaseError::Parquet {
            reason: e.to_string(),
        }
    }
}
