//! Error types for the cortex-signal crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the cortex-signal crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SignalError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem failure.
    #[error("i/o error on {}: {reason}", path.display())]
    Io {
        /// Path being read when the failure occurred.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when a subject file contains no data rows.
    #[error("empty subject file: {}", path.display())]
    EmptyFile {
        /// Path of the empty file.
        path: PathBuf,
    },

    /// Returned when a value cannot be parsed as a number.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a data row has the wrong number of columns.
    #[error("line {line}: expected {expected} columns, got {got}")]
    ColumnCount {
        /// 1-based line number.
        line: usize,
        /// Expected column count.
        expected: usize,
        /// Actual column count.
        got: usize,
    },

    /// Returned when channel data fails validation.
    #[error("invalid signal data: {reason}")]
    Validation {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a sample is NaN or infinite.
    #[error("non-finite sample at timepoint {timepoint}, channel {channel}")]
    NonFinite {
        /// 0-based timepoint index.
        timepoint: usize,
        /// 0-based channel index.
        channel: usize,
    },
}
