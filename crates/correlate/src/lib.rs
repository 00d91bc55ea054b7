//! Windowed correlation for the Cortex connectivity pipeline.
//!
//! This crate turns a `[T x C]` [`cortex_signal::SignalMatrix`] into a
//! [`MatrixSequence`]: one `[C x C]` correlation matrix per sliding-window
//! position, computed with either Pearson or Spearman correlation. It also
//! owns the matrix/sequence containers shared by the downstream transform
//! crates, and the optional Fisher z-transform.
//!
//! # Quick start
//!
//! ```ignore
//! use cortex_correlate::{Method, WindowConfig, windowed_matrices};
//!
//! let config = WindowConfig::new().with_window_size(30).with_step(1);
//! let sequence = windowed_matrices(&signals, Method::Pearson, &config)?;
//! assert!(sequence.symmetric());
//! ```

mod config;
mod error;
mod fisher;
mod matrix;
mod method;
mod window;

pub use config::{MAX_STEP, MAX_WINDOW_SIZE, MIN_WINDOW_SIZE, WindowConfig};
pub use error::CorrelateError;
pub use fisher::{fisher_transform, fisher_z};
pub use matrix::{CorrelationMatrix, MatrixSequence};
pub use method::{Method, pearson, rank, spearman};
pub use window::windowed_matrices;
