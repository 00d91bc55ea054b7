//! Precomputed wavelet-coherence phase data for the Cortex pipeline.
//!
//! The wavelet-leadership correlation method is not computed from raw
//! signals; it is sourced from an externally supplied, precomputed
//! classification of the phase relationship between every channel pair, per
//! timepoint and frequency scale. This crate loads that dataset from Parquet
//! ([`load_dataset`]), holds it as immutable shared state
//! ([`PhaseDataset`]), and derives windowed leadership-ratio matrices from
//! it ([`leadership_matrices`]).
//!
//! # Quick start
//!
//! ```ignore
//! use std::path::Path;
//! use cortex_correlate::WindowConfig;
//! use cortex_phase::{leadership_matrices, load_dataset};
//!
//! let dataset = load_dataset(Path::new("wavelet_phases.parquet"))?;
//! let config = WindowConfig::new().with_window_size(30);
//! let sequence = leadership_matrices(&dataset, 50003, &config)?;
//! assert!(!sequence.symmetric());
//! ```

mod dataset;
mod error;
mod label;
mod leadership;
mod parquet_read;

pub use dataset::{PAIR_COUNT, PairGrid, PhaseDataset, SubjectPhases};
pub use error::PhaseError;
pub use label::PhaseLabel;
pub use leadership::leadership_matrices;
pub use parquet_read::load_dataset;
