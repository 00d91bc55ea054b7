//! Signal loading for the Cortex connectivity pipeline.
//!
//! This crate owns the input side of the pipeline: the fixed resting-state
//! network catalogue, the validated [`SignalMatrix`] container, subject-file
//! parsing and discovery, and phenotypic (diagnosis) labels.
//!
//! # Quick start
//!
//! ```ignore
//! use std::path::Path;
//! use cortex_signal::parse_subject_file;
//!
//! let signals = parse_subject_file(Path::new("v1/NYU/dr_stage1_subject0050003.txt"))?;
//! assert_eq!(signals.n_channels(), 14);
//! ```

mod error;
mod matrix;
mod network;
mod parse;
mod phenotype;

pub use error::SignalError;
pub use matrix::SignalMatrix;
pub use network::{CHANNEL_COUNT, NETWORKS, Network, SOURCE_COLUMNS, long_labels, position_of,
    short_labels};
pub use parse::{SubjectFile, list_subject_files, numeric_subject_id, parse_subject_file,
    subject_id};
pub use phenotype::{Phenotypes, load_phenotypes};
