//! Graph frame building for the Cortex connectivity pipeline.
//!
//! Converts a matrix sequence into display-ready [`GraphFrame`]s plus the
//! sequence-level [`GraphMeta`] record: 91 undirected edges per frame for
//! symmetric methods, 182 directed edges for the asymmetric leadership
//! method, and a global edge-weight [`DataRange`] computed as a post-pass
//! for downstream display scaling.

mod build;
mod error;
mod frame;

pub use build::{build_frame, build_frames, build_output, data_range};
pub use error::GraphError;
pub use frame::{DataRange, Edge, GraphFrame, GraphMeta, GraphOutput, Node};
