//! Frame building and the data-range post-pass.

use std::collections::BTreeMap;

use tracing::debug;

use cortex_correlate::{CorrelationMatrix, MatrixSequence};

use crate::error::GraphError;
use crate::frame::{DataRange, Edge, GraphFrame, GraphMeta, GraphOutput, Node};

/// Builds one graph frame from a matrix.
///
/// Symmetric matrices emit only pairs `(i, j)` with `i < j`, giving
/// `C*(C-1)/2` undirected edges; asymmetric matrices emit all ordered pairs
/// `i != j`, giving `C*(C-1)` directed edges. The diagonal is never emitted.
/// Node degree
/// counts every edge touching the node: both endpoints per undirected edge,
/// and source plus target per directed edge.
pub fn build_frame(
    matrix: &CorrelationMatrix,
    symmetric: bool,
    labels: &[String],
    long_labels: &[String],
    metadata: &BTreeMap<String, String>,
) -> GraphFrame {
    let c = matrix.n();
    let mut edges = Vec::with_capacity(if symmetric { c * (c - 1) / 2 } else { c * (c - 1) });
    let mut degrees = vec![0usize; c];

    for i in 0..c {
        let j_start = if symmetric { i + 1 } else { 0 };
        for j in j_start..c {
            if i == j {
                continue;
            }
            edges.push(Edge {
                source: labels[i].clone(),
                target: labels[j].clone(),
                weight: matrix.get(i, j),
            });
            degrees[i] += 1;
            degrees[j] += 1;
        }
    }

    // Directed pairs are visited twice (i->j and j->i), so the count above
    // already reflects both directions touching each node.
    let nodes = labels
        .iter()
        .zip(long_labels)
        .zip(&degrees)
        .map(|((label, full_name), &degree)| Node {
            id: label.clone(),
            label: label.clone(),
            full_name: full_name.clone(),
            degree,
        })
        .collect();

    GraphFrame {
        timestamp: matrix.timestamp(),
        nodes,
        edges,
        metadata: metadata.clone(),
    }
}

/// Builds one frame per matrix, in timestamp order.
///
/// # Errors
///
/// Returns [`GraphError::LabelCount`] when either label list does not match
/// the matrix dimension.
pub fn build_frames(
    sequence: &MatrixSequence,
    labels: &[String],
    long_labels: &[String],
    metadata: &BTreeMap<String, String>,
) -> Result<Vec<GraphFrame>, GraphError> {
    let c = sequence.n();
    if labels.len() != c {
        return Err(GraphError::LabelCount {
            which: "short",
            expected: c,
            got: labels.len(),
        });
    }
    if long_labels.len() != c {
        return Err(GraphError::LabelCount {
            which: "long",
            expected: c,
            got: long_labels.len(),
        });
    }

    let symmetric = sequence.symmetric();
    let frames = sequence
        .matrices()
        .iter()
        .map(|m| build_frame(m, symmetric, labels, long_labels, metadata))
        .collect();
    Ok(frames)
}

/// Computes the global edge-weight range over a full frame sequence.
///
/// This is a separate post-pass over the built frames, not a per-frame
/// computation.
///
/// # Errors
///
/// Returns [`GraphError::NoEdges`] when no frame carries any edge.
pub fn data_range(frames: &[GraphFrame]) -> Result<DataRange, GraphError> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for frame in frames {
        for edge in &frame.edges {
            min = min.min(edge.weight);
            max = max.max(edge.weight);
            seen = true;
        }
    }
    if !seen {
        return Err(GraphError::NoEdges);
    }
    Ok(DataRange { min, max })
}

/// Builds the complete boundary payload: frames, metadata record, and
/// symmetry flag.
///
/// # Errors
///
/// Propagates [`GraphError::LabelCount`] and [`GraphError::NoEdges`]; the
/// output is all-or-nothing.
pub fn build_output(
    sequence: &MatrixSequence,
    labels: &[String],
    long_labels: &[String],
    metadata: &BTreeMap<String, String>,
    description: Option<String>,
) -> Result<GraphOutput, GraphError> {
    let frames = build_frames(sequence, labels, long_labels, metadata)?;
    let range = data_range(&frames)?;
    debug!(
        frame_count = frames.len(),
        min = range.min,
        max = range.max,
        "graph output assembled"
    );

    let meta = GraphMeta {
        frame_count: frames.len(),
        node_attributes: vec!["label".to_string(), "degree".to_string()],
        edge_attributes: vec!["weight".to_string()],
        edge_weight_min: range.min,
        edge_weight_max: range.max,
        description,
    };

    Ok(GraphOutput {
        frames,
        meta,
        symmetric: sequence.symmetric(),
    })
}
