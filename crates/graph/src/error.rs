//! Error types for the cortex-graph crate.

/// Error type for all fallible operations in the cortex-graph crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphError {
    /// Returned when label counts do not match the matrix dimension.
    #[error("{which} labels: expected {expected}, got {got}")]
    LabelCount {
        /// Which label list is wrong.
        which: &'static str,
        /// Expected count (matrix dimension).
        expected: usize,
        /// Actual count.
        got: usize,
    },

    /// Returned when a frame sequence carries no edges at all, so no data
    /// range exists. Surfaced to the caller as a rejected request.
    #[error("no edges in frame sequence; cannot compute data range")]
    NoEdges,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_count() {
        let e = GraphError::LabelCount {
            which: "short",
            expected: 14,
            got: 12,
        };
        assert_eq!(e.to_string(), "short labels: expected 14, got 12");
    }

    #[test]
    fn display_no_edges() {
        assert_eq!(
            GraphError::NoEdges.to_string(),
            "no edges in frame sequence; cannot compute data range"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<GraphError>();
    }
}
