//! Correlation matrix and matrix-sequence containers.
//!
//! These are the central artifacts of a pipeline run: windowed correlation
//! (or phase leadership) builds a [`MatrixSequence`], interpolation replaces
//! it with a longer one, smoothing replaces its values at the same length,
//! and frame building consumes it read-only.

use crate::error::CorrelateError;

/// One `[C x C]` edge-weight matrix at a single window position.
///
/// Values are stored row-major: `values[i * n + j]` is the weight from
/// channel `i` to channel `j`. The diagonal is conventionally 1 and carries
/// no meaning downstream (self-edges are never emitted).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    n: usize,
    timestamp: usize,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Creates a matrix with every cell set to `fill` and the diagonal set
    /// to 1.
    pub fn filled(n: usize, timestamp: usize, fill: f64) -> Self {
        let mut values = vec![fill; n * n];
        for i in 0..n {
            values[i * n + i] = 1.0;
        }
        Self {
            n,
            timestamp,
            values,
        }
    }

    /// Creates a matrix from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelateError::Validation`] when `values.len() != n * n`
    /// or any value is NaN.
    pub fn from_values(
        n: usize,
        timestamp: usize,
        values: Vec<f64>,
    ) -> Result<Self, CorrelateError> {
        if values.len() != n * n {
            return Err(CorrelateError::Validation {
                reason: format!("expected {} values for a {n}x{n} matrix, got {}", n * n,
                    values.len()),
            });
        }
        if values.iter().any(|v| v.is_nan()) {
            return Err(CorrelateError::Validation {
                reason: "matrix contains NaN".to_string(),
            });
        }
        Ok(Self {
            n,
            timestamp,
            values,
        })
    }

    /// Returns the matrix dimension `C`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the 0-based window index this matrix belongs to.
    pub fn timestamp(&self) -> usize {
        self.timestamp
    }

    /// Returns the value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i},{j}) out of range");
        self.values[i * self.n + j]
    }

    /// Sets the value at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.n && j < self.n, "index ({i},{j}) out of range");
        self.values[i * self.n + j] = value;
    }

    /// Returns the row-major values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns `true` if `m[i][j] == m[j][i]` for all pairs, within `tol`.
    pub fn is_symmetric_within(&self, tol: f64) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// An ordered, contiguous sequence of correlation matrices sharing one shape
/// and one symmetry flag.
///
/// Timestamps run `0..len()` with no gaps; this is validated at construction
/// and preserved by every transform.
#[derive(Debug, Clone)]
pub struct MatrixSequence {
    matrices: Vec<CorrelationMatrix>,
    symmetric: bool,
}

impl MatrixSequence {
    /// Creates a sequence after validating shape and timestamp invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelateError::Validation`] when the sequence is empty,
    /// shapes differ, or timestamps are not `0..len`.
    pub fn new(
        matrices: Vec<CorrelationMatrix>,
        symmetric: bool,
    ) -> Result<Self, CorrelateError> {
        if matrices.is_empty() {
            return Err(CorrelateError::Validation {
                reason: "empty matrix sequence".to_string(),
            });
        }
        let n = matrices[0].n();
        for (idx, m) in matrices.iter().enumerate() {
            if m.n() != n {
                return Err(CorrelateError::Validation {
                    reason: format!("matrix {idx} is {}x{}, expected {n}x{n}", m.n(), m.n()),
                });
            }
            if m.timestamp() != idx {
                return Err(CorrelateError::Validation {
                    reason: format!("matrix {idx} has timestamp {}, expected {idx}", m.timestamp()),
                });
            }
        }
        Ok(Self {
            matrices,
            symmetric,
        })
    }

    /// Returns the number of matrices (frames).
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Returns `true` if the sequence holds no matrices.
    ///
    /// Note: a valid `MatrixSequence` is never empty.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Returns the matrix dimension `C`.
    pub fn n(&self) -> usize {
        self.matrices[0].n()
    }

    /// Returns whether every matrix in the sequence is symmetric by
    /// construction.
    pub fn symmetric(&self) -> bool {
        self.symmetric
    }

    /// Returns the matrices in timestamp order.
    pub fn matrices(&self) -> &[CorrelationMatrix] {
        &self.matrices
    }

    /// Returns the values of cell `(i, j)` across all timestamps, as one
    /// 1-D series. This is the access pattern of temporal interpolation and
    /// smoothing.
    pub fn cell_series(&self, i: usize, j: usize) -> Vec<f64> {
        self.matrices.iter().map(|m| m.get(i, j)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(n: usize, timestamp: usize) -> CorrelationMatrix {
        CorrelationMatrix::filled(n, timestamp, 0.0)
    }

    #[test]
    fn filled_sets_diagonal() {
        let m = CorrelationMatrix::filled(3, 0, 0.5);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(0, 1), 0.5);
        assert_eq!(m.get(2, 0), 0.5);
    }

    #[test]
    fn from_values_roundtrip() {
        let m = CorrelationMatrix::from_values(2, 7, vec![1.0, 0.3, 0.3, 1.0]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.timestamp(), 7);
        assert_eq!(m.get(0, 1), 0.3);
        assert_eq!(m.values(), &[1.0, 0.3, 0.3, 1.0]);
    }

    #[test]
    fn from_values_wrong_length() {
        let err = CorrelationMatrix::from_values(2, 0, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, CorrelateError::Validation { .. }));
    }

    #[test]
    fn from_values_nan_rejected() {
        let err =
            CorrelationMatrix::from_values(2, 0, vec![1.0, f64::NAN, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, CorrelateError::Validation { .. }));
    }

    #[test]
    fn set_and_get() {
        let mut m = CorrelationMatrix::filled(3, 0, 0.5);
        m.set(0, 2, -0.25);
        assert_eq!(m.get(0, 2), -0.25);
        assert_eq!(m.get(2, 0), 0.5);
    }

    #[test]
    fn symmetry_check() {
        let mut m = CorrelationMatrix::filled(3, 0, 0.2);
        assert!(m.is_symmetric_within(1e-12));
        m.set(0, 1, 0.9);
        assert!(!m.is_symmetric_within(1e-12));
    }

    #[test]
    fn sequence_valid() {
        let seq = MatrixSequence::new(vec![matrix(3, 0), matrix(3, 1)], true).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.n(), 3);
        assert!(seq.symmetric());
        assert!(!seq.is_empty());
    }

    #[test]
    fn sequence_empty_rejected() {
        let err = MatrixSequence::new(vec![], true).unwrap_err();
        assert!(matches!(err, CorrelateError::Validation { .. }));
    }

    #[test]
    fn sequence_shape_mismatch_rejected() {
        let err = MatrixSequence::new(vec![matrix(3, 0), matrix(4, 1)], true).unwrap_err();
        assert!(matches!(err, CorrelateError::Validation { .. }));
    }

    #[test]
    fn sequence_timestamp_gap_rejected() {
        let err = MatrixSequence::new(vec![matrix(3, 0), matrix(3, 2)], true).unwrap_err();
        assert!(matches!(err, CorrelateError::Validation { .. }));
    }

    #[test]
    fn cell_series_extracts_across_time() {
        let mut m0 = matrix(2, 0);
        let mut m1 = matrix(2, 1);
        let mut m2 = matrix(2, 2);
        m0.set(0, 1, 0.1);
        m1.set(0, 1, 0.2);
        m2.set(0, 1, 0.3);
        let seq = MatrixSequence::new(vec![m0, m1, m2], true).unwrap();
        assert_eq!(seq.cell_series(0, 1), vec![0.1, 0.2, 0.3]);
        assert_eq!(seq.cell_series(0, 0), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn sequence_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MatrixSequence>();
    }
}
