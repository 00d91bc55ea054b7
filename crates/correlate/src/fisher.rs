//! Fisher z-transform of correlation sequences.

use crate::matrix::{CorrelationMatrix, MatrixSequence};

/// Clip bound keeping the transform finite at |r| = 1.
const CLIP: f64 = 0.9999;

/// Fisher z-transform of a single coefficient.
///
/// Input is clipped to `[-0.9999, 0.9999]` before applying
/// `0.5 * ln((1 + r) / (1 - r))`, so the result is always finite. Output
/// range is unbounded.
pub fn fisher_z(r: f64) -> f64 {
    let clipped = r.clamp(-CLIP, CLIP);
    0.5 * ((1.0 + clipped) / (1.0 - clipped)).ln()
}

/// Applies the Fisher z-transform to every cell of every matrix.
///
/// Symmetry is preserved; timestamps and shape are unchanged. Values leave
/// the `[-1, 1]` range, so downstream display scaling must use the computed
/// data range rather than assuming correlation bounds.
pub fn fisher_transform(sequence: &MatrixSequence) -> MatrixSequence {
    let n = sequence.n();
    let matrices: Vec<CorrelationMatrix> = sequence
        .matrices()
        .iter()
        .map(|m| {
            let mut out = CorrelationMatrix::filled(n, m.timestamp(), 0.0);
            for i in 0..n {
                for j in 0..n {
                    out.set(i, j, fisher_z(m.get(i, j)));
                }
            }
            out
        })
        .collect();

    // Shape/timestamp invariants hold by construction.
    MatrixSequence::new(matrices, sequence.symmetric())
        .unwrap_or_else(|_| unreachable!("fisher transform preserves sequence invariants"))
}
