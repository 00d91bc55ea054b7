//! Temporal interpolation of a matrix sequence.

use tracing::debug;

use cortex_correlate::{CorrelationMatrix, MatrixSequence};

use crate::config::{InterpolationConfig, InterpolationKernel};
use crate::error::InterpolateError;
use crate::spline;

/// Interpolates a sequence of length `N` to length `(N - 1) * factor + 1`.
///
/// Every cell `(i, j)` is treated as an independent 1-D series sampled at
/// integer frame positions; the configured kernel is evaluated at
/// `(N - 1) * factor + 1` evenly spaced query points spanning `[0, N - 1]`
/// (spacing `1 / factor`, so original positions land on query indices
/// `0, factor, 2 * factor, ...`). Output timestamps are renumbered from 0;
/// shape and symmetry flag are preserved.
///
/// A single-frame sequence is returned unchanged: with one sample there is
/// nothing to interpolate between, and this is an explicit no-op rather than
/// an error.
///
/// # Errors
///
/// Returns [`InterpolateError::InvalidConfig`] when `factor` is out of
/// bounds.
pub fn interpolate_sequence(
    sequence: &MatrixSequence,
    config: &InterpolationConfig,
) -> Result<MatrixSequence, InterpolateError> {
    config.validate()?;

    let n = sequence.len();
    if n == 1 {
        return Ok(sequence.clone());
    }

    let factor = config.factor();
    let new_len = (n - 1) * factor + 1;
    let queries: Vec<f64> = (0..new_len).map(|q| q as f64 / factor as f64).collect();
    let c = sequence.n();
    debug!(
        kernel = config.kernel().name(),
        factor,
        input_frames = n,
        output_frames = new_len,
        "interpolating matrix sequence"
    );

    let mut matrices: Vec<CorrelationMatrix> = (0..new_len)
        .map(|t| CorrelationMatrix::filled(c, t, 0.0))
        .collect();

    for i in 0..c {
        for j in 0..c {
            let series = sequence.cell_series(i, j);
            let values = evaluate(config.kernel(), &series, &queries);
            for (t, v) in values.into_iter().enumerate() {
                matrices[t].set(i, j, v);
            }
        }
    }

    Ok(MatrixSequence::new(matrices, sequence.symmetric())?)
}

/// Dispatches one cell series to the configured kernel.
fn evaluate(kernel: InterpolationKernel, samples: &[f64], queries: &[f64]) -> Vec<f64> {
    match kernel {
        InterpolationKernel::Linear => spline::linear(samples, queries),
        InterpolationKernel::CubicSpline => spline::natural_cubic(samples, queries),
        InterpolationKernel::BSpline => spline::not_a_knot_cubic(samples, queries),
        InterpolationKernel::UnivariateSpline => spline::smoothing_spline(samples, queries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 sequence whose (0,1)/(1,0) cell follows `values`.
    fn sequence(values: &[f64]) -> MatrixSequence {
        let matrices: Vec<CorrelationMatrix> = values
            .iter()
            .enumerate()
            .map(|(t, &v)| {
                let mut m = CorrelationMatrix::filled(2, t, 0.0);
                m.set(0, 1, v);
                m.set(1, 0, v);
                m
            })
            .collect();
        MatrixSequence::new(matrices, true).unwrap()
    }

    #[test]
    fn output_length_formula() {
        let seq = sequence(&[0.1, 0.5, 0.3, 0.8]);
        for factor in [2, 3, 10] {
            let config = InterpolationConfig::new(InterpolationKernel::Linear)
                .with_factor(factor);
            let out = interpolate_sequence(&seq, &config).unwrap();
            assert_eq!(out.len(), 3 * factor + 1);
        }
    }

    #[test]
    fn single_frame_is_noop() {
        let seq = sequence(&[0.42]);
        let config = InterpolationConfig::new(InterpolationKernel::CubicSpline).with_factor(2);
        let out = interpolate_sequence(&seq, &config).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.matrices()[0].get(0, 1), 0.42);
    }

    #[test]
    fn timestamps_renumbered() {
        let seq = sequence(&[0.0, 1.0]);
        let config = InterpolationConfig::new(InterpolationKernel::Linear).with_factor(3);
        let out = interpolate_sequence(&seq, &config).unwrap();
        for (idx, m) in out.matrices().iter().enumerate() {
            assert_eq!(m.timestamp(), idx);
        }
    }

    #[test]
    fn linear_midpoint_values() {
        let seq = sequence(&[0.0, 1.0]);
        let config = InterpolationConfig::new(InterpolationKernel::Linear).with_factor(2);
        let out = interpolate_sequence(&seq, &config).unwrap();
        assert_eq!(out.len(), 3);
        assert!((out.matrices()[1].get(0, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn exact_kernels_reproduce_originals() {
        let values = [0.1, -0.4, 0.7, 0.2, -0.1];
        let seq = sequence(&values);
        for kernel in [
            InterpolationKernel::Linear,
            InterpolationKernel::CubicSpline,
            InterpolationKernel::BSpline,
        ] {
            let config = InterpolationConfig::new(kernel).with_factor(4);
            let out = interpolate_sequence(&seq, &config).unwrap();
            for (k, &v) in values.iter().enumerate() {
                let got = out.matrices()[k * 4].get(0, 1);
                assert!(
                    (got - v).abs() < 1e-9,
                    "{} at original index {k}: {got} != {v}",
                    kernel.name()
                );
            }
        }
    }

    #[test]
    fn symmetry_flag_preserved() {
        let seq = sequence(&[0.2, 0.6]);
        let config = InterpolationConfig::new(InterpolationKernel::Linear).with_factor(2);
        assert!(interpolate_sequence(&seq, &config).unwrap().symmetric());
    }

    #[test]
    fn diagonal_stays_one() {
        let seq = sequence(&[0.2, 0.6, -0.3]);
        let config = InterpolationConfig::new(InterpolationKernel::CubicSpline).with_factor(3);
        let out = interpolate_sequence(&seq, &config).unwrap();
        for m in out.matrices() {
            assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
            assert!((m.get(1, 1) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn invalid_factor_rejected() {
        let seq = sequence(&[0.1, 0.2]);
        let config = InterpolationConfig::new(InterpolationKernel::Linear).with_factor(1);
        let err = interpolate_sequence(&seq, &config).unwrap_err();
        assert!(matches!(err, InterpolateError::InvalidConfig { .. }));
    }
}
