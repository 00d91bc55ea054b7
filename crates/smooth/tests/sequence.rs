//! Integration tests for smoothing 14x14 matrix sequences.

use cortex_correlate::{CorrelationMatrix, MatrixSequence};
use cortex_smooth::{SmoothError, SmoothingKernel, smooth_sequence};

/// Builds a 14x14 sequence whose (i, j) cell oscillates over time.
fn sequence_14(n: usize) -> MatrixSequence {
    let matrices: Vec<CorrelationMatrix> = (0..n)
        .map(|t| {
            let mut m = CorrelationMatrix::filled(14, t, 0.0);
            for i in 0..14 {
                for j in (i + 1)..14 {
                    let v = ((t * (i + j)) as f64 * 0.31).sin();
                    m.set(i, j, v);
                    m.set(j, i, v);
                }
            }
            m
        })
        .collect();
    MatrixSequence::new(matrices, true).unwrap()
}

#[test]
fn all_kernels_preserve_length() {
    for n in [1, 2, 5, 20] {
        let seq = sequence_14(n);
        for kernel in [
            SmoothingKernel::MovingAverage { window: 3 },
            SmoothingKernel::Exponential { alpha: 0.5 },
            SmoothingKernel::Gaussian { sigma: 1.0 },
        ] {
            let out = smooth_sequence(&seq, &kernel).unwrap();
            assert_eq!(out.len(), n, "kernel {}", kernel.name());
            assert_eq!(out.n(), 14);
            assert!(out.symmetric());
        }
    }
}

/// Scenario: moving average with window 3 over 5 frames keeps length 5 and
/// every smoothed cell stays within its 3-sample neighbourhood.
#[test]
fn moving_average_window_3_over_5_frames() {
    let seq = sequence_14(5);
    let kernel = SmoothingKernel::MovingAverage { window: 3 };
    let out = smooth_sequence(&seq, &kernel).unwrap();
    assert_eq!(out.len(), 5);

    for i in 0..14 {
        for j in 0..14 {
            let input = seq.cell_series(i, j);
            let smoothed = out.cell_series(i, j);
            for t in 0usize..5 {
                let lo = t.saturating_sub(1);
                let hi = (t + 1).min(4);
                let min = input[lo..=hi].iter().cloned().fold(f64::INFINITY, f64::min);
                let max = input[lo..=hi]
                    .iter()
                    .cloned()
                    .fold(f64::NEG_INFINITY, f64::max);
                assert!(
                    smoothed[t] >= min - 1e-12 && smoothed[t] <= max + 1e-12,
                    "cell ({i},{j}) frame {t}: {} outside [{min}, {max}]",
                    smoothed[t]
                );
            }
        }
    }
}

#[test]
fn smoothing_preserves_matrix_symmetry() {
    let seq = sequence_14(8);
    for kernel in [
        SmoothingKernel::MovingAverage { window: 4 },
        SmoothingKernel::Exponential { alpha: 0.3 },
        SmoothingKernel::Gaussian { sigma: 1.5 },
    ] {
        let out = smooth_sequence(&seq, &kernel).unwrap();
        for m in out.matrices() {
            assert!(m.is_symmetric_within(1e-12), "kernel {}", kernel.name());
        }
    }
}

#[test]
fn diagonal_unchanged() {
    let seq = sequence_14(6);
    let kernel = SmoothingKernel::Gaussian { sigma: 2.0 };
    let out = smooth_sequence(&seq, &kernel).unwrap();
    for m in out.matrices() {
        for i in 0..14 {
            assert!((m.get(i, i) - 1.0).abs() < 1e-12);
        }
    }
}

#[test]
fn single_frame_sequence_is_stable() {
    let seq = sequence_14(1);
    for kernel in [
        SmoothingKernel::MovingAverage { window: 3 },
        SmoothingKernel::Exponential { alpha: 0.7 },
        SmoothingKernel::Gaussian { sigma: 0.5 },
    ] {
        let out = smooth_sequence(&seq, &kernel).unwrap();
        assert_eq!(out.len(), 1);
        // One sample: nothing to mix with, values unchanged.
        assert_eq!(out.matrices()[0].values(), seq.matrices()[0].values());
    }
}

#[test]
fn invalid_parameters_rejected() {
    let seq = sequence_14(5);
    for kernel in [
        SmoothingKernel::MovingAverage { window: 1 },
        SmoothingKernel::MovingAverage { window: 11 },
        SmoothingKernel::Exponential { alpha: 1.5 },
        SmoothingKernel::Gaussian { sigma: 0.01 },
    ] {
        let err = smooth_sequence(&seq, &kernel).unwrap_err();
        assert!(matches!(err, SmoothError::InvalidConfig { .. }));
    }
}

#[test]
fn timestamps_stay_contiguous() {
    let seq = sequence_14(7);
    let kernel = SmoothingKernel::Exponential { alpha: 0.2 };
    let out = smooth_sequence(&seq, &kernel).unwrap();
    for (idx, m) in out.matrices().iter().enumerate() {
        assert_eq!(m.timestamp(), idx);
    }
}
