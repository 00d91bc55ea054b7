//! Temporal smoothing of a matrix sequence.

use tracing::debug;

use cortex_correlate::{CorrelationMatrix, MatrixSequence};

use crate::config::SmoothingKernel;
use crate::error::SmoothError;

/// Smooths every cell's time series with the configured kernel.
///
/// The output sequence always has the same length, shape, and symmetry flag
/// as the input; smoothing never changes the frame count, which is what
/// distinguishes it from interpolation.
///
/// # Errors
///
/// Returns [`SmoothError::InvalidConfig`] when the kernel's sub-parameter is
/// out of bounds.
pub fn smooth_sequence(
    sequence: &MatrixSequence,
    kernel: &SmoothingKernel,
) -> Result<MatrixSequence, SmoothError> {
    kernel.validate()?;

    let n = sequence.len();
    let c = sequence.n();
    debug!(kernel = kernel.name(), frames = n, "smoothing matrix sequence");

    let mut matrices: Vec<CorrelationMatrix> = (0..n)
        .map(|t| CorrelationMatrix::filled(c, t, 0.0))
        .collect();

    for i in 0..c {
        for j in 0..c {
            let series = sequence.cell_series(i, j);
            let values = apply(kernel, &series);
            for (t, v) in values.into_iter().enumerate() {
                matrices[t].set(i, j, v);
            }
        }
    }

    Ok(MatrixSequence::new(matrices, sequence.symmetric())?)
}

/// Dispatches one cell series to the configured kernel.
pub(crate) fn apply(kernel: &SmoothingKernel, series: &[f64]) -> Vec<f64> {
    match *kernel {
        SmoothingKernel::MovingAverage { window } => moving_average(series, window),
        SmoothingKernel::Exponential { alpha } => exponential(series, alpha),
        SmoothingKernel::Gaussian { sigma } => gaussian(series, sigma),
    }
}

/// Centred moving average with boundary shrinking.
///
/// The nominal window `w` (capped at the series length) spans `w/2` frames
/// into the past and `w - 1 - w/2` into the future; at the boundaries the
/// window shrinks to the in-range samples and the mean is taken over the
/// actual count. Every output value is therefore bounded by the min/max of
/// its neighbourhood.
pub(crate) fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let w = window.min(n);
    let left = w / 2;
    let right = w - 1 - left;

    (0..n)
        .map(|t| {
            let lo = t.saturating_sub(left);
            let hi = (t + right).min(n - 1);
            let count = hi - lo + 1;
            series[lo..=hi].iter().sum::<f64>() / count as f64
        })
        .collect()
}

/// Causal exponential filter: `y[0] = x[0]`,
/// `y[t] = alpha * x[t] + (1 - alpha) * y[t-1]`.
pub(crate) fn exponential(series: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(series.len());
    for (t, &x) in series.iter().enumerate() {
        if t == 0 {
            out.push(x);
        } else {
            out.push(alpha * x + (1.0 - alpha) * out[t - 1]);
        }
    }
    out
}

/// Centred gaussian filter with kernel radius `ceil(3 * sigma)`.
///
/// At the boundaries the kernel is truncated to the in-range taps and
/// renormalised, so weights always sum to 1 and no overshoot is introduced.
pub(crate) fn gaussian(series: &[f64], sigma: f64) -> Vec<f64> {
    let n = series.len();
    let radius = (3.0 * sigma).ceil() as usize;
    let radius = radius.max(1);

    let weights: Vec<f64> = (0..=2 * radius)
        .map(|k| {
            let d = k as f64 - radius as f64;
            (-0.5 * (d / sigma) * (d / sigma)).exp()
        })
        .collect();

    (0..n)
        .map(|t| {
            let mut sum = 0.0;
            let mut norm = 0.0;
            for (k, &w) in weights.iter().enumerate() {
                let offset = k as isize - radius as isize;
                let idx = t as isize + offset;
                if idx >= 0 && (idx as usize) < n {
                    sum += w * series[idx as usize];
                    norm += w;
                }
            }
            sum / norm
        })
        .collect()
}
