//! Sliding-window correlation over a signal matrix.

use rayon::prelude::*;
use tracing::{debug, warn};

use cortex_signal::SignalMatrix;

use crate::config::WindowConfig;
use crate::error::CorrelateError;
use crate::matrix::MatrixSequence;
use crate::method::{Method, correlation_matrix};

/// Computes one correlation matrix per window position.
///
/// Window `k` covers timepoints `[k * step, k * step + window_size)`; the
/// output holds `floor((T - window_size) / step) + 1` matrices with
/// timestamps equal to their window index. Windows are independent and are
/// computed in parallel; the collected sequence preserves window order.
///
/// Degenerate windows (zero-variance channel pairs) clamp the affected
/// coefficients to 0 and are reported once at `warn` level; they never fail
/// the computation.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`CorrelateError::InvalidConfig`] | window/step out of bounds |
/// | [`CorrelateError::InsufficientData`] | `T < window_size` |
pub fn windowed_matrices(
    signals: &SignalMatrix,
    method: Method,
    config: &WindowConfig,
) -> Result<MatrixSequence, CorrelateError> {
    config.validate()?;
    let n_frames = config.n_windows(signals.n_timepoints())?;
    let window_size = config.window_size();
    let step = config.step();
    let n_channels = signals.n_channels();

    debug!(
        method = method.name(),
        n_frames, window_size, step, "computing windowed correlation"
    );

    let results: Vec<_> = (0..n_frames)
        .into_par_iter()
        .map(|frame| {
            let start = frame * step;
            let windows: Vec<&[f64]> = (0..n_channels)
                .map(|c| &signals.channel(c)[start..start + window_size])
                .collect();
            correlation_matrix(&windows, method, frame)
        })
        .collect();

    let degenerate: usize = results.iter().map(|(_, d)| *d).sum();
    if degenerate > 0 {
        warn!(
            method = method.name(),
            degenerate_pairs = degenerate,
            "zero-variance channel pairs clamped to 0"
        );
    }

    let matrices = results.into_iter().map(|(m, _)| m).collect();
    MatrixSequence::new(matrices, method.is_symmetric())
}
