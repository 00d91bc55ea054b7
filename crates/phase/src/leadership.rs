//! Windowed leadership-ratio matrices from precomputed phase data.

use tracing::debug;

use cortex_correlate::{CorrelationMatrix, MatrixSequence, WindowConfig};
use cortex_signal::CHANNEL_COUNT;

use crate::dataset::PhaseDataset;
use crate::error::PhaseError;

/// Computes one asymmetric leadership matrix per window position.
///
/// For each window and each unordered channel pair `{i, j}` (with `i < j`),
/// LEAD and LAG occurrences are counted across all scales and timepoints of
/// the window; `ratio = n_lead / (n_lead + n_lag)` when the denominator is
/// nonzero, else `0.5` (no signal). The matrix carries `M[i][j] = ratio` and
/// `M[j][i] = 1 - ratio`, so off-diagonal cells always sum to 1. The
/// diagonal is fixed at 1 and is excluded from edges downstream.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`PhaseError::SubjectNotFound`] | no dataset entry for `subject_id` |
/// | [`PhaseError::Correlate`] | invalid window config, or fewer timepoints than `window_size` |
pub fn leadership_matrices(
    dataset: &PhaseDataset,
    subject_id: u32,
    config: &WindowConfig,
) -> Result<MatrixSequence, PhaseError> {
    config.validate()?;
    let phases = dataset
        .subject(subject_id)
        .ok_or(PhaseError::SubjectNotFound { subject_id })?;

    let n_frames = config.n_windows(dataset.n_timepoints())?;
    let window_size = config.window_size();
    let step = config.step();
    debug!(subject_id, n_frames, window_size, step, "computing leadership matrices");

    // Untouched cells stay at the neutral ratio.
    let mut matrices: Vec<CorrelationMatrix> = (0..n_frames)
        .map(|frame| CorrelationMatrix::filled(CHANNEL_COUNT, frame, 0.5))
        .collect();

    for (&(i, j), grid) in phases.iter() {
        for (frame, matrix) in matrices.iter_mut().enumerate() {
            let start = frame * step;
            let (n_lead, n_lag) = grid.count_lead_lag(start, start + window_size);
            let ratio = if n_lead + n_lag > 0 {
                n_lead as f64 / (n_lead + n_lag) as f64
            } else {
                0.5
            };
            matrix.set(i, j, ratio);
            matrix.set(j, i, 1.0 - ratio);
        }
    }

    Ok(MatrixSequence::new(matrices, false)?)
}
