//! Validated multichannel signal container.

use crate::error::SignalError;

/// An immutable `[T x C]` matrix of signal samples with channel identity.
///
/// Samples are stored column-major so that a single channel's full time
/// series is one contiguous slice, which is the access pattern of windowed
/// correlation. Guarantees after construction:
///
/// - at least one channel, at least one timepoint
/// - all channels have the same length
/// - every sample is finite (no NaN or infinity)
/// - one label per channel
#[derive(Debug, Clone)]
pub struct SignalMatrix {
    n_timepoints: usize,
    labels: Vec<String>,
    /// Column-major samples: `data[c * n_timepoints + t]`.
    data: Vec<f64>,
}

impl SignalMatrix {
    /// Creates a new `SignalMatrix` from per-channel columns.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SignalError::Validation`] | no channels, no timepoints, ragged columns, or label count mismatch |
    /// | [`SignalError::NonFinite`] | any sample is NaN or infinite |
    pub fn from_columns(
        columns: Vec<Vec<f64>>,
        labels: Vec<String>,
    ) -> Result<Self, SignalError> {
        if columns.is_empty() {
            return Err(SignalError::Validation {
                reason: "no channels".to_string(),
            });
        }
        let n_timepoints = columns[0].len();
        if n_timepoints == 0 {
            return Err(SignalError::Validation {
                reason: "no timepoints".to_string(),
            });
        }
        if labels.len() != columns.len() {
            return Err(SignalError::Validation {
                reason: format!(
                    "label count {} does not match channel count {}",
                    labels.len(),
                    columns.len()
                ),
            });
        }
        for (c, col) in columns.iter().enumerate() {
            if col.len() != n_timepoints {
                return Err(SignalError::Validation {
                    reason: format!(
                        "channel {c} has {} timepoints, expected {n_timepoints}",
                        col.len()
                    ),
                });
            }
            if let Some(t) = col.iter().position(|v| !v.is_finite()) {
                return Err(SignalError::NonFinite {
                    timepoint: t,
                    channel: c,
                });
            }
        }

        let mut data = Vec::with_capacity(columns.len() * n_timepoints);
        for col in &columns {
            data.extend_from_slice(col);
        }
        Ok(Self {
            n_timepoints,
            labels,
            data,
        })
    }

    /// Returns the number of timepoints `T`.
    pub fn n_timepoints(&self) -> usize {
        self.n_timepoints
    }

    /// Returns the number of channels `C`.
    pub fn n_channels(&self) -> usize {
        self.labels.len()
    }

    /// Returns the ordered channel labels.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the full time series of channel `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= n_channels()`.
    pub fn channel(&self, c: usize) -> &[f64] {
        let start = c * self.n_timepoints;
        &self.data[start..start + self.n_timepoints]
    }

    /// Returns the sample at timepoint `t`, channel `c`.
    ///
    /// # Panics
    ///
    /// Panics if `t` or `c` is out of range.
    pub fn value(&self, t: usize, c: usize) -> f64 {
        assert!(t < self.n_timepoints, "timepoint {t} out of range");
        self.data[c * self.n_timepoints + t]
    }
}
