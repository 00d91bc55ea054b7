//! Phase classification labels.

use crate::error::PhaseError;

/// Phase relationship between two channels at one (timepoint, scale) cell.
///
/// On-disk integer codes follow the upstream MATLAB convention:
/// `angle_color = 2*phase + 1*lead - 1*lag - 2*anti`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseLabel {
    /// No significant coherence.
    None,
    /// First channel temporally leads the second.
    Lead,
    /// First channel lags the second.
    Lag,
    /// Channels are in anti-phase.
    AntiPhase,
    /// Channels are in phase.
    InPhase,
}

impl PhaseLabel {
    /// Decodes an on-disk integer code.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::InvalidPhaseCode`] for codes outside
    /// `{0, 1, -1, -2, 2}`.
    pub fn from_code(code: i8) -> Result<Self, PhaseError> {
        match code {
            0 => Ok(PhaseLabel::None),
            1 => Ok(PhaseLabel::Lead),
            -1 => Ok(PhaseLabel::Lag),
            -2 => Ok(PhaseLabel::AntiPhase),
            2 => Ok(PhaseLabel::InPhase),
            _ => Err(PhaseError::InvalidPhaseCode { code }),
        }
    }

    /// Returns the on-disk integer code.
    pub fn code(&self) -> i8 {
        match self {
            PhaseLabel::None => 0,
            PhaseLabel::Lead => 1,
            PhaseLabel::Lag => -1,
            PhaseLabel::AntiPhase => -2,
            PhaseLabel::InPhase => 2,
        }
    }
}
