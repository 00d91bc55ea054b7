//! The precomputed phase dataset: a read-only keyed store of phase-label
//! grids per subject and channel pair.
//!
//! Loaded once at process start and shared immutably for the lifetime of the
//! process; all types here are `Send + Sync` with no interior mutability, so
//! unsynchronised concurrent reads are safe.

use std::collections::BTreeMap;

use cortex_signal::CHANNEL_COUNT;

use crate::error::PhaseError;
use crate::label::PhaseLabel;

/// Number of unordered channel pairs for the 14-channel catalogue.
pub const PAIR_COUNT: usize = CHANNEL_COUNT * (CHANNEL_COUNT - 1) / 2;

/// Phase labels for one (subject, channel pair) across time and scale.
///
/// Row-major `[n_timepoints x n_scales]`: `labels[t * n_scales + s]`.
#[derive(Debug, Clone)]
pub struct PairGrid {
    n_timepoints: usize,
    n_scales: usize,
    labels: Vec<PhaseLabel>,
}

impl PairGrid {
    /// Creates a grid after checking the label count against the shape.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::Validation`] when
    /// `labels.len() != n_timepoints * n_scales` or either dimension is zero.
    pub fn new(
        n_timepoints: usize,
        n_scales: usize,
        labels: Vec<PhaseLabel>,
    ) -> Result<Self, PhaseError> {
        if n_timepoints == 0 || n_scales == 0 {
            return Err(PhaseError::Validation {
                reason: format!("empty grid shape {n_timepoints}x{n_scales}"),
            });
        }
        if labels.len() != n_timepoints * n_scales {
            return Err(PhaseError::Validation {
                reason: format!(
                    "expected {} labels for a {n_timepoints}x{n_scales} grid, got {}",
                    n_timepoints * n_scales,
                    labels.len()
                ),
            });
        }
        Ok(Self {
            n_timepoints,
            n_scales,
            labels,
        })
    }

    /// Returns the number of timepoints.
    pub fn n_timepoints(&self) -> usize {
        self.n_timepoints
    }

    /// Returns the number of frequency scales.
    pub fn n_scales(&self) -> usize {
        self.n_scales
    }

    /// Returns the label at timepoint `t`, scale `s`.
    ///
    /// # Panics
    ///
    /// Panics if `t` or `s` is out of range.
    pub fn get(&self, t: usize, s: usize) -> PhaseLabel {
        assert!(t < self.n_timepoints && s < self.n_scales, "({t},{s}) out of range");
        self.labels[t * self.n_scales + s]
    }

    /// Counts LEAD and LAG occurrences over timepoints `[start, end)` across
    /// all scales.
    ///
    /// # Panics
    ///
    /// Panics if `end > n_timepoints` or `start > end`.
    pub fn count_lead_lag(&self, start: usize, end: usize) -> (usize, usize) {
        assert!(start <= end && end <= self.n_timepoints, "window out of range");
        let mut n_lead = 0;
        let mut n_lag = 0;
        for label in &self.labels[start * self.n_scales..end * self.n_scales] {
            match label {
                PhaseLabel::Lead => n_lead += 1,
                PhaseLabel::Lag => n_lag += 1,
                _ => {}
            }
        }
        (n_lead, n_lag)
    }
}

/// All pair grids for one subject, keyed by channel positions `(i, j)` with
/// `i < j`.
#[derive(Debug, Clone)]
pub struct SubjectPhases {
    pairs: BTreeMap<(usize, usize), PairGrid>,
}

impl SubjectPhases {
    /// Creates a subject entry from pair grids.
    pub fn new(pairs: BTreeMap<(usize, usize), PairGrid>) -> Self {
        Self { pairs }
    }

    /// Returns the grid for the unordered pair `{i, j}`.
    pub fn pair(&self, i: usize, j: usize) -> Option<&PairGrid> {
        let key = if i < j { (i, j) } else { (j, i) };
        self.pairs.get(&key)
    }

    /// Returns the number of pairs present.
    pub fn n_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates pair keys and grids in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &PairGrid)> {
        self.pairs.iter()
    }
}

/// The full precomputed dataset, keyed by numeric subject id.
#[derive(Debug, Clone)]
pub struct PhaseDataset {
    subjects: BTreeMap<u32, SubjectPhases>,
    n_timepoints: usize,
    n_scales: usize,
}

impl PhaseDataset {
    /// Creates a dataset after validating structural invariants:
    ///
    /// - at least one subject
    /// - every subject covers all [`PAIR_COUNT`] unordered channel pairs
    /// - pair keys satisfy `i < j < CHANNEL_COUNT`
    /// - every grid shares one `[n_timepoints x n_scales]` shape
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::MissingPairs`] or [`PhaseError::Validation`].
    pub fn new(subjects: BTreeMap<u32, SubjectPhases>) -> Result<Self, PhaseError> {
        let first = subjects.values().flat_map(|s| s.iter().map(|(_, g)| g)).next();
        let (n_timepoints, n_scales) = match first {
            Some(grid) => (grid.n_timepoints(), grid.n_scales()),
            None => {
                return Err(PhaseError::Validation {
                    reason: "no subjects in dataset".to_string(),
                });
            }
        };

        for (&subject_id, phases) in &subjects {
            if phases.n_pairs() != PAIR_COUNT {
                return Err(PhaseError::MissingPairs {
                    subject_id,
                    got: phases.n_pairs(),
                    expected: PAIR_COUNT,
                });
            }
            for (&(i, j), grid) in phases.iter() {
                if i >= j || j >= CHANNEL_COUNT {
                    return Err(PhaseError::Validation {
                        reason: format!("subject {subject_id}: invalid pair key ({i},{j})"),
                    });
                }
                if grid.n_timepoints() != n_timepoints || grid.n_scales() != n_scales {
                    return Err(PhaseError::Validation {
                        reason: format!(
                            "subject {subject_id} pair ({i},{j}): grid {}x{} differs from {}x{}",
                            grid.n_timepoints(),
                            grid.n_scales(),
                            n_timepoints,
                            n_scales
                        ),
                    });
                }
            }
        }

        Ok(Self {
            subjects,
            n_timepoints,
            n_scales,
        })
    }

    /// Returns the phases for a subject, if present.
    pub fn subject(&self, subject_id: u32) -> Option<&SubjectPhases> {
        self.subjects.get(&subject_id)
    }

    /// Returns the number of subjects.
    pub fn n_subjects(&self) -> usize {
        self.subjects.len()
    }

    /// Returns the shared number of timepoints per grid.
    pub fn n_timepoints(&self) -> usize {
        self.n_timepoints
    }

    /// Returns the shared number of scales per grid.
    pub fn n_scales(&self) -> usize {
        self.n_scales
    }

    /// Returns the subject ids in ascending order.
    pub fn subject_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.subjects.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n_t: usize, n_s: usize, label: PhaseLabel) -> PairGrid {
        PairGrid::new(n_t, n_s, vec![label; n_t * n_s]).unwrap()
    }

    /// A subject with all 91 pairs filled with one label.
    fn full_subject(n_t: usize, n_s: usize, label: PhaseLabel) -> SubjectPhases {
        let mut pairs = BTreeMap::new();
        for i in 0..CHANNEL_COUNT {
            for j in (i + 1)..CHANNEL_COUNT {
                pairs.insert((i, j), grid(n_t, n_s, label));
            }
        }
        SubjectPhases::new(pairs)
    }

    #[test]
    fn pair_count_is_91() {
        assert_eq!(PAIR_COUNT, 91);
    }

    #[test]
    fn grid_shape_checked() {
        assert!(PairGrid::new(2, 3, vec![PhaseLabel::None; 6]).is_ok());
        assert!(PairGrid::new(2, 3, vec![PhaseLabel::None; 5]).is_err());
        assert!(PairGrid::new(0, 3, vec![]).is_err());
    }

    #[test]
    fn grid_get_row_major() {
        let mut labels = vec![PhaseLabel::None; 6];
        labels[1 * 3 + 2] = PhaseLabel::Lead;
        let g = PairGrid::new(2, 3, labels).unwrap();
        assert_eq!(g.get(1, 2), PhaseLabel::Lead);
        assert_eq!(g.get(0, 2), PhaseLabel::None);
    }

    #[test]
    fn count_lead_lag_window() {
        // 4 timepoints x 2 scales; LEAD at t=1 both scales, LAG at t=2 one scale.
        let mut labels = vec![PhaseLabel::None; 8];
        labels[1 * 2] = PhaseLabel::Lead;
        labels[1 * 2 + 1] = PhaseLabel::Lead;
        labels[2 * 2] = PhaseLabel::Lag;
        let g = PairGrid::new(4, 2, labels).unwrap();

        assert_eq!(g.count_lead_lag(0, 4), (2, 1));
        assert_eq!(g.count_lead_lag(0, 1), (0, 0));
        assert_eq!(g.count_lead_lag(1, 2), (2, 0));
        assert_eq!(g.count_lead_lag(2, 3), (0, 1));
    }

    #[test]
    fn subject_pair_unordered_lookup() {
        let subject = full_subject(3, 2, PhaseLabel::Lead);
        assert!(subject.pair(0, 1).is_some());
        assert!(subject.pair(1, 0).is_some());
        assert!(subject.pair(2, 2).is_none());
    }

    #[test]
    fn dataset_valid() {
        let mut subjects = BTreeMap::new();
        subjects.insert(1, full_subject(5, 3, PhaseLabel::None));
        subjects.insert(2, full_subject(5, 3, PhaseLabel::Lag));
        let ds = PhaseDataset::new(subjects).unwrap();
        assert_eq!(ds.n_subjects(), 2);
        assert_eq!(ds.n_timepoints(), 5);
        assert_eq!(ds.n_scales(), 3);
        assert!(ds.subject(1).is_some());
        assert!(ds.subject(3).is_none());
        assert_eq!(ds.subject_ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn dataset_empty_rejected() {
        let err = PhaseDataset::new(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, PhaseError::Validation { .. }));
    }

    #[test]
    fn dataset_missing_pair_rejected() {
        let mut pairs = BTreeMap::new();
        for i in 0..CHANNEL_COUNT {
            for j in (i + 1)..CHANNEL_COUNT {
                pairs.insert((i, j), grid(2, 2, PhaseLabel::None));
            }
        }
        pairs.remove(&(0, 1));
        let mut subjects = BTreeMap::new();
        subjects.insert(7, SubjectPhases::new(pairs));
        let err = PhaseDataset::new(subjects).unwrap_err();
        assert!(matches!(
            err,
            PhaseError::MissingPairs {
                subject_id: 7,
                got: 90,
                expected: 91
            }
        ));
    }

    #[test]
    fn dataset_shape_mismatch_rejected() {
        let mut subjects = BTreeMap::new();
        subjects.insert(1, full_subject(5, 3, PhaseLabel::None));
        subjects.insert(2, full_subject(4, 3, PhaseLabel::None));
        let err = PhaseDataset::new(subjects).unwrap_err();
        assert!(matches!(err, PhaseError::Validation { .. }));
    }

    #[test]
    fn dataset_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<PhaseDataset>();
    }
}
