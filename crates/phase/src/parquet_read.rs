//! Parquet loading of the precomputed phase dataset.
//!
//! Long format, one row per (subject, pair, timepoint, scale) cell:
//!
//! | column | type |
//! |-----------|--------|
//! | subject | UInt32 |
//! | network_a | Utf8 |
//! | network_b | Utf8 |
//! | timepoint | UInt32 |
//! | scale | UInt16 |
//! | phase | Int8 |
//!
//! Network names are resolved against the channel catalogue (short names,
//! long names, and nicknames all accepted); every (subject, pair) must cover
//! the full timepoint-by-scale grid.

use std::collections::BTreeMap;
use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{DataType, Int8Type, UInt16Type, UInt32Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tracing::info;

use cortex_signal::position_of;

use crate::dataset::{PairGrid, PhaseDataset, SubjectPhases};
use crate::error::PhaseError;
use crate::label::PhaseLabel;

/// Expected column names, in schema order.
const COLUMNS: [&str; 6] = [
    "subject",
    "network_a",
    "network_b",
    "timepoint",
    "scale",
    "phase",
];

/// Loads the phase dataset from a Parquet file.
///
/// This is a one-time startup cost; the returned [`PhaseDataset`] is
/// immutable and safe to share across threads for the process lifetime.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`PhaseError::FileNotFound`] | `path` does not exist |
/// | [`PhaseError::Parquet`] | the file cannot be opened or decoded |
/// | [`PhaseError::Validation`] | schema or grid-structure mismatch |
/// | [`PhaseError::UnknownNetwork`] | a network name not in the catalogue |
/// | [`PhaseError::InvalidPhaseCode`] | a phase code outside the known set |
/// | [`PhaseError::MissingPairs`] | a subject missing any of the 91 pairs |
pub fn load_dataset(path: &Path) -> Result<PhaseDataset, PhaseError> {
    if !path.exists() {
        return Err(PhaseError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path).map_err(|e| PhaseError::Parquet {
        reason: e.to_string(),
    })?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    // Cell values per (subject, i, j), keyed by (timepoint, scale) so
    // duplicates are detected during accumulation.
    let mut cells: BTreeMap<(u32, usize, usize), BTreeMap<(usize, usize), PhaseLabel>> =
        BTreeMap::new();
    let mut n_timepoints = 0usize;
    let mut n_scales = 0usize;

    for batch in reader {
        let batch = batch.map_err(|e| PhaseError::Parquet {
            reason: e.to_string(),
        })?;
        validate_schema(&batch)?;
        decode_batch(&batch, &mut cells, &mut n_timepoints, &mut n_scales)?;
    }

    if cells.is_empty() {
        return Err(PhaseError::Validation {
            reason: "dataset contains no rows".to_string(),
        });
    }

    // Assemble dense grids; every pair must cover the full shape.
    let mut subjects: BTreeMap<u32, BTreeMap<(usize, usize), PairGrid>> = BTreeMap::new();
    for ((subject, i, j), pair_cells) in cells {
        let expected = n_timepoints * n_scales;
        if pair_cells.len() != expected {
            return Err(PhaseError::Validation {
                reason: format!(
                    "subject {subject} pair ({i},{j}): {} cells, expected {expected}",
                    pair_cells.len()
                ),
            });
        }
        let mut labels = Vec::with_capacity(expected);
        for t in 0..n_timepoints {
            for s in 0..n_scales {
                let label = pair_cells.get(&(t, s)).ok_or_else(|| PhaseError::Validation {
                    reason: format!(
                        "subject {subject} pair ({i},{j}): missing cell (t={t}, s={s})"
                    ),
                })?;
                labels.push(*label);
            }
        }
        subjects
            .entry(subject)
            .or_default()
            .insert((i, j), PairGrid::new(n_timepoints, n_scales, labels)?);
    }

    let subjects: BTreeMap<u32, SubjectPhases> = subjects
        .into_iter()
        .map(|(id, pairs)| (id, SubjectPhases::new(pairs)))
        .collect();

    let dataset = PhaseDataset::new(subjects)?;
    info!(
        path = %path.display(),
        n_subjects = dataset.n_subjects(),
        n_timepoints = dataset.n_timepoints(),
        n_scales = dataset.n_scales(),
        "phase dataset loaded"
    );
    Ok(dataset)
}

/// Validates column names and types of one record batch.
fn validate_schema(batch: &RecordBatch) -> Result<(), PhaseError> {
    let schema = batch.schema();
    if schema.fields().len() != COLUMNS.len() {
        return Err(PhaseError::Validation {
            reason: format!(
                "expected {} columns, got {}",
                COLUMNS.len(),
                schema.fields().len()
            ),
        });
    }

    let expected_types = [
        DataType::UInt32,
        DataType::Utf8,
        DataType::Utf8,
        DataType::UInt32,
        DataType::UInt16,
        DataType::Int8,
    ];
    for ((field, name), data_type) in schema.fields().iter().zip(COLUMNS).zip(&expected_types) {
        if field.name() != name {
            return Err(PhaseError::Validation {
                reason: format!("expected column {name:?}, got {:?}", field.name()),
            });
        }
        if field.data_type() != data_type {
            return Err(PhaseError::Validation {
                reason: format!(
                    "column {name:?}: expected type {data_type}, got {}",
                    field.data_type()
                ),
            });
        }
    }

    for (idx, name) in COLUMNS.iter().enumerate() {
        if batch.column(idx).null_count() > 0 {
            return Err(PhaseError::Validation {
                reason: format!("column {name:?} contains nulls"),
            });
        }
    }
    Ok(())
}

/// Decodes one batch into the cell accumulator.
fn decode_batch(
    batch: &RecordBatch,
    cells: &mut BTreeMap<(u32, usize, usize), BTreeMap<(usize, usize), PhaseLabel>>,
    n_timepoints: &mut usize,
    n_scales: &mut usize,
) -> Result<(), PhaseError> {
    let subject_col = batch.column(0).as_primitive::<UInt32Type>();
    let network_a_col = batch.column(1).as_string::<i32>();
    let network_b_col = batch.column(2).as_string::<i32>();
    let timepoint_col = batch.column(3).as_primitive::<UInt32Type>();
    let scale_col = batch.column(4).as_primitive::<UInt16Type>();
    let phase_col = batch.column(5).as_primitive::<Int8Type>();

    for row in 0..batch.num_rows() {
        let subject = subject_col.value(row);
        let pos_a = resolve_network(network_a_col.value(row))?;
        let pos_b = resolve_network(network_b_col.value(row))?;
        if pos_a == pos_b {
            return Err(PhaseError::Validation {
                reason: format!("self-pair for network position {pos_a}"),
            });
        }
        let (i, j) = if pos_a < pos_b { (pos_a, pos_b) } else { (pos_b, pos_a) };

        let t = timepoint_col.value(row) as usize;
        let s = scale_col.value(row) as usize;
        let label = PhaseLabel::from_code(phase_col.value(row))?;

        *n_timepoints = (*n_timepoints).max(t + 1);
        *n_scales = (*n_scales).max(s + 1);

        let previous = cells.entry((subject, i, j)).or_default().insert((t, s), label);
        if previous.is_some() {
            return Err(PhaseError::Validation {
                reason: format!(
                    "subject {subject} pair ({i},{j}): duplicate cell (t={t}, s={s})"
                ),
            });
        }
    }
    Ok(())
}

fn resolve_network(name: &str) -> Result<usize, PhaseError> {
    position_of(name).ok_or_else(|| PhaseError::UnknownNetwork {
        name: name.to_string(),
    })
}
