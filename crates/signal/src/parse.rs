//! Subject-file parsing and discovery.
//!
//! Raw subject files (`dr_stage1_subjectXXXXXXX.txt`) are whitespace-separated
//! text with one row per timepoint and [`SOURCE_COLUMNS`] ICA component
//! columns. Parsing keeps only the 14 RSN columns, in catalogue order.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::SignalError;
use crate::matrix::SignalMatrix;
use crate::network::{NETWORKS, SOURCE_COLUMNS, short_labels};

/// Filename prefix of dual-regression subject files.
const SUBJECT_PREFIX: &str = "dr_stage1_subject";

/// Parses a subject file into a `[T x 14]` [`SignalMatrix`].
///
/// Rows with only whitespace are skipped. Every data row must carry exactly
/// [`SOURCE_COLUMNS`] values; the 14 RSN columns are selected by their 1-based
/// ICA component indices.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SignalError::FileNotFound`] | `path` does not exist |
/// | [`SignalError::Io`] | the file cannot be read |
/// | [`SignalError::EmptyFile`] | no data rows |
/// | [`SignalError::Parse`] | a value is not a valid float |
/// | [`SignalError::ColumnCount`] | a row has the wrong number of columns |
pub fn parse_subject_file(path: &Path) -> Result<SignalMatrix, SignalError> {
    if !path.exists() {
        return Err(SignalError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| SignalError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); NETWORKS.len()];
    let mut row = [0.0_f64; SOURCE_COLUMNS];

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut count = 0;
        for field in line.split_whitespace() {
            if count < SOURCE_COLUMNS {
                row[count] = field.parse::<f64>().map_err(|e| SignalError::Parse {
                    line: line_idx + 1,
                    reason: format!("{field:?}: {e}"),
                })?;
            }
            count += 1;
        }
        if count != SOURCE_COLUMNS {
            return Err(SignalError::ColumnCount {
                line: line_idx + 1,
                expected: SOURCE_COLUMNS,
                got: count,
            });
        }

        for (pos, network) in NETWORKS.iter().enumerate() {
            columns[pos].push(row[network.index() - 1]);
        }
    }

    if columns[0].is_empty() {
        return Err(SignalError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        n_timepoints = columns[0].len(),
        "parsed subject file"
    );
    SignalMatrix::from_columns(columns, short_labels())
}

/// Extracts the subject identifier from a subject file path.
///
/// `dr_stage1_subject0050003.txt` yields `"0050003"`. Files without the
/// conventional prefix yield their whole stem.
pub fn subject_id(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.strip_prefix(SUBJECT_PREFIX).unwrap_or(&stem).to_string()
}

/// Extracts the numeric subject identifier used to key the phase dataset.
///
/// # Errors
///
/// Returns [`SignalError::Parse`] when the identifier is not a decimal number.
pub fn numeric_subject_id(path: &Path) -> Result<u32, SignalError> {
    let id = subject_id(path);
    id.parse::<u32>().map_err(|e| SignalError::Parse {
        line: 0,
        reason: format!("subject id {id:?}: {e}"),
    })
}

/// One discovered subject file.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectFile {
    /// Path relative to the data directory.
    pub path: String,
    /// Subject identifier extracted from the filename.
    pub subject_id: String,
    /// Acquisition site (parent directory name).
    pub site: String,
    /// Dataset version (grandparent directory name).
    pub version: String,
}

/// Lists all subject files under `data_dir`, recursively.
///
/// Site and version are taken from the last two directory components of each
/// file's relative path, `"unknown"` when the file sits too shallow. The
/// result is sorted by (version, site, subject id).
///
/// # Errors
///
/// Returns [`SignalError::FileNotFound`] when `data_dir` does not exist and
/// [`SignalError::Io`] when a directory cannot be read.
pub fn list_subject_files(data_dir: &Path) -> Result<Vec<SubjectFile>, SignalError> {
    if !data_dir.exists() {
        return Err(SignalError::FileNotFound {
            path: data_dir.to_path_buf(),
        });
    }

    let mut paths = Vec::new();
    collect_txt_files(data_dir, &mut paths)?;

    let mut files: Vec<SubjectFile> = paths
        .iter()
        .map(|p| {
            let rel = p.strip_prefix(data_dir).unwrap_or(p);
            let parts: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            let site = if parts.len() >= 2 {
                parts[parts.len() - 2].clone()
            } else {
                "unknown".to_string()
            };
            let version = if parts.len() >= 3 {
                parts[parts.len() - 3].clone()
            } else {
                "unknown".to_string()
            };
            SubjectFile {
                path: rel.to_string_lossy().into_owned(),
                subject_id: subject_id(p),
                site,
                version,
            }
        })
        .collect();

    files.sort_by(|a, b| {
        (&a.version, &a.site, &a.subject_id).cmp(&(&b.version, &b.site, &b.subject_id))
    });
    debug!(n_files = files.len(), "listed subject files");
    Ok(files)
}

/// Recursively collects `.txt` files under `dir`.
fn collect_txt_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SignalError> {
    let entries = fs::read_dir(dir).map_err(|e| SignalError::Io {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| SignalError::Io {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_txt_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            out.push(path);
        }
    }
    Ok(())
}
