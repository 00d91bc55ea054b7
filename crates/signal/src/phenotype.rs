//! Phenotypic labels (diagnosis per subject).
//!
//! Loaded from `phenotypics.csv` with a header row naming at least the
//! `partnum` and `diagnosis` columns. Consumed only as passthrough metadata;
//! the pipeline itself never reads these labels.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SignalError;

/// Diagnosis labels keyed by numeric subject id.
#[derive(Debug, Clone, Default)]
pub struct Phenotypes {
    map: BTreeMap<u32, String>,
}

impl Phenotypes {
    /// Returns the diagnosis label for a subject, if known.
    pub fn diagnosis(&self, subject_id: u32) -> Option<&str> {
        self.map.get(&subject_id).map(String::as_str)
    }

    /// Returns the number of subjects with a label.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no labels were loaded.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Loads phenotypic labels from a CSV file.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SignalError::FileNotFound`] | `path` does not exist |
/// | [`SignalError::Io`] | the file cannot be read |
/// | [`SignalError::Parse`] | missing header columns or a non-numeric subject id |
pub fn load_phenotypes(path: &Path) -> Result<Phenotypes, SignalError> {
    if !path.exists() {
        return Err(SignalError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| SignalError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut lines = text.lines().enumerate();
    let (_, header) = lines.next().ok_or_else(|| SignalError::Parse {
        line: 1,
        reason: "missing header row".to_string(),
    })?;
    let header_fields: Vec<&str> = header.split(',').map(str::trim).collect();
    let id_col = column_index(&header_fields, "partnum")?;
    let dx_col = column_index(&header_fields, "diagnosis")?;

    let mut map = BTreeMap::new();
    for (line_idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let needed = id_col.max(dx_col);
        if fields.len() <= needed {
            return Err(SignalError::Parse {
                line: line_idx + 1,
                reason: format!("expected at least {} fields, got {}", needed + 1, fields.len()),
            });
        }
        let id = fields[id_col].parse::<u32>().map_err(|e| SignalError::Parse {
            line: line_idx + 1,
            reason: format!("subject id {:?}: {e}", fields[id_col]),
        })?;
        map.insert(id, fields[dx_col].to_string());
    }

    debug!(n_subjects = map.len(), "loaded phenotypic labels");
    Ok(Phenotypes { map })
}

fn column_index(header: &[&str], name: &str) -> Result<usize, SignalError> {
    header
        .iter()
        .position(|h| *h == name)
        .ok_or_else(|| SignalError::Parse {
            line: 1,
            reason: format!("missing column {name:?} in header"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn load_basic() {
        let f = write_csv("partnum,diagnosis\n50003,Autism\n50004,Control\n");
        let ph = load_phenotypes(f.path()).unwrap();
        assert_eq!(ph.len(), 2);
        assert_eq!(ph.diagnosis(50003), Some("Autism"));
        assert_eq!(ph.diagnosis(50004), Some("Control"));
        assert_eq!(ph.diagnosis(1), None);
    }

    #[test]
    fn load_extra_columns() {
        let f = write_csv("site,partnum,age,diagnosis\nNYU,50003,12,Autism\n");
        let ph = load_phenotypes(f.path()).unwrap();
        assert_eq!(ph.diagnosis(50003), Some("Autism"));
    }

    #[test]
    fn load_skips_blank_lines() {
        let f = write_csv("partnum,diagnosis\n50003,Autism\n\n");
        let ph = load_phenotypes(f.path()).unwrap();
        assert_eq!(ph.len(), 1);
    }

    #[test]
    fn load_missing_column() {
        let f = write_csv("partnum,age\n50003,12\n");
        let err = load_phenotypes(f.path()).unwrap_err();
        assert!(matches!(err, SignalError::Parse { line: 1, .. }));
    }

    #[test]
    fn load_bad_subject_id() {
        let f = write_csv("partnum,diagnosis\nabc,Autism\n");
        let err = load_phenotypes(f.path()).unwrap_err();
        assert!(matches!(err, SignalError::Parse { line: 2, .. }));
    }

    #[test]
    fn load_missing_file() {
        let err = load_phenotypes(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, SignalError::FileNotFound { .. }));
    }

    #[test]
    fn default_is_empty() {
        let ph = Phenotypes::default();
        assert!(ph.is_empty());
        assert_eq!(ph.diagnosis(1), None);
    }
}
