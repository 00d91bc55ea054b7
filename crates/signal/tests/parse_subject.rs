//! Integration tests for subject-file parsing and discovery.

use std::fs;
use std::path::Path;

use cortex_signal::{
    NETWORKS, SOURCE_COLUMNS, SignalError, list_subject_files, parse_subject_file, short_labels,
};

/// Writes a subject file where the value in column `c` (0-based) at row `t`
/// is `base(t, c)`, so selected columns can be checked exactly.
fn write_subject_file(dir: &Path, name: &str, n_rows: usize) -> std::path::PathBuf {
    let mut text = String::new();
    for t in 0..n_rows {
        let row: Vec<String> = (0..SOURCE_COLUMNS)
            .map(|c| format!("{:.6}", t as f64 + c as f64 * 1000.0))
            .collect();
        text.push_str(&row.join(" "));
        text.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn parse_selects_rsn_columns_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_subject_file(dir.path(), "dr_stage1_subject0050003.txt", 5);

    let m = parse_subject_file(&path).unwrap();
    assert_eq!(m.n_timepoints(), 5);
    assert_eq!(m.n_channels(), 14);
    assert_eq!(m.labels(), short_labels().as_slice());

    // Channel at position p holds source column NETWORKS[p].index() - 1.
    for (p, network) in NETWORKS.iter().enumerate() {
        let source_col = (network.index() - 1) as f64;
        for t in 0..5 {
            let expected = t as f64 + source_col * 1000.0;
            assert_eq!(m.value(t, p), expected);
        }
    }
}

#[test]
fn parse_single_row_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_subject_file(dir.path(), "dr_stage1_subject0050004.txt", 1);
    let m = parse_subject_file(&path).unwrap();
    assert_eq!(m.n_timepoints(), 1);
    assert_eq!(m.n_channels(), 14);
}

#[test]
fn parse_rejects_short_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1.0 2.0 3.0\n").unwrap();
    let err = parse_subject_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SignalError::ColumnCount {
            line: 1,
            expected: 32,
            got: 3
        }
    ));
}

#[test]
fn parse_rejects_bad_float() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    let mut row: Vec<String> = (0..SOURCE_COLUMNS).map(|c| format!("{c}.0")).collect();
    row[3] = "oops".to_string();
    fs::write(&path, row.join(" ")).unwrap();
    let err = parse_subject_file(&path).unwrap_err();
    assert!(matches!(err, SignalError::Parse { line: 1, .. }));
}

#[test]
fn parse_rejects_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "\n\n").unwrap();
    let err = parse_subject_file(&path).unwrap_err();
    assert!(matches!(err, SignalError::EmptyFile { .. }));
}

#[test]
fn list_finds_and_sorts_files() {
    let dir = tempfile::tempdir().unwrap();
    let v1_nyu = dir.path().join("v1").join("NYU");
    let v1_ucla = dir.path().join("v1").join("UCLA");
    let v2_nyu = dir.path().join("v2").join("NYU");
    fs::create_dir_all(&v1_nyu).unwrap();
    fs::create_dir_all(&v1_ucla).unwrap();
    fs::create_dir_all(&v2_nyu).unwrap();

    write_subject_file(&v2_nyu, "dr_stage1_subject0050001.txt", 1);
    write_subject_file(&v1_ucla, "dr_stage1_subject0050002.txt", 1);
    write_subject_file(&v1_nyu, "dr_stage1_subject0050009.txt", 1);
    write_subject_file(&v1_nyu, "dr_stage1_subject0050003.txt", 1);
    // Non-txt files are ignored.
    fs::write(dir.path().join("v1").join("notes.md"), "x").unwrap();

    let files = list_subject_files(dir.path()).unwrap();
    assert_eq!(files.len(), 4);

    let keys: Vec<(&str, &str, &str)> = files
        .iter()
        .map(|f| (f.version.as_str(), f.site.as_str(), f.subject_id.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("v1", "NYU", "0050003"),
            ("v1", "NYU", "0050009"),
            ("v1", "UCLA", "0050002"),
            ("v2", "NYU", "0050001"),
        ]
    );
}

#[test]
fn list_shallow_file_gets_unknown_site() {
    let dir = tempfile::tempdir().unwrap();
    write_subject_file(dir.path(), "dr_stage1_subject0050001.txt", 1);
    let files = list_subject_files(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].site, "unknown");
    assert_eq!(files[0].version, "unknown");
}

#[test]
fn list_missing_dir() {
    let err = list_subject_files(Path::new("/no/such/dir")).unwrap_err();
    assert!(matches!(err, SignalError::FileNotFound { .. }));
}
