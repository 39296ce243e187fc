//! Reads exercise snapshots: a single `.json` file holding an exercise
//! array, or a directory whose `*.json` files are parsed in parallel and
//! merged. Malformed JSON rejects the run; record-level gaps are handled
//! downstream by the pricing engine.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Exercise;
use crate::error::SnapshotError;
use crate::utils::debug_enabled;

/// Input resolution order: CLI flag, `EXCOST_DATA` env var, then the
/// conventional export name in the working directory.
pub(crate) fn resolve_input(cli_input: Option<&str>) -> PathBuf {
    cli_input
        .map(PathBuf::from)
        .or_else(|| std::env::var("EXCOST_DATA").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("exercises.json"))
}

pub(crate) fn load(path: &Path) -> Result<Vec<Exercise>, SnapshotError> {
    if path.is_dir() {
        load_dir(path)
    } else if path.is_file() {
        load_file(path)
    } else {
        Err(SnapshotError::NotFound(path.to_path_buf()))
    }
}

fn load_file(path: &Path) -> Result<Vec<Exercise>, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let exercises: Vec<Exercise> =
        serde_json::from_str(&content).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if debug_enabled() {
        eprintln!(
            "[DEBUG] {} exercise record(s) from {}",
            exercises.len(),
            path.display()
        );
    }
    Ok(exercises)
}

fn load_dir(dir: &Path) -> Result<Vec<Exercise>, SnapshotError> {
    let pattern = dir.join("*.json");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())
        .into_iter()
        .flatten()
        .flatten()
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(SnapshotError::NoFiles(dir.to_path_buf()));
    }
    eprintln!("Scanning {} snapshot files...", files.len());

    let parsed: Result<Vec<Vec<Exercise>>, SnapshotError> =
        files.par_iter().map(|path| load_file(path)).collect();
    Ok(parsed?.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    const ONE_EXERCISE: &str = r#"[
        {"id":"ex-1","name":"ANVIL","start_date":"2026-03-01","end_date":"2026-09-01","status":"approved"}
    ]"#;

    #[test]
    fn load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("snapshot.json");
        write(&file, ONE_EXERCISE);
        let exercises = load(&file).unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].name, "ANVIL");
    }

    #[test]
    fn load_directory_merges_files() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("a.json"), ONE_EXERCISE);
        write(
            &dir.path().join("b.json"),
            r#"[{"id":"ex-2","name":"BOLT","start_date":"2026-05-01","end_date":"2026-06-01"}]"#,
        );
        write(&dir.path().join("notes.txt"), "ignored");
        let exercises = load(dir.path()).unwrap();
        assert_eq!(exercises.len(), 2);
    }

    #[test]
    fn missing_path_is_not_found() {
        let err = load(Path::new("/nonexistent/exercises.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::NotFound(_)));
    }

    #[test]
    fn empty_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::NoFiles(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.json");
        write(&file, "{not json");
        let err = load(&file).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }

    #[test]
    fn resolve_input_prefers_cli() {
        assert_eq!(
            resolve_input(Some("/tmp/custom.json")),
            PathBuf::from("/tmp/custom.json")
        );
    }
}
