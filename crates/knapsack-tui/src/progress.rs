//! File-backed progress store.
//!
//! Persists the durable slice of a session ([`Progress`]) as pretty
//! JSON under the platform data directory. Failures here are warnings,
//! never fatal: the in-memory session stays authoritative.

use knapsack_core::Progress;
use std::fs;
use std::path::PathBuf;

/// Errors from loading or saving the progress file
#[derive(Debug)]
pub enum StoreError {
    /// Could not read the save file
    Read(std::io::Error),
    /// Could not write the save file
    Write(std::io::Error),
    /// The save file exists but is not valid JSON
    Format(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(e) => write!(f, "could not read save file: {}", e),
            Self::Write(e) => write!(f, "could not write save file: {}", e),
            Self::Format(e) => write!(f, "save file is corrupt: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// The progress store, bound to one save file path
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store at the platform-default location
    pub fn new() -> Self {
        Self {
            path: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("knapsack_save.json"),
        }
    }

    /// Store at an explicit path (`--save-file`, tests)
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the saved record. A missing file is not an error: it means
    /// a fresh start, reported as `Ok(None)`.
    pub fn load(&self) -> Result<Option<Progress>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Read(e)),
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StoreError::Format)
    }

    /// Write the record, replacing any previous save
    pub fn save(&self, progress: &Progress) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(progress).map_err(StoreError::Format)?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("knapsack-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_is_a_fresh_start() {
        let store = ProgressStore::at(scratch_file("missing"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = scratch_file("roundtrip");
        let store = ProgressStore::at(path.clone());

        let progress = Progress {
            level: 2,
            scores: HashMap::from([("1".to_string(), 100), ("2".to_string(), 200)]),
            completed: HashMap::from([("1".to_string(), true)]),
        };
        store.save(&progress).unwrap();
        let loaded = store.load().unwrap().expect("record exists");
        assert_eq!(loaded, progress);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_reports_format_error() {
        let path = scratch_file("corrupt");
        fs::write(&path, "not json at all").unwrap();
        let store = ProgressStore::at(path.clone());
        assert!(matches!(store.load(), Err(StoreError::Format(_))));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn legacy_save_shape_still_loads() {
        // The shape the original game wrote: stringified level keys.
        let path = scratch_file("legacy");
        fs::write(
            &path,
            r#"{"level": 3, "scores": {"1": 100, "2": 200}, "completed": {"1": true, "2": true}}"#,
        )
        .unwrap();
        let store = ProgressStore::at(path.clone());
        let progress = store.load().unwrap().expect("record exists");
        assert_eq!(progress.level, 3);
        assert_eq!(progress.scores.get("2"), Some(&200));
        assert_eq!(progress.completed.get("1"), Some(&true));
        let _ = fs::remove_file(path);
    }
}
