//! Saved-selection store: the persistence port.
//!
//! One JSON record `{categories, schedule}` at a well-known path, read
//! at startup and rewritten on every change. Absence or a parse failure
//! is "no saved state", never an error.

use std::fs;
use std::path::{Path, PathBuf};

use tryst_core::Selection;

use crate::cli::Cli;

/// Persistence port for the current selection.
///
/// Injected into command handlers so orchestration code never touches
/// ambient storage directly.
pub trait SelectionStore {
    /// Load the saved selection, if any usable one exists.
    fn load(&self) -> Option<Selection>;

    /// Persist the selection, replacing any previous record.
    fn save(&self, selection: &Selection) -> anyhow::Result<()>;

    /// Remove the saved record; succeeds when nothing was saved.
    fn clear(&self) -> anyhow::Result<()>;
}

/// File-backed store holding a single pretty-printed JSON record.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Open the store at the path resolved from CLI args and defaults.
    pub fn open(cli: &Cli) -> anyhow::Result<Self> {
        Ok(Self::new(resolve_store_path(cli)?))
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SelectionStore for JsonFileStore {
    fn load(&self) -> Option<Selection> {
        let raw = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, selection: &Selection) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create store directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
        let contents = serde_json::to_string_pretty(selection)?;
        fs::write(&self.path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write store {}: {}", self.path.display(), e))
    }

    fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(anyhow::anyhow!(
                "Failed to clear store {}: {}",
                self.path.display(),
                err
            )),
        }
    }
}

/// Resolve the store path: --store / TRYST_STORE, then the default.
pub fn resolve_store_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.store {
        return Ok(PathBuf::from(path));
    }
    Ok(xdg_data_dir()?.join("selections.json"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tryst"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home).join(".local").join("share").join("tryst"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_selection() -> Selection {
        Selection {
            categories: vec!["Hiking".to_string(), "Dinner".to_string()],
            schedule: "Friday 7:00 PM".to_string(),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = JsonFileStore::new(dir.path().join("selections.json"));

        assert_eq!(store.load(), None);
        store.save(&sample_selection()).expect("save should succeed");
        assert_eq!(store.load(), Some(sample_selection()));
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = JsonFileStore::new(dir.path().join("nested").join("selections.json"));
        store.save(&sample_selection()).expect("save should succeed");
        assert_eq!(store.load(), Some(sample_selection()));
    }

    #[test]
    fn test_corrupt_record_is_no_saved_state() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("selections.json");
        fs::write(&path, "{not json").expect("write should succeed");

        let store = JsonFileStore::new(path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let store = JsonFileStore::new(dir.path().join("selections.json"));

        store.clear().expect("clear of missing file should succeed");
        store.save(&sample_selection()).expect("save should succeed");
        store.clear().expect("clear should succeed");
        assert_eq!(store.load(), None);
    }
}
