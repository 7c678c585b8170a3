//! Preference store
//!
//! A string-to-string key-value store persisted as pretty JSON in the user
//! config directory. Reads happen once, when the store is opened; writes are
//! fire-and-forget, handed to a background writer thread so a slow or failing
//! disk never blocks the UI. A write failure is logged and otherwise ignored:
//! the in-memory value still reflects the user's choice, and losing a local
//! preference is the accepted worst case.

use crossbeam_channel::{unbounded, Sender};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use crate::error::PrefsError;

/// Storage keys understood by the onboarding screens.
pub mod keys {
    /// Code of the language chosen on the first screen.
    pub const SELECTED_LANGUAGE: &str = "selectedLanguage";

    /// Id of the proficiency level chosen on the second screen.
    pub const SELECTED_LEVEL: &str = "selectedLevel";
}

const APP_DIR: &str = "TajweedApp";
const PREFS_FILE: &str = "preferences.json";

/// Current preference file version (for future migrations)
const VERSION: u32 = 1;

type Snapshot = BTreeMap<String, String>;

/// On-disk shape of the preference file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PrefsDocument {
    version: u32,
    values: Snapshot,
}

/// Persistent key-value preference store.
pub struct PreferenceStore {
    path: PathBuf,
    values: RwLock<Snapshot>,
    writer: Option<Sender<Snapshot>>,
    worker: Option<JoinHandle<()>>,
}

impl PreferenceStore {
    /// Open the store at its platform-specific location.
    ///
    /// Never fails: an unreadable or corrupt file is logged and treated as an
    /// empty store, so first render is never blocked on storage.
    pub fn open() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Open a store backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        let values = match read_snapshot(&path) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("{err}; continuing with empty preferences");
                Snapshot::new()
            }
        };

        let (writer, worker) = spawn_writer(path.clone());

        Self {
            path,
            values: RwLock::new(values),
            writer: Some(writer),
            worker: Some(worker),
        }
    }

    /// Preference file location in the user config directory.
    fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
            .unwrap_or_else(|| PathBuf::from(PREFS_FILE))
    }

    /// Read a stored value. Absent keys (including everything after a failed
    /// load) return `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    /// Store a value. The in-memory map is updated synchronously; the disk
    /// write is queued to the writer thread and never blocks the caller.
    pub fn set(&self, key: &str, value: &str) {
        let snapshot = {
            let mut values = self.values.write();
            values.insert(key.to_string(), value.to_string());
            values.clone()
        };

        tracing::debug!(key, value, "preference updated");

        match &self.writer {
            Some(writer) => {
                if writer.send(snapshot).is_err() {
                    tracing::warn!(key, "preference writer is gone, value not persisted");
                }
            }
            None => tracing::warn!(key, "preference store closed, value not persisted"),
        }
    }

    /// Synchronously persist the current snapshot. Not used on the selection
    /// path; tests and shutdown use it when they need durability now.
    pub fn flush(&self) -> Result<(), PrefsError> {
        let snapshot = self.values.read().clone();
        write_snapshot(&self.path, &snapshot)
    }

    /// Drain queued writes and stop the writer thread. Called on shutdown;
    /// also runs on drop.
    pub fn close(&mut self) {
        self.writer.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("preference writer thread panicked");
            }
        }
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for PreferenceStore {
    fn drop(&mut self) {
        self.close();
    }
}

/// Spawn the background writer. It persists every snapshot it receives and
/// exits once the store (the only sender) is dropped.
fn spawn_writer(path: PathBuf) -> (Sender<Snapshot>, JoinHandle<()>) {
    let (tx, rx) = unbounded::<Snapshot>();

    let worker = std::thread::Builder::new()
        .name("prefs-writer".to_string())
        .spawn(move || {
            while let Ok(snapshot) = rx.recv() {
                if let Err(err) = write_snapshot(&path, &snapshot) {
                    tracing::warn!("{err}; preference write dropped");
                }
            }
        })
        .expect("failed to spawn preference writer thread");

    (tx, worker)
}

fn read_snapshot(path: &Path) -> Result<Snapshot, PrefsError> {
    if !path.exists() {
        tracing::debug!("no stored preferences at {}, starting fresh", path.display());
        return Ok(Snapshot::new());
    }

    let content = fs::read_to_string(path).map_err(|source| PrefsError::ReadFailed {
        path: path.display().to_string(),
        source: Box::new(source),
    })?;

    let document: PrefsDocument =
        serde_json::from_str(&content).map_err(|source| PrefsError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })?;

    if document.version != VERSION {
        tracing::warn!(
            "Preference file version mismatch: expected {}, found {}",
            VERSION,
            document.version
        );
    }

    Ok(document.values)
}

fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), PrefsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| PrefsError::DirectoryCreationFailed {
            path: parent.display().to_string(),
            source,
        })?;
    }

    let document = PrefsDocument {
        version: VERSION,
        values: snapshot.clone(),
    };
    let json =
        serde_json::to_string_pretty(&document).map_err(|source| PrefsError::WriteFailed {
            path: path.display().to_string(),
            source: Box::new(source),
        })?;

    fs::write(path, json).map_err(|source| PrefsError::WriteFailed {
        path: path.display().to_string(),
        source: Box::new(source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::with_path(dir.path().join(PREFS_FILE))
    }

    #[test]
    fn test_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.get(keys::SELECTED_LANGUAGE), None);
        assert_eq!(store.get(keys::SELECTED_LEVEL), None);
    }

    #[test]
    fn test_set_is_visible_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(keys::SELECTED_LANGUAGE, "ar");
        assert_eq!(store.get(keys::SELECTED_LANGUAGE), Some("ar".to_string()));
    }

    #[test]
    fn test_set_fully_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(keys::SELECTED_LANGUAGE, "ru");
        store.set(keys::SELECTED_LANGUAGE, "en");
        assert_eq!(store.get(keys::SELECTED_LANGUAGE), Some("en".to_string()));
    }

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);

        let mut store = PreferenceStore::with_path(path.clone());
        store.set(keys::SELECTED_LANGUAGE, "ar");
        store.set(keys::SELECTED_LEVEL, "novice");
        store.close();

        let reopened = PreferenceStore::with_path(path);
        assert_eq!(reopened.get(keys::SELECTED_LANGUAGE), Some("ar".to_string()));
        assert_eq!(reopened.get(keys::SELECTED_LEVEL), Some("novice".to_string()));
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set(keys::SELECTED_LANGUAGE, "de");
        assert_eq!(store.get(keys::SELECTED_LEVEL), None);
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "{ not json").unwrap();

        let store = PreferenceStore::with_path(path);
        assert_eq!(store.get(keys::SELECTED_LANGUAGE), None);
    }

    #[test]
    fn test_flush_writes_current_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);

        let mut store = PreferenceStore::with_path(path.clone());
        store.set(keys::SELECTED_LEVEL, "teacher");
        store.close();
        store.flush().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: PrefsDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.version, VERSION);
        assert_eq!(
            parsed.values.get(keys::SELECTED_LEVEL).map(String::as_str),
            Some("teacher")
        );
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(PREFS_FILE);

        let mut store = PreferenceStore::with_path(path.clone());
        store.set(keys::SELECTED_LANGUAGE, "ja");
        store.close();

        assert!(path.exists());
    }
}
