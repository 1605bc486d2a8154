//! Whole-file JSON store
//!
//! The file holds one mapping `document_id -> {created_at, document}`,
//! pretty-printed with keys sorted at every level. It is read and parsed in
//! full on every load and rewritten in full on every save.
//!
//! Entries stay raw JSON until a reader decodes them, so an entry that no
//! longer decodes is carried through every rewrite untouched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{RegistryError, RegistryResult};
use crate::model::DocumentRecord;
use crate::observability::{Event, Logger};

/// One persisted entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEntry {
    pub created_at: DateTime<Utc>,
    pub document: DocumentRecord,
}

impl StoredEntry {
    pub fn to_value(&self) -> RegistryResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Raw entries of the store, ordered by id
pub type StoreContents = Map<String, Value>;

/// Handle to the backing file. Callers serialize access externally.
#[derive(Debug)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Open the store, creating parent directories and an empty mapping
    /// when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RegistryError::io(parent, e))?;
            }
        }

        let store = Self { path };
        if !store.path.exists() {
            store.save(&StoreContents::new())?;
            Logger::event(Event::StoreCreated, &[("path", store.path_str().as_str())]);
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// Read and parse the whole file. Empty content, unparseable JSON and a
    /// top level other than an object are treated as an empty store.
    pub fn load(&self) -> RegistryResult<StoreContents> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.io_failed(e))?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(StoreContents::new());
        }

        let reason = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(contents)) => return Ok(contents),
            Ok(_) => "top level is not an object".to_string(),
            Err(e) => e.to_string(),
        };
        Logger::event(
            Event::StoreCorruptionIgnored,
            &[("path", self.path_str().as_str()), ("reason", reason.as_str())],
        );
        Ok(StoreContents::new())
    }

    /// Decode one raw entry. Entries that fail to decode are logged and
    /// read as absent; they stay in the file.
    pub fn decode(&self, document_id: &str, raw: Value) -> Option<StoredEntry> {
        match serde_json::from_value(raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                Logger::event(
                    Event::StoreEntrySkipped,
                    &[
                        ("document_id", document_id),
                        ("path", self.path_str().as_str()),
                        ("reason", e.to_string().as_str()),
                    ],
                );
                None
            }
        }
    }

    /// Rewrite the whole file
    pub fn save(&self, contents: &StoreContents) -> RegistryResult<()> {
        // `Map` is ordered, so keys come out sorted at every level
        let text = serde_json::to_string_pretty(contents)?;
        fs::write(&self.path, text).map_err(|e| self.io_failed(e))
    }

    fn io_failed(&self, source: std::io::Error) -> RegistryError {
        let err = RegistryError::io(&self.path, source);
        Logger::event(
            Event::StoreIoFailed,
            &[("path", self.path_str().as_str()), ("reason", err.to_string().as_str())],
        );
        err
    }
}
