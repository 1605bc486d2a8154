//! # Document Registry
//!
//! Durable, process-wide store of [`DocumentRecord`] values.
//!
//! Every operation takes the same mutex around the full
//! read-parse-mutate-serialize-write cycle, so registrations, reads and
//! listings never interleave within one process. Nothing coordinates with
//! other processes sharing the file.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use super::errors::RegistryResult;
use super::store::{StoreContents, StoreFile, StoredEntry};
use crate::model::{DocumentRecord, DocumentStatus, IngestionResponse};
use crate::observability::{Event, Logger};

#[derive(Debug)]
pub struct DocumentRegistry {
    store: Mutex<StoreFile>,
}

impl DocumentRegistry {
    /// Open the registry backed by `path`, creating an empty store if needed
    pub fn open(path: impl AsRef<Path>) -> RegistryResult<Self> {
        Ok(Self {
            store: Mutex::new(StoreFile::open(path)?),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> std::path::PathBuf {
        self.lock().path().to_path_buf()
    }

    // The file is rewritten wholesale, so a panic mid-operation leaves no
    // partial in-memory state behind the lock.
    fn lock(&self) -> MutexGuard<'_, StoreFile> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `record`, replacing any prior value under the same id.
    ///
    /// A missing or empty `document_id` is replaced by a fresh UUID.
    pub fn register(&self, mut record: DocumentRecord) -> RegistryResult<IngestionResponse> {
        let created_at = Utc::now();

        let document_id = {
            let store = self.lock();
            let mut contents = store.load()?;

            let document_id = match record.supplied_id() {
                Some(id) => id.to_string(),
                None => Uuid::new_v4().to_string(),
            };
            record.document_id = Some(document_id.clone());

            let entry = StoredEntry {
                created_at,
                document: record,
            };
            contents.insert(document_id.clone(), entry.to_value()?);
            store.save(&contents)?;
            document_id
        };

        Logger::event(
            Event::DocumentRegistered,
            &[("document_id", document_id.as_str())],
        );

        Ok(IngestionResponse {
            document_id,
            status: DocumentStatus::Received,
            received_at: created_at,
        })
    }

    /// The record last written under `document_id`, if any.
    /// An entry that no longer decodes reads as absent.
    pub fn get(&self, document_id: &str) -> RegistryResult<Option<DocumentRecord>> {
        let store = self.lock();
        let mut contents = store.load()?;
        Ok(contents
            .remove(document_id)
            .and_then(|raw| store.decode(document_id, raw))
            .map(|entry| entry.document))
    }

    /// All decodable records, ordered by id. Callers must not rely on the order.
    pub fn list(&self) -> RegistryResult<Vec<DocumentRecord>> {
        let store = self.lock();
        let contents = store.load()?;
        Ok(contents
            .into_iter()
            .filter_map(|(document_id, raw)| store.decode(&document_id, raw))
            .map(|entry| entry.document)
            .collect())
    }

    /// Reset the store to an empty mapping (test and maintenance use)
    pub fn clear(&self) -> RegistryResult<()> {
        let store = self.lock();
        store.save(&StoreContents::new())?;
        Logger::event(
            Event::StoreCleared,
            &[("path", store.path().display().to_string().as_str())],
        );
        Ok(())
    }
}
