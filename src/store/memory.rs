use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::error::{StoreError, StoreResult};
use super::traits::{DocumentStore, HistorySink};
use super::types::{Document, DocumentId, HistoryRecord, HistorySummary};

#[derive(Debug, Default)]
struct Documents {
    by_id: BTreeMap<DocumentId, Document>,
    next_id: u64,
}

/// In-process [`DocumentStore`]. Ids are assigned sequentially from 1.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    inner: RwLock<Documents>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a document and returns its new id.
    pub fn insert(
        &self,
        owner: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> DocumentId {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = DocumentId(inner.next_id);

        inner.by_id.insert(
            id,
            Document {
                id,
                owner: owner.into(),
                filename: filename.into(),
                content: content.into(),
            },
        );
        id
    }

    pub fn len(&self) -> usize {
        self.inner.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads every regular file in `dir` as a document of `owner`.
    ///
    /// Files are taken in filename order, so ids are stable across runs. Files that are not
    /// valid UTF-8 are skipped with a warning.
    pub fn load_dir(dir: &Path, owner: &str) -> StoreResult<Self> {
        if !dir.is_dir() {
            return Err(StoreError::DirectoryUnavailable {
                path: dir.to_path_buf(),
            });
        }

        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let store = Self::new();
        for path in paths {
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            match String::from_utf8(fs::read(&path)?) {
                Ok(content) => {
                    let id = store.insert(owner, filename.as_str(), content);
                    debug!(%id, filename = %filename, "Document loaded");
                }
                Err(_) => {
                    warn!(path = %path.display(), "Skipping document: not valid UTF-8");
                }
            }
        }

        info!(dir = %dir.display(), documents = store.len(), "Documents loaded");
        Ok(store)
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn fetch(&self, id: DocumentId) -> StoreResult<Option<Document>> {
        Ok(self.inner.read().by_id.get(&id).cloned())
    }

    fn fetch_by_owner_excluding(&self, owner: &str, exclude: DocumentId) -> StoreResult<Vec<Document>> {
        Ok(self
            .inner
            .read()
            .by_id
            .values()
            .filter(|doc| doc.owner == owner && doc.id != exclude)
            .cloned()
            .collect())
    }
}

/// In-process [`HistorySink`].
#[derive(Debug, Default)]
pub struct MemoryHistoryLog {
    records: Mutex<Vec<HistoryRecord>>,
}

impl MemoryHistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, oldest first.
    pub fn records(&self) -> Vec<HistoryRecord> {
        self.records.lock().clone()
    }

    pub fn summary(&self) -> HistorySummary {
        let records = self.records.lock();
        HistorySummary {
            total: records.len(),
            similar: records.iter().filter(|r| r.is_similar).count(),
        }
    }
}

impl HistorySink for MemoryHistoryLog {
    fn append(&self, record: HistoryRecord) -> StoreResult<()> {
        self.records.lock().push(record);
        Ok(())
    }
}
