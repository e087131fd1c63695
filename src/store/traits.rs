use super::error::StoreResult;
use super::types::{Document, DocumentId, HistoryRecord};

/// Read access to stored documents.
pub trait DocumentStore: Send + Sync {
    /// Looks up one document. `Ok(None)` if the id is unknown.
    fn fetch(&self, id: DocumentId) -> StoreResult<Option<Document>>;

    /// Every document owned by `owner` except `exclude`, in ascending id order.
    fn fetch_by_owner_excluding(&self, owner: &str, exclude: DocumentId) -> StoreResult<Vec<Document>>;
}

/// Append-only destination for match history.
pub trait HistorySink: Send + Sync {
    fn append(&self, record: HistoryRecord) -> StoreResult<()>;
}
