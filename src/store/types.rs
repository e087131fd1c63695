use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric document identifier. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// An uploaded document. Immutable once stored.
pub struct Document {
    pub id: DocumentId,
    /// Owning user; matching only compares documents of the same owner.
    pub owner: String,
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One persisted match outcome. History is append-only.
pub struct HistoryRecord {
    pub source_id: DocumentId,
    pub candidate_id: DocumentId,
    pub score: f64,
    pub is_similar: bool,
    pub timestamp: DateTime<Utc>,
}

impl HistoryRecord {
    /// Record stamped with the current time.
    pub fn now(source_id: DocumentId, candidate_id: DocumentId, score: f64, is_similar: bool) -> Self {
        Self {
            source_id,
            candidate_id,
            score,
            is_similar,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Aggregate counts over a history log.
pub struct HistorySummary {
    pub total: usize,
    pub similar: usize,
}
