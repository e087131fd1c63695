use serde::Serialize;
use thiserror::Error;

use crate::store::{DocumentId, StoreError};

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Document not found")]
    DocumentNotFound { id: DocumentId },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl MatchError {
    /// Body suitable for returning to a client.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
