//! Document and history collaborators.
//!
//! [`DocumentStore`] and [`HistorySink`] are the seams the match service depends on. The
//! in-memory and JSONL implementations back the CLI and the tests.

pub mod error;
mod jsonl;
mod memory;
mod traits;
mod types;


pub use error::{StoreError, StoreResult};
pub use jsonl::JsonlHistoryLog;
pub use memory::{MemoryDocumentStore, MemoryHistoryLog};
pub use traits::{DocumentStore, HistorySink};
pub use types::{Document, DocumentId, HistoryRecord, HistorySummary};
