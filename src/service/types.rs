use serde::Serialize;

use crate::store::DocumentId;

/// One ranked match, as presented to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchEntry {
    pub id: DocumentId,
    pub filename: String,
    /// Fused score rounded to two decimals.
    pub similarity: f64,
    pub is_similar: bool,
}

/// `{"matches": [...]}`, best match first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchReport {
    pub matches: Vec<MatchEntry>,
}

impl MatchReport {
    pub fn similar_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_similar).count()
    }
}
