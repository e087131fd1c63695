use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::MatchError;
use super::types::{MatchEntry, MatchReport};
use crate::scoring::{Candidate, MatchScorer};
use crate::store::{DocumentId, DocumentStore, HistoryRecord, HistorySink};

/// Runs match passes against a document store and records each outcome.
pub struct MatchService {
    documents: Arc<dyn DocumentStore>,
    history: Arc<dyn HistorySink>,
    scorer: MatchScorer,
}

impl std::fmt::Debug for MatchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchService")
            .field("scorer", &self.scorer)
            .finish_non_exhaustive()
    }
}

impl MatchService {
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        history: Arc<dyn HistorySink>,
        scorer: MatchScorer,
    ) -> Self {
        Self {
            documents,
            history,
            scorer,
        }
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    /// Ranks every other document of the source's owner by similarity to the source.
    ///
    /// Appends one history record per candidate. History failures are logged and do not fail
    /// the pass.
    pub fn compute_matches(&self, source_id: DocumentId) -> Result<MatchReport, MatchError> {
        let source = self
            .documents
            .fetch(source_id)?
            .ok_or(MatchError::DocumentNotFound { id: source_id })?;

        let others = self
            .documents
            .fetch_by_owner_excluding(&source.owner, source_id)?;

        debug!(
            source_id = %source_id,
            owner = %source.owner,
            candidates = others.len(),
            "Computing matches"
        );

        let candidates: Vec<Candidate<'_>> = others
            .iter()
            .map(|doc| Candidate::new(doc.id, &doc.content))
            .collect();
        let results = self.scorer.score_and_rank(&source.content, &candidates);

        for result in &results {
            let record =
                HistoryRecord::now(source_id, result.candidate_id, result.score, result.is_similar);
            if let Err(e) = self.history.append(record) {
                warn!(
                    source_id = %source_id,
                    candidate_id = %result.candidate_id,
                    error = %e,
                    "Failed to record match history"
                );
            }
        }

        let filenames: HashMap<DocumentId, &str> = others
            .iter()
            .map(|doc| (doc.id, doc.filename.as_str()))
            .collect();

        let matches: Vec<MatchEntry> = results
            .iter()
            .map(|result| MatchEntry {
                id: result.candidate_id,
                filename: filenames
                    .get(&result.candidate_id)
                    .map(|name| name.to_string())
                    .unwrap_or_default(),
                similarity: result.rounded_score(),
                is_similar: result.is_similar,
            })
            .collect();

        let report = MatchReport { matches };
        info!(
            source_id = %source_id,
            matches = report.matches.len(),
            similar = report.similar_count(),
            "Match pass complete"
        );

        Ok(report)
    }
}
