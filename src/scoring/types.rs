use serde::Serialize;

use crate::constants::round_score;
use crate::store::DocumentId;

/// A document to be scored against a target.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub id: DocumentId,
    pub text: &'a str,
}

impl<'a> Candidate<'a> {
    pub fn new(id: DocumentId, text: &'a str) -> Self {
        Self { id, text }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Per-estimator scores for one pair, each in `[0, 1]`.
pub struct ScoreBreakdown {
    /// Jaccard overlap of token sets.
    pub lexical: f64,
    /// Term-frequency cosine.
    pub vector: f64,
    /// Semantic estimator score.
    pub semantic: f64,
}

impl ScoreBreakdown {
    /// Mean of the lexical and vector scores.
    pub fn basic(&self) -> f64 {
        (self.lexical + self.vector) / 2.0
    }

    /// `max(basic, semantic)`.
    pub fn fused(&self) -> f64 {
        self.basic().max(self.semantic)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Outcome of scoring one candidate.
pub struct SimilarityResult {
    pub candidate_id: DocumentId,
    /// Fused score, unrounded. Ranking uses this value.
    pub score: f64,
    pub is_similar: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl SimilarityResult {
    /// Score rounded for presentation.
    pub fn rounded_score(&self) -> f64 {
        round_score(self.score)
    }
}
