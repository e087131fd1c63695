use rayon::prelude::*;
use tracing::debug;

use crate::constants::SIMILARITY_THRESHOLD;
use crate::semantic::SemanticEstimator;
use crate::similarity::{cosine_tf, jaccard};

use super::types::{Candidate, ScoreBreakdown, SimilarityResult};

/// Scores candidates against a target and ranks them. Performs no I/O.
pub struct MatchScorer {
    semantic: SemanticEstimator,
    threshold: f64,
}

impl std::fmt::Debug for MatchScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchScorer")
            .field("semantic", &self.semantic)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl MatchScorer {
    pub fn new(semantic: SemanticEstimator) -> Self {
        Self {
            semantic,
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn semantic(&self) -> &SemanticEstimator {
        &self.semantic
    }

    /// Inclusive: a score equal to the threshold is similar.
    pub fn is_similar(&self, score: f64) -> bool {
        score >= self.threshold
    }

    pub fn breakdown(&self, target: &str, candidate: &str) -> ScoreBreakdown {
        ScoreBreakdown {
            lexical: jaccard(target, candidate),
            vector: cosine_tf(target, candidate),
            semantic: self.semantic.semantic_similarity(target, candidate),
        }
    }

    pub fn score_pair(&self, target: &str, candidate: &Candidate<'_>) -> SimilarityResult {
        let breakdown = self.breakdown(target, candidate.text);
        let score = breakdown.fused();

        debug!(
            candidate_id = %candidate.id,
            lexical = breakdown.lexical,
            vector = breakdown.vector,
            semantic = breakdown.semantic,
            score,
            "Candidate scored"
        );

        SimilarityResult {
            candidate_id: candidate.id,
            score,
            is_similar: self.is_similar(score),
            breakdown: Some(breakdown),
        }
    }

    /// Scores every candidate (in parallel) and returns them best first.
    ///
    /// Ties keep the order of `candidates`.
    pub fn score_and_rank(&self, target: &str, candidates: &[Candidate<'_>]) -> Vec<SimilarityResult> {
        if candidates.is_empty() {
            debug!("No candidates to score");
            return Vec::new();
        }

        let mut results: Vec<SimilarityResult> = candidates
            .par_iter()
            .map(|candidate| self.score_pair(target, candidate))
            .collect();

        rank(&mut results);

        debug!(
            candidates = results.len(),
            similar = results.iter().filter(|r| r.is_similar).count(),
            top_score = results.first().map(|r| r.score),
            "Candidates ranked"
        );

        results
    }
}

/// Sorts by descending score. Stable, so equal scores keep their current order.
pub fn rank(results: &mut [SimilarityResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}
