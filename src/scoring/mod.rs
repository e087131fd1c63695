//! Score fusion, verdicts and ranking.
//!
//! Each candidate gets three independent scores (lexical, vector, semantic). The lexical and
//! vector scores are averaged into a baseline, and the final score is the larger of the
//! baseline and the semantic score. A final score at or above
//! [`SIMILARITY_THRESHOLD`](crate::constants::SIMILARITY_THRESHOLD) marks the pair similar.

pub mod scorer;
pub mod types;


pub use scorer::{MatchScorer, rank};
pub use types::{Candidate, ScoreBreakdown, SimilarityResult};
