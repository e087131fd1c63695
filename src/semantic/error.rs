use thiserror::Error;

use crate::embedding::EmbeddingError;

/// A semantic tier could not produce a score.
///
/// Never surfaced to callers of [`SemanticEstimator`](super::SemanticEstimator): the cascade
/// logs it and moves to the next tier.
#[derive(Debug, Error)]
pub enum SemanticError {
    #[error("embedding tier failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("empty vocabulary: neither document contains an indexable term")]
    EmptyVocabulary,
}
