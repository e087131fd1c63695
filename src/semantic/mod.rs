//! Semantic similarity with tiered fallback.
//!
//! | Tier | Needs | Input |
//! |------|-------|-------|
//! | [`EmbeddingEstimator`] | an embedding backend | trimmed original text, chunked |
//! | [`TfIdfEstimator`] | nothing | heavy-normalized text |
//! | [`CustomTfIdfEstimator`] | nothing | heavy-normalized text |
//!
//! [`SemanticEstimator`] walks the chain selected by [`SemanticTier`] and returns the first
//! score a tier produces.

mod cascade;
mod embedding_tier;
mod error;
mod estimator;
mod tfidf;
mod tier;


pub use cascade::SemanticEstimator;
pub use embedding_tier::EmbeddingEstimator;
pub use error::SemanticError;
pub use estimator::{Estimator, TierInput};
pub use tfidf::{CustomTfIdfEstimator, TfIdfEstimator};
pub use tier::SemanticTier;
