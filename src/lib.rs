//! Document similarity scoring.
//!
//! Compares a target document against candidates with three independent estimators, fuses
//! their scores and ranks the candidates:
//!
//! - [`jaccard`]: token-set overlap after light normalization
//! - [`cosine_tf`]: term-frequency cosine after light normalization
//! - [`SemanticEstimator`]: chunked embedding similarity, degrading to TF-IDF when no
//!   embedding backend is usable
//!
//! [`MatchScorer`] combines them as `max(mean(lexical, vector), semantic)` and marks a pair
//! similar at or above [`SIMILARITY_THRESHOLD`]. [`MatchService`] runs a full match pass for
//! a stored document and records the outcome.
//!
//! ## Modules
//! - [`text`]: normalization (light and heavy)
//! - [`similarity`]: lexical and vector estimators
//! - [`chunking`]: sentence-bounded chunking
//! - [`embedding`]: embedding backends (candle BERT, stub) and the lazy runtime
//! - [`semantic`]: tiered semantic estimator
//! - [`scoring`]: fusion, verdict and ranking
//! - [`store`]: document store and history sinks
//! - [`service`]: `compute_matches`
//! - [`config`]: environment configuration

pub mod chunking;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod scoring;
pub mod semantic;
pub mod service;
pub mod similarity;
pub mod store;
pub mod text;

pub use chunking::{ChunkerConfig, ChunkingError, chunk};
pub use config::{Config, ConfigError};
pub use constants::{SIMILARITY_THRESHOLD, round_score};
pub use embedding::{
    BertEmbedder, EmbeddingBackend, EmbeddingCache, EmbeddingConfig, EmbeddingError,
    EmbeddingRuntime, StubEmbedder,
};
pub use hashing::{hash_scoped, hash_text, hash_to_u64};
pub use scoring::{Candidate, MatchScorer, ScoreBreakdown, SimilarityResult, rank};
pub use semantic::{
    CustomTfIdfEstimator, EmbeddingEstimator, Estimator, SemanticError, SemanticEstimator,
    SemanticTier, TfIdfEstimator,
};
pub use service::{ErrorBody, MatchEntry, MatchError, MatchReport, MatchService};
pub use similarity::{cosine_similarity, cosine_tf, jaccard};
pub use store::{
    Document, DocumentId, DocumentStore, HistoryRecord, HistorySink, HistorySummary,
    JsonlHistoryLog, MemoryDocumentStore, MemoryHistoryLog, StoreError,
};
pub use text::{normalize, normalize_bytes, normalize_heavy, normalize_light};
