//! Embedding backends.
//!
//! - [`EmbeddingBackend`] is the capability the semantic estimator's top tier needs.
//! - [`EmbeddingRuntime`] owns the process-wide backend and initializes it at most once.
//! - [`BertEmbedder`] runs a sentence-transformers BERT checkpoint on candle.
//! - [`StubEmbedder`] is a deterministic stand-in for tests and model-less runs.

mod backend;
/// BERT sentence encoder.
pub mod bert;
/// Chunk-embedding cache.
pub mod cache;
/// Backend configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Feature-hashing stub backend.
pub mod stub;
/// Tokenizer loading and vector helpers.
pub mod utils;

#[cfg(test)]
mod tests;

pub use backend::{EmbeddingBackend, EmbeddingRuntime};
pub use bert::BertEmbedder;
pub use cache::EmbeddingCache;
pub use config::EmbeddingConfig;
pub use error::EmbeddingError;
pub use stub::StubEmbedder;
