//! Deterministic feature-hashing embedder.
//!
//! Each light-normalized token is hashed into one of `embedding_dim` buckets with a hashed
//! sign, so cosine between stub vectors tracks term-frequency overlap. No model files needed.

use tracing::debug;

use super::backend::EmbeddingBackend;
use super::error::EmbeddingError;
use super::utils::l2_normalize;
use crate::hashing::hash_to_u64;
use crate::text::normalize_light;

#[derive(Debug, Clone)]
pub struct StubEmbedder {
    embedding_dim: usize,
}

impl StubEmbedder {
    pub fn new(embedding_dim: usize) -> Result<Self, EmbeddingError> {
        if embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }
        Ok(Self { embedding_dim })
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0f32; self.embedding_dim];

        for token in normalize_light(text).split_whitespace() {
            let hash = hash_to_u64(token.as_bytes());
            let bucket = (hash % self.embedding_dim as u64) as usize;
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        l2_normalize(&mut embedding);
        embedding
    }
}

impl EmbeddingBackend for StubEmbedder {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn embedding_dim(&self) -> usize {
        self.embedding_dim
    }

    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        debug!(count = texts.len(), "Generating stub embeddings");
        Ok(texts.iter().map(|text| self.embed_one(text)).collect())
    }
}
