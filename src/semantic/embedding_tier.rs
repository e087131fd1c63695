//! Chunked embedding similarity.
//!
//! Both documents are chunked, every chunk is encoded, and the score is the best cosine over
//! the full cross-product of chunk pairs. One closely matching excerpt is enough to flag the
//! pair.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::error::SemanticError;
use super::estimator::{Estimator, TierInput};
use crate::chunking::ChunkerConfig;
use crate::embedding::{EmbeddingBackend, EmbeddingCache, EmbeddingError, EmbeddingRuntime};
use crate::similarity::cosine_similarity;

pub struct EmbeddingEstimator {
    runtime: Arc<EmbeddingRuntime>,
    chunker: ChunkerConfig,
    cache: EmbeddingCache,
    encode_timeout: Option<Duration>,
}

impl std::fmt::Debug for EmbeddingEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingEstimator")
            .field("runtime", &self.runtime)
            .field("chunker", &self.chunker)
            .field("cache", &self.cache)
            .field("encode_timeout", &self.encode_timeout)
            .finish()
    }
}

impl EmbeddingEstimator {
    pub fn new(runtime: Arc<EmbeddingRuntime>) -> Self {
        Self {
            runtime,
            chunker: ChunkerConfig::default(),
            cache: EmbeddingCache::new(),
            encode_timeout: None,
        }
    }

    pub fn with_chunker(mut self, chunker: ChunkerConfig) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn with_cache(mut self, cache: EmbeddingCache) -> Self {
        self.cache = cache;
        self
    }

    /// Encode calls slower than `timeout` are discarded and reported as
    /// [`EmbeddingError::Timeout`]. The check runs after the call returns.
    pub fn with_encode_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.encode_timeout = timeout;
        self
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    /// Vectors for `chunks` in order. Cached chunks skip the backend; the rest go out as one
    /// batch.
    fn embed_chunks(
        &self,
        backend: &dyn EmbeddingBackend,
        chunks: &[String],
    ) -> Result<Vec<Arc<Vec<f32>>>, EmbeddingError> {
        let mut vectors: Vec<Option<Arc<Vec<f32>>>> = chunks
            .iter()
            .map(|chunk| self.cache.get(backend.name(), chunk))
            .collect();

        let misses: Vec<usize> = vectors
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.is_none().then_some(i))
            .collect();

        if !misses.is_empty() {
            let texts: Vec<&str> = misses.iter().map(|&i| chunks[i].as_str()).collect();
            let encoded = self.encode_with_deadline(backend, &texts)?;

            if encoded.len() != texts.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "backend returned {} vectors for {} inputs",
                        encoded.len(),
                        texts.len()
                    ),
                });
            }

            let expected = backend.embedding_dim();
            for (&i, vector) in misses.iter().zip(encoded) {
                if vector.len() != expected {
                    return Err(EmbeddingError::DimensionMismatch {
                        expected,
                        actual: vector.len(),
                    });
                }
                let vector = Arc::new(vector);
                self.cache
                    .insert(backend.name(), &chunks[i], Arc::clone(&vector));
                vectors[i] = Some(vector);
            }
        }

        debug!(
            chunks = chunks.len(),
            cache_hits = chunks.len() - misses.len(),
            "Chunk embeddings ready"
        );

        Ok(vectors.into_iter().flatten().collect())
    }

    fn encode_with_deadline(
        &self,
        backend: &dyn EmbeddingBackend,
        texts: &[&str],
    ) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let start = Instant::now();
        let encoded = backend.encode(texts)?;
        let elapsed = start.elapsed();

        if let Some(limit) = self.encode_timeout
            && elapsed > limit
        {
            return Err(EmbeddingError::Timeout {
                elapsed_ms: elapsed.as_millis(),
                limit_ms: limit.as_millis(),
            });
        }

        Ok(encoded)
    }
}

impl Estimator for EmbeddingEstimator {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn input(&self) -> TierInput {
        TierInput::Raw
    }

    fn estimate(&self, a: &str, b: &str) -> Result<f64, SemanticError> {
        let backend = self.runtime.backend().ok_or(EmbeddingError::Unavailable)?;

        let chunks_a = self.chunker.chunk(a);
        let chunks_b = self.chunker.chunk(b);

        let vectors_a = self.embed_chunks(backend.as_ref(), &chunks_a)?;
        let vectors_b = self.embed_chunks(backend.as_ref(), &chunks_b)?;

        // Starts at zero: anti-correlated pairs report 0, not a negative score.
        let mut best = 0.0f64;
        for va in &vectors_a {
            for vb in &vectors_b {
                best = best.max(f64::from(cosine_similarity(va, vb)));
            }
        }

        debug!(
            backend = backend.name(),
            chunks_a = chunks_a.len(),
            chunks_b = chunks_b.len(),
            score = best,
            "Embedding similarity computed"
        );

        Ok(best.min(1.0))
    }
}
