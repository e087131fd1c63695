//! Bounded cache of chunk embeddings.
//!
//! Keys are BLAKE3 digests of `(backend name, chunk text)`. Scoring one target against N
//! candidates encodes the target's chunks once instead of N times.

use std::sync::Arc;

use moka::sync::Cache;

use crate::constants::DEFAULT_EMBEDDING_CACHE_CAPACITY;
use crate::hashing::hash_scoped;

pub struct EmbeddingCache {
    entries: Cache<[u8; 32], Arc<Vec<f32>>>,
}

impl EmbeddingCache {
    /// Creates a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EMBEDDING_CACHE_CAPACITY)
    }

    /// Creates a cache holding at most `capacity` vectors.
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    pub fn get(&self, backend: &str, text: &str) -> Option<Arc<Vec<f32>>> {
        self.entries.get(&hash_scoped(backend, text))
    }

    pub fn insert(&self, backend: &str, text: &str, embedding: Arc<Vec<f32>>) {
        self.entries.insert(hash_scoped(backend, text), embedding);
    }

    pub fn contains(&self, backend: &str, text: &str) -> bool {
        self.entries.contains_key(&hash_scoped(backend, text))
    }

    /// Approximate entry count (moka applies writes lazily).
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for EmbeddingCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
