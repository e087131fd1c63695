//! Test fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use docmatch::embedding::{EmbeddingRuntime, StubEmbedder};
use docmatch::scoring::MatchScorer;
use docmatch::semantic::{EmbeddingEstimator, SemanticEstimator, SemanticTier};
use docmatch::service::MatchService;
use docmatch::store::{DocumentId, MemoryDocumentStore, MemoryHistoryLog};

pub const DEFAULT_OWNER: &str = "ana";

pub const STUB_EMBEDDING_DIM: usize = 384;

pub const ESSAY_ORIGINAL: &str = "Ownership is Rust's most unique feature. It enables memory \
    safety guarantees without needing a garbage collector. Each value has a single owner. \
    When the owner goes out of scope, the value is dropped.";

pub const ESSAY_PARAPHRASE: &str = "Rust's most distinctive feature is ownership. Memory safety \
    is guaranteed without a garbage collector. Every value has exactly one owner. Values are \
    dropped once their owner leaves scope.";

pub const ESSAY_UNRELATED: &str = "Sourdough bread needs a lively starter. Feed it flour and \
    water daily. Bake at a high temperature for a crisp crust.";

/// Builds a [`MemoryDocumentStore`] with sequential ids.
#[derive(Default)]
pub struct CorpusBuilder {
    documents: Vec<(String, String, String)>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(mut self, filename: &str, content: &str) -> Self {
        self.documents
            .push((DEFAULT_OWNER.to_string(), filename.to_string(), content.to_string()));
        self
    }

    pub fn owned_document(mut self, owner: &str, filename: &str, content: &str) -> Self {
        self.documents
            .push((owner.to_string(), filename.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> Arc<MemoryDocumentStore> {
        let store = MemoryDocumentStore::new();
        for (owner, filename, content) in self.documents {
            store.insert(owner, filename, content);
        }
        Arc::new(store)
    }
}

/// Three essays: original (id 1), paraphrase (id 2), unrelated (id 3).
pub fn essay_corpus() -> Arc<MemoryDocumentStore> {
    CorpusBuilder::new()
        .document("original.txt", ESSAY_ORIGINAL)
        .document("paraphrase.txt", ESSAY_PARAPHRASE)
        .document("unrelated.txt", ESSAY_UNRELATED)
        .build()
}

pub fn stub_runtime() -> Arc<EmbeddingRuntime> {
    Arc::new(EmbeddingRuntime::with_backend(Arc::new(
        StubEmbedder::new(STUB_EMBEDDING_DIM).expect("non-zero dim"),
    )))
}

pub fn stub_semantic() -> SemanticEstimator {
    SemanticEstimator::for_tier(
        SemanticTier::Auto,
        Some(EmbeddingEstimator::new(stub_runtime())),
    )
}

pub fn fallback_semantic() -> SemanticEstimator {
    SemanticEstimator::fallback_only()
}

pub fn service_with(
    store: Arc<MemoryDocumentStore>,
    semantic: SemanticEstimator,
) -> (MatchService, Arc<MemoryHistoryLog>) {
    let history = Arc::new(MemoryHistoryLog::new());
    let service = MatchService::new(store, history.clone(), MatchScorer::new(semantic));
    (service, history)
}

pub fn ids(ids: &[u64]) -> Vec<DocumentId> {
    ids.iter().copied().map(DocumentId).collect()
}

/// `count` sentences of five words each, every sentence distinct.
pub fn numbered_sentences(count: usize) -> String {
    (0..count)
        .map(|i| format!("Sentence{} has exactly five words.", i))
        .collect::<Vec<_>>()
        .join(" ")
}
