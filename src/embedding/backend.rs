use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use super::bert::BertEmbedder;
use super::config::EmbeddingConfig;
use super::error::EmbeddingError;
use super::stub::StubEmbedder;

/// Maps text to fixed-length vectors.
///
/// Implementations are shared read-only across threads once initialized.
pub trait EmbeddingBackend: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Length of every vector returned by [`encode`](Self::encode).
    fn embedding_dim(&self) -> usize;

    /// Encodes each text into one vector, in input order.
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;
}

type BackendLoader =
    Box<dyn Fn() -> Result<Arc<dyn EmbeddingBackend>, EmbeddingError> + Send + Sync>;

/// Process-wide, lazily initialized embedding backend.
///
/// The loader runs at most once, on the first call to [`backend`](Self::backend); concurrent
/// first callers block until it finishes. A failed load is remembered as "unavailable" and
/// not retried for the lifetime of the runtime.
pub struct EmbeddingRuntime {
    loader: Option<BackendLoader>,
    backend: OnceLock<Option<Arc<dyn EmbeddingBackend>>>,
}

impl std::fmt::Debug for EmbeddingRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.backend.get() {
            None => "Uninitialized".to_string(),
            Some(None) => "Unavailable".to_string(),
            Some(Some(backend)) => format!("Ready({})", backend.name()),
        };
        f.debug_struct("EmbeddingRuntime")
            .field("state", &state)
            .finish()
    }
}

impl EmbeddingRuntime {
    /// Runtime whose backend is produced by `loader` on first use.
    pub fn lazy<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn EmbeddingBackend>, EmbeddingError> + Send + Sync + 'static,
    {
        Self {
            loader: Some(Box::new(loader)),
            backend: OnceLock::new(),
        }
    }

    /// Runtime that loads the backend described by `config` on first use.
    ///
    /// Stub configs produce a [`StubEmbedder`]; anything else loads a [`BertEmbedder`].
    pub fn from_config(config: EmbeddingConfig) -> Self {
        Self::lazy(move || load_backend(&config))
    }

    /// Runtime with an already-initialized backend.
    pub fn with_backend(backend: Arc<dyn EmbeddingBackend>) -> Self {
        Self {
            loader: None,
            backend: OnceLock::from(Some(backend)),
        }
    }

    /// Runtime that never provides a backend.
    pub fn unavailable() -> Self {
        Self {
            loader: None,
            backend: OnceLock::from(None),
        }
    }

    /// Returns the backend, initializing it on first call.
    pub fn backend(&self) -> Option<Arc<dyn EmbeddingBackend>> {
        self.backend.get_or_init(|| self.initialize()).clone()
    }

    /// Returns `true` once initialization has run (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.backend.get().is_some()
    }

    /// Returns `true` if a backend is (or becomes) available.
    pub fn is_available(&self) -> bool {
        self.backend().is_some()
    }

    fn initialize(&self) -> Option<Arc<dyn EmbeddingBackend>> {
        let loader = self.loader.as_ref()?;

        match loader() {
            Ok(backend) => {
                info!(
                    backend = backend.name(),
                    embedding_dim = backend.embedding_dim(),
                    "Embedding backend initialized"
                );
                Some(backend)
            }
            Err(e) => {
                warn!(error = %e, "Embedding backend unavailable; semantic scoring will fall back");
                None
            }
        }
    }
}

impl Default for EmbeddingRuntime {
    fn default() -> Self {
        Self::unavailable()
    }
}

fn load_backend(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingBackend>, EmbeddingError> {
    if config.testing_stub {
        warn!("Embedding backend running in STUB mode (testing only)");
        return Ok(Arc::new(StubEmbedder::new(config.embedding_dim)?));
    }

    Ok(Arc::new(BertEmbedder::load(config.clone())?))
}
