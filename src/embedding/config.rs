use std::path::PathBuf;

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};
use crate::embedding::error::EmbeddingError;

/// Files expected inside a model directory.
pub const MODEL_CONFIG_FILE: &str = "config.json";
pub const MODEL_WEIGHTS_FILE: &str = "model.safetensors";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

#[derive(Debug, Clone)]
/// Configuration for the embedding backend.
pub struct EmbeddingConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: Option<PathBuf>,
    /// Max tokens per encoded chunk (longer input is truncated).
    pub max_seq_len: usize,
    /// Output dimension for the stub backend. The BERT backend reports its hidden size.
    pub embedding_dim: usize,
    /// If true, use the deterministic stub backend (no model files required).
    pub testing_stub: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl EmbeddingConfig {
    pub const ENV_MODEL_PATH: &'static str = "DOCMATCH_MODEL_PATH";

    /// Reads the model directory from `DOCMATCH_MODEL_PATH`; other fields take defaults.
    ///
    /// An unset or blank variable leaves `model_dir` empty, which [`validate`](Self::validate)
    /// rejects unless stubbing is enabled.
    pub fn from_env() -> Result<Self, EmbeddingError> {
        let model_dir = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            model_dir,
            ..Default::default()
        })
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            ..Default::default()
        }
    }

    /// Creates a stub config (deterministic feature-hashing embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Validates required fields for the selected mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            if self.embedding_dim == 0 {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "embedding_dim must be greater than zero".to_string(),
                });
            }
            return Ok(());
        }

        let model_dir = self.model_dir.as_ref().ok_or_else(|| EmbeddingError::InvalidConfig {
            reason: "model_dir is required (stubbing is disabled)".to_string(),
        })?;

        if !model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: model_dir.clone(),
            });
        }

        for file in [MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE, TOKENIZER_FILE] {
            let path = model_dir.join(file);
            if !path.is_file() {
                return Err(EmbeddingError::ModelLoadFailed {
                    reason: format!("missing {} in {}", file, model_dir.display()),
                });
            }
        }

        Ok(())
    }

    /// Returns `true` if every model file is present.
    pub fn model_available(&self) -> bool {
        self.model_dir.as_deref().is_some_and(|dir| {
            [MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE, TOKENIZER_FILE]
                .iter()
                .all(|file| dir.join(file).is_file())
        })
    }
}
