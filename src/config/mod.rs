//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DOCMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::chunking::ChunkerConfig;
use crate::constants::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_EMBEDDING_CACHE_CAPACITY};
use crate::embedding::EmbeddingConfig;
use crate::semantic::SemanticTier;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DOCMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Embedding model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    /// Without it the semantic estimator starts at the TF-IDF tier.
    pub model_path: Option<PathBuf>,

    /// Highest semantic tier to try. Default: `auto`.
    pub semantic_tier: SemanticTier,

    /// Chunk size in words for the embedding tier. Default: `1000`.
    pub chunk_size: usize,

    /// Words shared by consecutive chunks. Default: `200`.
    pub chunk_overlap: usize,

    /// Encode calls slower than this fall back to TF-IDF. Default: no deadline.
    pub encode_timeout: Option<Duration>,

    /// Max chunk embeddings kept in memory. Default: `4096`.
    pub embedding_cache_capacity: u64,

    /// Directory of documents loaded by the CLI. Default: `./data/documents`.
    pub documents_path: PathBuf,

    /// JSONL file receiving match history. Default: history is kept in memory only.
    pub history_path: Option<PathBuf>,

    /// Owner assigned to loaded documents. Default: `local`.
    pub owner: String,
}

/// Default documents directory used when `DOCMATCH_DOCUMENTS_PATH` is not set.
pub const DEFAULT_DOCUMENTS_PATH: &str = "./data/documents";

/// Default owner used when `DOCMATCH_OWNER` is not set.
pub const DEFAULT_OWNER: &str = "local";

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: None,
            semantic_tier: SemanticTier::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            encode_timeout: None,
            embedding_cache_capacity: DEFAULT_EMBEDDING_CACHE_CAPACITY,
            documents_path: PathBuf::from(DEFAULT_DOCUMENTS_PATH),
            history_path: None,
            owner: DEFAULT_OWNER.to_string(),
        }
    }
}

impl Config {
    const ENV_MODEL_PATH: &'static str = "DOCMATCH_MODEL_PATH";
    const ENV_SEMANTIC_TIER: &'static str = "DOCMATCH_SEMANTIC_TIER";
    const ENV_CHUNK_SIZE: &'static str = "DOCMATCH_CHUNK_SIZE";
    const ENV_CHUNK_OVERLAP: &'static str = "DOCMATCH_CHUNK_OVERLAP";
    const ENV_ENCODE_TIMEOUT_MS: &'static str = "DOCMATCH_ENCODE_TIMEOUT_MS";
    const ENV_EMBEDDING_CACHE_CAPACITY: &'static str = "DOCMATCH_EMBEDDING_CACHE_CAPACITY";
    const ENV_DOCUMENTS_PATH: &'static str = "DOCMATCH_DOCUMENTS_PATH";
    const ENV_HISTORY_PATH: &'static str = "DOCMATCH_HISTORY_PATH";
    const ENV_OWNER: &'static str = "DOCMATCH_OWNER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let semantic_tier = Self::parse_tier_from_env(defaults.semantic_tier)?;
        let chunk_size = Self::parse_chunk_size_from_env(defaults.chunk_size)?;
        let chunk_overlap = Self::parse_overlap_from_env(defaults.chunk_overlap)?;
        let encode_timeout = Self::parse_timeout_from_env()?;
        let embedding_cache_capacity = Self::parse_u64_from_env(
            Self::ENV_EMBEDDING_CACHE_CAPACITY,
            defaults.embedding_cache_capacity,
        );
        let documents_path =
            Self::parse_path_from_env(Self::ENV_DOCUMENTS_PATH, defaults.documents_path);
        let history_path = Self::parse_optional_path_from_env(Self::ENV_HISTORY_PATH);
        let owner = Self::parse_string_from_env(Self::ENV_OWNER, defaults.owner);

        Ok(Self {
            model_path,
            semantic_tier,
            chunk_size,
            chunk_overlap,
            encode_timeout,
            embedding_cache_capacity,
            documents_path,
            history_path,
            owner,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunker_config().validate().is_err() {
            return Err(ConfigError::InvalidChunkSize {
                value: self.chunk_size.to_string(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.documents_path.exists() && !self.documents_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.documents_path.clone(),
            });
        }

        if let Some(ref path) = self.history_path
            && path.is_dir()
        {
            return Err(ConfigError::NotAFile { path: path.clone() });
        }

        Ok(())
    }

    pub fn chunker_config(&self) -> ChunkerConfig {
        ChunkerConfig::new(self.chunk_size, self.chunk_overlap)
    }

    /// Embedding backend settings, or `None` when no model is configured.
    pub fn embedding_config(&self) -> Option<EmbeddingConfig> {
        self.model_path.clone().map(EmbeddingConfig::new)
    }

    fn parse_tier_from_env(default: SemanticTier) -> Result<SemanticTier, ConfigError> {
        match env::var(Self::ENV_SEMANTIC_TIER) {
            Ok(value) if !value.trim().is_empty() => value
                .parse()
                .map_err(|reason| ConfigError::InvalidSemanticTier { reason }),
            _ => Ok(default),
        }
    }

    fn parse_chunk_size_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_CHUNK_SIZE) {
            Ok(value) => {
                let size: usize =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::InvalidNumber {
                            name: Self::ENV_CHUNK_SIZE,
                            value: value.clone(),
                            source: e,
                        })?;

                if size == 0 {
                    return Err(ConfigError::InvalidChunkSize { value });
                }

                Ok(size)
            }
            Err(_) => Ok(default),
        }
    }

    /// Negative overlap means "no overlap".
    fn parse_overlap_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_CHUNK_OVERLAP) {
            Ok(value) => {
                let overlap: i64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::InvalidNumber {
                            name: Self::ENV_CHUNK_OVERLAP,
                            value: value.clone(),
                            source: e,
                        })?;

                if overlap < 0 {
                    warn!(overlap, "Negative chunk overlap clamped to 0");
                }

                Ok(usize::try_from(overlap.max(0)).unwrap_or(usize::MAX))
            }
            Err(_) => Ok(default),
        }
    }

    /// `0` or unset means no deadline.
    fn parse_timeout_from_env() -> Result<Option<Duration>, ConfigError> {
        match env::var(Self::ENV_ENCODE_TIMEOUT_MS) {
            Ok(value) => {
                let ms: u64 = value
                    .trim()
                    .parse()
                    .map_err(|e| ConfigError::InvalidNumber {
                        name: Self::ENV_ENCODE_TIMEOUT_MS,
                        value: value.clone(),
                        source: e,
                    })?;
                Ok((ms > 0).then(|| Duration::from_millis(ms)))
            }
            Err(_) => Ok(None),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}
