use std::sync::Arc;

use tracing::{debug, warn};

use super::embedding_tier::EmbeddingEstimator;
use super::estimator::{Estimator, TierInput};
use super::tfidf::{CustomTfIdfEstimator, TfIdfEstimator};
use super::tier::SemanticTier;
use crate::config::Config;
use crate::embedding::{EmbeddingCache, EmbeddingRuntime};
use crate::text::normalize_heavy;

/// Semantic similarity with graceful degradation.
///
/// Holds an ordered chain of [`Estimator`]s chosen once at construction. Each call tries the
/// tiers in order and returns the first score produced; failures are logged and skipped. If
/// every tier fails the score is `0.0`. Callers never see an error.
pub struct SemanticEstimator {
    tiers: Vec<Box<dyn Estimator>>,
}

impl std::fmt::Debug for SemanticEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticEstimator")
            .field("tiers", &self.tier_names())
            .finish()
    }
}

impl SemanticEstimator {
    /// Estimator over an explicit chain, tried in order.
    pub fn from_tiers(tiers: Vec<Box<dyn Estimator>>) -> Self {
        Self { tiers }
    }

    /// Builds the chain for `tier`. `embedding` is used only if `tier` allows it.
    pub fn for_tier(tier: SemanticTier, embedding: Option<EmbeddingEstimator>) -> Self {
        let mut tiers: Vec<Box<dyn Estimator>> = Vec::with_capacity(3);

        if tier.uses_embedding() {
            match embedding {
                Some(estimator) => tiers.push(Box::new(estimator)),
                None if tier == SemanticTier::Embedding => {
                    warn!("Embedding tier requested but no model configured; using TF-IDF fallback");
                }
                None => {}
            }
        }
        if tier.uses_tfidf() {
            tiers.push(Box::new(TfIdfEstimator::new()));
        }
        tiers.push(Box::new(CustomTfIdfEstimator::new()));

        Self { tiers }
    }

    /// Chain without an embedding tier: TF-IDF, then custom TF-IDF.
    pub fn fallback_only() -> Self {
        Self::for_tier(SemanticTier::Tfidf, None)
    }

    /// Builds the chain described by `config`, sharing `runtime` for the embedding tier.
    ///
    /// The embedding tier is included only when a model path is configured.
    pub fn from_config(config: &Config, runtime: Arc<EmbeddingRuntime>) -> Self {
        let embedding = (config.semantic_tier.uses_embedding() && config.model_path.is_some())
            .then(|| {
                EmbeddingEstimator::new(runtime)
                    .with_chunker(config.chunker_config())
                    .with_cache(EmbeddingCache::with_capacity(
                        config.embedding_cache_capacity,
                    ))
                    .with_encode_timeout(config.encode_timeout)
            });

        let estimator = Self::for_tier(config.semantic_tier, embedding);
        debug!(tiers = ?estimator.tier_names(), "Semantic tier chain selected");
        estimator
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Semantic similarity of `a` and `b` in `[0, 1]`.
    ///
    /// `0.0` if either text is blank, or empty once stopwords are removed.
    pub fn semantic_similarity(&self, a: &str, b: &str) -> f64 {
        let raw_a = a.trim();
        let raw_b = b.trim();
        if raw_a.is_empty() || raw_b.is_empty() {
            return 0.0;
        }

        let norm_a = normalize_heavy(raw_a);
        let norm_b = normalize_heavy(raw_b);
        if norm_a.is_empty() || norm_b.is_empty() {
            return 0.0;
        }

        for tier in &self.tiers {
            let (x, y) = match tier.input() {
                TierInput::Raw => (raw_a, raw_b),
                TierInput::Normalized => (norm_a.as_str(), norm_b.as_str()),
            };

            match tier.estimate(x, y) {
                Ok(score) if score.is_finite() => {
                    debug!(tier = tier.name(), score, "Semantic score");
                    return score.clamp(0.0, 1.0);
                }
                Ok(score) => {
                    warn!(tier = tier.name(), score, "Semantic tier returned non-finite score; falling back");
                }
                Err(e) => {
                    warn!(tier = tier.name(), error = %e, "Semantic tier unavailable; falling back");
                }
            }
        }

        0.0
    }
}

impl Default for SemanticEstimator {
    fn default() -> Self {
        Self::fallback_only()
    }
}
