use std::fmt;
use std::str::FromStr;

/// Which semantic tiers a [`SemanticEstimator`](super::SemanticEstimator) may use.
///
/// Each value names the highest tier tried; lower tiers remain as fallbacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SemanticTier {
    /// Embedding when a model is configured, otherwise TF-IDF, then custom TF-IDF.
    #[default]
    Auto,
    /// Same chain as `Auto`, but a missing model is worth a warning.
    Embedding,
    /// TF-IDF, then custom TF-IDF.
    Tfidf,
    /// Custom TF-IDF only.
    Custom,
}

impl SemanticTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticTier::Auto => "auto",
            SemanticTier::Embedding => "embedding",
            SemanticTier::Tfidf => "tfidf",
            SemanticTier::Custom => "custom",
        }
    }

    /// Returns `true` if the chain starts with the embedding tier.
    pub fn uses_embedding(&self) -> bool {
        matches!(self, SemanticTier::Auto | SemanticTier::Embedding)
    }

    /// Returns `true` if the chain includes the standard TF-IDF tier.
    pub fn uses_tfidf(&self) -> bool {
        !matches!(self, SemanticTier::Custom)
    }
}

impl fmt::Display for SemanticTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SemanticTier::Auto),
            "embedding" => Ok(SemanticTier::Embedding),
            "tfidf" | "tf-idf" => Ok(SemanticTier::Tfidf),
            "custom" => Ok(SemanticTier::Custom),
            other => Err(format!(
                "unknown semantic tier '{}': expected auto, embedding, tfidf or custom",
                other
            )),
        }
    }
}
