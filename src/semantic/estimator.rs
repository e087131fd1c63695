use super::error::SemanticError;

/// Which form of the input text a tier scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierInput {
    /// Trimmed original text. Sentence punctuation survives for chunking.
    Raw,
    /// Heavy-normalized text (lowercased, stopwords removed, stemmed).
    Normalized,
}

/// One semantic-similarity tier.
///
/// An `Err` means "this tier is unavailable for this pair"; the caller moves on to the next
/// tier. A returned score is expected in `[0, 1]` and is clamped by the caller regardless.
pub trait Estimator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Input form this tier expects.
    fn input(&self) -> TierInput {
        TierInput::Normalized
    }

    fn estimate(&self, a: &str, b: &str) -> Result<f64, SemanticError>;
}
