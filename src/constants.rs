//! Cross-cutting, shared constants.
//!
//! # Calibration
//!
//! [`SIMILARITY_THRESHOLD`] is tuned against the score distribution of the fused estimators,
//! including the non-log-scaled IDF of the custom TF-IDF tier. Changing either side shifts the
//! verdict boundary, so treat the pair as a unit.

/// Fused score at or above which a candidate is classified as similar.
pub const SIMILARITY_THRESHOLD: f64 = 0.5;

/// Decimal places kept when a score is presented to callers.
pub const SCORE_DECIMALS: i32 = 2;

/// Default chunk size for semantic chunking, in words.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between consecutive chunks, in words.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Output dimension of the MiniLM-class sentence encoders the BERT backend targets.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the encoder per chunk.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Default number of chunk embeddings kept in the embedding cache.
pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 4096;

/// Rounds a score to [`SCORE_DECIMALS`] places for presentation.
///
/// ```
/// use docmatch::constants::round_score;
///
/// assert_eq!(round_score(0.456), 0.46);
/// assert_eq!(round_score(1.0), 1.0);
/// ```
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (score * factor).round() / factor
}
