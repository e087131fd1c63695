//! Text normalization.
//!
//! Two strictness levels are used by different estimators:
//!
//! - [`normalize_light`]: punctuation strip + lowercase + whitespace collapse. Used by the
//!   lexical and vector estimators.
//! - [`normalize_heavy`]: light, then English stopword removal, removal of single-character
//!   tokens, and Snowball stemming. Used by the TF-IDF tiers of the semantic estimator.
//!
//! Both are pure and deterministic.

mod normalize;
mod stopwords;


pub use normalize::{
    Normalization, is_stopword, is_word_char, normalize, normalize_bytes, normalize_heavy,
    normalize_light,
};
pub use stopwords::ENGLISH_STOPWORDS;
