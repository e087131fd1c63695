//! Bag-of-words fallbacks for when no embedding backend is usable.
//!
//! Both tiers fit on the two-document corpus `{a, b}` only, so "rare" means "appears in just
//! one of the pair".

use std::collections::BTreeMap;

use super::error::SemanticError;
use super::estimator::Estimator;
use crate::similarity::{sparse_cosine, term_frequencies};
use crate::text::normalize_light;

/// Corpus size for a pairwise fit.
const PAIR_DOCS: f64 = 2.0;

/// Standard TF-IDF cosine.
///
/// - tokens are whitespace-separated runs of at least two word characters
/// - `idf = ln((1 + n) / (1 + df)) + 1` (smoothed)
/// - raw counts times idf, compared by cosine (equivalent to L2-normalizing each vector and
///   taking the dot product)
///
/// Fails with [`SemanticError::EmptyVocabulary`] when neither document has a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfEstimator;

impl TfIdfEstimator {
    pub fn new() -> Self {
        Self
    }

    fn tokens(text: &str) -> impl Iterator<Item = &str> {
        text.split_whitespace()
            .filter(|token| token.chars().count() >= 2)
    }

    fn smoothed_idf(df: usize) -> f64 {
        ((1.0 + PAIR_DOCS) / (1.0 + df as f64)).ln() + 1.0
    }

    fn weights<'a>(
        own: &BTreeMap<&'a str, usize>,
        other: &BTreeMap<&'a str, usize>,
    ) -> BTreeMap<&'a str, f64> {
        own.iter()
            .map(|(&term, &count)| {
                let df = 1 + usize::from(other.contains_key(term));
                (term, count as f64 * Self::smoothed_idf(df))
            })
            .collect()
    }
}

impl Estimator for TfIdfEstimator {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn estimate(&self, a: &str, b: &str) -> Result<f64, SemanticError> {
        let norm_a = normalize_light(a);
        let norm_b = normalize_light(b);

        let tf_a = term_frequencies(Self::tokens(&norm_a));
        let tf_b = term_frequencies(Self::tokens(&norm_b));

        if tf_a.is_empty() && tf_b.is_empty() {
            return Err(SemanticError::EmptyVocabulary);
        }

        let weights_a = Self::weights(&tf_a, &tf_b);
        let weights_b = Self::weights(&tf_b, &tf_a);

        Ok(sparse_cosine(&weights_a, &weights_b))
    }
}

/// Dependency-free TF-IDF used as the last resort.
///
/// `tf = count / doc_length` (length 1 for an empty document) and `idf = 1 / df` where `df` is
/// 1 or 2. The idf is deliberately not log-scaled, so shared terms are down-weighted by half
/// rather than to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomTfIdfEstimator;

impl CustomTfIdfEstimator {
    pub fn new() -> Self {
        Self
    }

    fn weights<'a>(
        own: &BTreeMap<&'a str, usize>,
        other: &BTreeMap<&'a str, usize>,
    ) -> BTreeMap<&'a str, f64> {
        let doc_length = own.values().sum::<usize>().max(1) as f64;

        own.iter()
            .map(|(&term, &count)| {
                let df = 1 + usize::from(other.contains_key(term));
                let idf = 1.0 / df as f64;
                (term, (count as f64 / doc_length) * idf)
            })
            .collect()
    }
}

impl Estimator for CustomTfIdfEstimator {
    fn name(&self) -> &'static str {
        "custom_tfidf"
    }

    fn estimate(&self, a: &str, b: &str) -> Result<f64, SemanticError> {
        let tf_a = term_frequencies(a.split_whitespace());
        let tf_b = term_frequencies(b.split_whitespace());

        let weights_a = Self::weights(&tf_a, &tf_b);
        let weights_b = Self::weights(&tf_b, &tf_a);

        Ok(sparse_cosine(&weights_a, &weights_b))
    }
}
