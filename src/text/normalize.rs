use std::collections::HashSet;
use std::sync::LazyLock;

use rust_stemmers::{Algorithm, Stemmer};

use super::stopwords::ENGLISH_STOPWORDS;

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

static STEMMER: LazyLock<Stemmer> = LazyLock::new(|| Stemmer::create(Algorithm::English));

/// Normalization strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Punctuation strip, lowercase, whitespace collapse.
    #[default]
    Light,
    /// [`Normalization::Light`] plus stopword removal and stemming.
    Heavy,
}

/// Normalizes `text` at the requested strictness.
pub fn normalize(text: &str, level: Normalization) -> String {
    match level {
        Normalization::Light => normalize_light(text),
        Normalization::Heavy => normalize_heavy(text),
    }
}

/// Word characters: Unicode alphanumerics plus `_`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces non-word characters with spaces, lowercases, and collapses whitespace.
///
/// The output has no leading, trailing or repeated spaces, so splitting it on `' '` yields
/// the token sequence directly.
pub fn normalize_light(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if is_word_char(c) {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    out
}

/// Light normalization followed by stopword removal, short-token removal and stemming.
pub fn normalize_heavy(text: &str) -> String {
    let light = normalize_light(text);
    let mut out = String::with_capacity(light.len());

    for token in light.split_whitespace().filter(|t| keep_token(t)) {
        let stem = STEMMER.stem(token);
        if stem.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&stem);
    }

    out
}

/// Normalizes raw bytes (light). Invalid UTF-8 yields an empty string.
pub fn normalize_bytes(bytes: &[u8]) -> String {
    std::str::from_utf8(bytes)
        .map(normalize_light)
        .unwrap_or_default()
}

/// Returns `true` if `token` is in the stopword set.
#[inline]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

fn keep_token(token: &str) -> bool {
    let mut chars = token.chars();
    let longer_than_one = chars.next().is_some() && chars.next().is_some();
    longer_than_one && !is_stopword(token)
}
