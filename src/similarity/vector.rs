use std::collections::BTreeMap;

use crate::text::normalize_light;

/// Term-frequency cosine similarity of `a` and `b` after light normalization.
pub fn cosine_tf(a: &str, b: &str) -> f64 {
    let norm_a = normalize_light(a);
    let norm_b = normalize_light(b);

    let tf_a = term_frequencies(norm_a.split_whitespace());
    let tf_b = term_frequencies(norm_b.split_whitespace());

    let weights_a: BTreeMap<&str, f64> = tf_a.iter().map(|(t, &c)| (*t, c as f64)).collect();
    let weights_b: BTreeMap<&str, f64> = tf_b.iter().map(|(t, &c)| (*t, c as f64)).collect();

    sparse_cosine(&weights_a, &weights_b)
}

/// Counts occurrences per term. Ordered so iteration (and summation) order is fixed.
pub fn term_frequencies<'a, I>(tokens: I) -> BTreeMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity of two sparse weight vectors keyed by term.
///
/// Missing terms weigh zero, so the dot product only visits shared terms; magnitudes cover
/// each side's own vocabulary. Returns `0.0` if either magnitude is zero. Clamped to `[0, 1]`.
pub fn sparse_cosine(a: &BTreeMap<&str, f64>, b: &BTreeMap<&str, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    let norm_a_sq: f64 = a.values().map(|w| w * w).sum();
    let norm_b_sq: f64 = b.values().map(|w| w * w).sum();

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return 0.0;
    }

    // sqrt(|a|² · |b|²) rather than |a| · |b|: exact when a == b, so self-similarity is 1.0.
    (dot / (norm_a_sq * norm_b_sq).sqrt()).clamp(0.0, 1.0)
}

/// Cosine similarity of two dense vectors.
///
/// Returns `0.0` for empty or mismatched lengths, or a zero-norm side. Not clamped: callers
/// decide how to treat negative similarity.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
            (dot + av * bv, na + av * av, nb + bv * bv)
        });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
