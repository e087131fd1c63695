use std::collections::BTreeSet;

use crate::text::normalize_light;

/// Jaccard set-overlap similarity of the light-normalized token sets of `a` and `b`.
///
/// Returns `0.0` if either side has no tokens.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let norm_a = normalize_light(a);
    let norm_b = normalize_light(b);

    let set_a: BTreeSet<&str> = norm_a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = norm_b.split_whitespace().collect();

    jaccard_sets(&set_a, &set_b)
}

/// |A ∩ B| / |A ∪ B| over pre-built token sets.
pub fn jaccard_sets(set_a: &BTreeSet<&str>, set_b: &BTreeSet<&str>) -> f64 {
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    (intersection as f64 / union as f64).clamp(0.0, 1.0)
}
