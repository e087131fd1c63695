use super::*;
use std::collections::BTreeMap;

mod jaccard_tests {
    use super::*;

    #[test]
    fn test_jaccard_identical() {
        assert_eq!(jaccard("the quick brown fox", "the quick brown fox"), 1.0);
    }

    #[test]
    fn test_jaccard_disjoint() {
        assert_eq!(jaccard("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        // {a, b, c} vs {b, c, d}: 2 / 4
        assert_eq!(jaccard("a b c", "b c d"), 0.5);
    }

    #[test]
    fn test_jaccard_ignores_case_punctuation_and_repeats() {
        assert_eq!(jaccard("Fox, fox FOX!", "fox"), 1.0);
    }

    #[test]
    fn test_jaccard_empty_inputs() {
        assert_eq!(jaccard("", "something"), 0.0);
        assert_eq!(jaccard("something", ""), 0.0);
        assert_eq!(jaccard("...", "!!!"), 0.0);
    }

    #[test]
    fn test_jaccard_is_symmetric() {
        let a = "the cat sat on the mat";
        let b = "a cat lay on a rug";
        assert_eq!(jaccard(a, b), jaccard(b, a));
    }
}

mod cosine_tf_tests {
    use super::*;

    #[test]
    fn test_cosine_tf_identical() {
        assert_eq!(cosine_tf("the quick brown fox", "the quick brown fox"), 1.0);
    }

    #[test]
    fn test_cosine_tf_identity_with_repeats() {
        let text = "one two two three three three";
        assert_eq!(cosine_tf(text, text), 1.0);
    }

    #[test]
    fn test_cosine_tf_disjoint() {
        assert_eq!(cosine_tf("alpha beta gamma", "delta epsilon zeta"), 0.0);
    }

    #[test]
    fn test_cosine_tf_order_independent() {
        assert_eq!(cosine_tf("a b c", "c b a"), 1.0);
    }

    #[test]
    fn test_cosine_tf_known_value() {
        // [1, 1] vs [1, 0] over {a, b}: 1 / sqrt(2)
        let score = cosine_tf("a b", "a");
        assert!((score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_tf_empty_inputs() {
        assert_eq!(cosine_tf("", "text"), 0.0);
        assert_eq!(cosine_tf("text", "   "), 0.0);
    }

    #[test]
    fn test_cosine_tf_is_symmetric() {
        let a = "to be or not to be that is the question";
        let b = "the question is whether to be";
        assert_eq!(cosine_tf(a, b), cosine_tf(b, a));
    }
}

mod helper_tests {
    use super::*;

    #[test]
    fn test_term_frequencies_counts() {
        let counts = term_frequencies("a b a c a".split_whitespace());
        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.get("c"), Some(&1));
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sparse_cosine_zero_vector() {
        let a: BTreeMap<&str, f64> = BTreeMap::from([("x", 0.0)]);
        let b: BTreeMap<&str, f64> = BTreeMap::from([("x", 1.0)]);
        assert_eq!(sparse_cosine(&a, &b), 0.0);
    }

    #[test]
    fn test_dense_cosine_basic() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert!((cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dense_cosine_degenerate() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }
}
