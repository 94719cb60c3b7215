//! String similarity primitives shared by the course matcher and the scorer.

use std::collections::HashSet;

/// Sørensen–Dice coefficient over character bigrams, whitespace ignored.
///
/// Symmetric, 1.0 for identical strings, 0.0 when the bigram sets are disjoint
/// or either side is shorter than two characters. The 0.4 course-match
/// threshold is calibrated against this exact measure.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b)
}

/// Jaccard index of the whitespace-separated token sets. Empty union → 0.0.
pub fn token_jaccard(a: &str, b: &str) -> f64 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    let union = tokens_a.union(&tokens_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_one() {
        assert_eq!(string_similarity("software developer", "software developer"), 1.0);
    }

    #[test]
    fn test_disjoint_bigrams_score_zero() {
        assert_eq!(string_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let ab = string_similarity("accountancy", "in accountancy");
        let ba = string_similarity("in accountancy", "accountancy");
        assert!((ab - ba).abs() < f64::EPSILON);
        // 10 shared bigrams out of 10 + 12
        assert!((ab - 20.0 / 22.0).abs() < 1e-9, "got {ab}");
    }

    #[test]
    fn test_similarity_ignores_whitespace() {
        assert_eq!(string_similarity("web developer", "webdeveloper"), 1.0);
    }

    #[test]
    fn test_single_character_scores_zero() {
        assert_eq!(string_similarity("a", "ab"), 0.0);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let j = token_jaccard("jr software developer", "software developer");
        assert!((j - 2.0 / 3.0).abs() < 1e-9, "got {j}");
    }

    #[test]
    fn test_jaccard_ignores_order_and_duplicates() {
        assert_eq!(token_jaccard("developer software", "software developer software"), 1.0);
    }

    #[test]
    fn test_jaccard_empty_union_is_zero() {
        assert_eq!(token_jaccard("", "   "), 0.0);
    }

    #[test]
    fn test_jaccard_disjoint_is_zero() {
        assert_eq!(token_jaccard("nurse", "developer"), 0.0);
    }
}
