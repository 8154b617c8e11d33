//! Heuristic confidence scoring for extracted snippets

use tracing::debug;

/// Score returned when there is no snippet to judge
const DEFAULT_SCORE: f64 = 0.5;

/// Keywords whose presence raises the score
const KEYWORDS: [&str; 4] = ["precursor", "temperature", "ph", "method"];

/// Score the reliability of an extracted text snippet
///
/// Length-based heuristic: `min(0.9, chars / 1000)`, plus 0.1 when the
/// lowercased snippet mentions any synthesis keyword, capped at 1.0.
/// A missing snippet scores the 0.5 default; scoring never fails, so a
/// bad snippet can never abort the pipeline.
pub fn score(text_snippet: Option<&str>) -> f64 {
    let Some(snippet) = text_snippet else {
        return DEFAULT_SCORE;
    };

    let mut confidence = (snippet.chars().count() as f64 / 1000.0).min(0.9);

    let lowercased = snippet.to_lowercase();
    if KEYWORDS.iter().any(|keyword| lowercased.contains(keyword)) {
        confidence += 0.1;
    }

    let confidence = confidence.min(1.0);
    debug!(confidence, "Calculated confidence score");
    confidence
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_missing_snippet_defaults() {
        assert_eq!(score(None), 0.5);
    }

    #[test]
    fn test_empty_snippet_scores_zero() {
        assert_eq!(score(Some("")), 0.0);
    }

    #[test]
    fn test_length_based_score() {
        let snippet = "x".repeat(500);
        assert!((score(Some(&snippet)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_length_capped_at_point_nine() {
        let snippet = "x".repeat(5000);
        assert!((score(Some(&snippet)) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_bonus() {
        // 9 chars of "precursor" -> 0.009 length score + 0.1 bonus
        assert!((score(Some("precursor")) - 0.109).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let base = score(Some("heated in an autoclave"));
        let upper = score(Some("Heated to TEMPERATURE X"));
        assert!(upper > base);
    }

    #[test]
    fn test_long_snippet_with_keyword_is_exactly_one() {
        let snippet = format!("temperature {}", "x".repeat(2000));
        assert_eq!(score(Some(&snippet)), 1.0);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 500 degree signs are 1000 bytes but 500 chars
        let snippet = "°".repeat(500);
        assert!((score(Some(&snippet)) - 0.5).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_score_always_in_unit_interval(snippet in ".*") {
            let value = score(Some(&snippet));
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }
}
