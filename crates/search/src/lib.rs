#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod classifier;
pub mod context;
pub mod filter;
pub mod fuzzy;
mod muscle;
pub mod rank;
pub mod score;
pub mod service;
pub mod synonym;

pub use classifier::{MovementClass, classify};
pub use context::{SportContext, SportSnapshot};
pub use filter::ExerciseFilter;
pub use fuzzy::{edit_distance, fuzzy_match};
pub use rank::{Ranker, ScoredResult};
pub use score::{Query, Searchable};
pub use service::{SearchConfig, SearchService};
pub use synonym::{ExpandedQuerySet, expand};

/// Upper bound for the number of characters considered from any input string.
pub const MAX_INPUT_LEN: usize = 256;

/// Trim, bound and lower-case a raw string.
#[must_use]
pub fn normalize(raw: &str) -> String {
    truncate(raw.trim(), MAX_INPUT_LEN).to_lowercase()
}

/// Split a normalized string into its whitespace-delimited tokens.
#[must_use]
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

pub(crate) fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prometheus_domain::{MAX_NAME_LEN, Name};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("  Back Squat ", "back squat")]
    #[case("KNIEBEUGE", "kniebeuge")]
    #[case("   ", "")]
    #[case("", "")]
    fn test_normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn test_normalize_bounds_length() {
        assert_eq!(normalize(&"ü".repeat(300)).chars().count(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_normalize_keeps_longest_name() {
        let name = Name::new(&"a".repeat(MAX_NAME_LEN)).unwrap().to_string();
        assert_eq!(normalize(&name), name);
    }

    #[rstest]
    #[case("back squat", &["back", "squat"])]
    #[case("  front   squat ", &["front", "squat"])]
    #[case("", &[])]
    fn test_tokenize(#[case] normalized: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(normalized), expected);
    }

    #[rstest]
    #[case("deadlift", 4, "dead")]
    #[case("deadlift", 8, "deadlift")]
    #[case("deadlift", 20, "deadlift")]
    #[case("bankdrücken", 7, "bankdrü")]
    fn test_truncate(#[case] value: &str, #[case] max_chars: usize, #[case] expected: &str) {
        assert_eq!(truncate(value, max_chars), expected);
    }
}
