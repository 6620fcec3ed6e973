//! Tokenization and ranking rules shared by the pipeline actors

use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of entries the pipeline reports
pub const TOP_N: usize = 25;

/// Shortest token that counts as a word
pub const MIN_WORD_LEN: usize = 2;

/// Anything outside ASCII letters and digits separates words, underscore included
static WORD_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("static separator pattern"));

/// Running word counts, iterated in first-insertion order
pub type WordCounts = IndexMap<String, u64>;

/// Final ranked result: word -> count, iterated from most to least frequent
pub type WordFrequencies = IndexMap<String, u64>;

/// Split a line into lowercase words, dropping blank and single-character tokens
pub fn tokenize(line: &str) -> Vec<String> {
    let lowered = line.to_lowercase();
    WORD_SEPARATOR
        .split(&lowered)
        .filter(|token| !token.trim().is_empty() && token.chars().count() >= MIN_WORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Increment the count for `word`, inserting it with 1 if absent
pub fn record(counts: &mut WordCounts, word: String) {
    *counts.entry(word).or_insert(0) += 1;
}

/// Sort by descending count and keep the first `limit` entries.
///
/// The sort is stable over the map's insertion order, so words with equal counts
/// keep the order in which they were first seen.
pub fn top(counts: &WordCounts, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts.iter().map(|(word, count)| (word.clone(), *count)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(limit);
    entries
}

/// Parse stop-word lines: every line is split on commas, tokens kept as loaded
pub fn parse_stop_words<I, S>(lines: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    lines
        .into_iter()
        .flat_map(|line| line.as_ref().split(',').map(str::to_string).collect::<Vec<_>>())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_on_non_word_characters() {
        let words = tokenize("Hello, World! snake_case it's 42nd");

        assert_eq!(words, vec!["hello", "world", "snake", "case", "it", "42nd"]);
    }

    #[test]
    fn test_tokenize_drops_short_and_symbol_only_tokens() {
        let words = tokenize("a I -- ... __ ok x");

        assert_eq!(words, vec!["ok"]);
    }

    #[test]
    fn test_tokenize_empty_line_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t").is_empty());
    }

    #[test]
    fn test_record_inserts_then_increments() {
        let mut counts = WordCounts::new();
        record(&mut counts, "cat".to_string());
        record(&mut counts, "dog".to_string());
        record(&mut counts, "cat".to_string());

        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&1));
    }

    #[test]
    fn test_top_breaks_ties_by_first_seen_order() {
        let mut counts = WordCounts::new();
        for word in ["cat", "sat", "mat", "dog", "sat"] {
            record(&mut counts, word.to_string());
        }

        let ranked = top(&counts, TOP_N);

        assert_eq!(
            ranked,
            vec![("sat".to_string(), 2), ("cat".to_string(), 1), ("mat".to_string(), 1), ("dog".to_string(), 1)]
        );
    }

    #[test]
    fn test_top_truncates_to_limit() {
        let mut counts = WordCounts::new();
        for i in 0..40u64 {
            for _ in 0..=i {
                record(&mut counts, format!("w{}", i));
            }
        }

        let ranked = top(&counts, TOP_N);

        assert_eq!(ranked.len(), TOP_N);
        assert_eq!(ranked[0], ("w39".to_string(), 40));
        assert_eq!(ranked[TOP_N - 1], ("w15".to_string(), 16));
    }

    #[test]
    fn test_parse_stop_words_splits_every_line_on_commas() {
        let stop_words = parse_stop_words(["a,able,about", "the,The"]);

        assert!(stop_words.contains("able"));
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("The"));
        assert_eq!(stop_words.len(), 5);
    }
}
