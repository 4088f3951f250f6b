//! Word statistics over page text

use crate::checker::stopwords::StopwordSet;
use crate::report::WordStats;
use std::collections::HashMap;

/// Counts words and finds the most frequent non-stopwords
///
/// `word_count` is the number of whitespace-delimited tokens before any
/// filtering. Tokens are then lowercased, stopwords are dropped, and the
/// `limit` most frequent words are returned. Ties keep the order in which
/// the words first appeared.
///
/// # Example
///
/// ```
/// use seo_checker::checker::{compute_word_stats, StopwordSet};
///
/// let stopwords = StopwordSet::from_words(["the"]);
/// let stats = compute_word_stats("the quick quick fox fox fox", &stopwords, 10);
/// assert_eq!(stats.word_count, 6);
/// assert_eq!(stats.common_words[0], ("fox".to_string(), 3));
/// ```
pub fn compute_word_stats(text: &str, stopwords: &StopwordSet, limit: usize) -> WordStats {
    let mut word_count = 0;

    // (word, count) in first-seen order, plus an index into it
    let mut frequencies: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in text.split_whitespace() {
        word_count += 1;

        let word = token.to_lowercase();
        if stopwords.contains(&word) {
            continue;
        }

        match positions.get(&word) {
            Some(&idx) => frequencies[idx].1 += 1,
            None => {
                positions.insert(word.clone(), frequencies.len());
                frequencies.push((word, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));
    frequencies.truncate(limit);

    WordStats {
        word_count,
        common_words: frequencies,
    }
}
