//! Bundled English stopword set
//!
//! The list is the standard NLTK English corpus, compiled into the binary
//! so no download happens at runtime. A `StopwordSet` is built explicitly
//! and passed to the extractor.

use std::collections::HashSet;

/// NLTK English stopwords, all lowercase
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A set of lowercase words excluded from word-frequency analysis
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Creates the bundled English stopword set
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Creates a set from arbitrary words; entries are lowercased
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Adds more words to the set
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Returns true if `word` (already lowercase) is a stopword
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_set() {
        let set = StopwordSet::english();
        assert_eq!(set.len(), ENGLISH_STOPWORDS.len());
        assert!(set.contains("the"));
        assert!(set.contains("wouldn't"));
        assert!(!set.contains("fox"));
    }

    #[test]
    fn test_english_list_has_no_duplicates() {
        let unique: HashSet<_> = ENGLISH_STOPWORDS.iter().collect();
        assert_eq!(unique.len(), ENGLISH_STOPWORDS.len());
    }

    #[test]
    fn test_from_words_lowercases() {
        let set = StopwordSet::from_words(["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn test_with_extra() {
        let set = StopwordSet::english().with_extra(["Lorem", "ipsum"]);
        assert!(set.contains("lorem"));
        assert!(set.contains("ipsum"));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(StopwordSet::default().is_empty());
    }
}
