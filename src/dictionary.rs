//! Word-frequency dictionaries built from raw text corpora.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;

/// A frequency dictionary mapping normalized words to their occurrence
/// counts in a training corpus.
///
/// The dictionary is built in a single pass over the corpus and is
/// read-only afterwards. Every key is non-empty and contains only the
/// lowercase ASCII letters `a`-`z`; normalization happens during
/// construction, never at lookup time.
#[derive(Debug, Clone, Default)]
pub struct FrequencyDictionary {
    /// Words and their occurrence counts
    counts: AHashMap<String, u64>,
    /// Sum of all counts, cached for probability calculations
    total: u64,
}

impl FrequencyDictionary {
    /// Build a dictionary from a corpus of text.
    ///
    /// Normalization lowercases the input, deletes every character outside
    /// `[a-z ]` (punctuation, digits and newlines vanish), and splits the
    /// remainder on spaces. Each surviving token contributes one occurrence.
    pub fn from_corpus(text: &str) -> Self {
        let normalized: String = text
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| c.is_ascii_lowercase() || *c == ' ')
            .collect();

        let mut counts = AHashMap::new();
        let mut total = 0u64;

        for token in normalized.split(' ') {
            if token.is_empty() {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
            total += 1;
        }

        FrequencyDictionary { counts, total }
    }

    /// Build a dictionary from a corpus file.
    ///
    /// Reading the file is the only failure mode of this constructor.
    pub fn from_corpus_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_corpus(&text))
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Get the occurrence count of a word, or 0 if absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Get the probability of a word (count / total count).
    pub fn probability(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(word) as f64 / self.total as f64
    }

    /// Get the number of unique words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the total number of word occurrences in the corpus.
    pub fn total_count(&self) -> u64 {
        self.total
    }

    /// Get the most frequent words, highest count first.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut word_counts: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        // Break count ties alphabetically so the output is stable
        word_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        word_counts.truncate(limit);
        word_counts
    }

    /// Iterate over all words and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_corpus_counts() {
        let corpus = "the quick brown fox jumps over the lazy dog the dog";
        let dict = FrequencyDictionary::from_corpus(corpus);

        assert!(dict.contains("the"));
        assert!(dict.contains("quick"));
        assert_eq!(dict.count("the"), 3);
        assert_eq!(dict.count("dog"), 2);
        assert_eq!(dict.count("quick"), 1);
        assert_eq!(dict.count("cat"), 0);
        assert_eq!(dict.len(), 8);
        assert_eq!(dict.total_count(), 11);
    }

    #[test]
    fn test_normalization() {
        let dict = FrequencyDictionary::from_corpus("The THE the.");

        assert_eq!(dict.len(), 1);
        assert_eq!(dict.count("the"), 3);
        assert!(!dict.contains("The"));
    }

    #[test]
    fn test_non_letters_are_deleted_not_separators() {
        // Characters outside [a-z ] are removed outright, so digits and
        // punctuation glue their neighbors together instead of splitting them.
        let dict = FrequencyDictionary::from_corpus("don't co2unt 42 , ;");

        assert!(dict.contains("dont"));
        assert!(dict.contains("count"));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.total_count(), 2);
    }

    #[test]
    fn test_empty_corpus() {
        let dict = FrequencyDictionary::from_corpus("");
        assert!(dict.is_empty());
        assert_eq!(dict.total_count(), 0);

        let dict = FrequencyDictionary::from_corpus("123 !!! \n\n");
        assert!(dict.is_empty());
    }

    #[test]
    fn test_probability() {
        let dict = FrequencyDictionary::from_corpus("the the the fox");

        assert!((dict.probability("the") - 0.75).abs() < 1e-9);
        assert!((dict.probability("fox") - 0.25).abs() < 1e-9);
        assert_eq!(dict.probability("missing"), 0.0);

        let empty = FrequencyDictionary::from_corpus("");
        assert_eq!(empty.probability("the"), 0.0);
    }

    #[test]
    fn test_most_frequent() {
        let dict = FrequencyDictionary::from_corpus("a a a b b c");

        let top = dict.most_frequent(2);
        assert_eq!(top, vec![("a".to_string(), 3), ("b".to_string(), 2)]);

        let all = dict.most_frequent(100);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_from_corpus_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello world, hello!").unwrap();
        temp_file.flush().unwrap();

        let dict = FrequencyDictionary::from_corpus_file(temp_file.path()).unwrap();
        assert_eq!(dict.count("hello"), 2);
        assert_eq!(dict.count("world"), 1);
    }

    #[test]
    fn test_from_corpus_file_missing() {
        let result = FrequencyDictionary::from_corpus_file("/nonexistent/corpus.txt");
        assert!(result.is_err());
    }
}
