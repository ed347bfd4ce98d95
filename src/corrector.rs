//! Edit-distance based spelling correction over a frequency dictionary.

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::dictionary::FrequencyDictionary;

/// The fixed candidate alphabet: exactly the 26 lowercase ASCII letters.
const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Occurrence count of the suggested word in the dictionary.
    pub count: u64,
    /// Edit distance from the original word (0, 1 or 2).
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, count: u64, distance: usize) -> Self {
        Suggestion {
            word,
            count,
            distance,
        }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closer candidates come first, then higher counts, then the word
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A spelling corrector backed by a shared frequency dictionary.
///
/// The corrector borrows its dictionary read-only, so any number of
/// correctors (and threads) can share one dictionary once it is built.
pub struct Corrector<'a> {
    dict: &'a FrequencyDictionary,
}

impl<'a> Corrector<'a> {
    /// Create a new corrector over the given dictionary.
    pub fn new(dict: &'a FrequencyDictionary) -> Self {
        Corrector { dict }
    }

    /// Get the backing dictionary.
    pub fn dictionary(&self) -> &FrequencyDictionary {
        self.dict
    }

    /// Correct a single word.
    ///
    /// Known words are returned unchanged, even when a higher-frequency
    /// neighbor exists. Unknown words are replaced by the most frequent
    /// known candidate at edit distance 1, then at edit distance 2. A word
    /// with no known candidate within distance 2 is echoed back verbatim;
    /// this never fails and never invents a word outside the dictionary.
    pub fn correct(&self, word: &str) -> String {
        if self.dict.contains(word) {
            return word.to_string();
        }

        let edits = self.edits1(word);

        if let Some(best) = self.best_known(edits.iter().map(String::as_str)) {
            return best;
        }

        // Distance 2: re-edit every distance-1 candidate, filtering as we
        // go so the full cross product is never held in memory.
        let edits2 = edits.iter().flat_map(|e| self.edits1(e));
        if let Some(best) = self.best_known(edits2) {
            return best;
        }

        word.to_string()
    }

    /// Generate every string within edit distance 1 of `word`.
    ///
    /// Four candidate families: deletions, substitutions, insertions and
    /// adjacent transpositions, over the fixed 26-letter alphabet. The
    /// result is not deduplicated; the dictionary filter downstream makes
    /// duplicates harmless. For a word of length `n` this yields exactly
    /// `n + 26n + 26(n+1) + (n-1)` candidates (26 insertions when `n == 0`).
    pub fn edits1(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();
        let mut candidates = Vec::with_capacity(2 * len + 26 * (2 * len + 1));

        // Deletions
        for i in 0..len {
            let mut edited: String = chars[..i].iter().collect();
            edited.extend(&chars[i + 1..]);
            candidates.push(edited);
        }

        // Substitutions (the no-op where the letter matches is kept; it is
        // a harmless duplicate of the input and filtered like any other
        // unknown candidate)
        for i in 0..len {
            for c in ALPHABET {
                let mut edited: String = chars[..i].iter().collect();
                edited.push(c);
                edited.extend(&chars[i + 1..]);
                candidates.push(edited);
            }
        }

        // Insertions
        for i in 0..=len {
            for c in ALPHABET {
                let mut edited: String = chars[..i].iter().collect();
                edited.push(c);
                edited.extend(&chars[i..]);
                candidates.push(edited);
            }
        }

        // Transpositions
        for i in 0..len.saturating_sub(1) {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            candidates.push(swapped.into_iter().collect());
        }

        candidates
    }

    /// Filter a collection of candidate words to those in the dictionary.
    pub fn known<I, S>(&self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| self.dict.contains(w.as_ref()))
            .map(|w| w.as_ref().to_string())
            .collect()
    }

    /// Get ranked correction candidates for a word.
    ///
    /// An exact dictionary match short-circuits to a single distance-0
    /// entry. Otherwise candidates are collected at edit distance 1, or at
    /// distance 2 when no distance-1 candidate is known, sorted best-first
    /// and truncated to `limit`.
    pub fn suggestions(&self, word: &str, limit: usize) -> Vec<Suggestion> {
        if self.dict.contains(word) {
            return vec![Suggestion::new(word.to_string(), self.dict.count(word), 0)];
        }

        let edits = self.edits1(word);
        let (candidates, distance) = {
            let known1 = self.collect_known(edits.iter().map(String::as_str));
            if known1.is_empty() {
                let known2 = self.collect_known(edits.iter().flat_map(|e| self.edits1(e)));
                (known2, 2)
            } else {
                (known1, 1)
            }
        };

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .map(|(word, count)| Suggestion::new(word, count, distance))
            .collect();

        suggestions.sort();
        suggestions.truncate(limit);
        suggestions
    }

    /// Pick the best known candidate: maximum count, ties broken by the
    /// lexicographically greatest word so the result is deterministic.
    fn best_known<I, S>(&self, candidates: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut best: Option<(u64, String)> = None;

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let count = self.dict.count(candidate);
            if count == 0 {
                continue;
            }

            let better = match &best {
                None => true,
                Some((best_count, best_word)) => {
                    count > *best_count
                        || (count == *best_count && candidate > best_word.as_str())
                }
            };
            if better {
                best = Some((count, candidate.to_string()));
            }
        }

        best.map(|(_, word)| word)
    }

    /// Deduplicate known candidates into a word -> count map.
    fn collect_known<I, S>(&self, candidates: I) -> AHashMap<String, u64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut known = AHashMap::new();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let count = self.dict.count(candidate);
            if count > 0 {
                known.entry(candidate.to_string()).or_insert(count);
            }
        }
        known
    }
}
