use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Upper-case word list. Duplicates collapse; iteration is sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` (upper-cased). Returns `true` if it was not already present; blank input
    /// is ignored and returns `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> + '_ {
        self.words.iter()
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for w in iter {
            dict.insert(w.as_ref());
        }
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_normalises_and_reports_novelty() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("cat"));
        assert!(!dict.insert("CAT"));
        assert!(!dict.insert("   "));
        assert!(dict.contains("Cat"));
        assert_eq!(dict.len(), 1);
    }
}
