use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-empty, upper-cased word ready for searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchWord {
    letters: Vec<char>,
}

impl SearchWord {
    /// Upper-case `raw`. Returns `None` for empty input; that is "not found", not an error.
    pub fn new(raw: &str) -> Option<Self> {
        let letters: Vec<char> = raw.chars().flat_map(char::to_uppercase).collect();
        if letters.is_empty() {
            None
        } else {
            Some(Self { letters })
        }
    }

    #[inline]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    pub fn first(&self) -> char {
        self.letters[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Never true for a constructed word.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for SearchWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}
