//! Keyword set built from the user's filter-word list

use std::collections::HashSet;

/// Separator between entries of the filter-word list
pub const SEPARATOR: char = ',';

/// Lowercased, trimmed keywords that should be removed from a prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: HashSet<String>,
}

impl KeywordSet {
    /// Parse a comma separated filter-word list
    ///
    /// Entries are trimmed and lowercased; empty entries are dropped, so
    /// `""`, `"  "` and `", ,"` all yield an empty set.
    pub fn parse(filter_words: &str) -> Self {
        filter_words.split(SEPARATOR).collect()
    }

    /// Check whether an already normalized keyword is in the set
    pub fn contains(&self, keyword: &str) -> bool {
        self.words.contains(keyword)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }
}
