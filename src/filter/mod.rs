//! Bracket-aware prompt keyword filtering
//!
//! Removes comma separated items that exactly match a filter list while
//! keeping the `()`, `[]`, `{}` grouping and `:1.2` weights of whatever
//! survives. The pipeline is:
//!
//! 1. [`KeywordSet::parse`] builds the lowercase keyword set
//! 2. [`brackets::filter_groups`] recurses through bracket groups, handing
//!    bracket-free segments to [`items::filter_items`]
//! 3. [`cleanup::cleanup`] removes emptied structure until nothing changes
//! 4. [`spacing::normalize_spacing`] makes the result readable again
//!
//! ```
//! use prompt_filter::filter_prompt;
//!
//! let filtered = filter_prompt("((1girl, nude, NSFW):1.2), solo", "nude, nsfw");
//! assert_eq!(filtered, "((1girl):1.2), solo");
//! ```

pub mod brackets;
pub mod cleanup;
pub mod items;
pub mod keywords;
pub mod spacing;

pub use keywords::KeywordSet;

use serde::{Deserialize, Serialize};

/// Formatting switches for the filter output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Insert `, ` between groups (or a term and a group) that touch
    /// without a separating comma
    #[serde(default)]
    pub separate_adjacent_groups: bool,
}

/// A compiled filter: keyword set plus output options
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    keywords: KeywordSet,
    options: FilterOptions,
}

impl PromptFilter {
    /// Create a filter from a comma separated filter-word list
    pub fn new(filter_words: &str) -> Self {
        Self::with_keywords(KeywordSet::parse(filter_words))
    }

    pub fn with_keywords(keywords: KeywordSet) -> Self {
        Self {
            keywords,
            options: FilterOptions::default(),
        }
    }

    pub fn options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Filter one prompt
    ///
    /// Empty prompts and empty keyword sets return the input untouched,
    /// without any spacing normalization.
    pub fn apply(&self, prompt: &str) -> String {
        if prompt.is_empty() || self.keywords.is_empty() {
            return prompt.to_string();
        }

        let filtered = brackets::filter_groups(prompt, &self.keywords);
        tracing::trace!("After bracket filtering: {:?}", filtered);

        let cleaned = cleanup::cleanup(&filtered);
        tracing::trace!("After cleanup: {:?}", cleaned);

        let result = spacing::normalize_spacing(&cleaned, &self.options);
        tracing::debug!(
            "Filtered prompt with {} keyword(s): {} -> {} chars",
            self.keywords.len(),
            prompt.len(),
            result.len()
        );
        result
    }
}

/// Filter `input_prompt` with a comma separated `filter_words` list
pub fn filter_prompt(input_prompt: &str, filter_words: &str) -> String {
    PromptFilter::new(filter_words).apply(input_prompt)
}

#[cfg(test)]
mod tests;

#[cfg(test)]
mod proptests;
