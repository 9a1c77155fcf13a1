//! Item-level filtering of bracket-free segments

use super::keywords::{KeywordSet, SEPARATOR};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `term:1.2` with the term captured; the weight travels with its term
    static ref WEIGHTED_ITEM: Regex =
        Regex::new(r"(?i)^(.+?):([\d.]+)$").expect("weighted item pattern is valid");
}

/// Matchable keyword of an item: trimmed, weight suffix stripped, lowercased
pub fn keyword_of(item: &str) -> String {
    let trimmed = item.trim();
    let term = WEIGHTED_ITEM
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |term| term.as_str());
    term.trim().to_lowercase()
}

/// Remove every comma separated item whose keyword is in `keywords`
///
/// Surviving items are re-joined untouched, blank items included; stray
/// commas left behind are the cleanup pass's job.
pub fn filter_items(segment: &str, keywords: &KeywordSet) -> String {
    segment
        .split(SEPARATOR)
        .filter(|item| {
            let keyword = keyword_of(item);
            let drop = !keyword.is_empty() && keywords.contains(&keyword);
            if drop {
                tracing::trace!("Dropping item '{}'", item.trim());
            }
            !drop
        })
        .collect::<Vec<_>>()
        .join(",")
}
