//! Output spacing normalization

use super::FilterOptions;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUNS: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
    static ref COMMA_SPACING: Regex = Regex::new(r"\s*,\s*").expect("comma spacing pattern is valid");
    static ref SPACE_AFTER_OPEN: Regex = Regex::new(r"([(\[{])\s+").expect("open spacing pattern is valid");
    static ref SPACE_BEFORE_CLOSE: Regex = Regex::new(r"\s+([)\]}])").expect("close spacing pattern is valid");

    static ref ADJACENT_GROUPS: Regex =
        Regex::new(r"([)\]}](?::[\d.]+)?)\s*([(\[{])").expect("adjacent group pattern is valid");
    static ref TERM_BEFORE_GROUP: Regex =
        Regex::new(r"([A-Za-z0-9])\s*([(\[{])").expect("term before group pattern is valid");
    static ref GROUP_BEFORE_TERM: Regex =
        Regex::new(r"([)\]}])\s*([A-Za-z0-9])").expect("group before term pattern is valid");
    // Weighted groups need whitespace before the term, or `:12` would split
    static ref WEIGHTED_GROUP_BEFORE_TERM: Regex =
        Regex::new(r"([)\]}]:[\d.]+)\s+([A-Za-z0-9])").expect("weighted group before term pattern is valid");
}

/// Normalize whitespace around commas and bracket delimiters
///
/// Whitespace runs become one space, every comma is followed by exactly one
/// space, and whitespace just inside brackets is removed. With
/// `separate_adjacent_groups` a `, ` is also inserted between neighbouring
/// groups and between a term and a group that touch without a comma.
pub fn normalize_spacing(text: &str, options: &FilterOptions) -> String {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let text = COMMA_SPACING.replace_all(&text, ", ");
    let text = SPACE_AFTER_OPEN.replace_all(&text, "$1");
    let mut text = SPACE_BEFORE_CLOSE.replace_all(&text, "$1").into_owned();

    if options.separate_adjacent_groups {
        text = ADJACENT_GROUPS.replace_all(&text, "$1, $2").into_owned();
        text = TERM_BEFORE_GROUP.replace_all(&text, "$1, $2").into_owned();
        text = GROUP_BEFORE_TERM.replace_all(&text, "$1, $2").into_owned();
        text = WEIGHTED_GROUP_BEFORE_TERM.replace_all(&text, "$1, $2").into_owned();
    }

    text.trim().to_string()
}
