//! Structural cleanup applied until the text stops changing
//!
//! Removing one empty group can empty its parent or leave two commas side by
//! side, so the rules are re-run until a pass changes nothing. Every rule
//! either shortens the text or leaves it as is, which bounds the loop.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `()`, `[ ]`, `{}` plus any weight they carried
    static ref EMPTY_BRACKETS: Regex =
        Regex::new(r"(?:\(\s*\)|\[\s*\]|\{\s*\})(?::[\d.]+)?").expect("empty bracket pattern is valid");

    /// `(:1.2)` and friends
    static ref WEIGHT_ONLY_BRACKETS: Regex = Regex::new(
        r"(?:\(\s*:[\d.]+\s*\)|\[\s*:[\d.]+\s*\]|\{\s*:[\d.]+\s*\})(?::[\d.]+)?"
    )
    .expect("weight-only bracket pattern is valid");

    static ref COMMA_RUNS: Regex = Regex::new(r",(?:\s*,)+").expect("comma run pattern is valid");
    static ref LEADING_COMMA: Regex = Regex::new(r"^\s*,\s*").expect("leading comma pattern is valid");
    static ref TRAILING_COMMA: Regex = Regex::new(r"\s*,\s*$").expect("trailing comma pattern is valid");
    static ref COMMA_AFTER_OPEN: Regex = Regex::new(r"([(\[{])\s*,").expect("open comma pattern is valid");
    static ref COMMA_BEFORE_CLOSE: Regex = Regex::new(r",\s*([)\]}])").expect("close comma pattern is valid");
}

/// One pass over every cleanup rule
fn cleanup_pass(text: &str) -> String {
    let text = EMPTY_BRACKETS.replace_all(text, "");
    let text = WEIGHT_ONLY_BRACKETS.replace_all(&text, "");
    let text = COMMA_RUNS.replace_all(&text, ",");
    let text = LEADING_COMMA.replace(&text, "");
    let text = TRAILING_COMMA.replace(&text, "");
    let text = COMMA_AFTER_OPEN.replace_all(&text, "$1");
    let text = COMMA_BEFORE_CLOSE.replace_all(&text, "$1");
    text.into_owned()
}

/// Remove empty groups, weight-only groups and stray commas
pub fn cleanup(text: &str) -> String {
    let mut current = text.to_string();
    let mut passes = 0usize;

    loop {
        let next = cleanup_pass(&current);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }

    tracing::trace!("Cleanup reached a fixed point after {} pass(es)", passes);
    current
}
