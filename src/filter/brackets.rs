//! Recursive filtering over `()`, `[]` and `{}` groups
//!
//! A group survives only if something inside it survives. Its weight suffix
//! (`(...):1.2`) is kept or dropped together with it.

use super::items::filter_items;
use super::keywords::KeywordSet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WEIGHT_SUFFIX: Regex = Regex::new(r"^:[\d.]+").expect("weight suffix pattern is valid");
}

/// The three bracket kinds of the prompt weighting syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Round,
    Square,
    Curly,
}

impl Bracket {
    pub fn from_open(byte: u8) -> Option<Self> {
        match byte {
            b'(' => Some(Bracket::Round),
            b'[' => Some(Bracket::Square),
            b'{' => Some(Bracket::Curly),
            _ => None,
        }
    }

    pub fn open(self) -> u8 {
        match self {
            Bracket::Round => b'(',
            Bracket::Square => b'[',
            Bracket::Curly => b'{',
        }
    }

    pub fn close(self) -> u8 {
        match self {
            Bracket::Round => b')',
            Bracket::Square => b']',
            Bracket::Curly => b'}',
        }
    }
}

/// Byte index of the bracket closing the one opened at `start`
///
/// Only brackets of the same kind affect the depth, so `(a]` never closes.
pub fn find_matching(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let bracket = Bracket::from_open(*bytes.get(start)?)?;

    let mut depth = 0usize;
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if byte == bracket.open() {
            depth += 1;
        } else if byte == bracket.close() {
            depth -= 1;
            if depth == 0 {
                return Some(start + offset);
            }
        }
    }
    None
}

/// Index of the next opening bracket at or after `start`, or `text.len()`
fn find_next_open(text: &str, start: usize) -> usize {
    text.as_bytes()[start..]
        .iter()
        .position(|&byte| Bracket::from_open(byte).is_some())
        .map_or(text.len(), |offset| start + offset)
}

/// Filter `text`, recursing into every well-formed bracket group
///
/// Unmatched opening brackets are emitted as literal characters. All bracket
/// characters are ASCII, so every slice boundary is a char boundary.
pub fn filter_groups(text: &str, keywords: &KeywordSet) -> String {
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let Some(bracket) = Bracket::from_open(text.as_bytes()[i]) else {
            let end = find_next_open(text, i);
            let segment = &text[i..end];
            if segment.trim().is_empty() {
                // Keeps "(a) (b)" from fusing into "(a)(b)"
                result.push(' ');
            } else {
                result.push_str(&filter_items(segment, keywords));
            }
            i = end;
            continue;
        };

        let Some(close) = find_matching(text, i) else {
            tracing::trace!("Unmatched '{}' at byte {}, keeping it literal", bracket.open() as char, i);
            result.push(bracket.open() as char);
            i += 1;
            continue;
        };

        let inner = &text[i + 1..close];
        let mut next = close + 1;
        let weight = WEIGHT_SUFFIX
            .find(&text[next..])
            .map_or("", |found| found.as_str());
        next += weight.len();

        let filtered = filter_groups(inner, keywords);
        if filtered.trim().is_empty() {
            tracing::trace!("Dropping emptied group '{}'", &text[i..next]);
        } else {
            result.push(bracket.open() as char);
            result.push_str(&filtered);
            result.push(bracket.close() as char);
            result.push_str(weight);
        }
        i = next;
    }

    result
}
