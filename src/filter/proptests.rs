use super::*;
use proptest::prelude::*;

/// A single prompt term: lowercase words with inner spaces
fn term_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}( [a-z]{1,6})?".prop_map(|s| s)
}

/// Optional `:1.2` style weight
fn weight_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[0-2]\\.[0-9]".prop_map(|w| format!(":{w}"))]
}

/// Well-formed prompt with nested, possibly weighted groups
fn prompt_strategy() -> impl Strategy<Value = String> {
    let leaf = (term_strategy(), weight_strategy()).prop_map(|(term, weight)| format!("{term}{weight}"));
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            prop::collection::vec(inner, 1..4),
            prop_oneof![Just(('(', ')')), Just(('[', ']')), Just(('{', '}'))],
            weight_strategy(),
        )
            .prop_map(|(items, (open, close), weight)| format!("{open}{}{close}{weight}", items.join(", ")))
    })
}

/// Like [`prompt_strategy`] but siblings may be joined by a bare space
fn spaced_prompt_strategy() -> impl Strategy<Value = String> {
    let separator = || prop_oneof![Just(", "), Just(" "), Just("  ")];
    let leaf = (term_strategy(), weight_strategy()).prop_map(|(term, weight)| format!("{term}{weight}"));
    let tree = leaf.prop_recursive(3, 24, 4, move |inner| {
        (
            prop::collection::vec(inner, 1..4),
            separator(),
            prop_oneof![Just(('(', ')')), Just(('[', ']')), Just(('{', '}'))],
            weight_strategy(),
        )
            .prop_map(|(items, sep, (open, close), weight)| format!("{open}{}{close}{weight}", items.join(sep)))
    });
    (prop::collection::vec(tree, 1..5), separator()).prop_map(|(items, sep)| items.join(sep))
}

fn prompt_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prompt_strategy(), 1..5).prop_map(|items| items.join(", "))
}

proptest! {
    /// Cleanup applied to its own output changes nothing
    #[test]
    fn prop_cleanup_is_idempotent(text in "[a-c(),\\[\\]{}: .0-9]{0,40}") {
        let once = cleanup::cleanup(&text);
        prop_assert_eq!(cleanup::cleanup(&once), once);
    }

    /// Filtering never leaves empty groups, weight-only groups or stray commas
    #[test]
    fn prop_no_structural_residue(
        prompt in prompt_list_strategy(),
        words in prop::collection::vec(term_strategy(), 0..4)
    ) {
        let words = words.join(", ");
        let out = filter_prompt(&prompt, &words);
        if KeywordSet::parse(&words).is_empty() {
            prop_assert_eq!(out, prompt);
        } else {
            for residue in ["()", "[]", "{}", ",,", ", ,", "(,", "[,", "{,", ",)", ",]", ",}"] {
                prop_assert!(!out.contains(residue), "{:?} in {:?}", residue, out);
            }
            prop_assert!(!out.starts_with(','), "leading comma in {:?}", out);
            prop_assert!(!out.ends_with(','), "trailing comma in {:?}", out);
            for weight_only in ["(:", "[:", "{:"] {
                prop_assert!(!out.contains(weight_only), "weight-only group in {:?}", out);
            }
        }
    }

    /// An item is removed exactly when its keyword is in the filter list
    #[test]
    fn prop_exact_match_only(
        terms in prop::collection::vec(term_strategy(), 1..6),
        keyword in term_strategy()
    ) {
        let prompt = terms.join(", ");
        let out = filter_prompt(&prompt, &keyword);
        let expected: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|term| term.to_lowercase() != keyword)
            .collect();
        prop_assert_eq!(out, expected.join(", "));
    }

    /// Keywords match regardless of case and weight
    #[test]
    fn prop_case_and_weight_insensitive(
        keyword in term_strategy(),
        weight in weight_strategy()
    ) {
        prop_assume!(keyword != "keep");
        let prompt = format!("keep, {}{}", keyword.to_uppercase(), weight);
        prop_assert_eq!(filter_prompt(&prompt, &keyword), "keep");
    }

    /// A group survives iff something inside it survives
    #[test]
    fn prop_group_survival(
        terms in prop::collection::vec(term_strategy(), 1..4),
        weight in weight_strategy()
    ) {
        let keyword = terms[0].clone();
        prop_assume!(keyword != "anchor0");
        let prompt = format!("anchor0, ({}){}", terms.join(", "), weight);
        let out = filter_prompt(&prompt, &keyword);
        let survivors: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|term| *term != keyword)
            .collect();
        if survivors.is_empty() {
            prop_assert_eq!(out, "anchor0");
        } else {
            prop_assert_eq!(out, format!("anchor0, ({}){}", survivors.join(", "), weight));
        }
    }

    /// With nothing to remove, filtering only normalizes spacing
    #[test]
    fn prop_no_match_only_normalizes_spacing(
        prompt in spaced_prompt_strategy(),
        words in prop::collection::vec("q_[a-z]{1,5}", 1..4)
    ) {
        let out = filter_prompt(&prompt, &words.join(", "));
        prop_assert_eq!(out, spacing::normalize_spacing(&prompt, &FilterOptions::default()));
    }

    /// Empty prompt stays empty, empty filter list is a pass-through
    #[test]
    fn prop_round_trip_on_noop(prompt in ".{0,60}", words in ".{0,20}") {
        prop_assert_eq!(filter_prompt("", &words), "");
        prop_assert_eq!(filter_prompt(&prompt, ""), prompt);
    }
}
