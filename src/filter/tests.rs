//! End-to-end prompt filtering tests

use super::*;

fn check(prompt: &str, words: &str, expected: &str) {
    assert_eq!(filter_prompt(prompt, words), expected, "prompt: {prompt:?}, words: {words:?}");
}

#[test]
fn test_basic_filtering() {
    check(
        "beautiful girl, red, blue eyes, anime style",
        "red, blue",
        "beautiful girl, blue eyes, anime style",
    );
}

#[test]
fn test_case_insensitive_filtering() {
    check(
        "Beautiful Girl, RED, Blue Eyes, Anime Style",
        "red, blue",
        "Beautiful Girl, Blue Eyes, Anime Style",
    );
}

#[test]
fn test_no_substring_matches() {
    check("redhead, blue sky, greenery", "red, blue", "redhead, blue sky, greenery");
    check("bluish, orange, greenery", "red, blue", "bluish, orange, greenery");
}

#[test]
fn test_empty_inputs_pass_through() {
    assert_eq!(filter_prompt("", "red, blue"), "");
    assert_eq!(filter_prompt("test", ""), "test");
    // No normalization when nothing can be filtered
    assert_eq!(filter_prompt("  a ,b  ", ""), "  a ,b  ");
    assert_eq!(filter_prompt("  a ,b  ", " , "), "  a ,b  ");
}

#[test]
fn test_no_matches() {
    check("beautiful girl, anime style", "red, blue", "beautiful girl, anime style");
}

#[test]
fn test_all_filtered() {
    check("red, blue", "red, blue", "");
}

#[test]
fn test_preserves_spacing_inside_items() {
    check(
        "beautiful red girl, blue eyed cat, green tree, red, blue",
        "red, blue",
        "beautiful red girl, blue eyed cat, green tree",
    );
}

#[test]
fn test_simple_brackets() {
    check("(hi, I, am, a, girl)", "girl, hi", "(I, am, a)");
}

#[test]
fn test_nested_group_emptied() {
    check("(hi, I, am, a, (girl))", "girl, hi", "(I, am, a)");
}

#[test]
fn test_nested_group_with_content() {
    check("(hi, I, am, (a, girl))", "girl, hi", "(I, am, (a))");
}

#[test]
fn test_weight_on_surviving_group() {
    check(
        "((1girl, loli, a cute loli dancing on the street, nude, NSFW):1.2)",
        "nude, NSFW",
        "((1girl, loli, a cute loli dancing on the street):1.2)",
    );
}

#[test]
fn test_mixed_bracket_kinds() {
    check("[hi, I], {am, girl}, (a, test)", "girl, hi", "[I], {am}, (a, test)");
}

#[test]
fn test_sibling_group_emptied() {
    check("(girl, hi), (test, ok)", "girl, hi", "(test, ok)");
}

#[test]
fn test_weighted_keyword_in_weighted_group() {
    check(
        "((1girl, JK, a cute JK wearing serafuku dancing on the street, nude, (NSFW:1.1), black and white serafuku):1.2)",
        "nude, NSFW, loli",
        "((1girl, JK, a cute JK wearing serafuku dancing on the street, black and white serafuku):1.2)",
    );
}

#[test]
fn test_various_weight_formats() {
    check("(red:1.5), (blue:0.8), green, (yellow:2.0)", "red, blue", "green, (yellow:2.0)");
}

#[test]
fn test_every_weighted_group_removed() {
    check("(RED:1.5), (Blue:0.8), (NSFW:1.2)", "red, blue, nsfw", "");
}

#[test]
fn test_mixed_weighted_and_plain() {
    check(
        "beautiful girl, (red:1.5), blue eyes, (nude:0.8), anime style",
        "red, nude",
        "beautiful girl, blue eyes, anime style",
    );
}

#[test]
fn test_bare_weighted_item() {
    check("1girl, nsfw:1.4, solo", "nsfw", "1girl, solo");
}

#[test]
fn test_unmatched_brackets_are_literal() {
    check("(red, blue", "red", "(blue");
    check("smile, [blue, red", "red", "smile, [blue");
    check("a), red, b", "red", "a), b");
}

#[test]
fn test_whitespace_is_normalized_when_filtering() {
    check("a ,b,   c\n(d ,  e)", "x", "a, b, c (d, e)");
}

#[test]
fn test_literal_empty_structure_is_removed() {
    check("a, (), [:1.2], b,, c", "x", "a, b, c");
}

#[test]
fn test_separate_adjacent_groups_option() {
    let filter = PromptFilter::new("girl").options(FilterOptions {
        separate_adjacent_groups: true,
    });
    assert_eq!(filter.apply("(a, girl)(b)masterpiece"), "(a), (b), masterpiece");

    let plain = PromptFilter::new("girl");
    assert_eq!(plain.apply("(a, girl)(b)masterpiece"), "(a)(b)masterpiece");
}

#[test]
fn test_space_between_groups_is_kept() {
    check("(a) (b)", "x", "(a) (b)");
    check("masterpiece, (a) [b], c", "x", "masterpiece, (a) [b], c");
    check("(a, red) (b)", "red", "(a) (b)");
    check("(a) (red) {b}", "red", "(a) {b}");
}

#[test]
fn test_filter_is_reusable() {
    let filter = PromptFilter::new("red");
    assert_eq!(filter.keywords().len(), 1);
    assert_eq!(filter.apply("red, a"), "a");
    assert_eq!(filter.apply("b, (red)"), "b");
}
