//! Tests for the numbered-list pass.

use speakable::SymbolRewriter;

fn en(text: &str) -> String {
    SymbolRewriter::new().transform(text, Some("en"))
}

// =========================================================================
// Separator Policy
// =========================================================================

#[test]
fn period_marker_gets_point_prefix() {
    assert_eq!(en("3. Buy milk"), "Point 3. Buy milk");
}

#[test]
fn paren_marker_is_normalized_without_point() {
    assert_eq!(en("3) Buy milk"), "3. Buy milk");
}

#[test]
fn russian_point_word() {
    let rewriter = SymbolRewriter::new();
    assert_eq!(
        rewriter.transform("3. Купи молоко", Some("ru")),
        "Пункт 3. Купи молоко"
    );
}

// =========================================================================
// Line-Start Anchoring
// =========================================================================

#[test]
fn matches_on_every_line() {
    assert_eq!(
        en("1. First\n2. Second\n10) Third"),
        "Point 1. First\nPoint 2. Second\n10. Third"
    );
}

#[test]
fn mid_line_numbers_are_not_markers() {
    assert_eq!(en("see item 3. for details"), "see item 3. for details");
}

#[test]
fn decimal_numbers_survive() {
    assert_eq!(en("pi is 3.14 roughly"), "pi is 3.14 roughly");
}

// =========================================================================
// Digit-Run Boundary
// =========================================================================

#[test]
fn up_to_three_digits_match() {
    assert_eq!(en("123. item"), "Point 123. item");
}

#[test]
fn four_digit_runs_are_left_alone() {
    assert_eq!(en("1234. not a marker"), "1234. not a marker");
    assert_eq!(en("2024) year ref"), "2024) year ref");
}

#[test]
fn marker_without_trailing_text() {
    assert_eq!(en("7."), "Point 7.");
    assert_eq!(en("7)"), "7.");
}
