//! Tests for the math-expression pass.

use speakable::SymbolRewriter;

fn en(text: &str) -> String {
    SymbolRewriter::new().transform(text, Some("en"))
}

// =========================================================================
// Multi-Character Operators
// =========================================================================

#[test]
fn greater_or_equal() {
    assert_eq!(en("50 >= 40"), "50 greater than or equal to 40");
}

#[test]
fn less_or_equal() {
    assert_eq!(en("x <= 10"), "x less than or equal to 10");
}

#[test]
fn not_equal() {
    assert_eq!(en("a != b"), "a not equal to b");
}

#[test]
fn double_equals() {
    assert_eq!(en("a == b"), "a equals b");
}

#[test]
fn russian_greater_or_equal() {
    let rewriter = SymbolRewriter::new();
    assert_eq!(
        rewriter.transform("50 >= 40", Some("ru")),
        "50 больше или равно 40"
    );
}

// =========================================================================
// Equations and Standalone Equals
// =========================================================================

#[test]
fn spaced_equation() {
    assert_eq!(en("x = 5"), "x equals 5");
}

#[test]
fn tight_equation() {
    assert_eq!(en("x=5"), "x equals 5");
}

#[test]
fn equation_with_word_operands() {
    assert_eq!(en("result = total"), "result equals total");
}

#[test]
fn standalone_equals_between_non_word_neighbors() {
    assert_eq!(en("( = )"), "( equals )");
}

#[test]
fn bare_equals_without_left_operand_is_untouched() {
    assert_eq!(en("=5"), "=5");
}

// =========================================================================
// Addition
// =========================================================================

#[test]
fn numeric_addition() {
    assert_eq!(en("2 + 3"), "2 plus 3");
    assert_eq!(en("2+3"), "2 plus 3");
}

#[test]
fn textual_plus_is_untouched() {
    assert_eq!(en("C++ is a language"), "C++ is a language");
}

// =========================================================================
// Percentages
// =========================================================================

#[test]
fn whole_percent() {
    assert_eq!(en("Score: 85%"), "Score: 85 percent");
}

#[test]
fn decimal_percent_keeps_the_integer_part() {
    assert_eq!(en("rate of 3.5% annually"), "rate of 3.5 percent annually");
}

#[test]
fn percent_sign_without_digits_is_untouched() {
    assert_eq!(en("100% sure, % alone stays"), "100 percent sure, % alone stays");
}

#[test]
fn russian_percent() {
    let rewriter = SymbolRewriter::new();
    assert_eq!(rewriter.transform("Скидка 20%", Some("ru")), "Скидка 20 процентов");
}
