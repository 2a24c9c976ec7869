//! Math-expression pass.
//!
//! Runs after the list pass, so leading list numbers are already consumed.
//! Sub-steps run in a fixed order: multi-character comparison operators
//! first (a later `=` rule must not mangle `>=`), then equation-like
//! `left = right`, then standalone `=`, then numeric `+`, then percentages.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{PhraseTable, SymbolKey};

/// Word-character operands around `=`, e.g. `x=5` or `a = b`.
static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\s*=\s*(\w+)").expect("valid assignment pattern"));

/// A `=` with whitespace on both sides. The surroundings are captured and
/// kept because the regex engine has no look-around; the extra space next
/// to the phrase's own spacing is collapsed by the final cleanup.
static SPACED_EQUALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)=(\s)").expect("valid equals pattern"));

/// Numeric addition, digits on both sides. Textual `+` is untouched.
static ADDITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*\+\s*(\d+)").expect("valid addition pattern"));

/// Digits immediately followed by `%`.
static PERCENTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)%").expect("valid percentage pattern"));

/// Convert mathematical expressions to speakable text.
///
/// A bare `=` with no left operand and no surrounding whitespace (e.g.
/// `"=5"`) is deliberately left as-is: there is no sensible reading, and
/// widening the patterns would corrupt URL query strings and code-like
/// text.
pub(super) fn rewrite_math(text: &str, table: &PhraseTable) -> String {
    let equals = table.phrase(SymbolKey::Equals);

    // Multi-character operators first
    let result = text.replace(">=", table.phrase(SymbolKey::GreaterOrEqual));
    let result = result.replace("<=", table.phrase(SymbolKey::LessOrEqual));
    let result = result.replace("!=", table.phrase(SymbolKey::NotEqual));
    let result = result.replace("==", equals);

    let result = ASSIGNMENT
        .replace_all(&result, |caps: &Captures<'_>| {
            format!("{}{equals}{}", &caps[1], &caps[2])
        })
        .into_owned();

    let result = SPACED_EQUALS
        .replace_all(&result, |caps: &Captures<'_>| {
            format!("{}{equals}{}", &caps[1], &caps[2])
        })
        .into_owned();

    let plus = table.phrase(SymbolKey::Plus);
    let result = ADDITION
        .replace_all(&result, |caps: &Captures<'_>| {
            format!("{}{plus}{}", &caps[1], &caps[2])
        })
        .into_owned();

    let percent = table.phrase(SymbolKey::Percent);
    PERCENTAGE
        .replace_all(&result, |caps: &Captures<'_>| {
            format!("{}{percent}", &caps[1])
        })
        .into_owned()
}
