//! Standalone-symbol pass: currency, bullets, `&`, `#`, arrows.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::types::{PhraseTable, SymbolKey};

/// A currency symbol immediately followed by an amount, optionally with
/// exactly two decimal places. Symbols not adjacent to digits never match.
static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([$€£₽])(\d+(?:\.\d{2})?)").expect("valid currency pattern"));

/// Bullet glyphs at a line start, including legacy Windows markers.
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\n)\s*[•◦▪▸►]\s*").expect("valid bullet pattern"));

/// `&` with whitespace on both sides.
static AMPERSAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+&\s+").expect("valid ampersand pattern"));

/// `#` immediately followed by digits, e.g. `#42`.
static HASH_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\d+)").expect("valid hash pattern"));

fn currency_key(symbol: &str) -> SymbolKey {
    match symbol {
        "$" => SymbolKey::Dollars,
        "€" => SymbolKey::Euros,
        "£" => SymbolKey::Pounds,
        _ => SymbolKey::Rubles,
    }
}

/// Convert standalone symbols to speakable text.
///
/// Currency symbols are dropped and the amount is kept (`$9.99` becomes
/// `9.99 dollars`). Bullet markers are deleted outright: they have no
/// spoken equivalent. Arrow glyphs and ASCII arrows all map to the same
/// phrase; direction is not distinguished in speech.
pub(super) fn rewrite_standalone(text: &str, table: &PhraseTable) -> String {
    let result = CURRENCY
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}", &caps[2], table.phrase(currency_key(&caps[1])))
        })
        .into_owned();

    let result = BULLET.replace_all(&result, "${1}").into_owned();

    // NoExpand: a `$` in a user-supplied phrase must not read as a capture.
    let result = AMPERSAND
        .replace_all(&result, NoExpand(table.phrase(SymbolKey::And)))
        .into_owned();

    let number = table.phrase(SymbolKey::Number);
    let result = HASH_NUMBER
        .replace_all(&result, |caps: &Captures<'_>| {
            format!("{number}{}", &caps[1])
        })
        .into_owned();

    let arrow = table.phrase(SymbolKey::Arrow);
    let result = result.replace('→', arrow);
    let result = result.replace('←', arrow);
    let result = result.replace("->", arrow);
    result.replace("<-", arrow)
}
