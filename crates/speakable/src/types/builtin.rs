//! Built-in phrase tables.
//!
//! English is the default and the per-key fallback for every other table.

use std::sync::LazyLock;

use super::{PhraseTable, SymbolKey};

static ENGLISH: LazyLock<PhraseTable> = LazyLock::new(|| {
    PhraseTable::from_entries([
        // Mathematical operators
        (SymbolKey::Equals, " equals "),
        (SymbolKey::Plus, " plus "),
        (SymbolKey::Minus, " minus "),
        (SymbolKey::Times, " times "),
        (SymbolKey::DividedBy, " divided by "),
        (SymbolKey::Percent, " percent"),
        (SymbolKey::LessThan, " less than "),
        (SymbolKey::GreaterThan, " greater than "),
        (SymbolKey::LessOrEqual, " less than or equal to "),
        (SymbolKey::GreaterOrEqual, " greater than or equal to "),
        (SymbolKey::NotEqual, " not equal to "),
        (SymbolKey::Arrow, " arrow "),
        // Currency
        (SymbolKey::Dollars, " dollars"),
        (SymbolKey::Euros, " euros"),
        (SymbolKey::Pounds, " pounds"),
        (SymbolKey::Yen, " yen"),
        (SymbolKey::Rubles, " rubles"),
        // Special characters
        (SymbolKey::At, " at "),
        (SymbolKey::And, " and "),
        (SymbolKey::Number, " number "),
        // List markers
        (SymbolKey::Point, "Point "),
    ])
});

static RUSSIAN: LazyLock<PhraseTable> = LazyLock::new(|| {
    PhraseTable::from_entries([
        // Mathematical operators
        (SymbolKey::Equals, " равно "),
        (SymbolKey::Plus, " плюс "),
        (SymbolKey::Minus, " минус "),
        (SymbolKey::Times, " умножить на "),
        (SymbolKey::DividedBy, " делить на "),
        (SymbolKey::Percent, " процентов"),
        (SymbolKey::LessThan, " меньше "),
        (SymbolKey::GreaterThan, " больше "),
        (SymbolKey::LessOrEqual, " меньше или равно "),
        (SymbolKey::GreaterOrEqual, " больше или равно "),
        (SymbolKey::NotEqual, " не равно "),
        (SymbolKey::Arrow, " стрелка "),
        // Currency
        (SymbolKey::Dollars, " долларов"),
        (SymbolKey::Euros, " евро"),
        (SymbolKey::Pounds, " фунтов"),
        (SymbolKey::Yen, " иен"),
        (SymbolKey::Rubles, " рублей"),
        // Special characters
        (SymbolKey::At, " собака "),
        (SymbolKey::And, " и "),
        (SymbolKey::Number, " номер "),
        // List markers
        (SymbolKey::Point, "Пункт "),
    ])
});

/// The built-in English table (default and fallback).
pub fn english() -> &'static PhraseTable {
    &ENGLISH
}

/// The built-in Russian table.
pub fn russian() -> &'static PhraseTable {
    &RUSSIAN
}
