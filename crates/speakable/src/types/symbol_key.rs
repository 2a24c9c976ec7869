use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Stable identifier for a category of notation, independent of language.
///
/// Keys form a fixed, closed set: each phrase table maps every key to a
/// localized spoken phrase. In serialized form (e.g. JSON phrase-table
/// files) keys appear as their snake_case names, so `SymbolKey::DividedBy`
/// is `"divided_by"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKey {
    // Mathematical operators
    Equals,
    Plus,
    Minus,
    Times,
    DividedBy,
    Percent,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    NotEqual,
    Arrow,

    // Currency
    Dollars,
    Euros,
    Pounds,
    Yen,
    Rubles,

    // Special characters
    At,
    And,
    Number,

    // List markers
    Point,
}

impl SymbolKey {
    /// Every key, in declaration order. Useful for completeness checks.
    pub const ALL: [SymbolKey; 21] = [
        SymbolKey::Equals,
        SymbolKey::Plus,
        SymbolKey::Minus,
        SymbolKey::Times,
        SymbolKey::DividedBy,
        SymbolKey::Percent,
        SymbolKey::LessThan,
        SymbolKey::GreaterThan,
        SymbolKey::LessOrEqual,
        SymbolKey::GreaterOrEqual,
        SymbolKey::NotEqual,
        SymbolKey::Arrow,
        SymbolKey::Dollars,
        SymbolKey::Euros,
        SymbolKey::Pounds,
        SymbolKey::Yen,
        SymbolKey::Rubles,
        SymbolKey::At,
        SymbolKey::And,
        SymbolKey::Number,
        SymbolKey::Point,
    ];

    /// The snake_case name of this key, as used in phrase-table files.
    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKey::Equals => "equals",
            SymbolKey::Plus => "plus",
            SymbolKey::Minus => "minus",
            SymbolKey::Times => "times",
            SymbolKey::DividedBy => "divided_by",
            SymbolKey::Percent => "percent",
            SymbolKey::LessThan => "less_than",
            SymbolKey::GreaterThan => "greater_than",
            SymbolKey::LessOrEqual => "less_or_equal",
            SymbolKey::GreaterOrEqual => "greater_or_equal",
            SymbolKey::NotEqual => "not_equal",
            SymbolKey::Arrow => "arrow",
            SymbolKey::Dollars => "dollars",
            SymbolKey::Euros => "euros",
            SymbolKey::Pounds => "pounds",
            SymbolKey::Yen => "yen",
            SymbolKey::Rubles => "rubles",
            SymbolKey::At => "at",
            SymbolKey::And => "and",
            SymbolKey::Number => "number",
            SymbolKey::Point => "point",
        }
    }
}

impl Display for SymbolKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
