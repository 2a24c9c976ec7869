use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::SymbolKey;
use super::builtin;

/// A per-language mapping from [`SymbolKey`] to its spoken phrase.
///
/// Phrase strings carry their own spacing: an infix phrase like `" equals "`
/// includes both surrounding spaces, a suffix phrase like `" percent"` only
/// the leading one. The rewrite passes splice phrases verbatim and the final
/// cleanup collapses any doubled spaces, so tables never need to reason
/// about the spacing already present in the text.
///
/// Tables may be partial: [`PhraseTable::phrase`] falls back to the built-in
/// English table for any missing key, so an incomplete translation degrades
/// to English wording for the symbols it does not cover rather than ever
/// producing an empty phrase.
///
/// # Example
///
/// ```
/// use speakable::{PhraseTable, SymbolKey};
///
/// let mut table = PhraseTable::new();
/// table.insert(SymbolKey::Percent, " prozent");
/// assert_eq!(table.phrase(SymbolKey::Percent), " prozent");
/// // Missing keys fall back to English wording.
/// assert_eq!(table.phrase(SymbolKey::Equals), " equals ");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhraseTable {
    phrases: HashMap<SymbolKey, String>,
}

impl PhraseTable {
    /// Create an empty table. Every lookup falls back to English.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, phrase)` pairs.
    pub fn from_entries<S>(entries: impl IntoIterator<Item = (SymbolKey, S)>) -> Self
    where
        S: Into<String>,
    {
        Self {
            phrases: entries
                .into_iter()
                .map(|(key, phrase)| (key, phrase.into()))
                .collect(),
        }
    }

    /// Set the phrase for a key, replacing any previous value.
    pub fn insert(&mut self, key: SymbolKey, phrase: impl Into<String>) {
        self.phrases.insert(key, phrase.into());
    }

    /// Get the phrase for a key, if this table defines it.
    pub fn get(&self, key: SymbolKey) -> Option<&str> {
        self.phrases.get(&key).map(String::as_str)
    }

    /// Get the phrase for a key, falling back to the built-in English table.
    ///
    /// Never returns an empty string: the English table defines every key.
    pub fn phrase(&self, key: SymbolKey) -> &str {
        if let Some(phrase) = self.phrases.get(&key) {
            return phrase;
        }
        builtin::english()
            .get(key)
            .expect("built-in English table defines every key")
    }

    /// Keys this table does not define itself (English fallback applies).
    pub fn missing_keys(&self) -> Vec<SymbolKey> {
        SymbolKey::ALL
            .into_iter()
            .filter(|key| !self.phrases.contains_key(key))
            .collect()
    }

    /// Whether this table defines every symbol key.
    pub fn is_complete(&self) -> bool {
        self.missing_keys().is_empty()
    }

    /// Number of keys this table defines.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether this table defines no keys at all.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
