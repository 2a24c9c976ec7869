//! Core data types: symbol keys and per-language phrase tables.

pub mod builtin;
mod phrase_table;
mod symbol_key;

pub use phrase_table::PhraseTable;
pub use symbol_key::SymbolKey;
