//! Symbol-to-speech text rewriting for TTS pipelines.
//!
//! Speech models skip or mispronounce symbolic notation: `x = 5` comes out as
//! "x five", `$9.99` as "nine ninety-nine", `3.` as a stray pause. This crate
//! rewrites mathematical notation, currency amounts, numbered list markers,
//! bullets, and special characters into pronounceable phrases, localized to
//! the dominant language of the input.
//!
//! The entry point is [`SymbolRewriter`]:
//!
//! ```
//! use speakable::SymbolRewriter;
//!
//! let rewriter = SymbolRewriter::new();
//! assert_eq!(rewriter.transform("Total: $9.99", Some("en")), "Total: 9.99 dollars");
//! assert_eq!(rewriter.transform("3. Buy milk", Some("en")), "Point 3. Buy milk");
//! ```
//!
//! When no language hint is supplied, the dominant language is resolved
//! through an injected [`LanguageDetector`] (a script-counting
//! [`ScriptDetector`] by default). Phrase wording lives in per-language
//! [`PhraseTable`]s held by a [`TableRegistry`]; English and Russian are
//! built in, and further languages can be registered at runtime or loaded
//! from JSON files.

pub mod language;
pub mod rewriter;
pub mod types;

pub use language::{LanguageDetector, LoadError, ScriptDetector, TableRegistry};
pub use rewriter::SymbolRewriter;
pub use types::{PhraseTable, SymbolKey};
