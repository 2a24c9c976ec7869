//! The symbol rewriter: pass orchestration and language resolution.
//!
//! Rewriting runs as a fixed sequence of passes over the text buffer:
//! numbered-list markers first (so list numbers are consumed before any
//! math rule can see them), then math expressions, then standalone symbols,
//! then a whitespace cleanup. Each pass is a pure function of the text and
//! the resolved phrase table; ordering is load-bearing and must not change.

mod lists;
mod math;
mod symbols;

use std::sync::LazyLock;

use bon::Builder;
use regex::Regex;

use crate::language::{LanguageDetector, ScriptDetector, TableRegistry};

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"  +").expect("valid multi-space pattern"));

/// Language-aware rewriter that turns symbolic notation into speakable text.
///
/// A rewriter owns a [`TableRegistry`] of per-language phrase tables and a
/// [`LanguageDetector`] used when no language hint is supplied. Both default
/// to the built-ins. A call to [`SymbolRewriter::transform`] is a pure
/// function of its arguments and the tables, so one rewriter can be shared
/// freely across threads.
///
/// # Example
///
/// ```
/// use speakable::SymbolRewriter;
///
/// let rewriter = SymbolRewriter::new();
/// assert_eq!(rewriter.transform("Score: 85%", Some("en")), "Score: 85 percent");
/// assert_eq!(rewriter.transform("x = 5", Some("en")), "x equals 5");
/// ```
#[derive(Builder)]
pub struct SymbolRewriter {
    /// Per-language phrase tables. Defaults to English and Russian.
    #[builder(default = TableRegistry::with_builtin())]
    tables: TableRegistry,

    /// Oracle consulted when a call supplies no usable language hint.
    #[builder(default = Box::new(ScriptDetector))]
    detector: Box<dyn LanguageDetector>,
}

impl Default for SymbolRewriter {
    fn default() -> Self {
        SymbolRewriter::builder().build()
    }
}

impl SymbolRewriter {
    /// Create a rewriter with built-in tables and the script detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table registry (read-only).
    pub fn tables(&self) -> &TableRegistry {
        &self.tables
    }

    /// The table registry (mutable) for registering or loading tables.
    pub fn tables_mut(&mut self) -> &mut TableRegistry {
        &mut self.tables
    }

    /// Resolve the effective language for a transform call.
    ///
    /// A non-empty hint that names a registered table wins verbatim; anything
    /// else defers to the detector. The returned code may still be unknown to
    /// the registry (a detector is free to say `"de"`), in which case table
    /// resolution falls back to English rather than erroring.
    pub fn resolve_language(&self, hint: Option<&str>, text: &str) -> String {
        if let Some(hint) = hint
            && !hint.is_empty()
            && self.tables.contains(hint)
        {
            return hint.to_string();
        }
        self.detector.detect_primary_language(text)
    }

    /// Rewrite symbolic notation in `text` into speakable phrases.
    ///
    /// Passes run in fixed order: numbered-list markers, math expressions,
    /// standalone symbols, whitespace cleanup. Unmatched notation is left
    /// untouched; empty input yields empty output.
    pub fn transform(&self, text: &str, language_hint: Option<&str>) -> String {
        let language = self.resolve_language(language_hint, text);
        let table = self.tables.resolve(&language);

        let result = lists::rewrite_list_markers(text, table);
        let result = math::rewrite_math(&result, table);
        let result = symbols::rewrite_standalone(&result, table);
        collapse_spaces(&result)
    }
}

/// Collapse runs of two or more spaces and trim stray spaces at the ends.
///
/// Phrases carry their own spacing, so splicing one next to existing
/// whitespace (or at the very start of the text) leaves a doubled or leading
/// space behind. Newlines are untouched: line structure is preserved.
fn collapse_spaces(text: &str) -> String {
    MULTI_SPACE
        .replace_all(text, " ")
        .trim_matches(' ')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::collapse_spaces;

    #[test]
    fn collapses_runs_of_spaces() {
        assert_eq!(collapse_spaces("a  b   c"), "a b c");
    }

    #[test]
    fn trims_spaces_but_not_newlines() {
        assert_eq!(collapse_spaces(" number 42\nnext "), "number 42\nnext");
        assert_eq!(collapse_spaces("a\n\nb"), "a\n\nb");
    }
}
