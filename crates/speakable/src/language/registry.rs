//! Registry of phrase tables keyed by language code.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::error::LoadError;
use crate::types::{PhraseTable, builtin};

/// An extensible mapping from language code to [`PhraseTable`].
///
/// Codes are ISO-639-1-like strings (`"en"`, `"ru"`, `"de"`). English and
/// Russian tables are built in; further languages can be registered
/// programmatically or loaded from JSON files. Resolution never fails:
/// unknown codes fall back to English, because unresolvable symbols must
/// still be spoken in *some* language.
///
/// # Example
///
/// ```
/// use speakable::{PhraseTable, SymbolKey, TableRegistry};
///
/// let mut registry = TableRegistry::with_builtin();
/// assert!(registry.contains("ru"));
///
/// let mut de = PhraseTable::new();
/// de.insert(SymbolKey::Percent, " prozent");
/// registry.register("de", de);
/// assert_eq!(registry.resolve("de").phrase(SymbolKey::Percent), " prozent");
///
/// // Unknown codes resolve to English.
/// assert_eq!(registry.resolve("xx").phrase(SymbolKey::Percent), " percent");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: HashMap<String, PhraseTable>,
}

impl TableRegistry {
    /// Create a registry with the built-in English and Russian tables.
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("en", builtin::english().clone());
        registry.register("ru", builtin::russian().clone());
        registry
    }

    /// Create a registry with no tables at all.
    ///
    /// Every code then resolves to the built-in English table until
    /// something is registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a table for a language, replacing any previous table.
    pub fn register(&mut self, language: impl Into<String>, table: PhraseTable) {
        self.tables.insert(language.into(), table);
    }

    /// Whether a table is registered for this language code.
    pub fn contains(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Get the table registered for a language, if any.
    pub fn get(&self, language: &str) -> Option<&PhraseTable> {
        self.tables.get(language)
    }

    /// Registered language codes, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Resolve a language code to a table, falling back to English.
    ///
    /// Unknown codes return the registered `"en"` table if present, else the
    /// built-in English table. This is total: it never errors.
    pub fn resolve(&self, language: &str) -> &PhraseTable {
        self.tables
            .get(language)
            .or_else(|| self.tables.get("en"))
            .unwrap_or_else(|| builtin::english())
    }

    /// Load a phrase table from a JSON file for a specific language.
    ///
    /// The file is a single JSON object mapping snake_case symbol-key names
    /// to phrase strings:
    ///
    /// ```json
    /// { "equals": " ist gleich ", "percent": " prozent" }
    /// ```
    ///
    /// Missing keys are allowed (lookups fall back to English wording);
    /// unknown keys are a [`LoadError::Parse`]. Loading the same language
    /// twice **replaces** the previous table. Returns the number of keys
    /// loaded.
    pub fn load_table(
        &mut self,
        language: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.load_table_internal(language, &content, Some(path))
    }

    /// Load a phrase table from a JSON string for a specific language.
    ///
    /// Same format and replacement semantics as [`TableRegistry::load_table`].
    pub fn load_table_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        self.load_table_internal(language, content, None)
    }

    fn load_table_internal(
        &mut self,
        language: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let table: PhraseTable = serde_json::from_str(content).map_err(|e| LoadError::Parse {
            path: path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(format!("<{language}>"))),
            message: e.to_string(),
        })?;
        let count = table.len();
        self.register(language, table);
        Ok(count)
    }
}
