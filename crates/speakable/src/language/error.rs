//! Errors for phrase-table file loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading a phrase table.
///
/// These are the only fallible surface in the crate: the transform itself is
/// total and never errors.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a phrase-table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object of known symbol keys to phrases.
    #[error("{path}: {message}")]
    Parse { path: PathBuf, message: String },
}
