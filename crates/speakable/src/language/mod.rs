//! Language resolution: the detection oracle and the per-language table registry.

mod detect;
mod error;
mod registry;

pub use detect::{LanguageDetector, ScriptDetector};
pub use error::LoadError;
pub use registry::TableRegistry;
