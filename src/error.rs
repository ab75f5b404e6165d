//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for browse-match operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()`
/// and `.with_context()` methods at the fallible edges (configuration and
/// language-definition loading). The matching core itself never errors.
pub type Result<T> = anyhow::Result<T>;

/// Error loading language definitions.
#[derive(Debug, Error)]
pub enum LanguageError {
    /// A definition named a language the registry does not know.
    #[error("unknown language name: {0:?}")]
    UnknownLanguage(String),

    /// The definition file could not be read.
    #[error("failed to read language definitions at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The definition file was not valid TOML.
    #[error("failed to parse language definitions at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}
