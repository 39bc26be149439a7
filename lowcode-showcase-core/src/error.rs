//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a translation resource.
///
/// Resolution itself never fails; only reading external data can.
#[derive(Error, Debug)]
pub enum I18nError {
    /// The resource file could not be read
    #[error("Failed to read translations from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource is not a `language -> key -> text` JSON object
    #[error("Invalid translation resource: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for translation loading
pub type I18nResult<T> = std::result::Result<T, I18nError>;
