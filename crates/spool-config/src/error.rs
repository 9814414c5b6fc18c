//! Error types for configuration assembly and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Template production errors
    #[error("template render failed: {0}")]
    RenderFailed(String),

    // Config parsing/loading errors
    #[error("invalid config value: {0}")]
    InvalidValue(String),

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // I/O errors (directory creation, template write)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
