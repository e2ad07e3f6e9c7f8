//! Error types for loading resolver inputs.
//!
//! Resolution itself never fails; these only surface from the helpers that
//! read layout, registry and version files on behalf of the caller.

use std::path::PathBuf;

/// Errors that can occur while loading resolver configuration.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// File not found.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for resolver input operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
