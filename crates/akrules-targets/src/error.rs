//! Error types for target descriptor operations.

use std::path::PathBuf;

/// Errors that can occur while reading or parsing target descriptors.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading descriptor files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Descriptor file not found.
    #[error("target file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Platform identifier outside the known set.
    #[error("unknown platform '{name}'")]
    UnknownPlatform {
        /// The identifier as written.
        name: String,
    },

    /// Build configuration identifier outside the known set.
    #[error("unknown build configuration '{name}'")]
    UnknownConfiguration {
        /// The identifier as written.
        name: String,
    },
}

/// Result type for target operations.
pub type Result<T> = std::result::Result<T, TargetError>;
