//! Error types for the bridge.

use thiserror::Error;

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Errors surfaced by configuration loading and the external collaborators.
///
/// Mapping, deduplication and the import/export core never fail; a bad
/// entry is skipped and counted in the report instead.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source could not deliver a record.
    #[error("source error: {0}")]
    Source(String),

    /// The sink rejected a record.
    #[error("sink error: {0}")]
    Sink(String),
}
