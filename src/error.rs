//! Error types for hostdoc.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for hostdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building the catalog or emitting its artifacts.
#[derive(Debug, Error)]
pub enum Error {
    /// The same identifier was declared twice.
    #[error("duplicate API identifier `{0}`")]
    DuplicateIdentifier(String),

    /// Identifier is empty or contains `=`, `"` or a line break.
    #[error("invalid API identifier `{0}`")]
    InvalidIdentifier(String),

    /// HelpLink is not an absolute URI.
    #[error("invalid help link for `{id}`: `{link}` is not an absolute URI")]
    InvalidHelpLink { id: String, link: String },

    /// External catalog file could not be parsed.
    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// Pack header is missing or carries an unknown version.
    #[error("not a hostdoc pack: {0}")]
    BadPack(String),

    /// Filesystem failure on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The operation was canceled by an interrupt.
    #[error("operation canceled")]
    Canceled,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
