//! Error taxonomy for the persistence core. The store surfaces raw failures
//! upward and the repositories add no translation, so the variants here are
//! the complete set a caller has to handle. A missing record on read is not
//! an error: lookups return `Option` and callers must check.

use thiserror::Error;

/// Result alias used across the persistence layer.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures the store and its services can surface.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying engine could not be opened at all (missing home
    /// directory, unwritable data directory, corrupt file). Fatal for the
    /// session; there is no built-in retry.
    #[error("data store unavailable: {0}")]
    Unavailable(String),

    /// A read or write statement failed and the enclosing transaction was
    /// rolled back. The context string names the operation that aborted.
    #[error("{context}: {source}")]
    Sql {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A record could not be encoded to or decoded from its stored JSON
    /// document.
    #[error("record encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// A collection or index field name contained characters that cannot be
    /// spliced into schema DDL.
    #[error("invalid identifier `{0}`")]
    InvalidIdentifier(String),

    /// An import document failed shape validation. Reported before any write
    /// is attempted, so the store is left unchanged.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

impl StoreError {
    /// Wrap a SQL failure with the operation that was running, mirroring the
    /// `context` strings used throughout the persistence module.
    pub(crate) fn sql(context: &'static str) -> impl FnOnce(rusqlite::Error) -> StoreError {
        move |source| StoreError::Sql { context, source }
    }
}
