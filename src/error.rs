//! Error types for the counter store.
//!
//! - [`StorageError`]: failures against the SQLite file
//! - [`UsageError`]: operations the caller should not have attempted
//! - [`Error`]: the union returned by every store operation

use std::path::PathBuf;

use thiserror::Error;

/// Top-level store error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("usage error: {0}")]
    Usage(#[from] UsageError),
}

/// Open, read, write or commit failures against persistent storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A SQLite call failed.
    #[error("failed to {action}: {source}")]
    Sqlite {
        action: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// The directory holding the database could not be created.
    #[error("failed to prepare {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An increment matched no row.
    #[error("no record for {item:?} in {table}")]
    MissingRecord { table: String, item: String },

    /// A count read back from disk was negative.
    #[error("invalid count {value} for {item:?} in {table}")]
    InvalidCount {
        table: String,
        item: String,
        value: i64,
    },
}

/// Misuse of the store API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("the counter store has been closed")]
    Closed,

    #[error("unknown catalog: {0}")]
    UnknownCatalog(String),

    #[error("catalog {0} has no items to pick from")]
    EmptyCatalog(String),

    /// Catalog names double as table name prefixes.
    #[error("invalid catalog name {0:?}: use lowercase letters, digits and underscores")]
    InvalidCatalogName(String),
}

/// Attach the attempted action to a rusqlite error.
pub(crate) trait SqliteContext<T> {
    fn action(self, action: &'static str) -> Result<T, StorageError>;
}

impl<T> SqliteContext<T> for rusqlite::Result<T> {
    fn action(self, action: &'static str) -> Result<T, StorageError> {
        self.map_err(|source| StorageError::Sqlite { action, source })
    }
}
