use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of the underlying record store.
///
/// Every variant is fatal to the operation that produced it and is surfaced
/// to the caller unchanged; a failed store is never reported as "no matches".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("cannot open database {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
    /// A query failed after the connection was established
    #[error("database query failed: {0}")]
    Query(#[from] sqlx::Error),
    /// A row holds values that do not fit the record types
    #[error("malformed row in `{table}`: {detail}")]
    MalformedRow { table: &'static str, detail: String },
    /// The runtime driving the database driver could not be started
    #[error("cannot start database runtime: {0}")]
    Runtime(#[from] io::Error),
}

impl StoreError {
    pub(crate) fn malformed(table: &'static str, detail: impl Into<String>) -> Self {
        StoreError::MalformedRow {
            table,
            detail: detail.into(),
        }
    }

    /// True when the database file itself was unreachable, as opposed to a
    /// query or decoding problem on an open connection.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, StoreError::Open { .. } | StoreError::Runtime(_))
    }
}

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;
