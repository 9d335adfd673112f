//! Error types for provisioning and catalog seeding.

use std::path::PathBuf;

use crate::pool::PoolError;

/// Errors that abort provisioning.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// The configured database name cannot be used as a file name.
    #[error("invalid database name {0:?}")]
    InvalidName(String),

    /// The directory that holds the database file could not be created.
    #[error("failed to create database directory {}: {source}", path.display())]
    CreateDirectory {
        /// Directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The bootstrap connection could not open or probe the database.
    #[error("failed to create database: {0}")]
    Bootstrap(rusqlite::Error),

    /// The bootstrap connection could not be closed cleanly.
    #[error("failed to close bootstrap connection: {0}")]
    BootstrapClose(rusqlite::Error),

    #[error(transparent)]
    Pool(#[from] PoolError),

    /// No connection could be taken from the pool for table setup.
    #[error("failed to acquire setup connection: {0}")]
    Acquire(r2d2::Error),

    /// A table definition failed to apply.
    #[error("failed to create table '{table}': {source}")]
    Schema {
        /// The table whose statement failed.
        table: String,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },

    /// The pool was requested before provisioning completed.
    #[error("database pool not initialized; run initialize first")]
    NotInitialized,
}

/// Errors raised while reloading the car catalog.
///
/// These never abort provisioning; they are reported through
/// [`crate::ReseedOutcome::Degraded`].
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The shared feature list could not be encoded as JSON.
    #[error("failed to encode car features: {0}")]
    Features(#[from] serde_json::Error),

    /// Existing catalog rows could not be removed.
    #[error("failed to clear cars table: {0}")]
    Clear(rusqlite::Error),

    /// The insert statement could not be prepared.
    #[error("failed to prepare car insert: {0}")]
    Prepare(rusqlite::Error),

    /// A catalog entry could not be inserted.
    #[error("failed to insert car '{name}': {source}")]
    Insert {
        /// Name of the car being inserted.
        name: String,
        /// The underlying SQLite error.
        source: rusqlite::Error,
    },
}
