//! Connection settings and pool creation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;

/// Where the database lives and how connections to it behave.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    /// Directory hosting the database files (`DB_HOST`).
    pub host: PathBuf,

    /// Database name (`DB_NAME`). The file is `<host>/<name>.db`.
    pub name: String,

    /// Account name (`DB_USER`). SQLite has no accounts; it is only logged.
    pub user: String,

    /// Account password (`DB_PASS`). Ignored by SQLite; never printed.
    pub password: String,

    /// Maximum number of pooled connections.
    pub pool_max_size: u32,

    /// Busy timeout for each connection, in milliseconds.
    pub busy_timeout_ms: u64,

    /// How long a caller waits for a free pooled connection, in milliseconds.
    pub acquire_timeout_ms: u64,
}

impl DbSettings {
    /// Full path of the database file.
    pub fn database_path(&self) -> PathBuf {
        self.host.join(format!("{}.db", self.name))
    }
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            host: PathBuf::from("data"),
            name: "carl_rent".to_string(),
            user: "root".to_string(),
            password: String::new(),
            pool_max_size: 10,
            busy_timeout_ms: 5_000,
            acquire_timeout_ms: 30_000,
        }
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &password)
            .field("pool_max_size", &self.pool_max_size)
            .field("busy_timeout_ms", &self.busy_timeout_ms)
            .field("acquire_timeout_ms", &self.acquire_timeout_ms)
            .finish()
    }
}

/// A type alias for the SQLite connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Errors that can occur when creating the database pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Failed to build the connection pool.
    #[error("failed to create database connection pool: {0}")]
    PoolInit(#[from] r2d2::Error),
}

/// Creates a connection pool over an existing database file.
///
/// Connections are opened without the create flag, so the file must already
/// exist (see [`crate::ensure_database`]). Every connection runs in WAL mode
/// with foreign keys enforced.
///
/// # Errors
///
/// Returns `PoolError::PoolInit` if the initial connections cannot be opened.
pub fn create_pool(db_path: &Path, settings: &DbSettings) -> Result<DbPool, PoolError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let busy_timeout_ms = settings.busy_timeout_ms;

    let manager = SqliteConnectionManager::file(db_path)
        .with_flags(flags)
        .with_init(move |conn| {
            let journal_mode: String =
                conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get(0))?;
            if journal_mode != "wal" && journal_mode != "memory" {
                return Err(rusqlite::Error::SqliteFailure(
                    rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
                    Some(format!(
                        "failed to set WAL journal mode, got: {}",
                        journal_mode
                    )),
                ));
            }
            conn.execute_batch(&format!(
                "PRAGMA foreign_keys = ON;
                 PRAGMA busy_timeout = {};",
                busy_timeout_ms
            ))
        });

    // r2d2 panics on a zero size or timeout.
    let pool = Pool::builder()
        .max_size(settings.pool_max_size.max(1))
        .connection_timeout(Duration::from_millis(settings.acquire_timeout_ms.max(1)))
        .build(manager)?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_in(dir: &Path) -> DbSettings {
        DbSettings {
            host: dir.to_path_buf(),
            busy_timeout_ms: 2_500,
            pool_max_size: 3,
            ..DbSettings::default()
        }
    }

    #[test]
    fn database_path_joins_host_and_name() {
        let settings = DbSettings {
            host: PathBuf::from("/var/lib/carl"),
            name: "fleet".to_string(),
            ..DbSettings::default()
        };
        assert_eq!(
            settings.database_path(),
            PathBuf::from("/var/lib/carl/fleet.db")
        );
    }

    #[test]
    fn defaults() {
        let settings = DbSettings::default();
        assert_eq!(settings.database_path(), PathBuf::from("data/carl_rent.db"));
        assert_eq!(settings.user, "root");
        assert!(settings.password.is_empty());
        assert_eq!(settings.pool_max_size, 10);
    }

    #[test]
    fn debug_redacts_password() {
        let settings = DbSettings {
            password: "hunter2".to_string(),
            ..DbSettings::default()
        };
        let printed = format!("{settings:?}");
        assert!(!printed.contains("hunter2"), "password leaked: {printed}");
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn pool_configures_connections() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let settings = settings_in(dir.path());
        let path = crate::ensure_database(&settings).expect("should create database file");

        let pool = create_pool(&path, &settings).expect("pool creation should succeed");
        let conn = pool.get().expect("should get a connection");

        let mode: String = conn
            .query_row("PRAGMA journal_mode;", [], |row| row.get(0))
            .expect("should query journal_mode");
        assert_eq!(mode, "wal");

        let fk: i32 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .expect("should query foreign_keys");
        assert_eq!(fk, 1, "foreign keys should be enabled");

        let busy_timeout: i32 = conn
            .query_row("PRAGMA busy_timeout;", [], |row| row.get(0))
            .expect("should query busy_timeout");
        assert_eq!(busy_timeout, 2_500, "busy timeout should match settings");

        assert_eq!(pool.max_size(), 3, "pool max size should match settings");
    }

    #[test]
    fn pool_refuses_missing_database() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let settings = DbSettings {
            acquire_timeout_ms: 200,
            ..settings_in(dir.path())
        };

        let result = create_pool(&settings.database_path(), &settings);
        assert!(result.is_err(), "pool must not create the database itself");
        assert!(!settings.database_path().exists());
    }
}
