//! Startup provisioning: database file, tables, catalog, pool.

use std::path::PathBuf;

use rusqlite::{Connection, OpenFlags};

use crate::catalog::{reseed_catalog, ReseedOutcome};
use crate::error::ProvisionError;
use crate::pool::{create_pool, DbPool, DbSettings};
use crate::schema::ensure_tables;

/// Creates the database file if it does not exist yet.
///
/// Opens a short-lived bootstrap connection with the create flag, checks that
/// the file really is a SQLite database, switches it to WAL journaling, and
/// closes the connection again whether or not the check passed. Returns the
/// database path.
///
/// # Errors
///
/// Returns `ProvisionError::InvalidName` for names that are empty or contain
/// path separators, `ProvisionError::CreateDirectory` if the host directory
/// cannot be created, and `ProvisionError::Bootstrap`/`BootstrapClose` for
/// SQLite failures.
pub fn ensure_database(settings: &DbSettings) -> Result<PathBuf, ProvisionError> {
    let name = settings.name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(ProvisionError::InvalidName(settings.name.clone()));
    }

    if !settings.host.as_os_str().is_empty() {
        std::fs::create_dir_all(&settings.host).map_err(|source| {
            ProvisionError::CreateDirectory {
                path: settings.host.clone(),
                source,
            }
        })?;
    }

    if !settings.password.is_empty() {
        tracing::warn!(
            user = %settings.user,
            "DB_PASS is set but SQLite has no accounts; the password is ignored"
        );
    }

    let path = settings.database_path();
    let conn = Connection::open_with_flags(
        &path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
    )
    .map_err(ProvisionError::Bootstrap)?;

    // WAL is persistent, so pooled connections find it already set.
    let probe = conn
        .query_row("PRAGMA schema_version;", [], |row| row.get::<_, i64>(0))
        .and_then(|_| conn.query_row("PRAGMA journal_mode = WAL;", [], |row| row.get::<_, String>(0)));
    let closed = conn.close().map_err(|(_, e)| ProvisionError::BootstrapClose(e));

    probe.map_err(ProvisionError::Bootstrap)?;
    closed?;

    tracing::info!(path = %path.display(), user = %settings.user, "database ensured");
    Ok(path)
}

/// Owns the provisioning settings and, once initialized, the shared pool.
///
/// The pool is only reachable through [`Provisioner::pool`], which fails
/// until [`Provisioner::initialize`] has succeeded. Consumers receive a clone
/// of the pool; clones share the same connections.
pub struct Provisioner {
    settings: DbSettings,
    pool: Option<DbPool>,
}

impl Provisioner {
    pub fn new(settings: DbSettings) -> Self {
        Self {
            settings,
            pool: None,
        }
    }

    pub fn settings(&self) -> &DbSettings {
        &self.settings
    }

    /// Ensures the database and tables exist and reloads the car catalog.
    ///
    /// Tables are created in the order users, messages, cars, rentals. The
    /// setup connection goes back to the pool before this returns. Calling
    /// it again is safe and replaces the pool.
    ///
    /// A catalog reload failure does not fail initialization; inspect the
    /// returned [`ReseedOutcome`].
    ///
    /// # Errors
    ///
    /// Any failure to create the database, build the pool, acquire the setup
    /// connection or create a table is returned as-is. Tables created before
    /// the failure are left in place.
    pub fn initialize(&mut self) -> Result<ReseedOutcome, ProvisionError> {
        let path = ensure_database(&self.settings)?;
        let pool = create_pool(&path, &self.settings)?;

        let outcome = {
            let conn = pool.get().map_err(ProvisionError::Acquire)?;
            ensure_tables(&conn)?;
            reseed_catalog(&conn)
        };

        self.pool = Some(pool);
        tracing::info!(
            path = %path.display(),
            pool_max_size = self.settings.pool_max_size,
            catalog_rows = outcome.inserted(),
            "database initialized"
        );
        Ok(outcome)
    }

    /// Returns the shared connection pool.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::NotInitialized` before a successful
    /// [`Provisioner::initialize`].
    pub fn pool(&self) -> Result<DbPool, ProvisionError> {
        self.pool.clone().ok_or(ProvisionError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.is_some()
    }
}

impl std::fmt::Debug for Provisioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provisioner")
            .field("settings", &self.settings)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
