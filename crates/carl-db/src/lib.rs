//! Database provisioning for the Carl Rent application.
//!
//! Creates the SQLite database file, the `users`, `messages`, `cars` and
//! `rentals` tables, reloads the fixed car catalog, and hands out an `r2d2`
//! connection pool for request handlers.
//!
//! # Design decisions
//!
//! - **Embedded SQLite**: the database is a single file under the configured
//!   host directory, so provisioning needs no external server. Foreign keys
//!   are switched on for every pooled connection so `rentals` references
//!   behave as `ON DELETE SET NULL`.
//! - **Idempotent DDL**: table definitions are embedded with `include_str!`
//!   and written as `CREATE ... IF NOT EXISTS`, so every startup applies the
//!   full list.
//! - **Explicit pool handle**: [`Provisioner`] owns the pool after a
//!   successful [`Provisioner::initialize`] and hands clones to consumers.
//! - **Reported, not fatal, catalog reloads**: [`reseed_catalog`] returns a
//!   [`ReseedOutcome`] instead of failing startup.

mod catalog;
mod error;
mod pool;
mod provisioner;
mod schema;

pub use catalog::{reseed_catalog, CarSeed, ReseedOutcome, CATALOG, FEATURES};
pub use error::{ProvisionError, SeedError};
pub use pool::{create_pool, DbPool, DbSettings, PoolError};
pub use provisioner::{ensure_database, Provisioner};
pub use schema::{ensure_tables, table_names};
