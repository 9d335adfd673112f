//! Carl Rent server library logic.
//!
//! The server provisions the database once at startup and shares the
//! resulting pool with every handler through [`AppState`].

pub mod config;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use carl_db::{DbPool, ReseedOutcome, CATALOG};
use serde_json::{json, Value};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// How the catalog reload went at startup.
    pub catalog: Arc<ReseedOutcome>,
}

/// Health check handler.
///
/// Reports `ok` when the startup catalog reload completed and the live
/// `cars` row count can be read; `degraded` otherwise.
async fn health(State(state): State<AppState>) -> Json<Value> {
    let pool = state.pool.clone();
    let live_rows = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.query_row("SELECT COUNT(*) FROM cars", [], |row| row.get::<_, i64>(0))
            .map_err(|e| e.to_string())
    })
    .await
    .unwrap_or_else(|e| Err(format!("health check task failed: {e}")));

    let seeded = state.catalog.inserted();
    let (status, rows, error) = match (&live_rows, state.catalog.error()) {
        (Ok(rows), None) => ("ok", Some(*rows), None),
        (Ok(rows), Some(seed_err)) => ("degraded", Some(*rows), Some(seed_err.to_string())),
        (Err(db_err), _) => {
            tracing::warn!("health check could not read catalog: {}", db_err);
            ("degraded", None, Some(db_err.clone()))
        }
    };

    Json(json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": {
            "expected": CATALOG.len(),
            "seeded": seeded,
            "rows": rows,
            "error": error,
        }
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}
