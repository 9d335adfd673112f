//! Embedded table definitions.
//!
//! Each definition is a SQL file compiled into the binary. All statements are
//! `IF NOT EXISTS`, so applying the full list on every startup is safe and
//! nothing needs to be tracked between runs.

use rusqlite::Connection;

use crate::error::ProvisionError;

/// One table and the statements that create it.
struct TableDefinition {
    table: &'static str,
    sql: &'static str,
}

/// Tables in creation order. `rentals` references `users` and `cars`, so it
/// stays last.
const TABLES: &[TableDefinition] = &[
    TableDefinition {
        table: "users",
        sql: include_str!("schema/000_users.sql"),
    },
    TableDefinition {
        table: "messages",
        sql: include_str!("schema/001_messages.sql"),
    },
    TableDefinition {
        table: "cars",
        sql: include_str!("schema/002_cars.sql"),
    },
    TableDefinition {
        table: "rentals",
        sql: include_str!("schema/003_rentals.sql"),
    },
];

/// Names of the provisioned tables, in creation order.
pub fn table_names() -> impl Iterator<Item = &'static str> {
    TABLES.iter().map(|t| t.table)
}

/// Creates every table that does not exist yet.
///
/// Tables are created one at a time; a failure leaves the earlier ones in
/// place. Rerunning is harmless.
///
/// # Errors
///
/// Returns `ProvisionError::Schema` naming the first table whose statements
/// failed.
pub fn ensure_tables(conn: &Connection) -> Result<(), ProvisionError> {
    ensure_tables_from_list(conn, TABLES)
}

fn ensure_tables_from_list(
    conn: &Connection,
    tables: &[TableDefinition],
) -> Result<(), ProvisionError> {
    for definition in tables {
        conn.execute_batch(definition.sql)
            .map_err(|e| ProvisionError::Schema {
                table: definition.table.to_string(),
                source: e,
            })?;
        tracing::info!(table = definition.table, "ensured table");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().expect("should open in-memory db");
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .expect("should enable foreign keys");
        conn
    }

    fn table_exists(conn: &Connection, name: &str) -> bool {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
            [name],
            |row| row.get(0),
        )
        .expect("should query sqlite_master")
    }

    #[test]
    fn creates_all_tables() {
        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        for name in ["users", "messages", "cars", "rentals"] {
            assert!(table_exists(&conn, name), "{name} table should exist");
        }
        assert_eq!(
            table_names().collect::<Vec<_>>(),
            ["users", "messages", "cars", "rentals"]
        );
    }

    #[test]
    fn ensure_tables_idempotent() {
        let conn = open();
        ensure_tables(&conn).expect("first run should succeed");
        conn.execute(
            "INSERT INTO messages (name, email, message) VALUES ('Anna', 'anna@example.com', 'Hello')",
            [],
        )
        .expect("should insert message");

        ensure_tables(&conn).expect("second run should succeed");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM messages", [], |row| row.get(0))
            .expect("should count messages");
        assert_eq!(count, 1, "existing rows survive a rerun");
    }

    #[test]
    fn failure_names_the_table() {
        let conn = open();
        let tables = [
            TableDefinition {
                table: "probe",
                sql: "CREATE TABLE probe (id INTEGER PRIMARY KEY);",
            },
            TableDefinition {
                table: "broken",
                sql: "CREATE TABLE broken (id INTEGER PRIMARY KEY,);",
            },
        ];

        let err = ensure_tables_from_list(&conn, &tables).expect_err("broken DDL should fail");
        match err {
            ProvisionError::Schema { table, .. } => assert_eq!(table, "broken"),
            other => panic!("unexpected error type: {other:?}"),
        }
        assert!(table_exists(&conn, "probe"), "earlier tables are kept");
    }

    #[test]
    fn defaults_are_applied() {
        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        conn.execute(
            "INSERT INTO cars (name, price_per_day) VALUES ('Plain', 1000)",
            [],
        )
        .expect("should insert car with defaults");
        let (category, transmission, fuel, seats, available): (String, String, String, i64, bool) =
            conn.query_row(
                "SELECT category, transmission, fuel_type, seats, is_available FROM cars",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?)),
            )
            .expect("should read car");
        assert_eq!(category, "Gazdaságos");
        assert_eq!(transmission, "automatic");
        assert_eq!(fuel, "Benzin");
        assert_eq!(seats, 5);
        assert!(available);

        conn.execute(
            "INSERT INTO messages (name, email, message) VALUES ('Bela', 'bela@example.com', 'Hi')",
            [],
        )
        .expect("should insert message");
        let status: String = conn
            .query_row("SELECT status FROM messages", [], |row| row.get(0))
            .expect("should read status");
        assert_eq!(status, "new");
    }

    #[test]
    fn enumerated_columns_reject_unknown_values() {
        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        let bad_category = conn.execute(
            "INSERT INTO cars (name, price_per_day, category) VALUES ('Van', 1000, 'van')",
            [],
        );
        assert!(bad_category.is_err(), "category outside the set must fail");

        let negative_price = conn.execute(
            "INSERT INTO cars (name, price_per_day) VALUES ('Free', -1)",
            [],
        );
        assert!(negative_price.is_err(), "negative price must fail");

        let bad_features = conn.execute(
            "INSERT INTO cars (name, price_per_day, features) VALUES ('Odd', 1, 'not json')",
            [],
        );
        assert!(bad_features.is_err(), "features must be valid JSON");

        let bad_status = conn.execute(
            "INSERT INTO messages (name, email, message, status) VALUES ('C', 'c@example.com', 'x', 'archived')",
            [],
        );
        assert!(bad_status.is_err(), "message status outside the set must fail");
    }

    #[test]
    fn enumerated_columns_accept_every_variant() {
        use carl_types::{Category, FuelType, MessageStatus, RentalStatus, Transmission};

        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        for category in Category::ALL {
            for transmission in Transmission::ALL {
                for fuel in FuelType::ALL {
                    conn.execute(
                        "INSERT INTO cars (name, price_per_day, category, transmission, fuel_type)
                         VALUES ('Probe', 1, ?1, ?2, ?3)",
                        params![category.as_str(), transmission.as_str(), fuel.as_str()],
                    )
                    .expect("every typed variant should satisfy the CHECK constraints");
                }
            }
        }

        for status in MessageStatus::ALL {
            conn.execute(
                "INSERT INTO messages (name, email, message, status) VALUES ('D', 'd@example.com', 'x', ?1)",
                [status.as_str()],
            )
            .expect("every message status should be accepted");
        }

        for status in RentalStatus::ALL {
            conn.execute(
                "INSERT INTO rentals (car_name, car_price, rental_date, return_date, customer_name, customer_email, status)
                 VALUES ('Probe', '1000', '2025-06-01', '2025-06-03', 'E', 'e@example.com', ?1)",
                [status.as_str()],
            )
            .expect("every rental status should be accepted");
        }
    }

    #[test]
    fn user_email_is_unique() {
        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        let insert = "INSERT INTO users (name, email, phone, password) VALUES ('F', 'f@example.com', '+3612345', 'hash')";
        conn.execute(insert, []).expect("first user should insert");
        assert!(conn.execute(insert, []).is_err(), "duplicate email must fail");
    }

    #[test]
    fn rental_dates_are_not_ordered_by_schema() {
        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        conn.execute(
            "INSERT INTO rentals (car_name, car_price, rental_date, return_date, customer_name, customer_email)
             VALUES ('Probe', '1000', '2025-06-10', '2025-06-01', 'G', 'g@example.com')",
            [],
        )
        .expect("return before rental is left to the application");
    }

    #[test]
    fn update_touches_updated_at() {
        let conn = open();
        ensure_tables(&conn).expect("schema should apply");

        conn.execute(
            "INSERT INTO users (name, email, phone, password, updated_at)
             VALUES ('H', 'h@example.com', '+3612345', 'hash', '2000-01-01 00:00:00')",
            [],
        )
        .expect("should insert user");
        conn.execute("UPDATE users SET city = 'Budapest'", [])
            .expect("should update user");

        let updated_at: String = conn
            .query_row("SELECT updated_at FROM users", [], |row| row.get(0))
            .expect("should read updated_at");
        assert_ne!(updated_at, "2000-01-01 00:00:00");
    }
}
