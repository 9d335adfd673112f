//! The fixed car catalog and its reload procedure.
//!
//! The `cars` table is not edited in place: every provisioning run deletes
//! all rows and inserts [`CATALOG`] again. Operator edits to catalog rows do
//! not survive a restart.

mod cars;

pub use cars::CATALOG;

use carl_types::{Category, FuelType, Transmission};
use rusqlite::{params, Connection};

use crate::error::SeedError;

/// Equipment listed on every catalog car.
pub const FEATURES: [&str; 4] = ["Klíma", "Bluetooth", "Parkolóradar", "USB port"];

/// One entry of the seed catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarSeed {
    pub name: &'static str,
    /// Model year.
    pub year: u16,
    /// Engine displacement in cm³.
    pub displacement_cc: u16,
    /// Engine power in metric horsepower.
    pub power_hp: u16,
    /// Boot capacity in litres.
    pub trunk_litres: u16,
    /// Daily price in forints.
    pub price_per_day: u32,
    pub image_url: Option<&'static str>,
    pub category: Category,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub seats: u8,
}

impl CarSeed {
    /// Renders the Hungarian technical summary shown on the catalog card.
    pub fn description(&self) -> String {
        format!(
            "Évjárat: {} Hengerűrtartalom: {} Teljesítmény: {} LE Csomagtartó: {} liter",
            self.year, self.displacement_cc, self.power_hp, self.trunk_litres
        )
    }
}

/// Result of a catalog reload.
///
/// A degraded reload leaves the table empty or partially filled; the caller
/// decides whether that is acceptable.
#[derive(Debug)]
pub enum ReseedOutcome {
    /// Every catalog entry was inserted.
    Complete {
        /// Number of rows inserted.
        inserted: usize,
    },
    /// The reload stopped early.
    Degraded {
        /// Number of rows inserted before the failure.
        inserted: usize,
        /// What went wrong.
        error: SeedError,
    },
}

impl ReseedOutcome {
    /// Rows present in the catalog after the reload.
    pub fn inserted(&self) -> usize {
        match self {
            Self::Complete { inserted } | Self::Degraded { inserted, .. } => *inserted,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// The failure behind a degraded reload.
    pub fn error(&self) -> Option<&SeedError> {
        match self {
            Self::Complete { .. } => None,
            Self::Degraded { error, .. } => Some(error),
        }
    }
}

/// Replaces the contents of the `cars` table with [`CATALOG`].
///
/// Failures are logged and reported in the returned outcome rather than
/// propagated, so a broken catalog never blocks startup.
pub fn reseed_catalog(conn: &Connection) -> ReseedOutcome {
    reseed_from_list(conn, CATALOG)
}

fn reseed_from_list(conn: &Connection, cars: &[CarSeed]) -> ReseedOutcome {
    let mut inserted = 0;
    match load_cars(conn, cars, &mut inserted) {
        Ok(()) => {
            tracing::info!(count = inserted, "cars table populated");
            ReseedOutcome::Complete { inserted }
        }
        Err(error) => {
            tracing::error!(
                inserted,
                expected = cars.len(),
                "error populating cars table: {}",
                error
            );
            ReseedOutcome::Degraded { inserted, error }
        }
    }
}

fn load_cars(conn: &Connection, cars: &[CarSeed], inserted: &mut usize) -> Result<(), SeedError> {
    let features = serde_json::to_string(&FEATURES)?;

    conn.execute("DELETE FROM cars", []).map_err(SeedError::Clear)?;

    let mut stmt = conn
        .prepare(
            "INSERT INTO cars
                (name, description, price_per_day, image_url, features, category, transmission, fuel_type, seats)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .map_err(SeedError::Prepare)?;

    for car in cars {
        stmt.execute(params![
            car.name,
            car.description(),
            car.price_per_day,
            car.image_url,
            features,
            car.category.as_str(),
            car.transmission.as_str(),
            car.fuel_type.as_str(),
            car.seats,
        ])
        .map_err(|e| SeedError::Insert {
            name: car.name.to_string(),
            source: e,
        })?;
        *inserted += 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn open_with_schema() -> Connection {
        let conn = Connection::open_in_memory().expect("should open in-memory db");
        crate::schema::ensure_tables(&conn).expect("schema should apply");
        conn
    }

    fn car_count(conn: &Connection) -> i64 {
        conn.query_row("SELECT COUNT(*) FROM cars", [], |row| row.get(0))
            .expect("should count cars")
    }

    #[test]
    fn catalog_has_57_entries_across_six_categories() {
        assert_eq!(CATALOG.len(), 57);

        let per_category = |category: Category| CATALOG.iter().filter(|c| c.category == category).count();
        assert_eq!(per_category(Category::Economy), 10);
        assert_eq!(per_category(Category::Compact), 10);
        assert_eq!(per_category(Category::Midsize), 10);
        assert_eq!(per_category(Category::Luxury), 9);
        assert_eq!(per_category(Category::Suv), 9);
        assert_eq!(per_category(Category::Sports), 9);
    }

    #[test]
    fn catalog_names_are_unique() {
        let names: HashSet<_> = CATALOG.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn catalog_entries_are_plausible() {
        for car in CATALOG {
            assert!(car.seats >= 2 && car.seats <= 7, "{} seats", car.name);
            assert!(car.price_per_day > 0, "{} price", car.name);
            assert!(car.name.chars().count() <= 100, "{} name too long", car.name);
            if let Some(url) = car.image_url {
                assert!(url.starts_with("https://"), "{} image url", car.name);
                assert!(url.len() <= 500, "{} image url too long", car.name);
            }
        }
    }

    #[test]
    fn description_format() {
        let polo = CATALOG
            .iter()
            .find(|c| c.name == "Volkswagen Polo")
            .expect("Polo should be in the catalog");
        assert_eq!(
            polo.description(),
            "Évjárat: 1996 Hengerűrtartalom: 1390 Teljesítmény: 60 LE Csomagtartó: 245 liter"
        );
    }

    #[test]
    fn reseed_fills_cars_table() {
        let conn = open_with_schema();
        let outcome = reseed_catalog(&conn);

        assert!(outcome.is_complete(), "unexpected outcome: {outcome:?}");
        assert_eq!(outcome.inserted(), 57);
        assert_eq!(car_count(&conn), 57);

        let features: String = conn
            .query_row("SELECT features FROM cars LIMIT 1", [], |row| row.get(0))
            .expect("should read features");
        let parsed: Vec<String> = serde_json::from_str(&features).expect("features should be JSON");
        assert_eq!(parsed, FEATURES);
    }

    #[test]
    fn reseed_replaces_existing_rows() {
        let conn = open_with_schema();
        conn.execute(
            "INSERT INTO cars (name, price_per_day) VALUES ('Trabant 601', 500)",
            [],
        )
        .expect("should insert extra car");

        let outcome = reseed_catalog(&conn);
        assert!(outcome.is_complete());
        assert_eq!(car_count(&conn), 57);

        let trabants: i64 = conn
            .query_row("SELECT COUNT(*) FROM cars WHERE name = 'Trabant 601'", [], |row| {
                row.get(0)
            })
            .expect("should query trabant");
        assert_eq!(trabants, 0);
    }

    #[test]
    fn reseed_failure_is_reported_not_raised() {
        let conn = open_with_schema();
        conn.execute_batch(
            "CREATE TRIGGER reject_focus BEFORE INSERT ON cars
             WHEN NEW.name = 'Ford Focus'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .expect("should create trigger");

        let outcome = reseed_catalog(&conn);
        let position = CATALOG
            .iter()
            .position(|c| c.name == "Ford Focus")
            .expect("Focus should be in the catalog");

        assert!(!outcome.is_complete());
        assert_eq!(outcome.inserted(), position);
        assert_eq!(car_count(&conn), position as i64, "rows before the failure remain");
        match outcome.error() {
            Some(SeedError::Insert { name, .. }) => assert_eq!(name, "Ford Focus"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reseed_without_table_is_degraded() {
        let conn = Connection::open_in_memory().expect("should open in-memory db");
        let outcome = reseed_catalog(&conn);

        assert_eq!(outcome.inserted(), 0);
        assert!(matches!(outcome.error(), Some(SeedError::Clear(_))));
    }
}
