//! Shared column types for the Carl Rent schema.
//!
//! Every constrained column in the schema (car category, transmission, fuel
//! type, message status, rental status) has a matching enum here. The
//! `as_str` spelling of each variant is exactly the value stored in the
//! database and accepted by the table's `CHECK` constraint.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

mod booking;
pub use booking::{MessageStatus, RentalStatus};

/// Error returned when a stored or user-supplied string names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// Which column type was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Catalog category of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Small, cheap city cars.
    #[default]
    #[serde(rename = "Gazdaságos")]
    Economy,
    /// Compact hatchbacks and estates.
    #[serde(rename = "kompakt")]
    Compact,
    /// Mid-size saloons and estates.
    #[serde(rename = "Középkategória")]
    Midsize,
    /// Luxury saloons.
    #[serde(rename = "Luxus")]
    Luxury,
    #[serde(rename = "suv")]
    Suv,
    #[serde(rename = "sports")]
    Sports,
}

impl Category {
    /// All categories, in catalog display order.
    pub const ALL: [Self; 6] = [
        Self::Economy,
        Self::Compact,
        Self::Midsize,
        Self::Luxury,
        Self::Suv,
        Self::Sports,
    ];

    /// Returns the value stored in the `cars.category` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Economy => "Gazdaságos",
            Self::Compact => "kompakt",
            Self::Midsize => "Középkategória",
            Self::Luxury => "Luxus",
            Self::Suv => "suv",
            Self::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    /// Matching ignores case, so older lowercase spellings such as `luxus`
    /// still resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == wanted)
            .ok_or_else(|| UnknownVariant::new("car category", s))
    }
}

/// Gearbox type of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    #[default]
    Automatic,
}

impl Transmission {
    pub const ALL: [Self; 2] = [Self::Manual, Self::Automatic];

    /// Returns the value stored in the `cars.transmission` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transmission {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "automatic" => Ok(Self::Automatic),
            _ => Err(UnknownVariant::new("transmission", s)),
        }
    }
}

/// Fuel a car runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FuelType {
    /// Petrol.
    #[default]
    Benzin,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const ALL: [Self; 4] = [Self::Benzin, Self::Diesel, Self::Hybrid, Self::Electric];

    /// Returns the value stored in the `cars.fuel_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Benzin => "Benzin",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
            Self::Electric => "Electric",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = UnknownVariant;

    /// Case-insensitive; the English `petrol` is an alias for `Benzin`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benzin" | "petrol" => Ok(Self::Benzin),
            "diesel" => Ok(Self::Diesel),
            "hybrid" => Ok(Self::Hybrid),
            "electric" => Ok(Self::Electric),
            _ => Err(UnknownVariant::new("fuel type", s)),
        }
    }
}
