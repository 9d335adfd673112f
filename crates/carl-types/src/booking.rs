//! Status columns of the contact-message and rental tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::UnknownVariant;

/// Processing state of a contact-form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Not yet opened by staff.
    #[default]
    New,
    Read,
    Replied,
}

impl MessageStatus {
    pub const ALL: [Self; 3] = [Self::New, Self::Read, Self::Replied];

    /// Returns the value stored in the `messages.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            _ => Err(UnknownVariant::new("message status", s)),
        }
    }
}

/// Lifecycle state of a rental booking.
///
/// Transitions between states are decided by the application; the schema
/// only restricts the column to these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl RentalStatus {
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the value stored in the `rentals.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RentalStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(UnknownVariant::new("rental status", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_parse_their_stored_values() {
        for status in MessageStatus::ALL {
            assert_eq!(status.as_str().parse::<MessageStatus>(), Ok(status));
        }
        for status in RentalStatus::ALL {
            assert_eq!(status.as_str().parse::<RentalStatus>(), Ok(status));
        }
    }

    #[test]
    fn status_parsing_is_exact() {
        assert!("Pending".parse::<RentalStatus>().is_err());
        assert!("archived".parse::<MessageStatus>().is_err());
    }

    #[test]
    fn status_defaults() {
        assert_eq!(MessageStatus::default(), MessageStatus::New);
        assert_eq!(RentalStatus::default(), RentalStatus::Pending);
    }
}
