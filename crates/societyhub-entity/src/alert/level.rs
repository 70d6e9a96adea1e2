//! Alert severity level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an emergency alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "alert_level", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Fire emergency.
    Fire,
    /// Maintenance issue (water, power, lifts).
    Maintenance,
    /// Security incident.
    Security,
    /// Medical emergency.
    Medical,
    /// Anything else.
    Other,
}

impl AlertLevel {
    /// Return the level as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Maintenance => "maintenance",
            Self::Security => "security",
            Self::Medical => "medical",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
