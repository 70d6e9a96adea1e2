//! Alert review status enumeration and transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Review status of an emergency alert.
///
/// Every alert starts out `pending`. A reviewer moves it to `approved` or
/// `rejected`; both are terminal, so no transition out of them exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "alert_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// Submitted, awaiting review.
    Pending,
    /// Accepted by a reviewer.
    Approved,
    /// Declined by a reviewer; carries a rejection reason.
    Rejected,
}

impl AlertStatus {
    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Check whether a transition to `target` is legal.
    ///
    /// Only `pending → approved` and `pending → rejected` exist; in
    /// particular no status may transition to itself.
    pub fn can_transition_to(&self, target: AlertStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
