use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single named holding: how much it is worth right now, and what share
/// of the total portfolio it should end up with.
///
/// Identity is by `id`. The `name` is display text and need not be unique;
/// savings attribution groups by it (see `RebalanceService`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Unique identifier
    pub id: Uuid,

    /// Display name (e.g., "MSCI World", "Gold")
    pub name: String,

    /// Current market value of the holding
    pub current_value: f64,

    /// Desired share of the total portfolio, in percent (0..=100)
    pub target_ratio: f64,
}

impl Position {
    pub fn new(name: impl Into<String>, current_value: f64, target_ratio: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            current_value,
            target_ratio,
        }
    }

    /// Whether this position takes part in a calculation.
    ///
    /// Zero values are allowed (a freshly funded position legitimately starts
    /// at 0), but the name must be non-blank and the numbers non-negative.
    /// Rows the user is still typing into are skipped rather than rejected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.current_value >= 0.0 && self.target_ratio >= 0.0
    }
}
