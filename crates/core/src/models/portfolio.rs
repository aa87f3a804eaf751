use serde::{Deserialize, Serialize};

use super::position::Position;
use super::settings::Settings;

/// The main data container. Everything in here gets serialized to JSON
/// and handed to the host for persistence (e.g. browser local storage).
///
/// Contains: the position list (order is user-chosen and meaningful, it
/// breaks ties in the savings planner) and the user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// All positions, in the order the user arranged them
    pub positions: Vec<Position>,

    /// User settings (mode toggle, savings amount, planning horizon)
    pub settings: Settings,
}

impl Portfolio {
    /// Starter portfolio shown on first launch: a classic three-fund
    /// split that sums to 100% so the first calculation is all-hold.
    #[must_use]
    pub fn with_default_positions() -> Self {
        Self {
            positions: vec![
                Position::new("MSCI World", 70_000.0, 70.0),
                Position::new("Gold", 10_000.0, 10.0),
                Position::new("Bank", 20_000.0, 20.0),
            ],
            settings: Settings::default(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            settings: Settings::default(),
        }
    }
}
