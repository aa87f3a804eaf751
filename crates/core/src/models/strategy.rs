use serde::{Deserialize, Serialize};

use super::action::ActionKind;

/// A single funding step inside one month of the savings plan.
///
/// Keyed by position name, not id: the plan is a human-facing instruction
/// list ("put 800 into MSCI World"), and attribution downstream groups by
/// the same label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthAction {
    /// Display name of the position to fund
    pub position_name: String,

    /// Always `Buy`; the planner only ever adds money
    pub kind: ActionKind,

    /// Amount to invest this month, always > 0
    pub amount: f64,
}

/// One month of the savings plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStrategyEntry {
    /// 1-based month index within the planning horizon
    pub month: u32,

    /// Portfolio value after this month's buys are applied
    pub portfolio_value: f64,

    /// Buys for this month, in the order they were picked. Empty once
    /// every position has reached its final target.
    pub actions: Vec<MonthAction>,
}
