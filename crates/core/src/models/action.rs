use serde::{Deserialize, Serialize};

use crate::TOLERANCE;

/// What the user should do with a position to reach its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Put money in
    Buy,
    /// Take money out
    Sell,
    /// Close enough, leave it alone
    Hold,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Buy => write!(f, "buy"),
            ActionKind::Sell => write!(f, "sell"),
            ActionKind::Hold => write!(f, "hold"),
        }
    }
}

/// A classified rebalancing decision. `amount` is always non-negative;
/// the direction lives in `kind`, and `Hold` always carries `amount = 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub kind: ActionKind,
    pub amount: f64,
}

impl Action {
    /// Turn a target-minus-current delta into a decision.
    ///
    /// Deltas within `TOLERANCE` of zero are a hold, so tiny float residue
    /// never shows up as a one-cent trade.
    #[must_use]
    pub fn classify(delta: f64) -> Self {
        if delta.abs() < TOLERANCE {
            Self {
                kind: ActionKind::Hold,
                amount: 0.0,
            }
        } else if delta > 0.0 {
            Self {
                kind: ActionKind::Buy,
                amount: delta,
            }
        } else {
            Self {
                kind: ActionKind::Sell,
                amount: -delta,
            }
        }
    }
}
