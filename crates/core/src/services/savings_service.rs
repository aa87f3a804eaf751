use crate::models::action::ActionKind;
use crate::models::position::Position;
use crate::models::strategy::{MonthAction, MonthlyStrategyEntry};
use crate::TOLERANCE;

/// Plans how a recurring monthly contribution is spread across the
/// portfolio over the planning horizon.
///
/// Each month funds the single position furthest below its final target
/// before touching any other, so a typical month is one transfer for the
/// user to execute. Allocations are lumpy along the way; proportions only
/// have to be right once the horizon ends.
pub struct SavingsService;

/// Per-position working state while the plan is built.
struct FundingState {
    name: String,
    current_value: f64,
    needed: f64,
}

impl SavingsService {
    pub fn new() -> Self {
        Self
    }

    /// Build the month-by-month funding plan.
    ///
    /// Final targets are fixed once up front, from the value the portfolio
    /// will have when every contribution is in: current total plus
    /// `monthly_amount × total_months`. Positions already above their
    /// final target are never selected; the plan only adds money.
    ///
    /// Returns exactly `total_months` entries. Once every position's
    /// remaining need drops to zero the month stops allocating, so later
    /// months carry empty action lists and any leftover contribution is
    /// not redistributed.
    #[must_use]
    pub fn generate_monthly_strategy(
        &self,
        positions: &[Position],
        total_months: u32,
        monthly_amount: f64,
    ) -> Vec<MonthlyStrategyEntry> {
        let total_current_value: f64 = positions.iter().map(|p| p.current_value).sum();
        let final_total = total_current_value + monthly_amount * total_months as f64;

        // Working copy; the caller's positions are never touched.
        let mut states: Vec<FundingState> = positions
            .iter()
            .map(|p| {
                let final_target = (p.target_ratio / 100.0) * final_total;
                FundingState {
                    name: p.name.clone(),
                    current_value: p.current_value,
                    needed: final_target - p.current_value,
                }
            })
            .collect();

        let mut strategy = Vec::with_capacity(total_months as usize);

        for month in 1..=total_months {
            let mut actions = Vec::new();
            let mut remaining = monthly_amount;

            // Fund the neediest position until the month's budget is spent
            // or nothing needs money anymore.
            while remaining > TOLERANCE {
                let Some(idx) = Self::neediest(&states) else {
                    break;
                };
                if states[idx].needed <= TOLERANCE {
                    break;
                }
                let invest = states[idx].needed.min(remaining);
                if invest <= TOLERANCE {
                    break;
                }
                actions.push(MonthAction {
                    position_name: states[idx].name.clone(),
                    kind: ActionKind::Buy,
                    amount: invest,
                });
                states[idx].current_value += invest;
                states[idx].needed -= invest;
                remaining -= invest;
            }

            strategy.push(MonthlyStrategyEntry {
                month,
                portfolio_value: states.iter().map(|s| s.current_value).sum(),
                actions,
            });
        }

        strategy
    }

    /// Index of the position with the largest remaining need.
    ///
    /// Ties go to the earliest position in the user's ordering, which is
    /// why this is a hand-rolled scan: `Iterator::max_by` keeps the last
    /// of equal elements, not the first.
    fn neediest(states: &[FundingState]) -> Option<usize> {
        if states.is_empty() {
            return None;
        }
        let mut best = 0;
        for (idx, state) in states.iter().enumerate().skip(1) {
            if state.needed > states[best].needed {
                best = idx;
            }
        }
        Some(best)
    }
}

impl Default for SavingsService {
    fn default() -> Self {
        Self::new()
    }
}
