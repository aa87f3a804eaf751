use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::action::{Action, ActionKind};
use crate::models::position::Position;
use crate::models::report::{CalculatedResult, RebalanceReport, ReportEntry};
use crate::models::settings::PlanningSettings;
use crate::models::strategy::MonthlyStrategyEntry;
use crate::services::savings_service::SavingsService;
use crate::TOLERANCE;

/// Turns a position snapshot and the planning settings into a full
/// rebalancing report: per-position targets, buy/sell/hold decisions and,
/// in advanced mode, the monthly savings plan with its attribution.
pub struct RebalanceService {
    savings_service: SavingsService,
}

impl RebalanceService {
    pub fn new() -> Self {
        Self {
            savings_service: SavingsService::new(),
        }
    }

    /// Run one calculation.
    ///
    /// The snapshot is read, never mutated; all work happens on a private
    /// copy. Calling this twice with identical inputs yields an identical
    /// report.
    pub fn calculate_rebalancing(
        &self,
        positions: &[Position],
        settings: &PlanningSettings,
    ) -> Result<RebalanceReport, CoreError> {
        // 1. Keep only rows that are actually filled in.
        let valid_positions: Vec<Position> =
            positions.iter().filter(|p| p.is_valid()).cloned().collect();
        if valid_positions.is_empty() {
            return Err(CoreError::NoPositions);
        }

        // 2. Totals. In advanced mode the portfolio is steered toward the
        //    value it will have once the whole savings horizon is paid in.
        let total_current_value: f64 = valid_positions.iter().map(|p| p.current_value).sum();
        let total_months = settings.planning_months;
        let mut target_total = total_current_value;
        if settings.advanced_mode_enabled && settings.monthly_savings > 0.0 {
            target_total += settings.monthly_savings * total_months as f64;
        }

        // 3. Allocation gap. When the declared ratios miss 100%, a
        //    synthetic bucket row absorbs the signed difference.
        let total_ratio: f64 = valid_positions.iter().map(|p| p.target_ratio).sum();
        let has_unspent = (total_ratio - 100.0).abs() > TOLERANCE;

        let mut entries: Vec<ReportEntry> = valid_positions
            .iter()
            .cloned()
            .map(ReportEntry::Holding)
            .collect();
        if has_unspent {
            entries.push(ReportEntry::Unspent {
                target_ratio: 100.0 - total_ratio,
            });
        }

        // 4. Savings plan, and how much of it lands on each name.
        let savings_active = settings.advanced_mode_enabled
            && settings.monthly_savings > 0.0
            && total_months > 0;
        let monthly_strategy: Vec<MonthlyStrategyEntry> = if savings_active {
            self.savings_service.generate_monthly_strategy(
                &valid_positions,
                total_months,
                settings.monthly_savings,
            )
        } else {
            Vec::new()
        };
        let savings_by_name = Self::savings_by_name(&monthly_strategy);

        // 5. Work out every row.
        let results: Vec<CalculatedResult> = entries
            .into_iter()
            .map(|entry| {
                let target_value = (entry.target_ratio() / 100.0) * target_total;
                let delta = target_value - entry.current_value();
                let current_ratio = if total_current_value > 0.0 {
                    (entry.current_value() / total_current_value) * 100.0
                } else {
                    0.0
                };
                // The bucket holds no money and never receives savings;
                // only real holdings take part in attribution.
                let from_savings = if entry.is_unspent() {
                    0.0
                } else {
                    savings_by_name.get(entry.name()).copied().unwrap_or(0.0)
                };
                let from_rebalancing = delta - from_savings;
                let action = Action::classify(delta);
                CalculatedResult {
                    entry,
                    target_value,
                    delta,
                    current_ratio,
                    from_savings,
                    from_rebalancing,
                    action,
                }
            })
            .collect();

        Ok(RebalanceReport {
            results,
            total_current_value,
            target_total,
            total_months,
            has_unspent,
            monthly_strategy,
        })
    }

    /// Total buy amount per position name across the whole plan.
    ///
    /// Keyed by display name: the plan's actions are worded by name, so
    /// two positions sharing a name share one attribution pot. Callers
    /// that care must keep names unique.
    fn savings_by_name(strategy: &[MonthlyStrategyEntry]) -> HashMap<String, f64> {
        let mut by_name: HashMap<String, f64> = HashMap::new();
        for month in strategy {
            for action in &month.actions {
                if action.kind == ActionKind::Buy {
                    *by_name.entry(action.position_name.clone()).or_insert(0.0) += action.amount;
                }
            }
        }
        by_name
    }
}

impl Default for RebalanceService {
    fn default() -> Self {
        Self::new()
    }
}
