use serde::{Deserialize, Serialize};

use super::action::Action;
use super::position::Position;
use super::strategy::MonthlyStrategyEntry;

/// The subject of one report row: either a real holding from the user's
/// portfolio, or the synthetic remainder bucket that absorbs whatever
/// share of 100% the target ratios left unclaimed (or over-claimed).
///
/// The bucket is its own variant rather than a `Position` with a reserved
/// id, so a real position that happens to be named "unspent" can never be
/// confused with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReportEntry {
    /// A position the user actually holds
    Holding(Position),

    /// The allocation gap. `target_ratio` is `100 − Σ target_ratio` over
    /// the valid positions and is negative when the user allocated more
    /// than 100%.
    #[serde(rename_all = "camelCase")]
    Unspent { target_ratio: f64 },
}

impl ReportEntry {
    /// Display name: the position's own name, or the fixed label
    /// "unspent" that hosts translate before showing.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            ReportEntry::Holding(position) => &position.name,
            ReportEntry::Unspent { .. } => "unspent",
        }
    }

    /// Current value entering the calculation. The bucket holds nothing.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        match self {
            ReportEntry::Holding(position) => position.current_value,
            ReportEntry::Unspent { .. } => 0.0,
        }
    }

    #[must_use]
    pub fn target_ratio(&self) -> f64 {
        match self {
            ReportEntry::Holding(position) => position.target_ratio,
            ReportEntry::Unspent { target_ratio } => *target_ratio,
        }
    }

    #[must_use]
    pub fn is_unspent(&self) -> bool {
        matches!(self, ReportEntry::Unspent { .. })
    }

    /// The underlying position, if this row is one.
    #[must_use]
    pub fn position(&self) -> Option<&Position> {
        match self {
            ReportEntry::Holding(position) => Some(position),
            ReportEntry::Unspent { .. } => None,
        }
    }
}

/// One fully worked-out report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedResult {
    /// What this row is about
    pub entry: ReportEntry,

    /// Value this entry should hold: `target_ratio / 100 × target_total`
    pub target_value: f64,

    /// `target_value − current_value`; positive means money has to go in
    pub delta: f64,

    /// Share of the current total this entry holds today, in percent.
    /// 0 when the portfolio is empty.
    pub current_ratio: f64,

    /// Part of the delta covered by planned monthly savings
    pub from_savings: f64,

    /// Part of the delta covered by shifting existing money around:
    /// `delta − from_savings`
    pub from_rebalancing: f64,

    /// The classified decision for this row
    pub action: Action,
}

/// Everything one calculation produces. A fresh value every time; the
/// engine keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceReport {
    /// One row per valid position, plus the unspent bucket last when
    /// `has_unspent` is set
    pub results: Vec<CalculatedResult>,

    /// Sum of `current_value` over the valid positions
    pub total_current_value: f64,

    /// Portfolio value being aimed at: current total, plus the planned
    /// savings when advanced mode is on
    pub target_total: f64,

    /// Planning horizon in months
    pub total_months: u32,

    /// Whether the target ratios missed 100% and a bucket row was added
    pub has_unspent: bool,

    /// Month-by-month funding plan; empty outside savings mode
    pub monthly_strategy: Vec<MonthlyStrategyEntry>,
}

impl RebalanceReport {
    /// Total the savings plan actually places, summed over every buy in
    /// every month. Falls short of `monthly_savings × total_months` when
    /// all targets are reached before the horizon ends, since the planner
    /// stops once nothing needs money.
    #[must_use]
    pub fn invested_savings(&self) -> f64 {
        self.monthly_strategy
            .iter()
            .flat_map(|month| &month.actions)
            .map(|action| action.amount)
            .sum()
    }
}
