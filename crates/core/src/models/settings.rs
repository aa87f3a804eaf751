use serde::{Deserialize, Serialize};

/// Unit for the planning-period input. The engine always works in whole
/// months; `Settings::planning_months` does the lowering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    Months,
    Years,
}

impl std::fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodUnit::Months => write!(f, "months"),
            PeriodUnit::Years => write!(f, "years"),
        }
    }
}

/// How often the user intends to re-run the rebalancing. Stored with the
/// portfolio and shown in the planning summary; it does not change any
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebalanceFrequency {
    Monthly,
    Quarterly,
    Yearly,
}

impl RebalanceFrequency {
    /// Interval length in months.
    #[must_use]
    pub fn months(&self) -> u32 {
        match self {
            RebalanceFrequency::Monthly => 1,
            RebalanceFrequency::Quarterly => 3,
            RebalanceFrequency::Yearly => 12,
        }
    }
}

impl std::fmt::Display for RebalanceFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RebalanceFrequency::Monthly => write!(f, "monthly"),
            RebalanceFrequency::Quarterly => write!(f, "quarterly"),
            RebalanceFrequency::Yearly => write!(f, "yearly"),
        }
    }
}

/// User-configurable settings, stored alongside the positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Advanced mode adds the monthly-savings planner to the calculation.
    pub is_advanced_mode: bool,

    /// Amount put aside each month while advanced mode is on
    pub monthly_savings: f64,

    /// Planning horizon, counted in `period_unit`s
    pub planning_period: u32,

    /// Whether `planning_period` counts months or years
    pub period_unit: PeriodUnit,

    /// Intended rebalancing cadence (display only)
    pub rebalance_frequency: RebalanceFrequency,
}

impl Settings {
    /// Planning horizon lowered to whole months. Saturates on absurd
    /// year counts rather than overflowing.
    #[must_use]
    pub fn planning_months(&self) -> u32 {
        match self.period_unit {
            PeriodUnit::Months => self.planning_period,
            PeriodUnit::Years => self.planning_period.saturating_mul(12),
        }
    }

    /// The engine-facing subset of these settings.
    #[must_use]
    pub fn planning_inputs(&self) -> PlanningSettings {
        PlanningSettings {
            advanced_mode_enabled: self.is_advanced_mode,
            monthly_savings: self.monthly_savings,
            planning_months: self.planning_months(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_advanced_mode: false,
            monthly_savings: 0.0,
            planning_period: 12,
            period_unit: PeriodUnit::Months,
            rebalance_frequency: RebalanceFrequency::Monthly,
        }
    }
}

/// The inputs the calculation engine actually consumes. A plain value type
/// so the planner can be driven without a full `Settings` in front of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningSettings {
    /// Include the monthly savings plan in the calculation
    pub advanced_mode_enabled: bool,

    /// Contribution added each month (ignored unless advanced mode is on)
    pub monthly_savings: f64,

    /// Horizon length in months
    pub planning_months: u32,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            advanced_mode_enabled: false,
            monthly_savings: 0.0,
            planning_months: 12,
        }
    }
}
