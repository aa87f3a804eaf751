pub mod errors;
pub mod models;
pub mod services;

use models::{
    portfolio::Portfolio,
    position::Position,
    report::RebalanceReport,
    settings::{PeriodUnit, RebalanceFrequency, Settings},
    summary::PortfolioSummary,
};
use services::{position_service::PositionService, rebalance_service::RebalanceService};
use uuid::Uuid;

use errors::CoreError;

/// Dead zone shared by every comparison in the engine. Deltas, ratio
/// gaps and leftover budget smaller than this count as zero, so float
/// residue never surfaces as a one-cent trade.
pub const TOLERANCE: f64 = 0.01;

/// Main entry point for the Portfolio Balancer core library.
/// Holds the portfolio state and the services that operate on it.
#[must_use]
pub struct PortfolioBalancer {
    portfolio: Portfolio,
    position_service: PositionService,
    rebalance_service: RebalanceService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for PortfolioBalancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioBalancer")
            .field("positions", &self.portfolio.positions.len())
            .field("settings", &self.portfolio.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PortfolioBalancer {
    /// Create a brand new empty portfolio with default settings.
    pub fn create_new() -> Self {
        Self::build(Portfolio::default())
    }

    /// Create a portfolio pre-filled with the starter positions a first-time
    /// user sees, a three-fund split whose ratios already sum to 100%.
    pub fn create_with_starter_positions() -> Self {
        Self::build(Portfolio::with_default_positions())
    }

    /// Load a portfolio from a JSON snapshot previously produced by
    /// `to_json` (or written by the host's persistence layer).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        Ok(Self::build(portfolio))
    }

    /// Export the full portfolio (positions and settings) as a JSON
    /// snapshot for the host to persist.
    /// Clears the unsaved-changes flag on success.
    pub fn to_json(&mut self) -> Result<String, CoreError> {
        let json = serde_json::to_string_pretty(&self.portfolio)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize portfolio: {e}")))?;
        self.dirty = false;
        Ok(json)
    }

    // ── Position Management ─────────────────────────────────────────

    /// Add a fully specified position. Returns its id.
    pub fn add_position(
        &mut self,
        name: impl Into<String>,
        current_value: f64,
        target_ratio: f64,
    ) -> Uuid {
        let id = self
            .position_service
            .add_position(&mut self.portfolio, name, current_value, target_ratio);
        self.dirty = true;
        id
    }

    /// Add an empty row for the user to fill in. Its target ratio starts
    /// at the share of 100% still unclaimed. Returns its id.
    pub fn add_blank_position(&mut self) -> Uuid {
        let id = self.position_service.add_blank_position(&mut self.portfolio);
        self.dirty = true;
        id
    }

    /// Remove a position by its id.
    pub fn remove_position(&mut self, position_id: Uuid) -> Result<(), CoreError> {
        self.position_service
            .remove_position(&mut self.portfolio, position_id)?;
        self.dirty = true;
        Ok(())
    }

    /// Rename a position.
    pub fn rename_position(
        &mut self,
        position_id: Uuid,
        name: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.position_service
            .rename_position(&mut self.portfolio, position_id, name)?;
        self.dirty = true;
        Ok(())
    }

    /// Set a position's current value.
    pub fn set_position_value(
        &mut self,
        position_id: Uuid,
        current_value: f64,
    ) -> Result<(), CoreError> {
        self.position_service
            .set_current_value(&mut self.portfolio, position_id, current_value)?;
        self.dirty = true;
        Ok(())
    }

    /// Set a position's target ratio (percent).
    pub fn set_position_ratio(
        &mut self,
        position_id: Uuid,
        target_ratio: f64,
    ) -> Result<(), CoreError> {
        self.position_service
            .set_target_ratio(&mut self.portfolio, position_id, target_ratio)?;
        self.dirty = true;
        Ok(())
    }

    /// Get a single position by its id.
    #[must_use]
    pub fn get_position(&self, position_id: Uuid) -> Option<&Position> {
        self.position_service
            .get_position(&self.portfolio, position_id)
    }

    /// All positions, in the user's order.
    #[must_use]
    pub fn get_positions(&self) -> &[Position] {
        &self.portfolio.positions
    }

    /// Number of positions, valid or not.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.portfolio.positions.len()
    }

    // ── Totals & Summary ────────────────────────────────────────────

    /// Sum of all current values.
    #[must_use]
    pub fn get_total_value(&self) -> f64 {
        self.position_service.total_value(&self.portfolio)
    }

    /// Sum of all target ratios, in percent.
    #[must_use]
    pub fn get_total_target_ratio(&self) -> f64 {
        self.position_service.total_target_ratio(&self.portfolio)
    }

    /// Share of 100% not yet claimed by any position.
    #[must_use]
    pub fn get_remaining_ratio(&self) -> f64 {
        self.position_service.remaining_ratio(&self.portfolio)
    }

    /// Headline numbers for the portfolio form.
    #[must_use]
    pub fn get_summary(&self) -> PortfolioSummary {
        self.position_service.get_summary(&self.portfolio)
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Get current settings.
    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.portfolio.settings
    }

    /// Switch advanced mode (the monthly savings planner) on or off.
    pub fn set_advanced_mode(&mut self, enabled: bool) {
        self.portfolio.settings.is_advanced_mode = enabled;
        self.dirty = true;
    }

    /// Set the amount saved per month.
    pub fn set_monthly_savings(&mut self, amount: f64) {
        self.portfolio.settings.monthly_savings = amount;
        self.dirty = true;
    }

    /// Set the planning horizon, counted in the current period unit.
    pub fn set_planning_period(&mut self, period: u32) {
        self.portfolio.settings.planning_period = period;
        self.dirty = true;
    }

    /// Switch the planning period between months and years.
    pub fn set_period_unit(&mut self, unit: PeriodUnit) {
        self.portfolio.settings.period_unit = unit;
        self.dirty = true;
    }

    /// Set the intended rebalancing cadence.
    pub fn set_rebalance_frequency(&mut self, frequency: RebalanceFrequency) {
        self.portfolio.settings.rebalance_frequency = frequency;
        self.dirty = true;
    }

    // ── Calculation ─────────────────────────────────────────────────

    /// Run the rebalancing calculation on the current positions and
    /// settings.
    ///
    /// Returns a fresh report every time; nothing is cached, and the
    /// stored positions are not touched. Fails with
    /// `CoreError::NoPositions` when no position passes the validity
    /// filter.
    pub fn calculate(&self) -> Result<RebalanceReport, CoreError> {
        self.rebalance_service.calculate_rebalancing(
            &self.portfolio.positions,
            &self.portfolio.settings.planning_inputs(),
        )
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the portfolio has been modified since the last
    /// save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            position_service: PositionService::new(),
            rebalance_service: RebalanceService::new(),
            dirty: false,
        }
    }
}
