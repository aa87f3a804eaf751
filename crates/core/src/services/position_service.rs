use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;
use crate::models::position::Position;
use crate::models::summary::PortfolioSummary;
use crate::TOLERANCE;

/// Manages the position list the user edits in the form.
///
/// Pure bookkeeping, no calculation. Totals here run over the raw list,
/// half-filled rows included, because the form reflects exactly what the
/// user typed; the validity filter only applies once a calculation runs.
pub struct PositionService;

impl PositionService {
    pub fn new() -> Self {
        Self
    }

    /// Add a fully specified position. Returns the new position's id.
    pub fn add_position(
        &self,
        portfolio: &mut Portfolio,
        name: impl Into<String>,
        current_value: f64,
        target_ratio: f64,
    ) -> Uuid {
        let position = Position::new(name, current_value, target_ratio);
        let id = position.id;
        portfolio.positions.push(position);
        id
    }

    /// Add an empty row for the user to fill in. Its target ratio starts
    /// at whatever share of 100% the existing positions leave unclaimed,
    /// so a portfolio built row by row lands on 100% by itself.
    pub fn add_blank_position(&self, portfolio: &mut Portfolio) -> Uuid {
        let remaining = self.remaining_ratio(portfolio);
        self.add_position(portfolio, "", 0.0, remaining)
    }

    /// Remove a position by its UUID.
    pub fn remove_position(
        &self,
        portfolio: &mut Portfolio,
        position_id: Uuid,
    ) -> Result<(), CoreError> {
        let idx = portfolio
            .positions
            .iter()
            .position(|p| p.id == position_id)
            .ok_or(CoreError::PositionNotFound(position_id))?;
        portfolio.positions.remove(idx);
        Ok(())
    }

    /// Rename a position.
    pub fn rename_position(
        &self,
        portfolio: &mut Portfolio,
        position_id: Uuid,
        name: impl Into<String>,
    ) -> Result<(), CoreError> {
        self.find_mut(portfolio, position_id)?.name = name.into();
        Ok(())
    }

    /// Set a position's current value. Stored as given; whether the row
    /// counts is judged by the validity filter at calculation time.
    pub fn set_current_value(
        &self,
        portfolio: &mut Portfolio,
        position_id: Uuid,
        current_value: f64,
    ) -> Result<(), CoreError> {
        self.find_mut(portfolio, position_id)?.current_value = current_value;
        Ok(())
    }

    /// Set a position's target ratio (percent).
    pub fn set_target_ratio(
        &self,
        portfolio: &mut Portfolio,
        position_id: Uuid,
        target_ratio: f64,
    ) -> Result<(), CoreError> {
        self.find_mut(portfolio, position_id)?.target_ratio = target_ratio;
        Ok(())
    }

    /// Look up a position by id.
    #[must_use]
    pub fn get_position<'a>(
        &self,
        portfolio: &'a Portfolio,
        position_id: Uuid,
    ) -> Option<&'a Position> {
        portfolio.positions.iter().find(|p| p.id == position_id)
    }

    /// Sum of all current values.
    #[must_use]
    pub fn total_value(&self, portfolio: &Portfolio) -> f64 {
        portfolio.positions.iter().map(|p| p.current_value).sum()
    }

    /// Sum of all target ratios, in percent.
    #[must_use]
    pub fn total_target_ratio(&self, portfolio: &Portfolio) -> f64 {
        portfolio.positions.iter().map(|p| p.target_ratio).sum()
    }

    /// Share of 100% not yet claimed by any position, clamped at zero
    /// when the user already allocated more than 100%.
    #[must_use]
    pub fn remaining_ratio(&self, portfolio: &Portfolio) -> f64 {
        (100.0 - self.total_target_ratio(portfolio)).max(0.0)
    }

    /// Headline numbers for the form.
    #[must_use]
    pub fn get_summary(&self, portfolio: &Portfolio) -> PortfolioSummary {
        let total_target_ratio = self.total_target_ratio(portfolio);
        PortfolioSummary {
            total_value: self.total_value(portfolio),
            position_count: portfolio.positions.len(),
            total_target_ratio,
            fully_allocated: (total_target_ratio - 100.0).abs() < TOLERANCE,
        }
    }

    fn find_mut<'a>(
        &self,
        portfolio: &'a mut Portfolio,
        position_id: Uuid,
    ) -> Result<&'a mut Position, CoreError> {
        portfolio
            .positions
            .iter_mut()
            .find(|p| p.id == position_id)
            .ok_or(CoreError::PositionNotFound(position_id))
    }
}

impl Default for PositionService {
    fn default() -> Self {
        Self::new()
    }
}
