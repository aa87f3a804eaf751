use serde::{Deserialize, Serialize};

/// Headline numbers for the portfolio form, recomputed on demand from the
/// raw position list (unlike a calculation, this includes half-filled
/// rows the validity filter would skip).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of all current values
    pub total_value: f64,

    /// Number of positions, valid or not
    pub position_count: usize,

    /// Sum of all target ratios, in percent
    pub total_target_ratio: f64,

    /// Whether the target ratios land on 100% (within the shared
    /// tolerance), i.e. a calculation would need no unspent bucket
    pub fully_allocated: bool,
}
