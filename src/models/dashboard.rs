//! Dashboard payout summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single payout aggregate for one employee and fiscal year.
///
/// When `is_from_payout_run` is false the summary carries no data and the
/// caller is expected to fall back to an independent estimate.
///
/// # Example
///
/// ```
/// use commission_engine::models::DashboardPayoutSummary;
/// use rust_decimal::Decimal;
///
/// let summary = DashboardPayoutSummary::fallback();
/// assert!(!summary.is_from_payout_run);
/// assert_eq!(summary.months_covered, 0);
/// assert_eq!(summary.total_eligible, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardPayoutSummary {
    /// Recognized variable pay in USD.
    pub total_variable_pay: Decimal,
    /// Recognized commission in USD.
    pub total_commission: Decimal,
    /// `total_variable_pay + total_commission`.
    pub total_eligible: Decimal,
    /// Amount released on booking in USD.
    pub total_paid: Decimal,
    /// Amount held until collection in USD.
    pub total_holding_collection: Decimal,
    /// Amount held until year end in USD.
    pub total_holding_year_end: Decimal,
    /// `total_holding_collection + total_holding_year_end`.
    pub total_holding: Decimal,
    /// True when the summary was built from finalized payout runs.
    pub is_from_payout_run: bool,
    /// Number of distinct periods that contributed records.
    pub months_covered: usize,
}

impl DashboardPayoutSummary {
    /// The zero-valued summary that signals a fallback estimate is needed.
    pub fn fallback() -> Self {
        Self::default()
    }
}
