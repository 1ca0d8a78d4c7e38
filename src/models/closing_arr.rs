//! Closing-ARR position and payout detail models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer position contributing closing ARR to an employee's payout.
///
/// This is the input side of the closing-ARR adjustment; the multiplier and
/// adjusted ARR are filled in by the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingArrPosition {
    /// The payout run the position is evaluated in.
    pub payout_run_id: Uuid,
    /// Human-facing employee code.
    pub employee_code: String,
    /// Identifier of the customer position.
    pub customer_position_id: Uuid,
    /// Customer display name.
    pub customer_name: String,
    /// Contract renewal term in years.
    pub renewal_years: u32,
    /// Raw closing ARR in USD.
    pub closing_arr_usd: Decimal,
    /// Reason the position is excluded, if it is.
    #[serde(default)]
    pub exclusion_reason: Option<String>,
}

/// A per-employee, per-customer-position closing-ARR line item.
///
/// `is_eligible` is false exactly when `exclusion_reason` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingArrPayoutDetailRow {
    /// The payout run the row belongs to.
    pub payout_run_id: Uuid,
    /// Human-facing employee code.
    pub employee_code: String,
    /// Identifier of the customer position.
    pub customer_position_id: Uuid,
    /// Customer display name.
    pub customer_name: String,
    /// Contract renewal term in years.
    pub renewal_years: u32,
    /// Raw closing ARR in USD.
    pub closing_arr_usd: Decimal,
    /// Multiplier resolved from the plan's renewal tiers.
    pub multiplier: Decimal,
    /// `closing_arr_usd * multiplier`.
    pub adjusted_arr_usd: Decimal,
    /// Whether the position counts toward the employee's closing ARR.
    pub is_eligible: bool,
    /// Why the position is excluded, when it is.
    pub exclusion_reason: Option<String>,
}

/// Totals over a set of closing-ARR rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingArrTotals {
    /// Raw closing ARR over all rows, eligible or not.
    pub total_closing_arr_usd: Decimal,
    /// Adjusted ARR over eligible rows only.
    pub eligible_adjusted_arr_usd: Decimal,
    /// Number of eligible rows.
    pub eligible_positions: usize,
    /// Number of excluded rows.
    pub excluded_positions: usize,
}
