//! Employee workings models for payout-run review.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayoutDetailRow;

/// Per-employee totals over a payout run's detail rows.
///
/// Bucket totals sum `this_period_usd`; channel totals sum the cash-timing
/// amounts over every detail row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingsTotals {
    /// This-period amount across variable pay rows.
    pub variable_pay_usd: Decimal,
    /// This-period amount across commission rows.
    pub commission_usd: Decimal,
    /// This-period amount across all other rows.
    pub other_usd: Decimal,
    /// This-period amount across every row.
    pub this_period_usd: Decimal,
    /// Booking amounts across every row.
    pub booking_usd: Decimal,
    /// Collection-holding amounts across every row.
    pub collection_usd: Decimal,
    /// Year-end-holding amounts across every row.
    pub year_end_usd: Decimal,
}

/// All detail rows for one employee within one payout run, grouped by bucket.
///
/// Built fresh per query. Every row appears in `all_details` and in exactly
/// one of the bucket lists, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWorkings {
    /// Internal row id of the employee.
    pub employee_id: Uuid,
    /// Display name, or `"Unknown"` when the reference row is missing.
    pub employee_name: String,
    /// Employee code, or the raw id when the reference row is missing.
    pub employee_code: String,
    /// Local currency code, passed through unconverted.
    pub local_currency: Option<String>,
    /// Name of the assigned compensation plan.
    pub plan_name: Option<String>,
    /// Annual target bonus in USD.
    pub target_bonus_usd: Option<Decimal>,
    /// Variable pay rows.
    pub vp_details: Vec<PayoutDetailRow>,
    /// Commission rows.
    pub commission_details: Vec<PayoutDetailRow>,
    /// Rows that are neither variable pay nor commission.
    pub other_details: Vec<PayoutDetailRow>,
    /// Every row for the employee.
    pub all_details: Vec<PayoutDetailRow>,
    /// Totals by bucket and cash channel.
    pub totals: WorkingsTotals,
}
