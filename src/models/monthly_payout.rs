//! Monthly payout record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayoutType;

/// One payout row per employee, period and payout type.
///
/// `calculated_amount_usd` is the recognized amount. The booking, collection
/// and year-end amounts are cash-timing facts tracked independently of it and
/// are not mutually exclusive with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayoutRecord {
    /// Human-facing employee code.
    pub employee_code: String,
    /// The period this record belongs to.
    pub period_id: Uuid,
    /// First day of the period's calendar month.
    pub period_month: NaiveDate,
    /// The declared payout type.
    pub payout_type: PayoutType,
    /// Recognized (eligible) amount in USD.
    pub calculated_amount_usd: Decimal,
    /// Amount released on booking in USD.
    #[serde(default)]
    pub booking_amount_usd: Decimal,
    /// Amount held until collection in USD.
    #[serde(default)]
    pub collection_amount_usd: Decimal,
    /// Amount held until year end in USD.
    #[serde(default)]
    pub year_end_amount_usd: Decimal,
}
