//! Payout detail row model.
//!
//! A [`PayoutDetailRow`] is a single computed line item for one employee within
//! one payout run. Rows are produced by the external calculation and are
//! read-only here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ComponentType;

/// A computed payout line for one employee and component within a payout run.
///
/// # Example
///
/// ```
/// use commission_engine::models::{ComponentType, PayoutDetailRow};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let row = PayoutDetailRow {
///     payout_run_id: Uuid::from_u128(1),
///     employee_id: Uuid::from_u128(2),
///     component_type: ComponentType::VariablePay,
///     component_name: Some("New Software Booking ARR".to_string()),
///     target_usd: Decimal::new(100_000, 0),
///     actual_usd: Decimal::new(80_000, 0),
///     achievement_pct: Decimal::new(80, 0),
///     multiplier: Decimal::ONE,
///     ytd_eligible_usd: Decimal::new(8_000, 0),
///     prior_paid_usd: Decimal::new(5_000, 0),
///     this_period_usd: Decimal::new(3_000, 0),
///     booking_usd: Decimal::new(2_250, 0),
///     collection_usd: Decimal::new(750, 0),
///     year_end_usd: Decimal::ZERO,
/// };
/// assert_eq!(row.channel_total(), Decimal::new(3_000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutDetailRow {
    /// The payout run that produced this row.
    pub payout_run_id: Uuid,
    /// Internal row id of the employee.
    pub employee_id: Uuid,
    /// The component this row was computed for.
    pub component_type: ComponentType,
    /// The plan component's display name, if any.
    #[serde(default)]
    pub component_name: Option<String>,
    /// Target for the component in USD.
    pub target_usd: Decimal,
    /// Actual attainment in USD.
    pub actual_usd: Decimal,
    /// Achievement as a percentage of target.
    pub achievement_pct: Decimal,
    /// Multiplier applied by the calculation.
    pub multiplier: Decimal,
    /// Year-to-date eligible amount in USD.
    pub ytd_eligible_usd: Decimal,
    /// Amount paid in prior periods of the year in USD.
    pub prior_paid_usd: Decimal,
    /// Amount payable for this period in USD.
    pub this_period_usd: Decimal,
    /// Portion released on booking in USD.
    #[serde(default)]
    pub booking_usd: Decimal,
    /// Portion held until collection in USD.
    #[serde(default)]
    pub collection_usd: Decimal,
    /// Portion held until year end in USD.
    #[serde(default)]
    pub year_end_usd: Decimal,
}

impl PayoutDetailRow {
    /// Returns the sum of the booking, collection and year-end amounts.
    pub fn channel_total(&self) -> Decimal {
        self.booking_usd + self.collection_usd + self.year_end_usd
    }
}
