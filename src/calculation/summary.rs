//! Dashboard payout summary aggregation.
//!
//! Reduces one employee's monthly payout records for a fiscal year into a
//! single [`DashboardPayoutSummary`].

use std::collections::HashSet;

use tracing::debug;

use crate::models::{DashboardPayoutSummary, MonthlyPayoutRecord};

use super::classification::{Classify, PayoutBucket};

/// Summarizes monthly payout records into eligible, paid and holding totals.
///
/// An empty input yields [`DashboardPayoutSummary::fallback`], which tells the
/// caller to use an independent estimate. Otherwise:
///
/// - release and clawback records are skipped entirely;
/// - every other record adds `calculated_amount_usd` to variable pay (bucket
///   `VariablePay`) or commission (any other bucket), and adds its booking,
///   collection and year-end amounts to the paid and holding totals;
/// - `months_covered` counts the distinct periods of all records.
///
/// The result depends only on the multiset of records, not their order.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::summarize_payouts;
/// use commission_engine::models::MonthlyPayoutRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = |payout_type: &str, calc: i64, booking: i64| MonthlyPayoutRecord {
///     employee_code: "EMP001".to_string(),
///     period_id: Uuid::from_u128(1),
///     period_month: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     payout_type: payout_type.parse().unwrap(),
///     calculated_amount_usd: Decimal::from(calc),
///     booking_amount_usd: Decimal::from(booking),
///     collection_amount_usd: Decimal::ZERO,
///     year_end_amount_usd: Decimal::ZERO,
/// };
///
/// let summary = summarize_payouts(&[record("Variable Pay", 100, 50), record("Clawback", 30, 0)]);
/// assert_eq!(summary.total_variable_pay, Decimal::from(100));
/// assert_eq!(summary.total_eligible, Decimal::from(100));
/// assert_eq!(summary.total_paid, Decimal::from(50));
/// assert!(summary.is_from_payout_run);
/// ```
pub fn summarize_payouts(records: &[MonthlyPayoutRecord]) -> DashboardPayoutSummary {
    if records.is_empty() {
        debug!("No payout records; returning fallback summary");
        return DashboardPayoutSummary::fallback();
    }

    let mut summary = DashboardPayoutSummary::default();
    let mut periods = HashSet::new();
    let mut skipped = 0usize;

    for record in records {
        periods.insert(record.period_id);

        let classification = record.classify();
        if !classification.counts_toward_eligible {
            skipped += 1;
            continue;
        }

        match classification.bucket {
            PayoutBucket::VariablePay => summary.total_variable_pay += record.calculated_amount_usd,
            PayoutBucket::Commission | PayoutBucket::Other => {
                summary.total_commission += record.calculated_amount_usd
            }
        }

        summary.total_paid += record.booking_amount_usd;
        summary.total_holding_collection += record.collection_amount_usd;
        summary.total_holding_year_end += record.year_end_amount_usd;
    }

    summary.total_eligible = summary.total_variable_pay + summary.total_commission;
    summary.total_holding = summary.total_holding_collection + summary.total_holding_year_end;
    summary.is_from_payout_run = true;
    summary.months_covered = periods.len();

    debug!(
        records = records.len(),
        skipped,
        months_covered = summary.months_covered,
        total_eligible = %summary.total_eligible,
        "Summarized payout records"
    );

    summary
}
