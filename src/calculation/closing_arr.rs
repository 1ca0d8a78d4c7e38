//! Closing-ARR adjustment.
//!
//! Applies a plan's renewal multiplier tiers to customer positions and totals
//! the adjusted ARR that counts toward an employee's payout.

use crate::models::{
    AuditStep, ClosingArrPayoutDetailRow, ClosingArrPosition, ClosingArrTotals,
    RenewalMultiplierTier,
};

use super::multiplier::resolve_multiplier_detailed;

/// The result of adjusting one closing-ARR position.
#[derive(Debug, Clone)]
pub struct ClosingArrResult {
    /// The computed detail row.
    pub row: ClosingArrPayoutDetailRow,
    /// The audit step recording the multiplier lookup.
    pub audit_step: AuditStep,
}

/// Computes the closing-ARR detail row for a customer position.
///
/// The multiplier is resolved from `tiers` by the position's renewal years and
/// `adjusted_arr_usd = closing_arr_usd * multiplier`. The row is eligible
/// exactly when the position has no exclusion reason; excluded rows still
/// carry their adjusted ARR for review.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::calculate_closing_arr;
/// use commission_engine::models::{ClosingArrPosition, RenewalMultiplierTier};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let tiers = vec![RenewalMultiplierTier {
///     min_years: 3,
///     max_years: None,
///     multiplier: Decimal::new(12, 1),
/// }];
/// let position = ClosingArrPosition {
///     payout_run_id: Uuid::from_u128(1),
///     employee_code: "EMP001".to_string(),
///     customer_position_id: Uuid::from_u128(2),
///     customer_name: "Acme".to_string(),
///     renewal_years: 3,
///     closing_arr_usd: Decimal::new(50_000, 0),
///     exclusion_reason: None,
/// };
///
/// let result = calculate_closing_arr(&position, &tiers, 1);
/// assert_eq!(result.row.adjusted_arr_usd, Decimal::new(60_000, 0));
/// assert!(result.row.is_eligible);
/// ```
pub fn calculate_closing_arr(
    position: &ClosingArrPosition,
    tiers: &[RenewalMultiplierTier],
    step_number: u32,
) -> ClosingArrResult {
    let resolution = resolve_multiplier_detailed(tiers, position.renewal_years);
    let multiplier = resolution.multiplier;
    let adjusted_arr_usd = position.closing_arr_usd * multiplier;
    let is_eligible = position.exclusion_reason.is_none();

    let tier_json = match resolution.matched_tier {
        Some(tier) => serde_json::json!({
            "min_years": tier.min_years,
            "max_years": tier.max_years,
            "multiplier": tier.multiplier.normalize().to_string()
        }),
        None => serde_json::Value::Null,
    };

    let tier_reasoning = match resolution.matched_tier {
        Some(tier) => match tier.max_years {
            Some(max) => format!("tier {}-{} years", tier.min_years, max),
            None => format!("tier {}+ years", tier.min_years),
        },
        None => "no matching tier, neutral multiplier".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "closing_arr_renewal_multiplier".to_string(),
        rule_name: "Closing ARR Renewal Multiplier".to_string(),
        input: serde_json::json!({
            "customer_position_id": position.customer_position_id.to_string(),
            "renewal_years": position.renewal_years,
            "closing_arr_usd": position.closing_arr_usd.normalize().to_string()
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "adjusted_arr_usd": adjusted_arr_usd.normalize().to_string(),
            "matched_tier": tier_json,
            "is_eligible": is_eligible
        }),
        reasoning: format!(
            "{} renewal years ({}): ${} x {} = ${}",
            position.renewal_years,
            tier_reasoning,
            position.closing_arr_usd.normalize(),
            multiplier.normalize(),
            adjusted_arr_usd.normalize()
        ),
    };

    let row = ClosingArrPayoutDetailRow {
        payout_run_id: position.payout_run_id,
        employee_code: position.employee_code.clone(),
        customer_position_id: position.customer_position_id,
        customer_name: position.customer_name.clone(),
        renewal_years: position.renewal_years,
        closing_arr_usd: position.closing_arr_usd,
        multiplier,
        adjusted_arr_usd,
        is_eligible,
        exclusion_reason: position.exclusion_reason.clone(),
    };

    ClosingArrResult { row, audit_step }
}

/// Totals closing-ARR rows; only eligible rows contribute adjusted ARR.
pub fn summarize_closing_arr(rows: &[ClosingArrPayoutDetailRow]) -> ClosingArrTotals {
    rows.iter()
        .fold(ClosingArrTotals::default(), |mut totals, row| {
            totals.total_closing_arr_usd += row.closing_arr_usd;
            if row.is_eligible {
                totals.eligible_adjusted_arr_usd += row.adjusted_arr_usd;
                totals.eligible_positions += 1;
            } else {
                totals.excluded_positions += 1;
            }
            totals
        })
}
