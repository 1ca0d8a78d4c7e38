//! Employee aggregation for payout-run review.
//!
//! Groups a payout run's detail rows by employee, routes each row into its
//! taxonomy bucket and rolls up per-employee totals.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::models::{EmployeeWorkings, PayoutDetailRow, WorkingsTotals};

use super::classification::{Classify, PayoutBucket};
use super::enrichment::{EmployeeDirectory, JoinKey};

/// Groups detail rows into one [`EmployeeWorkings`] per employee.
///
/// Rows are expected to belong to a single payout run. Every row lands in
/// `all_details` and in exactly one bucket list, in input order. Employees with
/// no reference row are reported as `"Unknown"` with their raw id as the code.
///
/// The result is sorted by display name (case-sensitive, ascending); employees
/// sharing a name keep the order in which they first appear in `details`.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::{group_employee_workings, EmployeeDirectory};
///
/// let workings = group_employee_workings(&[], &EmployeeDirectory::default());
/// assert!(workings.is_empty());
/// ```
pub fn group_employee_workings(
    details: &[PayoutDetailRow],
    directory: &EmployeeDirectory,
) -> Vec<EmployeeWorkings> {
    let mut order: Vec<Uuid> = Vec::new();
    let mut grouped: HashMap<Uuid, EmployeeWorkings> = HashMap::new();

    for row in details {
        let workings = grouped.entry(row.employee_id).or_insert_with(|| {
            order.push(row.employee_id);
            new_workings(row, directory)
        });
        add_row(workings, row);
    }

    let mut result: Vec<EmployeeWorkings> = order
        .iter()
        .filter_map(|id| grouped.remove(id))
        .collect();
    result.sort_by(|a, b| a.employee_name.cmp(&b.employee_name));

    debug!(
        rows = details.len(),
        employees = result.len(),
        "Grouped payout details by employee"
    );

    result
}

fn new_workings(row: &PayoutDetailRow, directory: &EmployeeDirectory) -> EmployeeWorkings {
    let display = directory.display_for(row, JoinKey::EmployeeId);
    let (plan_name, target_bonus_usd) = match display.plan {
        Some(plan) => (Some(plan.plan_name), Some(plan.target_bonus_usd)),
        None => (None, None),
    };

    EmployeeWorkings {
        employee_id: row.employee_id,
        employee_name: display.name,
        employee_code: display.code,
        local_currency: display.local_currency,
        plan_name,
        target_bonus_usd,
        vp_details: Vec::new(),
        commission_details: Vec::new(),
        other_details: Vec::new(),
        all_details: Vec::new(),
        totals: WorkingsTotals::default(),
    }
}

fn add_row(workings: &mut EmployeeWorkings, row: &PayoutDetailRow) {
    let totals = &mut workings.totals;
    match row.classify().bucket {
        PayoutBucket::VariablePay => {
            totals.variable_pay_usd += row.this_period_usd;
            workings.vp_details.push(row.clone());
        }
        PayoutBucket::Commission => {
            totals.commission_usd += row.this_period_usd;
            workings.commission_details.push(row.clone());
        }
        PayoutBucket::Other => {
            totals.other_usd += row.this_period_usd;
            workings.other_details.push(row.clone());
        }
    }

    totals.this_period_usd += row.this_period_usd;
    totals.booking_usd += row.booking_usd;
    totals.collection_usd += row.collection_usd;
    totals.year_end_usd += row.year_end_usd;
    workings.all_details.push(row.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentType, EmployeeReference, PlanAssignment};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn row(employee: u128, component_type: ComponentType, this_period: &str) -> PayoutDetailRow {
        PayoutDetailRow {
            payout_run_id: Uuid::from_u128(1000),
            employee_id: Uuid::from_u128(employee),
            component_type,
            component_name: None,
            target_usd: dec("10000"),
            actual_usd: dec("9000"),
            achievement_pct: dec("90"),
            multiplier: Decimal::ONE,
            ytd_eligible_usd: dec(this_period),
            prior_paid_usd: Decimal::ZERO,
            this_period_usd: dec(this_period),
            booking_usd: dec(this_period),
            collection_usd: Decimal::ZERO,
            year_end_usd: Decimal::ZERO,
        }
    }

    fn reference(n: u128, code: &str, name: &str) -> EmployeeReference {
        EmployeeReference {
            id: Uuid::from_u128(n),
            code: code.to_string(),
            display_name: name.to_string(),
            local_currency: None,
            plan: None,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let directory = EmployeeDirectory::new(vec![reference(1, "EMP001", "Jordan Lee")]);
        assert!(group_employee_workings(&[], &directory).is_empty());
    }

    #[test]
    fn test_two_employees_sorted_by_display_name() {
        let directory = EmployeeDirectory::new(vec![
            reference(1, "EMP001", "Zoe Tran"),
            reference(2, "EMP002", "Alex Kim"),
        ]);
        let details = vec![
            row(1, ComponentType::VariablePay, "100"),
            row(2, ComponentType::Commission, "200"),
            row(1, ComponentType::Commission, "50"),
        ];

        let workings = group_employee_workings(&details, &directory);

        assert_eq!(workings.len(), 2);
        assert_eq!(workings[0].employee_name, "Alex Kim");
        assert_eq!(workings[0].employee_code, "EMP002");
        assert_eq!(workings[1].employee_name, "Zoe Tran");
        assert_eq!(workings[1].all_details.len(), 2);
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let directory = EmployeeDirectory::new(vec![
            reference(1, "EMP001", "alex"),
            reference(2, "EMP002", "Bea"),
        ]);
        let details = vec![
            row(1, ComponentType::VariablePay, "1"),
            row(2, ComponentType::VariablePay, "1"),
        ];

        let workings = group_employee_workings(&details, &directory);

        // Uppercase sorts before lowercase
        assert_eq!(workings[0].employee_name, "Bea");
        assert_eq!(workings[1].employee_name, "alex");
    }

    #[test]
    fn test_rows_route_into_exactly_one_bucket() {
        let directory = EmployeeDirectory::new(vec![reference(1, "EMP001", "Jordan Lee")]);
        let details = vec![
            row(1, ComponentType::VariablePay, "100"),
            row(1, ComponentType::Commission, "40"),
            row(1, ComponentType::Other, "5"),
            row(1, ComponentType::Commission, "60"),
        ];

        let workings = group_employee_workings(&details, &directory);
        let employee = &workings[0];

        assert_eq!(employee.vp_details.len(), 1);
        assert_eq!(employee.commission_details.len(), 2);
        assert_eq!(employee.other_details.len(), 1);
        assert_eq!(employee.all_details, details);
        assert_eq!(employee.commission_details[0].this_period_usd, dec("40"));
        assert_eq!(employee.commission_details[1].this_period_usd, dec("60"));
    }

    #[test]
    fn test_totals_by_bucket_and_channel() {
        let directory = EmployeeDirectory::new(vec![reference(1, "EMP001", "Jordan Lee")]);
        let mut held = row(1, ComponentType::Commission, "300");
        held.booking_usd = dec("200");
        held.collection_usd = dec("75");
        held.year_end_usd = dec("25");
        let details = vec![row(1, ComponentType::VariablePay, "100"), held];

        let totals = &group_employee_workings(&details, &directory)[0].totals;

        assert_eq!(totals.variable_pay_usd, dec("100"));
        assert_eq!(totals.commission_usd, dec("300"));
        assert_eq!(totals.other_usd, Decimal::ZERO);
        assert_eq!(totals.this_period_usd, dec("400"));
        assert_eq!(totals.booking_usd, dec("300"));
        assert_eq!(totals.collection_usd, dec("75"));
        assert_eq!(totals.year_end_usd, dec("25"));
    }

    #[test]
    fn test_missing_reference_yields_unknown_without_dropping_rows() {
        let directory = EmployeeDirectory::new(vec![reference(1, "EMP001", "Jordan Lee")]);
        let details = vec![
            row(1, ComponentType::VariablePay, "100"),
            row(9, ComponentType::Commission, "70"),
        ];

        let workings = group_employee_workings(&details, &directory);

        assert_eq!(workings.len(), 2);
        let unknown = workings
            .iter()
            .find(|w| w.employee_id == Uuid::from_u128(9))
            .unwrap();
        assert_eq!(unknown.employee_name, "Unknown");
        assert_eq!(unknown.employee_code, Uuid::from_u128(9).to_string());
        assert_eq!(unknown.all_details.len(), 1);
        assert_eq!(unknown.commission_details.len(), 1);
    }

    #[test]
    fn test_plan_assignment_is_denormalized() {
        let mut jordan = reference(1, "EMP001", "Jordan Lee");
        jordan.local_currency = Some("AUD".to_string());
        jordan.plan = Some(PlanAssignment {
            plan_name: "Enterprise AE".to_string(),
            target_bonus_usd: dec("45000"),
        });
        let directory = EmployeeDirectory::new(vec![jordan]);

        let workings =
            group_employee_workings(&[row(1, ComponentType::VariablePay, "1")], &directory);

        assert_eq!(workings[0].plan_name.as_deref(), Some("Enterprise AE"));
        assert_eq!(workings[0].target_bonus_usd, Some(dec("45000")));
        assert_eq!(workings[0].local_currency.as_deref(), Some("AUD"));
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let directory = EmployeeDirectory::new(vec![
            reference(1, "EMP001", "Jordan Lee"),
            reference(2, "EMP002", "Sam Okafor"),
        ]);
        let details = vec![
            row(2, ComponentType::Commission, "20"),
            row(1, ComponentType::VariablePay, "10"),
        ];

        assert_eq!(
            group_employee_workings(&details, &directory),
            group_employee_workings(&details, &directory)
        );
    }
}
