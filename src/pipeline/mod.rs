//! Fetch pipeline feeding the calculation core.
//!
//! Each load is a two-phase dependent read: phase 1 fetches the primary rows,
//! phase 2 fetches employee reference rows for the distinct identifiers found
//! in phase 1. An empty phase 1 short-circuits to [`FetchStage::Empty`] and no
//! reference query is issued. The fetched rows are then handed to the pure
//! transformations in [`crate::calculation`].

mod memory;
mod source;

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{
    EmployeeDirectory, EmployeeLinked, Enriched, JoinKey, calculate_closing_arr, enrich,
    group_employee_workings, summarize_closing_arr, summarize_payouts,
};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, ClosingArrPayoutDetailRow, ClosingArrTotals, DashboardPayoutSummary,
    EmployeeWorkings, RenewalMultiplierTier,
};

pub use memory::InMemorySource;
pub use source::CompensationSource;

/// The outcome of the two-phase fetch.
#[derive(Debug, Clone)]
pub enum FetchStage<T> {
    /// Phase 1 returned no rows; phase 2 was skipped.
    Empty,
    /// Primary rows and the reference directory for their employees.
    Fetched {
        /// The primary rows, in source order.
        rows: Vec<T>,
        /// Reference rows for the distinct employees in `rows`.
        directory: EmployeeDirectory,
    },
}

impl<T: EmployeeLinked> FetchStage<T> {
    /// Runs phase 2 for the primary `rows`, looking employees up by `key`.
    pub async fn resolve<S: CompensationSource>(
        source: &S,
        rows: Vec<T>,
        key: JoinKey,
    ) -> EngineResult<Self> {
        if rows.is_empty() {
            debug!(key = ?key, "Primary fetch returned no rows; skipping reference lookup");
            return Ok(FetchStage::Empty);
        }

        let references = match key {
            JoinKey::EmployeeId => {
                let ids = distinct(rows.iter().filter_map(|row| row.employee_id()));
                debug!(rows = rows.len(), employees = ids.len(), "Fetching employees by id");
                source.employees_by_id(&ids).await?
            }
            JoinKey::EmployeeCode => {
                let codes = distinct(
                    rows.iter()
                        .filter_map(|row| row.employee_code().map(str::to_string)),
                );
                debug!(rows = rows.len(), employees = codes.len(), "Fetching employees by code");
                source.employees_by_code(&codes).await?
            }
        };

        Ok(FetchStage::Fetched {
            rows,
            directory: EmployeeDirectory::new(references),
        })
    }
}

/// Collects distinct values in first-seen order.
fn distinct<T: Clone + Eq + Hash>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

/// Closing-ARR rows for a payout run with their totals and audit trail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosingArrReport {
    /// Adjusted rows with employee display attributes, in source order.
    pub rows: Vec<Enriched<ClosingArrPayoutDetailRow>>,
    /// Totals over `rows`.
    pub totals: ClosingArrTotals,
    /// One audit step per row.
    pub audit_steps: Vec<AuditStep>,
}

/// Loads a payout run's detail rows and groups them into employee workings.
///
/// A run with no detail rows yields an empty list.
pub async fn load_payout_run_workings<S: CompensationSource>(
    source: &S,
    payout_run_id: Uuid,
) -> EngineResult<Vec<EmployeeWorkings>> {
    let details = source.payout_details(payout_run_id).await?;

    let workings = match FetchStage::resolve(source, details, JoinKey::EmployeeId).await? {
        FetchStage::Empty => Vec::new(),
        FetchStage::Fetched { rows, directory } => group_employee_workings(&rows, &directory),
    };

    info!(
        payout_run_id = %payout_run_id,
        employees = workings.len(),
        "Built payout run workings"
    );

    Ok(workings)
}

/// Loads an employee's monthly payouts for a fiscal year and summarizes them.
///
/// No records yields the fallback summary.
pub async fn load_dashboard_summary<S: CompensationSource>(
    source: &S,
    employee_code: &str,
    fiscal_year: i32,
) -> EngineResult<DashboardPayoutSummary> {
    let records = source.monthly_payouts(employee_code, fiscal_year).await?;
    let summary = summarize_payouts(&records);

    info!(
        employee_code,
        fiscal_year,
        is_from_payout_run = summary.is_from_payout_run,
        months_covered = summary.months_covered,
        "Built dashboard payout summary"
    );

    Ok(summary)
}

/// Loads a payout run's closing-ARR positions and adjusts them with `tiers`.
///
/// A run with no positions yields an empty report.
pub async fn load_closing_arr_details<S: CompensationSource>(
    source: &S,
    payout_run_id: Uuid,
    tiers: &[RenewalMultiplierTier],
) -> EngineResult<ClosingArrReport> {
    let positions = source.closing_arr_positions(payout_run_id).await?;

    let (positions, directory) =
        match FetchStage::resolve(source, positions, JoinKey::EmployeeCode).await? {
            FetchStage::Empty => return Ok(ClosingArrReport::default()),
            FetchStage::Fetched { rows, directory } => (rows, directory),
        };

    let mut adjusted = Vec::with_capacity(positions.len());
    let mut audit_steps = Vec::with_capacity(positions.len());
    for (index, position) in positions.iter().enumerate() {
        let result = calculate_closing_arr(position, tiers, index as u32 + 1);
        adjusted.push(result.row);
        audit_steps.push(result.audit_step);
    }

    let totals = summarize_closing_arr(&adjusted);
    let rows = enrich(adjusted, &directory, JoinKey::EmployeeCode);

    info!(
        payout_run_id = %payout_run_id,
        positions = rows.len(),
        eligible_adjusted_arr_usd = %totals.eligible_adjusted_arr_usd,
        "Built closing ARR report"
    );

    Ok(ClosingArrReport {
        rows,
        totals,
        audit_steps,
    })
}
