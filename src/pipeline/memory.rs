//! In-memory data source.

use uuid::Uuid;

use crate::config::FiscalCalendar;
use crate::error::EngineResult;
use crate::models::{
    ClosingArrPosition, EmployeeReference, MonthlyPayoutRecord, PayoutDetailRow,
};

use super::source::CompensationSource;

/// A [`CompensationSource`] over owned row sets.
///
/// Useful for previews over rows that have not been persisted yet.
///
/// # Example
///
/// ```
/// use commission_engine::config::FiscalCalendar;
/// use commission_engine::pipeline::InMemorySource;
///
/// let source = InMemorySource::new(FiscalCalendar::default())
///     .with_employees(vec![])
///     .with_payout_details(vec![]);
/// assert_eq!(source.calendar().start_month(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    calendar: FiscalCalendar,
    payout_details: Vec<PayoutDetailRow>,
    employees: Vec<EmployeeReference>,
    monthly_payouts: Vec<MonthlyPayoutRecord>,
    closing_arr_positions: Vec<ClosingArrPosition>,
}

impl InMemorySource {
    /// Creates an empty source that assigns fiscal years with `calendar`.
    pub fn new(calendar: FiscalCalendar) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    /// Replaces the payout detail rows.
    pub fn with_payout_details(mut self, rows: Vec<PayoutDetailRow>) -> Self {
        self.payout_details = rows;
        self
    }

    /// Replaces the employee reference rows.
    pub fn with_employees(mut self, employees: Vec<EmployeeReference>) -> Self {
        self.employees = employees;
        self
    }

    /// Replaces the monthly payout records.
    pub fn with_monthly_payouts(mut self, records: Vec<MonthlyPayoutRecord>) -> Self {
        self.monthly_payouts = records;
        self
    }

    /// Replaces the closing-ARR positions.
    pub fn with_closing_arr_positions(mut self, positions: Vec<ClosingArrPosition>) -> Self {
        self.closing_arr_positions = positions;
        self
    }

    /// Returns the fiscal calendar used to filter monthly payouts.
    pub fn calendar(&self) -> FiscalCalendar {
        self.calendar
    }
}

impl CompensationSource for InMemorySource {
    async fn payout_details(&self, payout_run_id: Uuid) -> EngineResult<Vec<PayoutDetailRow>> {
        Ok(self
            .payout_details
            .iter()
            .filter(|row| row.payout_run_id == payout_run_id)
            .cloned()
            .collect())
    }

    async fn employees_by_id(&self, ids: &[Uuid]) -> EngineResult<Vec<EmployeeReference>> {
        Ok(self
            .employees
            .iter()
            .filter(|employee| ids.contains(&employee.id))
            .cloned()
            .collect())
    }

    async fn employees_by_code(&self, codes: &[String]) -> EngineResult<Vec<EmployeeReference>> {
        Ok(self
            .employees
            .iter()
            .filter(|employee| codes.contains(&employee.code))
            .cloned()
            .collect())
    }

    async fn monthly_payouts(
        &self,
        employee_code: &str,
        fiscal_year: i32,
    ) -> EngineResult<Vec<MonthlyPayoutRecord>> {
        Ok(self
            .monthly_payouts
            .iter()
            .filter(|record| {
                record.employee_code == employee_code
                    && self.calendar.fiscal_year_of(record.period_month) == fiscal_year
            })
            .cloned()
            .collect())
    }

    async fn closing_arr_positions(
        &self,
        payout_run_id: Uuid,
    ) -> EngineResult<Vec<ClosingArrPosition>> {
        Ok(self
            .closing_arr_positions
            .iter()
            .filter(|position| position.payout_run_id == payout_run_id)
            .cloned()
            .collect())
    }
}
