//! The external data-source seam.

use std::future::Future;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    ClosingArrPosition, EmployeeReference, MonthlyPayoutRecord, PayoutDetailRow,
};

/// An external store that serves already-filtered row sets.
///
/// Implementations own transport, timeouts, retries and caching. Errors are
/// reported as [`EngineError::DataSource`](crate::error::EngineError::DataSource)
/// and are propagated unmodified by the pipeline.
pub trait CompensationSource {
    /// Detail rows for one payout run, ordered by employee then component.
    fn payout_details(
        &self,
        payout_run_id: Uuid,
    ) -> impl Future<Output = EngineResult<Vec<PayoutDetailRow>>> + Send;

    /// Reference rows for the given internal employee ids.
    fn employees_by_id(
        &self,
        ids: &[Uuid],
    ) -> impl Future<Output = EngineResult<Vec<EmployeeReference>>> + Send;

    /// Reference rows for the given employee codes.
    fn employees_by_code(
        &self,
        codes: &[String],
    ) -> impl Future<Output = EngineResult<Vec<EmployeeReference>>> + Send;

    /// Monthly payout records for one employee within one fiscal year.
    fn monthly_payouts(
        &self,
        employee_code: &str,
        fiscal_year: i32,
    ) -> impl Future<Output = EngineResult<Vec<MonthlyPayoutRecord>>> + Send;

    /// Closing-ARR customer positions evaluated in one payout run.
    fn closing_arr_positions(
        &self,
        payout_run_id: Uuid,
    ) -> impl Future<Output = EngineResult<Vec<ClosingArrPosition>>> + Send;
}
