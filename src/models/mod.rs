//! Core data models for the Commission Engine.
//!
//! This module contains the row shapes consumed at the engine boundary and the
//! derived structures it produces.

mod audit;
mod closing_arr;
mod dashboard;
mod employee;
mod monthly_payout;
mod payout_detail;
mod payout_type;
mod tier;
mod workings;

pub use audit::AuditStep;
pub use closing_arr::{ClosingArrPayoutDetailRow, ClosingArrPosition, ClosingArrTotals};
pub use dashboard::DashboardPayoutSummary;
pub use employee::{EmployeeDisplay, EmployeeReference, PlanAssignment, UNKNOWN_EMPLOYEE_NAME};
pub use monthly_payout::MonthlyPayoutRecord;
pub use payout_detail::PayoutDetailRow;
pub use payout_type::{ComponentType, PayoutType};
pub use tier::RenewalMultiplierTier;
pub use workings::{EmployeeWorkings, WorkingsTotals};
