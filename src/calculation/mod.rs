//! Calculation logic for the Commission Engine.
//!
//! This module contains the pure transformations of the engine: renewal
//! multiplier resolution, closing-ARR adjustment, payout classification, the
//! employee enrichment join, per-employee workings aggregation and dashboard
//! summary aggregation. None of them perform I/O or fail.

mod aggregation;
mod classification;
mod closing_arr;
mod enrichment;
mod multiplier;
mod summary;

pub use aggregation::group_employee_workings;
pub use classification::{CashChannel, Classify, PayoutBucket, PayoutClassification, classify_payout};
pub use closing_arr::{ClosingArrResult, calculate_closing_arr, summarize_closing_arr};
pub use enrichment::{EmployeeDirectory, EmployeeLinked, Enriched, JoinKey, enrich};
pub use multiplier::{
    MultiplierResolution, NEUTRAL_MULTIPLIER, resolve_multiplier, resolve_multiplier_detailed,
};
pub use summary::summarize_payouts;
