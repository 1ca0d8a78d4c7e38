//! Commission Engine for sales compensation reporting
//!
//! This crate turns already-calculated compensation rows into reporting
//! structures: renewal-multiplier adjusted closing ARR, per-employee payout
//! workings for a payout run, and a dashboard summary of an employee's monthly
//! payouts for a fiscal year.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
