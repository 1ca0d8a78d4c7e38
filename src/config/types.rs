//! Configuration types for the Commission Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::RenewalMultiplierTier;

fn default_fiscal_year_start_month() -> u32 {
    1
}

fn default_reporting_currency() -> String {
    "USD".to_string()
}

/// Engine-wide settings from `engine.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineSettings {
    /// Calendar month (1-12) in which the fiscal year starts.
    #[serde(default = "default_fiscal_year_start_month")]
    pub fiscal_year_start_month: u32,
    /// Currency all reported amounts are denominated in.
    #[serde(default = "default_reporting_currency")]
    pub reporting_currency: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            fiscal_year_start_month: default_fiscal_year_start_month(),
            reporting_currency: default_reporting_currency(),
        }
    }
}

/// A compensation plan and its renewal multiplier tiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompensationPlan {
    /// Unique plan identifier.
    pub id: Uuid,
    /// The plan's display name.
    pub name: String,
    /// The fiscal year the plan applies to.
    pub fiscal_year: i32,
    /// Renewal multiplier tiers scoped to this plan.
    #[serde(default)]
    pub renewal_multiplier_tiers: Vec<RenewalMultiplierTier>,
}

/// Plans configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PlansConfig {
    /// All configured plans.
    pub plans: Vec<CompensationPlan>,
}

/// Maps calendar months to fiscal years.
///
/// A fiscal year is named by the calendar year in which it starts.
///
/// # Example
///
/// ```
/// use commission_engine::config::FiscalCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = FiscalCalendar::new(4).unwrap();
/// assert_eq!(calendar.fiscal_year_of(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()), 2025);
/// assert_eq!(calendar.fiscal_year_of(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()), 2025);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalCalendar {
    start_month: u32,
}

impl FiscalCalendar {
    /// Creates a calendar whose fiscal year starts in `start_month` (1-12).
    pub fn new(start_month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&start_month) {
            return Err(EngineError::InvalidSettings {
                field: "fiscal_year_start_month".to_string(),
                message: format!("must be between 1 and 12, got {}", start_month),
            });
        }
        Ok(Self { start_month })
    }

    /// Returns the month the fiscal year starts in.
    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    /// Returns the fiscal year `date` falls in.
    pub fn fiscal_year_of(&self, date: NaiveDate) -> i32 {
        if date.month() >= self.start_month {
            date.year()
        } else {
            date.year() - 1
        }
    }
}

impl Default for FiscalCalendar {
    fn default() -> Self {
        Self { start_month: 1 }
    }
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Engine-wide settings.
    settings: EngineSettings,
    /// Fiscal calendar derived from the settings.
    calendar: FiscalCalendar,
    /// Compensation plans.
    plans: Vec<CompensationPlan>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// Returns `InvalidSettings` if the fiscal year start month is out of range.
    pub fn new(settings: EngineSettings, plans: Vec<CompensationPlan>) -> EngineResult<Self> {
        let calendar = FiscalCalendar::new(settings.fiscal_year_start_month)?;
        Ok(Self {
            settings,
            calendar,
            plans,
        })
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the fiscal calendar.
    pub fn calendar(&self) -> FiscalCalendar {
        self.calendar
    }

    /// Returns all compensation plans.
    pub fn plans(&self) -> &[CompensationPlan] {
        &self.plans
    }
}
