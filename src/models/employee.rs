//! Employee reference model and display attributes.
//!
//! This module defines the reference rows the enrichment join looks up and the
//! display attributes it attaches to derived structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name substituted when an employee reference cannot be found.
pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

/// The compensation plan an employee is assigned to for the fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAssignment {
    /// The plan's display name.
    pub plan_name: String,
    /// The employee's annual target bonus in USD.
    pub target_bonus_usd: Decimal,
}

/// A row from the employee reference table.
///
/// Reference rows are keyed by two distinct business keys: the internal row
/// `id` and the human-facing employee `code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReference {
    /// Internal row identifier.
    pub id: Uuid,
    /// Human-facing employee code (e.g., "EMP001").
    pub code: String,
    /// The name shown in dashboards and reviews.
    pub display_name: String,
    /// The employee's local currency code, passed through unconverted.
    #[serde(default)]
    pub local_currency: Option<String>,
    /// The plan assignment, when the employee has one.
    #[serde(default)]
    pub plan: Option<PlanAssignment>,
}

/// Display attributes attached to a row by the enrichment join.
///
/// # Examples
///
/// ```
/// use commission_engine::models::EmployeeDisplay;
///
/// let display = EmployeeDisplay::unknown("EMP404");
/// assert_eq!(display.name, "Unknown");
/// assert_eq!(display.code, "EMP404");
/// assert!(!display.is_resolved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDisplay {
    /// Display name, or `"Unknown"` for unmatched rows.
    pub name: String,
    /// Employee code, or the raw identifier for unmatched rows.
    pub code: String,
    /// Local currency code, if known.
    pub local_currency: Option<String>,
    /// Plan assignment, if known.
    pub plan: Option<PlanAssignment>,
    #[serde(default)]
    resolved: bool,
}

impl EmployeeDisplay {
    /// Builds the placeholder display for an identifier with no reference row.
    pub fn unknown(raw_identifier: impl Into<String>) -> Self {
        Self {
            name: UNKNOWN_EMPLOYEE_NAME.to_string(),
            code: raw_identifier.into(),
            local_currency: None,
            plan: None,
            resolved: false,
        }
    }

    /// Returns true if the display came from a matched reference row.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

impl From<&EmployeeReference> for EmployeeDisplay {
    fn from(reference: &EmployeeReference) -> Self {
        Self {
            name: reference.display_name.clone(),
            code: reference.code.clone(),
            local_currency: reference.local_currency.clone(),
            plan: reference.plan.clone(),
            resolved: true,
        }
    }
}
