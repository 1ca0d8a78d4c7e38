//! Declared payout and component types.
//!
//! Source rows carry these as free-form strings. They are parsed once at the
//! boundary into closed enums so classification can match exhaustively.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The compensation component a detail row was computed for.
///
/// Any label other than `variable_pay` or `commission` deserializes to
/// [`ComponentType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Variable pay measured against targets.
    VariablePay,
    /// Commission on bookings or ARR.
    Commission,
    /// Any other component (spiffs, adjustments, manual lines).
    #[serde(other)]
    Other,
}

/// The declared type of a monthly payout record.
///
/// # Example
///
/// ```
/// use commission_engine::models::PayoutType;
///
/// let parsed: PayoutType = "Year-End Release".parse().unwrap();
/// assert_eq!(parsed, PayoutType::YearEndRelease);
/// assert!(parsed.is_release_or_clawback());
///
/// let label: PayoutType = "New Logo Commission".parse().unwrap();
/// assert_eq!(label.to_string(), "New Logo Commission");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PayoutType {
    /// `Variable Pay`.
    VariablePay,
    /// `Collection Release`: release of collection-contingent holdings.
    CollectionRelease,
    /// `Year-End Release`: release of year-end holdings.
    YearEndRelease,
    /// `Clawback`: reversal of previously recognized compensation.
    Clawback,
    /// Any other label, typically a commission type.
    Labeled(String),
}

impl PayoutType {
    /// Returns the label used by source rows.
    pub fn label(&self) -> &str {
        match self {
            PayoutType::VariablePay => "Variable Pay",
            PayoutType::CollectionRelease => "Collection Release",
            PayoutType::YearEndRelease => "Year-End Release",
            PayoutType::Clawback => "Clawback",
            PayoutType::Labeled(label) => label,
        }
    }

    /// Returns true for the cash-timing and reversal family that never counts
    /// toward eligible totals.
    pub fn is_release_or_clawback(&self) -> bool {
        matches!(
            self,
            PayoutType::CollectionRelease | PayoutType::YearEndRelease | PayoutType::Clawback
        )
    }

    /// The component a monthly record of this type belongs to.
    pub fn implied_component(&self) -> ComponentType {
        match self {
            PayoutType::VariablePay => ComponentType::VariablePay,
            PayoutType::Labeled(_) => ComponentType::Commission,
            PayoutType::CollectionRelease | PayoutType::YearEndRelease | PayoutType::Clawback => {
                ComponentType::Other
            }
        }
    }
}

impl From<String> for PayoutType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Variable Pay" => PayoutType::VariablePay,
            "Collection Release" => PayoutType::CollectionRelease,
            "Year-End Release" => PayoutType::YearEndRelease,
            "Clawback" => PayoutType::Clawback,
            _ => PayoutType::Labeled(label),
        }
    }
}

impl FromStr for PayoutType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PayoutType::from(s.to_string()))
    }
}

impl From<PayoutType> for String {
    fn from(payout_type: PayoutType) -> Self {
        match payout_type {
            PayoutType::Labeled(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for PayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
