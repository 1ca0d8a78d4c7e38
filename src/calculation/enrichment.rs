//! Employee enrichment join.
//!
//! Attaches employee display attributes to rows with left-join semantics:
//! every row is kept, and rows with no matching reference get placeholder
//! values instead of failing the join.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::models::{
    ClosingArrPayoutDetailRow, ClosingArrPosition, EmployeeDisplay, EmployeeReference,
    MonthlyPayoutRecord, PayoutDetailRow,
};

/// Which business key a row's employee identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKey {
    /// The internal reference row id.
    EmployeeId,
    /// The human-facing employee code.
    EmployeeCode,
}

/// A row that refers to an employee by one or both business keys.
pub trait EmployeeLinked {
    /// The internal employee row id, if the row carries one.
    fn employee_id(&self) -> Option<Uuid> {
        None
    }

    /// The human-facing employee code, if the row carries one.
    fn employee_code(&self) -> Option<&str> {
        None
    }

    /// The raw identifier for `key`, rendered as a string.
    fn raw_identifier(&self, key: JoinKey) -> Option<String> {
        match key {
            JoinKey::EmployeeId => self.employee_id().map(|id| id.to_string()),
            JoinKey::EmployeeCode => self.employee_code().map(str::to_string),
        }
    }
}

impl EmployeeLinked for PayoutDetailRow {
    fn employee_id(&self) -> Option<Uuid> {
        Some(self.employee_id)
    }
}

impl EmployeeLinked for MonthlyPayoutRecord {
    fn employee_code(&self) -> Option<&str> {
        Some(&self.employee_code)
    }
}

impl EmployeeLinked for ClosingArrPosition {
    fn employee_code(&self) -> Option<&str> {
        Some(&self.employee_code)
    }
}

impl EmployeeLinked for ClosingArrPayoutDetailRow {
    fn employee_code(&self) -> Option<&str> {
        Some(&self.employee_code)
    }
}

/// The employee reference table indexed by both business keys.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    references: Vec<EmployeeReference>,
    by_id: HashMap<Uuid, usize>,
    by_code: HashMap<String, usize>,
}

impl EmployeeDirectory {
    /// Builds a directory from reference rows.
    ///
    /// If two rows share a key, the first one wins for that key.
    pub fn new(references: Vec<EmployeeReference>) -> Self {
        let mut by_id = HashMap::with_capacity(references.len());
        let mut by_code = HashMap::with_capacity(references.len());

        for (index, reference) in references.iter().enumerate() {
            by_id.entry(reference.id).or_insert(index);
            by_code.entry(reference.code.clone()).or_insert(index);
        }

        Self {
            references,
            by_id,
            by_code,
        }
    }

    /// Returns the number of reference rows.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Returns true if the directory holds no reference rows.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Looks up a reference by internal row id.
    pub fn by_id(&self, id: Uuid) -> Option<&EmployeeReference> {
        self.by_id.get(&id).map(|&index| &self.references[index])
    }

    /// Looks up a reference by employee code.
    pub fn by_code(&self, code: &str) -> Option<&EmployeeReference> {
        self.by_code.get(code).map(|&index| &self.references[index])
    }

    /// Resolves display attributes for `row` using `key`.
    ///
    /// Unmatched rows get the `"Unknown"` name and keep their raw identifier
    /// as the code.
    pub fn display_for<R: EmployeeLinked + ?Sized>(&self, row: &R, key: JoinKey) -> EmployeeDisplay {
        let found = match key {
            JoinKey::EmployeeId => row.employee_id().and_then(|id| self.by_id(id)),
            JoinKey::EmployeeCode => row.employee_code().and_then(|code| self.by_code(code)),
        };

        match found {
            Some(reference) => EmployeeDisplay::from(reference),
            None => {
                let raw = row.raw_identifier(key).unwrap_or_default();
                warn!(identifier = %raw, key = ?key, "Employee reference not found");
                EmployeeDisplay::unknown(raw)
            }
        }
    }
}

/// A row together with the display attributes attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enriched<R> {
    /// The source row, unchanged.
    pub row: R,
    /// The attached display attributes.
    pub employee: EmployeeDisplay,
}

/// Attaches employee display attributes to every row.
///
/// Output order and length match the input.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::{enrich, EmployeeDirectory, JoinKey};
/// use commission_engine::models::{ClosingArrPosition, EmployeeReference};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let directory = EmployeeDirectory::new(vec![EmployeeReference {
///     id: Uuid::from_u128(1),
///     code: "EMP001".to_string(),
///     display_name: "Jordan Lee".to_string(),
///     local_currency: None,
///     plan: None,
/// }]);
///
/// let position = ClosingArrPosition {
///     payout_run_id: Uuid::from_u128(9),
///     employee_code: "EMP404".to_string(),
///     customer_position_id: Uuid::from_u128(3),
///     customer_name: "Acme".to_string(),
///     renewal_years: 3,
///     closing_arr_usd: Decimal::new(10_000, 0),
///     exclusion_reason: None,
/// };
///
/// let enriched = enrich(vec![position], &directory, JoinKey::EmployeeCode);
/// assert_eq!(enriched[0].employee.name, "Unknown");
/// assert_eq!(enriched[0].employee.code, "EMP404");
/// ```
pub fn enrich<R: EmployeeLinked>(
    rows: Vec<R>,
    directory: &EmployeeDirectory,
    key: JoinKey,
) -> Vec<Enriched<R>> {
    rows.into_iter()
        .map(|row| {
            let employee = directory.display_for(&row, key);
            Enriched { row, employee }
        })
        .collect()
}
