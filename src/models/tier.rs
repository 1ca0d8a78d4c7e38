//! Renewal multiplier tier model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous range of renewal-year counts mapped to a multiplier.
///
/// `max_years` of `None` means the range is unbounded above.
///
/// # Example
///
/// ```
/// use commission_engine::models::RenewalMultiplierTier;
/// use rust_decimal::Decimal;
///
/// let tier = RenewalMultiplierTier {
///     min_years: 3,
///     max_years: None,
///     multiplier: Decimal::new(12, 1),
/// };
/// assert!(tier.contains(3));
/// assert!(tier.contains(40));
/// assert!(!tier.contains(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalMultiplierTier {
    /// The lowest renewal-year count in the range (inclusive).
    pub min_years: u32,
    /// The highest renewal-year count in the range (inclusive), if bounded.
    #[serde(default)]
    pub max_years: Option<u32>,
    /// The multiplier applied to closing ARR for contracts in this range.
    pub multiplier: Decimal,
}

impl RenewalMultiplierTier {
    /// Returns true if `years` falls within this tier's range.
    pub fn contains(&self, years: u32) -> bool {
        years >= self.min_years && self.max_years.is_none_or(|max| years <= max)
    }

    /// Returns true if this tier's range shares at least one value with `other`.
    pub fn overlaps(&self, other: &RenewalMultiplierTier) -> bool {
        let starts_before_other_ends = other.max_years.is_none_or(|max| self.min_years <= max);
        let ends_after_other_starts = self.max_years.is_none_or(|max| max >= other.min_years);
        starts_before_other_ends && ends_after_other_starts
    }
}
