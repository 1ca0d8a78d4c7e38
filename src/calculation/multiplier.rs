//! Renewal multiplier resolution.
//!
//! This module resolves a contract's renewal-years value to a multiplier using
//! a plan's tiered range table.

use std::cmp::Reverse;

use rust_decimal::Decimal;

use crate::models::RenewalMultiplierTier;

/// The multiplier applied when no tier matches.
pub const NEUTRAL_MULTIPLIER: Decimal = Decimal::ONE;

/// The outcome of a multiplier lookup, including the tier that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplierResolution<'a> {
    /// The resolved multiplier.
    pub multiplier: Decimal,
    /// The tier that supplied the multiplier, or `None` for the neutral default.
    pub matched_tier: Option<&'a RenewalMultiplierTier>,
}

/// Resolves `years` against `tiers` and reports which tier matched.
///
/// Among the tiers whose range contains `years`, the one with the highest
/// `min_years` wins. If several matching tiers share that `min_years`, the
/// first one in `tiers` wins. No match resolves to [`NEUTRAL_MULTIPLIER`].
pub fn resolve_multiplier_detailed(
    tiers: &[RenewalMultiplierTier],
    years: u32,
) -> MultiplierResolution<'_> {
    let matched_tier = tiers
        .iter()
        .filter(|tier| tier.contains(years))
        .min_by_key(|tier| Reverse(tier.min_years));

    MultiplierResolution {
        multiplier: matched_tier.map_or(NEUTRAL_MULTIPLIER, |tier| tier.multiplier),
        matched_tier,
    }
}

/// Resolves a renewal-years value to a multiplier.
///
/// Never fails: an empty tier set, or a value outside every range, resolves
/// to `1.0`. Overlapping tiers resolve to the matching tier with the highest
/// `min_years`.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::resolve_multiplier;
/// use commission_engine::models::RenewalMultiplierTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     RenewalMultiplierTier { min_years: 0, max_years: None, multiplier: Decimal::ONE },
///     RenewalMultiplierTier { min_years: 3, max_years: None, multiplier: Decimal::new(12, 1) },
/// ];
///
/// assert_eq!(resolve_multiplier(&tiers, 5), Decimal::new(12, 1));
/// assert_eq!(resolve_multiplier(&[], 5), Decimal::ONE);
/// ```
pub fn resolve_multiplier(tiers: &[RenewalMultiplierTier], years: u32) -> Decimal {
    resolve_multiplier_detailed(tiers, years).multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tier(min_years: u32, max_years: Option<u32>, multiplier: &str) -> RenewalMultiplierTier {
        RenewalMultiplierTier {
            min_years,
            max_years,
            multiplier: dec(multiplier),
        }
    }

    fn standard_tiers() -> Vec<RenewalMultiplierTier> {
        vec![
            tier(1, Some(1), "0.8"),
            tier(2, Some(2), "1.0"),
            tier(3, Some(4), "1.2"),
            tier(5, None, "1.5"),
        ]
    }

    #[test]
    fn test_each_non_overlapping_tier_matches_its_range() {
        let tiers = standard_tiers();
        assert_eq!(resolve_multiplier(&tiers, 1), dec("0.8"));
        assert_eq!(resolve_multiplier(&tiers, 2), dec("1.0"));
        assert_eq!(resolve_multiplier(&tiers, 3), dec("1.2"));
        assert_eq!(resolve_multiplier(&tiers, 4), dec("1.2"));
        assert_eq!(resolve_multiplier(&tiers, 5), dec("1.5"));
        assert_eq!(resolve_multiplier(&tiers, 30), dec("1.5"));
    }

    #[test]
    fn test_value_outside_all_ranges_is_neutral() {
        let tiers = standard_tiers();
        let resolution = resolve_multiplier_detailed(&tiers, 0);
        assert_eq!(resolution.multiplier, NEUTRAL_MULTIPLIER);
        assert!(resolution.matched_tier.is_none());
    }

    #[test]
    fn test_gap_between_tiers_is_neutral() {
        let tiers = vec![tier(0, Some(1), "0.9"), tier(4, None, "1.3")];
        assert_eq!(resolve_multiplier(&tiers, 2), Decimal::ONE);
        assert_eq!(resolve_multiplier(&tiers, 3), Decimal::ONE);
    }

    #[test]
    fn test_overlapping_tiers_highest_min_years_wins() {
        let tiers = vec![tier(0, None, "1.0"), tier(3, None, "1.2")];
        assert_eq!(resolve_multiplier(&tiers, 5), dec("1.2"));
        assert_eq!(resolve_multiplier(&tiers, 2), dec("1.0"));
    }

    #[test]
    fn test_overlap_winner_does_not_depend_on_order() {
        let tiers = vec![tier(3, None, "1.2"), tier(0, None, "1.0")];
        assert_eq!(resolve_multiplier(&tiers, 5), dec("1.2"));
    }

    #[test]
    fn test_equal_min_years_first_listed_wins() {
        let tiers = vec![tier(2, Some(4), "1.1"), tier(2, None, "1.4")];
        let resolution = resolve_multiplier_detailed(&tiers, 3);
        assert_eq!(resolution.multiplier, dec("1.1"));
        assert_eq!(resolution.matched_tier, Some(&tiers[0]));
    }

    #[test]
    fn test_detailed_resolution_reports_matched_tier() {
        let tiers = standard_tiers();
        let resolution = resolve_multiplier_detailed(&tiers, 4);
        assert_eq!(resolution.matched_tier, Some(&tiers[2]));
    }

    proptest! {
        #[test]
        fn prop_empty_tiers_always_neutral(years in 0u32..10_000) {
            prop_assert_eq!(resolve_multiplier(&[], years), Decimal::ONE);
        }

        #[test]
        fn prop_non_overlapping_tiers_match_unique_range(
            widths in proptest::collection::vec(1u32..5, 1..6),
            gap in 0u32..3,
            years in 0u32..60,
        ) {
            // Consecutive bounded tiers separated by `gap`, multiplier = index + 1
            let mut tiers = Vec::new();
            let mut start = 0u32;
            for (index, width) in widths.iter().enumerate() {
                tiers.push(RenewalMultiplierTier {
                    min_years: start,
                    max_years: Some(start + width - 1),
                    multiplier: Decimal::from(index as u32 + 1),
                });
                start += width + gap;
            }

            let expected = tiers
                .iter()
                .find(|t| t.contains(years))
                .map_or(Decimal::ONE, |t| t.multiplier);
            prop_assert_eq!(resolve_multiplier(&tiers, years), expected);
        }
    }
}
