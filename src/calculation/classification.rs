//! Payout taxonomy classification.
//!
//! Every aggregation in the engine classifies records through [`Classify`],
//! so there is a single definition of what counts as eligible compensation.

use serde::{Deserialize, Serialize};

use crate::models::{ComponentType, MonthlyPayoutRecord, PayoutDetailRow, PayoutType};

/// The taxonomy bucket a record is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutBucket {
    /// Variable pay.
    VariablePay,
    /// Commission.
    Commission,
    /// Anything else.
    Other,
}

/// The cash-timing channel a record's type is associated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashChannel {
    /// Paid on booking.
    Booking,
    /// Held until collection; released by `Collection Release`.
    CollectionHolding,
    /// Held until year end; released by `Year-End Release`.
    YearEndHolding,
    /// No cash channel (clawbacks).
    None,
}

/// The result of classifying a payout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutClassification {
    /// The bucket the record is reported under.
    pub bucket: PayoutBucket,
    /// Whether the record's recognized amount counts toward eligible totals.
    pub counts_toward_eligible: bool,
    /// The cash channel associated with the record's type.
    pub cash_channel: CashChannel,
}

/// Classifies a record from its declared payout type and component type.
///
/// Records without a declared payout type (detail rows) are bucketed by
/// component type alone and always count toward eligible totals.
///
/// # Examples
///
/// ```
/// use commission_engine::calculation::{classify_payout, CashChannel, PayoutBucket};
/// use commission_engine::models::{ComponentType, PayoutType};
///
/// let clawback = classify_payout(Some(&PayoutType::Clawback), ComponentType::Commission);
/// assert_eq!(clawback.bucket, PayoutBucket::Commission);
/// assert!(!clawback.counts_toward_eligible);
/// assert_eq!(clawback.cash_channel, CashChannel::None);
///
/// let vp = classify_payout(Some(&PayoutType::VariablePay), ComponentType::Other);
/// assert_eq!(vp.bucket, PayoutBucket::VariablePay);
/// assert!(vp.counts_toward_eligible);
/// ```
pub fn classify_payout(
    payout_type: Option<&PayoutType>,
    component_type: ComponentType,
) -> PayoutClassification {
    let bucket = match (payout_type, component_type) {
        (Some(PayoutType::VariablePay), _) => PayoutBucket::VariablePay,
        (None, ComponentType::VariablePay) => PayoutBucket::VariablePay,
        (_, ComponentType::Commission) => PayoutBucket::Commission,
        (Some(_), ComponentType::VariablePay) | (_, ComponentType::Other) => PayoutBucket::Other,
    };

    let cash_channel = match payout_type {
        Some(PayoutType::CollectionRelease) => CashChannel::CollectionHolding,
        Some(PayoutType::YearEndRelease) => CashChannel::YearEndHolding,
        Some(PayoutType::Clawback) => CashChannel::None,
        Some(PayoutType::VariablePay | PayoutType::Labeled(_)) | None => CashChannel::Booking,
    };

    PayoutClassification {
        bucket,
        counts_toward_eligible: !payout_type.is_some_and(PayoutType::is_release_or_clawback),
        cash_channel,
    }
}

/// A record that can be placed in the payout taxonomy.
pub trait Classify {
    /// The record's declared payout type, if it carries one.
    fn payout_type(&self) -> Option<&PayoutType>;

    /// The record's component type.
    fn component_type(&self) -> ComponentType;

    /// Classifies the record.
    fn classify(&self) -> PayoutClassification {
        classify_payout(self.payout_type(), self.component_type())
    }
}

impl Classify for PayoutDetailRow {
    fn payout_type(&self) -> Option<&PayoutType> {
        None
    }

    fn component_type(&self) -> ComponentType {
        self.component_type
    }
}

impl Classify for MonthlyPayoutRecord {
    fn payout_type(&self) -> Option<&PayoutType> {
        Some(&self.payout_type)
    }

    fn component_type(&self) -> ComponentType {
        self.payout_type.implied_component()
    }
}
