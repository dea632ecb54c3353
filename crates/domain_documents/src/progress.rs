//! Submission progress aggregation
//!
//! A `DocumentSet` measures completeness of one claim submission's required
//! documents. It has no identity of its own: it is computed fresh from the
//! current records each pass, and every operation here is a pure function of
//! its input.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::status::ClaimFinanceDocStatus;

/// Completeness of a named collection of required documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSet {
    collected: u32,
    total: u32,
}

impl DocumentSet {
    /// Builds a set from raw counts.
    ///
    /// Assumes `collected <= total`; callers deduplicate before invocation.
    /// A count pair violating that still reports `is_complete() == false`
    /// unless exactly equal.
    pub fn new(collected: u32, total: u32) -> Self {
        Self { collected, total }
    }

    /// Aggregates a sequence of presence flags, one per required slot.
    ///
    /// `total` is the sequence length, `collected` the count of present
    /// slots. Order is irrelevant.
    pub fn from_slots(slots: impl IntoIterator<Item = bool>) -> Self {
        let mut collected = 0;
        let mut total = 0;
        for has_document in slots {
            total += 1;
            if has_document {
                collected += 1;
            }
        }
        Self { collected, total }
    }

    /// Aggregates the current records of one submission.
    pub fn for_submission(records: &[ClaimFinanceDocStatus]) -> Self {
        Self::from_slots(records.iter().map(|r| r.has_document))
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Exact completion percentage, kept as a decimal for comparisons.
    ///
    /// `0` when `total == 0`; the empty set is an explicit edge case, not a
    /// division error.
    pub fn percentage_exact(&self) -> Decimal {
        if self.total == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.collected) / Decimal::from(self.total) * Decimal::from(100)
    }

    /// Completion percentage rounded to the nearest integer, for display.
    ///
    /// Midpoints round away from zero (12.5% displays as 13%), matching how
    /// the progress bars in the UI round.
    pub fn percentage(&self) -> u32 {
        self.percentage_exact()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }

    /// True only when collected equals total exactly
    pub fn is_complete(&self) -> bool {
        self.collected == self.total
    }
}

impl Serialize for DocumentSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DocumentSet", 4)?;
        state.serialize_field("collected", &self.collected)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("percentage", &self.percentage())?;
        state.serialize_field("is_complete", &self.is_complete())?;
        state.end()
    }
}

/// Progress of a submission whose required total may not be known yet.
///
/// A batch whose requirements are still loading must not masquerade as a
/// complete empty one, so "total unknown" is a distinct state from
/// "total is zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProgressState {
    /// Required document list not yet known
    Pending,
    /// Requirements known; completeness computed
    Ready(DocumentSet),
}

impl ProgressState {
    pub fn percentage(&self) -> Option<u32> {
        match self {
            ProgressState::Pending => None,
            ProgressState::Ready(set) => Some(set.percentage()),
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            ProgressState::Pending => false,
            ProgressState::Ready(set) => set.is_complete(),
        }
    }
}
