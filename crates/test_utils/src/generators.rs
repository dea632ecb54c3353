//! Proptest Generators
//!
//! Proptest strategies for generating random test data across the workspace.

use proptest::prelude::*;

use domain_documents::{ClaimFinanceDocStatus, DocumentSet};

use crate::fixtures::DocumentFixtures;

/// Generates a presence-flag sequence for up to `max_slots` required slots
pub fn slot_sequence(max_slots: usize) -> impl Strategy<Value = Vec<bool>> {
    proptest::collection::vec(any::<bool>(), 0..=max_slots)
}

/// Generates a document set computed from a random slot sequence
pub fn document_set(max_slots: usize) -> impl Strategy<Value = DocumentSet> {
    slot_sequence(max_slots).prop_map(DocumentSet::from_slots)
}

/// Generates submission records with a random number of filled slots
pub fn submission(max_total: u32) -> impl Strategy<Value = Vec<ClaimFinanceDocStatus>> {
    (0..=max_total)
        .prop_flat_map(|total| (Just(total), 0..=total))
        .prop_map(|(total, present)| DocumentFixtures::submission(present, total))
}

/// Generates a plausible process-definition name, known or not
pub fn process_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TravelApproval".to_string()),
        Just("GenericProcess".to_string()),
        "[A-Za-z]{0,24}",
    ]
}
