//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the claims back-office.
//! Designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use serde_json::json;

use domain_documents::{
    ClaimDocument, ClaimDocumentFinanceStatus, ClaimFinanceDocStatus, DocumentMainStatus,
};
use domain_workflow::WorkflowTask;

/// Fixture for status test data
pub struct StatusFixtures;

impl StatusFixtures {
    /// Main status for a freshly received document
    pub fn received() -> DocumentMainStatus {
        DocumentMainStatus::new("RECEIVED").with_description("Document received")
    }

    /// Main status for a fully processed document
    pub fn processed() -> DocumentMainStatus {
        DocumentMainStatus::new("PROCESSED")
    }

    /// Finance status without a comment gate
    pub fn checking(parent: &DocumentMainStatus) -> ClaimDocumentFinanceStatus {
        ClaimDocumentFinanceStatus::new("CHECKING", "Checking", parent.id)
    }

    /// Finance status that requires a comment on entry
    pub fn rejected(parent: &DocumentMainStatus) -> ClaimDocumentFinanceStatus {
        ClaimDocumentFinanceStatus::new("REJECTED", "Rejected", parent.id).with_comment_required()
    }
}

/// Fixture for document test data
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Standard loss date (Mar 15, 2024)
    pub fn loss_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
    }

    /// A registered document with predictable reference numbers
    pub fn registered(sequence_number: u32) -> ClaimDocument {
        ClaimDocument::register(
            "Acme Re",
            "J. Smith",
            "CNT-2024-001",
            "CLM-0001",
            Self::loss_date(),
            2023,
            sequence_number,
            StatusFixtures::received(),
        )
    }

    /// A submission with `present` filled slots out of `total` required
    pub fn submission(present: u32, total: u32) -> Vec<ClaimFinanceDocStatus> {
        (1..=total)
            .map(|n| {
                let document = Self::registered(n);
                let finance_status = Some(StatusFixtures::checking(&document.main_status));
                ClaimFinanceDocStatus {
                    document,
                    finance_status,
                    has_document: n <= present,
                }
            })
            .collect()
    }
}

/// Fixture for workflow task test data
pub struct TaskFixtures;

impl TaskFixtures {
    /// A travel approval task without variables
    pub fn travel_approval() -> WorkflowTask {
        WorkflowTask::new("Approve trip", "TravelApproval")
    }

    /// A task of an unregistered process type carrying variables
    pub fn unknown_process() -> WorkflowTask {
        WorkflowTask::new("Review", "UnknownProcess")
            .with_variable("amount", json!(1250.5))
            .with_variable("approved", json!(false))
    }

    /// A well-formed travel request payload
    pub fn travel_payload() -> serde_json::Value {
        json!({
            "traveler": "A. Jansen",
            "destination": "Zurich",
            "departure_date": "2024-05-02",
            "return_date": "2024-05-06",
            "purpose": "Reinsurer audit",
            "estimated_cost": "1250.50",
            "currency": "EUR"
        })
    }
}
