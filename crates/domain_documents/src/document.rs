//! Claim document value object

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::DocumentId;
use crate::status::DocumentMainStatus;

/// One physical/finance document registered against a claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDocument {
    /// Unique identifier
    pub id: DocumentId,
    /// Cedant or broker name
    pub cedant_name: String,
    /// Insured party name
    pub insured_name: String,
    /// Contract number
    pub contract_number: String,
    /// Claim number
    pub claim_number: String,
    /// Date of loss
    pub loss_date: NaiveDate,
    /// Underwriting year
    pub underwriting_year: i32,
    /// Sequence number within the claim
    pub sequence_number: u32,
    /// Current document lifecycle status
    pub main_status: DocumentMainStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl ClaimDocument {
    /// Registers a new document against a claim
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        cedant_name: impl Into<String>,
        insured_name: impl Into<String>,
        contract_number: impl Into<String>,
        claim_number: impl Into<String>,
        loss_date: NaiveDate,
        underwriting_year: i32,
        sequence_number: u32,
        main_status: DocumentMainStatus,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: DocumentId::new_v7(),
            cedant_name: cedant_name.into(),
            insured_name: insured_name.into(),
            contract_number: contract_number.into(),
            claim_number: claim_number.into(),
            loss_date,
            underwriting_year,
            sequence_number,
            main_status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the current main status with a newer one.
    ///
    /// Documents are never deleted; the backend records each transition and
    /// this pointer only ever moves forward. History is the backend's audit
    /// log, not reconstructed here.
    pub fn supersede_main_status(&mut self, status: DocumentMainStatus) {
        self.main_status = status;
        self.updated_at = Utc::now();
    }
}
