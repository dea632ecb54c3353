//! Document status taxonomy
//!
//! Two levels: a document's own lifecycle status (main status) and a
//! finance-specific sub-status attached to its processing. At most one
//! finance status is active per document at a time, so resolution is a
//! direct lookup, never a reduction over history.

use serde::{Deserialize, Serialize};

use core_kernel::{FinanceStatusId, MainStatusId};
use crate::document::ClaimDocument;
use crate::error::DocumentError;

/// A named document lifecycle state (e.g. received, processed)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMainStatus {
    pub id: MainStatusId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

impl DocumentMainStatus {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MainStatusId::new_v7(),
            name: name.into(),
            description: None,
            active: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A finance-specific sub-status attached to a document's processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimDocumentFinanceStatus {
    pub id: FinanceStatusId,
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub active: bool,
    /// Transitions into this status must carry a human-entered comment
    pub requires_comment: bool,
    /// Parent main status this sub-status belongs to
    pub main_status_id: MainStatusId,
}

impl ClaimDocumentFinanceStatus {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        main_status_id: MainStatusId,
    ) -> Self {
        Self {
            id: FinanceStatusId::new_v7(),
            name: name.into(),
            label: label.into(),
            description: None,
            active: true,
            requires_comment: false,
            main_status_id,
        }
    }

    pub fn with_comment_required(mut self) -> Self {
        self.requires_comment = true;
        self
    }

    /// Checks that the parent main status is one of the known values.
    ///
    /// Called by the persistence collaborator before storing a new finance
    /// status definition.
    pub fn validate_parent(&self, known: &[DocumentMainStatus]) -> Result<(), DocumentError> {
        if known.iter().any(|m| m.id == self.main_status_id) {
            Ok(())
        } else {
            Err(DocumentError::UnknownMainStatus {
                status: self.name.clone(),
                parent: self.main_status_id.to_string(),
            })
        }
    }
}

/// Pairs a claim document with its current finance status.
///
/// This is the unit the progress aggregation iterates over: one record per
/// required document slot of a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimFinanceDocStatus {
    pub document: ClaimDocument,
    /// Current finance status; `None` for a newly registered document
    pub finance_status: Option<ClaimDocumentFinanceStatus>,
    /// Whether the physical document has been received for this slot
    pub has_document: bool,
}

/// Looks up the finance status currently active for a document.
///
/// Returns `None` when the document has no finance status yet. Absence is an
/// ordinary outcome, not an error; callers decide whether it is terminal for
/// their screen.
pub fn resolve_finance_status<'a>(
    document: &ClaimDocument,
    available: &'a [ClaimFinanceDocStatus],
) -> Option<&'a ClaimDocumentFinanceStatus> {
    let found = available
        .iter()
        .find(|record| record.document.id == document.id)
        .and_then(|record| record.finance_status.as_ref());

    if found.is_none() {
        tracing::debug!(document_id = %document.id, "no finance status for document");
    }
    found
}

/// A prospective transition of a document into a target finance status.
///
/// The core only models the comment gate; validating and persisting the
/// transition is the collaborator's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct FinanceTransition<'a> {
    pub to: &'a ClaimDocumentFinanceStatus,
}

impl<'a> FinanceTransition<'a> {
    pub fn into_status(to: &'a ClaimDocumentFinanceStatus) -> Self {
        Self { to }
    }

    /// Whether the target status mandates an accompanying comment
    pub fn requires_comment(&self) -> bool {
        self.to.requires_comment
    }

    /// Rejects the transition when a required comment is missing or blank.
    pub fn validate_comment(&self, comment: Option<&str>) -> Result<(), DocumentError> {
        if !self.requires_comment() {
            return Ok(());
        }
        match comment {
            Some(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(DocumentError::CommentRequired {
                status: self.to.name.clone(),
            }),
        }
    }
}
