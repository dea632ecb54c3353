//! Claim Document Domain
//!
//! This crate models a claim's required finance documents through a two-level
//! status taxonomy and aggregates a document set into a completeness measure.
//!
//! # Status taxonomy
//!
//! ```text
//! ClaimDocument --owns--> DocumentMainStatus        (document lifecycle)
//!                              ^
//! ClaimDocumentFinanceStatus --parent               (finance sub-status)
//! ```
//!
//! All entities are owned and mutated by the workflow backend; this crate
//! treats them as read-only value objects for the duration of an aggregation
//! pass and performs no I/O.

pub mod document;
pub mod status;
pub mod progress;
pub mod error;

pub use document::ClaimDocument;
pub use status::{
    ClaimDocumentFinanceStatus, ClaimFinanceDocStatus, DocumentMainStatus,
    FinanceTransition, resolve_finance_status,
};
pub use progress::{DocumentSet, ProgressState};
pub use error::DocumentError;
