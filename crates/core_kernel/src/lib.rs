//! Core Kernel - Foundational types for the claims back-office
//!
//! This crate provides the building blocks shared by the document and
//! workflow domains:
//! - Strongly-typed identifiers for documents, statuses, and tasks
//! - The common error type used by validation helpers

pub mod identifiers;
pub mod error;

pub use identifiers::{
    DocumentId, MainStatusId, FinanceStatusId, SubmissionId,
    TaskId, ProcessInstanceId,
};
pub use error::CoreError;
