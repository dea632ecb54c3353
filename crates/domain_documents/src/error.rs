//! Document domain errors

use thiserror::Error;

/// Errors reported by document validation helpers.
///
/// The aggregation and resolution paths are total and never return these;
/// they only surface from the explicit `validate_*` hooks that persistence
/// collaborators call before committing a change.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Transition into status '{status}' requires a comment")]
    CommentRequired { status: String },

    #[error("Finance status '{status}' references unknown main status {parent}")]
    UnknownMainStatus { status: String, parent: String },
}
