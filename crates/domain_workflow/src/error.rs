//! Workflow domain errors

use thiserror::Error;

/// Errors internal to payload decoding.
///
/// Strategies never propagate these to callers; a strategy that fails to
/// decode its payload degrades to a placeholder instead.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Malformed domain payload: {0}")]
    MalformedPayload(String),
}
