//! Travel approval strategy
//!
//! The travel approval process carries a domain payload fetched separately
//! from the task itself, keyed off the process-instance id. Validation of
//! the loose payload happens here, in the one strategy that understands it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WorkflowError;
use crate::render::{DetailField, RenderStrategy, RenderableOutput};
use crate::task::WorkflowTask;

/// Domain payload of a travel approval task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRequest {
    pub traveler: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    #[serde(default)]
    pub purpose: Option<String>,
    pub estimated_cost: Decimal,
    pub currency: String,
}

impl TravelRequest {
    /// Decodes the loose payload the fetch collaborator hands over
    pub fn from_payload(payload: &Value) -> Result<Self, WorkflowError> {
        serde_json::from_value(payload.clone())
            .map_err(|e| WorkflowError::MalformedPayload(e.to_string()))
    }
}

/// Renderer for the `TravelApproval` process type
#[derive(Debug, Default)]
pub struct TravelApprovalStrategy;

impl TravelApprovalStrategy {
    /// Process-definition name this strategy is registered under
    pub const PROCESS_NAME: &'static str = "TravelApproval";
}

impl RenderStrategy for TravelApprovalStrategy {
    fn render(&self, task: &WorkflowTask, payload: Option<&Value>) -> RenderableOutput {
        let Some(value) = payload else {
            // Payload fetch may still be in flight; render safely and let
            // the caller invoke us again once it resolves.
            return RenderableOutput::placeholder("Travel request details are loading.");
        };

        match TravelRequest::from_payload(value) {
            Ok(request) => RenderableOutput::Detail {
                title: format!("Travel request for {}", request.traveler),
                fields: vec![
                    DetailField::new("Traveler", request.traveler.clone()),
                    DetailField::new("Destination", request.destination.clone()),
                    DetailField::new("Departure", request.departure_date.to_string()),
                    DetailField::new("Return", request.return_date.to_string()),
                    DetailField::new(
                        "Estimated cost",
                        format!("{} {}", request.estimated_cost, request.currency),
                    ),
                    DetailField::new("Purpose", request.purpose.as_deref().unwrap_or("-")),
                ],
            },
            Err(err) => {
                tracing::debug!(task_id = %task.id, %err, "travel payload could not be decoded");
                RenderableOutput::placeholder("Travel request details are unavailable.")
            }
        }
    }
}
