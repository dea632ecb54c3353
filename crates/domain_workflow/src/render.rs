//! Render strategies
//!
//! A strategy turns a task snapshot plus an optional domain payload into
//! structured content for the rendering layer. Strategies are total: they
//! never fail, and a missing payload yields a loading-safe placeholder.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::task::WorkflowTask;

/// One labelled field of a domain-specific detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

impl DetailField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Structured content handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderableOutput {
    /// Explanatory text shown while data is absent or loading
    Placeholder { message: String },
    /// Verbatim dump of the task's variables, insertion order preserved
    VariableDump { variables: Map<String, Value> },
    /// Domain-specific fields produced by a specific strategy
    Detail {
        title: String,
        fields: Vec<DetailField>,
    },
}

impl RenderableOutput {
    pub fn placeholder(message: impl Into<String>) -> Self {
        RenderableOutput::Placeholder {
            message: message.into(),
        }
    }
}

/// Capability implemented once per process type.
///
/// Rendering may run twice for the same task (first with `None` while the
/// payload loads, then with the resolved payload); implementations must be
/// pure functions of their arguments so repeat invocations are idempotent.
pub trait RenderStrategy: Send + Sync {
    fn render(&self, task: &WorkflowTask, payload: Option<&Value>) -> RenderableOutput;
}

/// Fallback strategy for process types with no specific renderer.
///
/// Surfaces the task's variables verbatim when present; never inspects the
/// domain payload.
#[derive(Debug, Default)]
pub struct GenericStrategy;

impl RenderStrategy for GenericStrategy {
    fn render(&self, task: &WorkflowTask, _payload: Option<&Value>) -> RenderableOutput {
        if task.variables.is_empty() {
            RenderableOutput::placeholder("This task carries no variables to display.")
        } else {
            RenderableOutput::VariableDump {
                variables: task.variables.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generic_empty_variables_is_placeholder() {
        let task = WorkflowTask::new("Review", "SomeProcess");
        let output = GenericStrategy.render(&task, None);
        assert!(matches!(output, RenderableOutput::Placeholder { .. }));
    }

    #[test]
    fn test_generic_dumps_variables_verbatim() {
        let task = WorkflowTask::new("Review", "SomeProcess")
            .with_variable("a", json!(1))
            .with_variable("z", json!("last"))
            .with_variable("b", json!(true));

        let output = GenericStrategy.render(&task, None);
        let RenderableOutput::VariableDump { variables } = output else {
            panic!("expected a variable dump");
        };
        assert_eq!(variables["a"], json!(1));
        // Insertion order survives, not alphabetical order.
        let keys: Vec<_> = variables.keys().collect();
        assert_eq!(keys, vec!["a", "z", "b"]);
    }

    #[test]
    fn test_generic_ignores_payload() {
        let task = WorkflowTask::new("Review", "SomeProcess");
        let with = GenericStrategy.render(&task, Some(&json!({"ignored": true})));
        let without = GenericStrategy.render(&task, None);
        assert_eq!(with, without);
    }
}
