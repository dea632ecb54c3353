//! Workflow task value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use core_kernel::{ProcessInstanceId, TaskId};

/// Task priority as reported by the workflow engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// An approver comment recorded against a task.
///
/// Comments arrive chronologically ordered and are append-only; the engine
/// never rewrites history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskComment {
    pub approver: String,
    pub timestamp: DateTime<Utc>,
    pub comment: String,
    pub task_name: String,
    pub task_id: TaskId,
}

/// An opaque unit of work from the external workflow engine.
///
/// Read-only for the duration of a render pass. `variables` is a loosely
/// typed mapping; keys are unique and insertion order is preserved so a
/// generic dump can surface it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowTask {
    pub id: TaskId,
    pub name: String,
    pub assignee: Option<String>,
    pub created_at: DateTime<Utc>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
    pub process_instance_id: ProcessInstanceId,
    pub process_definition_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub variables: Map<String, Value>,
    #[serde(default)]
    pub comments: Vec<TaskComment>,
}

impl WorkflowTask {
    /// Creates a bare task snapshot for the given process type
    pub fn new(name: impl Into<String>, process_definition_name: impl Into<String>) -> Self {
        Self {
            id: TaskId::new_v7(),
            name: name.into(),
            assignee: None,
            created_at: Utc::now(),
            due_date: None,
            priority: TaskPriority::Medium,
            process_instance_id: ProcessInstanceId::new_v7(),
            process_definition_name: process_definition_name.into(),
            description: None,
            variables: Map::new(),
            comments: Vec::new(),
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: Value) -> Self {
        self.variables.insert(key.into(), value);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}
