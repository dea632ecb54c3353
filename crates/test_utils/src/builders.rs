//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so a
//! test only spells out the fields it actually cares about.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use domain_documents::{ClaimDocument, DocumentMainStatus};
use domain_workflow::{TaskPriority, WorkflowTask};

use crate::fixtures::{DocumentFixtures, StatusFixtures};

/// Builder for constructing test claim documents
pub struct TestDocumentBuilder {
    cedant_name: String,
    insured_name: String,
    contract_number: String,
    claim_number: String,
    loss_date: NaiveDate,
    underwriting_year: i32,
    sequence_number: u32,
    main_status: DocumentMainStatus,
}

impl Default for TestDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestDocumentBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            cedant_name: "Acme Re".to_string(),
            insured_name: "J. Smith".to_string(),
            contract_number: "CNT-2024-001".to_string(),
            claim_number: "CLM-0001".to_string(),
            loss_date: DocumentFixtures::loss_date(),
            underwriting_year: 2023,
            sequence_number: 1,
            main_status: StatusFixtures::received(),
        }
    }

    pub fn with_claim_number(mut self, claim_number: impl Into<String>) -> Self {
        self.claim_number = claim_number.into();
        self
    }

    pub fn with_loss_date(mut self, loss_date: NaiveDate) -> Self {
        self.loss_date = loss_date;
        self
    }

    pub fn with_sequence_number(mut self, sequence_number: u32) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    pub fn with_main_status(mut self, main_status: DocumentMainStatus) -> Self {
        self.main_status = main_status;
        self
    }

    pub fn build(self) -> ClaimDocument {
        ClaimDocument::register(
            self.cedant_name,
            self.insured_name,
            self.contract_number,
            self.claim_number,
            self.loss_date,
            self.underwriting_year,
            self.sequence_number,
            self.main_status,
        )
    }
}

/// Builder for constructing test workflow tasks
pub struct TestTaskBuilder {
    name: String,
    process_definition_name: String,
    assignee: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: TaskPriority,
    variables: Vec<(String, Value)>,
}

impl Default for TestTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTaskBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Review task".to_string(),
            process_definition_name: "GenericProcess".to_string(),
            assignee: None,
            due_date: None,
            priority: TaskPriority::Medium,
            variables: Vec::new(),
        }
    }

    pub fn with_process(mut self, process_definition_name: impl Into<String>) -> Self {
        self.process_definition_name = process_definition_name.into();
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: Value) -> Self {
        self.variables.push((key.into(), value));
        self
    }

    pub fn build(self) -> WorkflowTask {
        let mut task = WorkflowTask::new(self.name, self.process_definition_name)
            .with_priority(self.priority);
        task.assignee = self.assignee;
        task.due_date = self.due_date;
        for (key, value) in self.variables {
            task = task.with_variable(key, value);
        }
        task
    }
}
