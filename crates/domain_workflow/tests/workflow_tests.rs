//! Comprehensive tests for domain_workflow

use rust_decimal_macros::dec;
use serde_json::json;

use domain_workflow::registry::StrategyRegistry;
use domain_workflow::render::{RenderStrategy, RenderableOutput};
use domain_workflow::task::{TaskComment, TaskPriority, WorkflowTask};
use domain_workflow::travel::{TravelApprovalStrategy, TravelRequest};
use test_utils::builders::TestTaskBuilder;
use test_utils::fixtures::TaskFixtures;

// ============================================================================
// Task Tests
// ============================================================================

mod task_tests {
    use super::*;

    #[test]
    fn test_task_deserializes_from_engine_json() {
        let task: WorkflowTask = serde_json::from_value(json!({
            "id": "018f3c0a-0000-7000-8000-000000000001",
            "name": "Approve trip",
            "assignee": "jdoe",
            "created_at": "2024-04-01T09:00:00Z",
            "due_date": null,
            "priority": "high",
            "process_instance_id": "018f3c0a-0000-7000-8000-000000000002",
            "process_definition_name": "TravelApproval",
            "description": null,
            "variables": {"amount": 1250.5, "approved": false}
        }))
        .unwrap();

        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.process_definition_name, "TravelApproval");
        // Missing comments field defaults to empty.
        assert!(task.comments.is_empty());
        assert_eq!(task.variables.len(), 2);
    }

    #[test]
    fn test_builder_defaults_and_overrides() {
        let task = TestTaskBuilder::new()
            .with_process("TravelApproval")
            .with_assignee("jdoe")
            .with_priority(TaskPriority::High)
            .with_variable("amount", json!(100))
            .build();

        assert_eq!(task.process_definition_name, "TravelApproval");
        assert_eq!(task.assignee.as_deref(), Some("jdoe"));
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.variables["amount"], json!(100));
    }

    #[test]
    fn test_comments_keep_received_order() {
        let mut task = WorkflowTask::new("Review", "GenericProcess");
        for approver in ["first", "second", "third"] {
            task.comments.push(TaskComment {
                approver: approver.to_string(),
                timestamp: chrono::Utc::now(),
                comment: format!("note from {approver}"),
                task_name: task.name.clone(),
                task_id: task.id,
            });
        }

        let order: Vec<_> = task.comments.iter().map(|c| c.approver.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

mod dispatch_tests {
    use super::*;

    #[test]
    fn test_travel_approval_resolves_to_travel_strategy() {
        let registry = StrategyRegistry::with_defaults();
        // Empty variables must not matter for resolution.
        let task = TaskFixtures::travel_approval();

        let output = registry
            .resolve_for(&task)
            .render(&task, Some(&TaskFixtures::travel_payload()));
        assert!(matches!(output, RenderableOutput::Detail { .. }));
    }

    #[test]
    fn test_unregistered_process_gets_generic_dump() {
        let registry = StrategyRegistry::with_defaults();
        let task = TaskFixtures::unknown_process();

        let output = registry.resolve_for(&task).render(&task, None);
        let RenderableOutput::VariableDump { variables } = output else {
            panic!("expected a variable dump");
        };
        assert_eq!(variables["amount"], json!(1250.5));
    }
}

// ============================================================================
// Travel Strategy Tests
// ============================================================================

mod travel_tests {
    use super::*;

    #[test]
    fn test_null_payload_renders_loading_placeholder() {
        let task = TaskFixtures::travel_approval();
        let output = TravelApprovalStrategy.render(&task, None);
        assert!(matches!(output, RenderableOutput::Placeholder { .. }));
    }

    #[test]
    fn test_resolved_payload_needs_no_prior_null_call() {
        let task = TaskFixtures::travel_approval();
        let payload = TaskFixtures::travel_payload();

        // First and only invocation already carries the payload.
        let output = TravelApprovalStrategy.render(&task, Some(&payload));
        let RenderableOutput::Detail { title, fields } = output else {
            panic!("expected detail output");
        };
        assert!(title.contains("A. Jansen"));
        assert!(fields.iter().any(|f| f.value == "Zurich"));
        assert!(fields.iter().any(|f| f.value == "1250.50 EUR"));
    }

    #[test]
    fn test_render_is_idempotent_across_payload_states() {
        let task = TaskFixtures::travel_approval();
        let payload = TaskFixtures::travel_payload();

        let first = TravelApprovalStrategy.render(&task, Some(&payload));
        let _ = TravelApprovalStrategy.render(&task, None);
        let second = TravelApprovalStrategy.render(&task, Some(&payload));
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_payload_degrades_to_placeholder() {
        let task = TaskFixtures::travel_approval();
        let output = TravelApprovalStrategy.render(&task, Some(&json!({"wrong": "shape"})));
        assert!(matches!(output, RenderableOutput::Placeholder { .. }));
    }

    #[test]
    fn test_payload_decoding() {
        let request = TravelRequest::from_payload(&TaskFixtures::travel_payload()).unwrap();
        assert_eq!(request.estimated_cost, dec!(1250.50));
        assert_eq!(request.currency, "EUR");
        assert!(TravelRequest::from_payload(&json!(42)).is_err());
    }
}
