//! Strategy Registry
//!
//! Maps a task's process-definition name to its render strategy. The
//! registry is an explicit, immutable mapping built once at startup and
//! passed into callers as a dependency, so individual strategies stay
//! testable in isolation.
//!
//! Resolution is a total function: an unmatched name (including the empty
//! string) always yields the generic fallback, never an error.
//!
//! # Usage
//!
//! ```rust
//! use domain_workflow::registry::StrategyRegistry;
//! use domain_workflow::task::WorkflowTask;
//!
//! let registry = StrategyRegistry::with_defaults();
//! let task = WorkflowTask::new("Approve trip", "TravelApproval");
//! let output = registry.resolve(&task.process_definition_name).render(&task, None);
//! ```
//!
//! Adding a new process type means registering one new strategy by name;
//! nothing existing changes:
//!
//! ```rust,ignore
//! let registry = StrategyRegistry::builder()
//!     .register("ExpenseApproval", Arc::new(ExpenseApprovalStrategy))
//!     .build();
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::render::{GenericStrategy, RenderStrategy};
use crate::task::WorkflowTask;
use crate::travel::TravelApprovalStrategy;

static DEFAULT_REGISTRY: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::with_defaults);

/// Returns the process-wide default registry, built on first use
pub fn default_registry() -> &'static StrategyRegistry {
    &DEFAULT_REGISTRY
}

/// Immutable mapping from process-definition name to render strategy
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn RenderStrategy>>,
    fallback: Arc<dyn RenderStrategy>,
}

impl StrategyRegistry {
    /// Starts building a registry
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::new()
    }

    /// Builds the standard registry with all known process types
    pub fn with_defaults() -> Self {
        Self::builder()
            .register(
                TravelApprovalStrategy::PROCESS_NAME,
                Arc::new(TravelApprovalStrategy),
            )
            .build()
    }

    /// Resolves the strategy for a process-definition name.
    ///
    /// Exact string match; anything else gets the generic fallback.
    pub fn resolve(&self, process_definition_name: &str) -> &dyn RenderStrategy {
        match self.strategies.get(process_definition_name) {
            Some(strategy) => strategy.as_ref(),
            None => {
                tracing::debug!(
                    process = process_definition_name,
                    "no strategy registered, falling back to generic"
                );
                self.fallback.as_ref()
            }
        }
    }

    /// Resolves the strategy for a task
    pub fn resolve_for(&self, task: &WorkflowTask) -> &dyn RenderStrategy {
        self.resolve(&task.process_definition_name)
    }

    /// Returns the registered process-definition names, sorted
    pub fn registered_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// True when a specific (non-fallback) strategy exists for the name
    pub fn has_strategy(&self, process_definition_name: &str) -> bool {
        self.strategies.contains_key(process_definition_name)
    }
}

/// Builder for creating strategy registries
#[derive(Default)]
pub struct StrategyRegistryBuilder {
    strategies: HashMap<String, Arc<dyn RenderStrategy>>,
}

impl StrategyRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a strategy under a process-definition name.
    ///
    /// Registering the same name twice keeps the later entry.
    pub fn register(
        mut self,
        process_definition_name: impl Into<String>,
        strategy: Arc<dyn RenderStrategy>,
    ) -> Self {
        self.strategies
            .insert(process_definition_name.into(), strategy);
        self
    }

    /// Finalizes the registry; the generic fallback is always attached
    pub fn build(self) -> StrategyRegistry {
        StrategyRegistry {
            strategies: self.strategies,
            fallback: Arc::new(GenericStrategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderableOutput;
    use serde_json::json;

    struct FixedStrategy(&'static str);

    impl RenderStrategy for FixedStrategy {
        fn render(
            &self,
            _task: &WorkflowTask,
            _payload: Option<&serde_json::Value>,
        ) -> RenderableOutput {
            RenderableOutput::placeholder(self.0)
        }
    }

    #[test]
    fn test_unknown_name_resolves_to_generic() {
        let registry = StrategyRegistry::with_defaults();
        let task = WorkflowTask::new("Anything", "nonexistent-process")
            .with_variable("a", json!(1));

        let output = registry.resolve("nonexistent-process").render(&task, None);
        assert!(matches!(output, RenderableOutput::VariableDump { .. }));
    }

    #[test]
    fn test_empty_name_resolves_to_generic() {
        let registry = StrategyRegistry::with_defaults();
        assert!(!registry.has_strategy(""));
        let task = WorkflowTask::new("Anything", "");
        let output = registry.resolve("").render(&task, None);
        assert!(matches!(output, RenderableOutput::Placeholder { .. }));
    }

    #[test]
    fn test_defaults_include_travel_approval() {
        let registry = StrategyRegistry::with_defaults();
        assert!(registry.has_strategy("TravelApproval"));
        assert_eq!(registry.registered_names(), vec!["TravelApproval"]);
    }

    #[test]
    fn test_custom_registration_is_exact_match_only() {
        let registry = StrategyRegistry::builder()
            .register("ExpenseApproval", Arc::new(FixedStrategy("expense")))
            .build();

        assert!(registry.has_strategy("ExpenseApproval"));
        assert!(!registry.has_strategy("expenseapproval"));
        assert!(!registry.has_strategy("ExpenseApproval "));
    }

    #[test]
    fn test_later_registration_wins() {
        let registry = StrategyRegistry::builder()
            .register("P", Arc::new(FixedStrategy("first")))
            .register("P", Arc::new(FixedStrategy("second")))
            .build();

        let task = WorkflowTask::new("t", "P");
        let output = registry.resolve("P").render(&task, None);
        assert_eq!(output, RenderableOutput::placeholder("second"));
    }

    #[test]
    fn test_default_registry_is_shared() {
        let a = default_registry();
        let b = default_registry();
        assert!(std::ptr::eq(a, b));
    }
}
