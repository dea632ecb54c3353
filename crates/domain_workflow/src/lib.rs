//! Workflow Task Domain
//!
//! Value objects for tasks coming from the external workflow engine, plus
//! the process-type dispatcher: an immutable registry mapping a task's
//! process-definition name to a rendering strategy, with a generic fallback
//! for unknown process types.
//!
//! The engine owns and mutates all task data; this crate reads a snapshot,
//! performs no I/O, and holds no shared state between render passes.

pub mod task;
pub mod render;
pub mod travel;
pub mod registry;
pub mod error;

pub use task::{TaskComment, TaskPriority, WorkflowTask};
pub use render::{DetailField, GenericStrategy, RenderStrategy, RenderableOutput};
pub use travel::{TravelApprovalStrategy, TravelRequest};
pub use registry::{default_registry, StrategyRegistry, StrategyRegistryBuilder};
pub use error::WorkflowError;
