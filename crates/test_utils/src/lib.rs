//! Shared test utilities for the claims back-office workspace
//!
//! Provides fixtures with predictable values, fluent builders for documents
//! and tasks, and proptest generators for slot sequences.

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::{DocumentFixtures, StatusFixtures, TaskFixtures};
pub use builders::{TestDocumentBuilder, TestTaskBuilder};
