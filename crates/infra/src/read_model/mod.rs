//! Session-scoped storage for analyzed projects.

pub mod project_store;

pub use project_store::{InMemoryProjectStore, ProjectStore};
