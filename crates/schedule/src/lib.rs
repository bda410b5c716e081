//! Normalized project model reconstructed from a P6 schedule export.
//!
//! This crate holds plain data only. The parser (`xerlens-xer`) produces it and
//! the metrics engine (`xerlens-metrics`) reads it; neither sees the other's
//! internals.

pub mod activity;
pub mod assignment;
pub mod project;
pub mod resource;

pub use activity::Activity;
pub use assignment::AssignmentRecord;
pub use project::{ProjectModel, ProjectSummary};
pub use resource::Resource;
