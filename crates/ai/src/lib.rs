//! `xerlens-ai`
//!
//! **Responsibility:** narrative-summary collaborator boundary.
//!
//! This crate is intentionally **not** part of the metrics path:
//! - It only reads a parsed project and its KPIs.
//! - Its failures never affect KPI or time-series results.
//! - It ships no network client; callers plug one in via [`SummaryGenerator`].

pub mod generator;
pub mod prompt;
pub mod result;
pub mod template;

pub use generator::{SummaryGenerator, summarize_or_blank};
pub use prompt::build_summary_prompt;
pub use result::{SUMMARY_UNAVAILABLE, SummaryError};
pub use template::TemplateSummaryGenerator;
