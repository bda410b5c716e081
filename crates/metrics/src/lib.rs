//! Earned-value metrics over a parsed project.
//!
//! Every function here is total and pure: any well-formed [`ProjectModel`]
//! (including one with no activities) yields finite results, and the same
//! model always yields the same output.
//!
//! [`ProjectModel`]: xerlens_schedule::ProjectModel

pub mod health;
pub mod kpi;
pub mod summary;
pub mod time_series;

pub use health::{HealthAssessment, HealthTier, assess_health};
pub use kpi::{Health, KpiSet, compute_kpis};
pub use summary::{ActivitySummary, summarize_activities};
pub use time_series::{EvPoint, compute_time_series};
