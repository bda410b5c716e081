//! Serializable hand-off object for downstream consumers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use xerlens_core::ProjectKey;
use xerlens_metrics::{
    ActivitySummary, EvPoint, HealthAssessment, KpiSet, assess_health, compute_kpis,
    compute_time_series, summarize_activities,
};
use xerlens_schedule::ProjectModel;

/// Everything downstream renderers need for one analyzed project.
///
/// Every figure is derived from `model`; nothing else feeds the metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub project_key: ProjectKey,
    #[serde(flatten)]
    pub model: ProjectModel,
    pub kpis: KpiSet,
    pub earned_value: Vec<EvPoint>,
    pub health: HealthAssessment,
    pub activity_summary: ActivitySummary,
    pub activity_count: usize,
    pub resource_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,
    pub ingested_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Run the metrics engine over `model`.
    pub fn analyze(project_key: ProjectKey, model: ProjectModel, ingested_at: DateTime<Utc>) -> Self {
        let kpis = compute_kpis(&model);
        let earned_value = compute_time_series(&model);
        let health = assess_health(&kpis);
        let activity_summary = summarize_activities(&model.activities);

        Self {
            project_key,
            activity_count: model.activities.len(),
            resource_count: model.resources.len(),
            model,
            kpis,
            earned_value,
            health,
            activity_summary,
            executive_summary: None,
            ingested_at,
        }
    }

    pub fn with_executive_summary(mut self, summary: impl Into<String>) -> Self {
        self.executive_summary = Some(summary.into());
        self
    }
}
