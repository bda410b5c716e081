use serde::{Deserialize, Serialize};

use crate::kpi::KpiSet;

/// Four-tier scored health used by report headers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthTier {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Warning")]
    Warning,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Critical")]
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthAssessment {
    pub status: HealthTier,
    /// Hex color for the status badge.
    pub color: &'static str,
    pub score: u8,
}

/// Score the (rounded) indices of a KPI set.
///
/// Both indices must clear a tier's floor: 0.95 On Track, 0.90 Warning,
/// 0.80 At Risk, anything lower is Critical.
pub fn assess_health(kpis: &KpiSet) -> HealthAssessment {
    let spi = kpis.schedule_performance_index;
    let cpi = kpis.cost_performance_index;
    let both_at_least = |floor: f64| spi >= floor && cpi >= floor;

    let (status, color, score) = if both_at_least(0.95) {
        (HealthTier::OnTrack, "#10b981", 100)
    } else if both_at_least(0.90) {
        (HealthTier::Warning, "#f59e0b", 75)
    } else if both_at_least(0.80) {
        (HealthTier::AtRisk, "#ef4444", 50)
    } else {
        (HealthTier::Critical, "#7f1d1d", 25)
    };

    HealthAssessment { status, color, score }
}
