use xerlens_metrics::{Health, KpiSet};
use xerlens_schedule::ProjectModel;

use crate::generator::SummaryGenerator;
use crate::result::SummaryError;

/// Deterministic, offline summary built from the KPI figures alone.
///
/// Useful when no remote model is configured and in tests.
#[derive(Debug, Default, Copy, Clone)]
pub struct TemplateSummaryGenerator;

impl SummaryGenerator for TemplateSummaryGenerator {
    fn name(&self) -> &str {
        "template"
    }

    fn generate(&self, model: &ProjectModel, kpis: &KpiSet) -> Result<String, SummaryError> {
        let name = &model.project.name;

        let schedule = if kpis.schedule_variance < 0.0 {
            format!("Earned value trails plan by {:.2}", -kpis.schedule_variance)
        } else {
            format!("Earned value is ahead of plan by {:.2}", kpis.schedule_variance)
        };
        let cost = if kpis.cost_variance < 0.0 {
            format!("actual cost exceeds earned value by {:.2}", -kpis.cost_variance)
        } else {
            format!("actual cost is {:.2} below earned value", kpis.cost_variance)
        };

        let action = match kpis.health {
            Health::OnTrack => "No corrective action is required; keep monitoring progress monthly.",
            Health::Warning => {
                "Performance is slipping; review near-term activities and cost commitments before the next period."
            }
            Health::AtRisk => {
                "Recovery planning is recommended: re-sequence critical work and challenge the remaining cost estimate."
            }
        };

        Ok(format!(
            "{name} is {pct}% complete against a budget of {budget}, with an SPI of {spi} and a CPI of {cpi}; overall health is {health}. \
             {schedule} and {cost}. The estimate at completion stands at {eac}.\n\n{action}",
            pct = kpis.percent_complete,
            budget = kpis.budget,
            spi = kpis.schedule_performance_index,
            cpi = kpis.cost_performance_index,
            health = kpis.health,
            eac = kpis.estimate_at_completion,
        ))
    }
}
