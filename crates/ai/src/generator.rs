use tracing::warn;

use xerlens_metrics::KpiSet;
use xerlens_schedule::ProjectModel;

use crate::result::{SUMMARY_UNAVAILABLE, SummaryError};

/// Produces a short executive narrative for a parsed project.
///
/// Implementations may call out to a remote model. They must not mutate the
/// project or its KPIs.
pub trait SummaryGenerator: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    fn generate(&self, model: &ProjectModel, kpis: &KpiSet) -> Result<String, SummaryError>;
}

impl<G: SummaryGenerator + ?Sized> SummaryGenerator for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&self, model: &ProjectModel, kpis: &KpiSet) -> Result<String, SummaryError> {
        (**self).generate(model, kpis)
    }
}

/// Run `generator`, treating failure as "no summary".
///
/// A failure is logged and yields an empty string. A blank answer yields
/// [`SUMMARY_UNAVAILABLE`].
pub fn summarize_or_blank<G>(generator: &G, model: &ProjectModel, kpis: &KpiSet) -> String
where
    G: SummaryGenerator + ?Sized,
{
    match generator.generate(model, kpis) {
        Ok(text) if text.trim().is_empty() => SUMMARY_UNAVAILABLE.to_string(),
        Ok(text) => text,
        Err(err) => {
            warn!(generator = generator.name(), error = %err, "summary generation failed");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xerlens_metrics::compute_kpis;

    struct Fixed(Result<&'static str, &'static str>);

    impl SummaryGenerator for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate(&self, _model: &ProjectModel, _kpis: &KpiSet) -> Result<String, SummaryError> {
            self.0
                .map(str::to_string)
                .map_err(|e| SummaryError::Transport(e.to_string()))
        }
    }

    #[test]
    fn passes_generated_text_through() {
        let model = ProjectModel::default();
        let kpis = compute_kpis(&model);
        assert_eq!(summarize_or_blank(&Fixed(Ok("All good.")), &model, &kpis), "All good.");
    }

    #[test]
    fn failure_becomes_empty_summary() {
        let model = ProjectModel::default();
        let kpis = compute_kpis(&model);
        assert_eq!(summarize_or_blank(&Fixed(Err("401")), &model, &kpis), "");
    }

    #[test]
    fn blank_answer_is_reported_as_unavailable() {
        let model = ProjectModel::default();
        let kpis = compute_kpis(&model);
        let boxed: Box<dyn SummaryGenerator> = Box::new(Fixed(Ok("  ")));
        assert_eq!(summarize_or_blank(&boxed, &model, &kpis), SUMMARY_UNAVAILABLE);
    }
}
