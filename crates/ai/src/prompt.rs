use std::fmt::Write as _;

use xerlens_metrics::KpiSet;
use xerlens_schedule::ProjectModel;

const NOT_AVAILABLE: &str = "N/A";

/// Build the instruction prompt handed to a remote summary model.
pub fn build_summary_prompt(model: &ProjectModel, kpis: &KpiSet) -> String {
    let p = &model.project;
    let or_na = |v: Option<&str>| v.filter(|s| !s.is_empty()).unwrap_or(NOT_AVAILABLE).to_string();

    let mut out = String::new();
    out.push_str("You are a senior project controls manager.\n");
    out.push_str(
        "Write a concise executive summary (max 200 words) for a construction project status report.\n\n",
    );

    out.push_str("Project:\n");
    let _ = writeln!(out, "- Name: {}", or_na(Some(p.name.as_str())));
    let _ = writeln!(out, "- ID: {}", or_na(p.id.as_deref()));
    let _ = writeln!(out, "- Start: {}", or_na(p.start_date.as_deref()));
    let _ = writeln!(out, "- Finish: {}", or_na(p.end_date.as_deref()));
    let _ = writeln!(out, "- Status: {}", or_na(Some(p.status.as_str())));

    out.push_str("\nKey Metrics:\n");
    let _ = writeln!(out, "- Planned Value (PV): {}", kpis.total_planned_value);
    let _ = writeln!(out, "- Earned Value (EV): {}", kpis.total_earned_value);
    let _ = writeln!(out, "- Actual Cost (AC): {}", kpis.total_actual_cost);
    let _ = writeln!(out, "- SPI: {}", kpis.schedule_performance_index);
    let _ = writeln!(out, "- CPI: {}", kpis.cost_performance_index);
    let _ = writeln!(out, "- Schedule Variance (SV): {}", kpis.schedule_variance);
    let _ = writeln!(out, "- Cost Variance (CV): {}", kpis.cost_variance);
    let _ = writeln!(out, "- EAC: {}", kpis.estimate_at_completion);
    let _ = writeln!(out, "- VAC: {}", kpis.variance_at_completion);
    let _ = writeln!(out, "- Health: {}", kpis.health);

    out.push_str(
        "\nWrite 1–2 short paragraphs in neutral business English, focusing on schedule, cost, risks, and recommended actions.\n",
    );
    out.push_str("Do NOT include bullet points or headings.\n");
    out
}
