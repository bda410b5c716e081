use serde::{Deserialize, Serialize};
use tracing::instrument;

use xerlens_core::{finite_or_zero, round_index, round_money};
use xerlens_schedule::{Activity, ProjectModel};

/// Both indices at or above this are on track.
pub const ON_TRACK_THRESHOLD: f64 = 0.95;
/// Either index below this is at risk.
pub const AT_RISK_THRESHOLD: f64 = 0.90;

/// Categorical project health derived from SPI and CPI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Health {
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "Warning")]
    Warning,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl Health {
    /// Classify a pair of performance indices.
    ///
    /// On Track is tested first, then At Risk; whatever remains is Warning.
    pub fn classify(spi: f64, cpi: f64) -> Self {
        if spi >= ON_TRACK_THRESHOLD && cpi >= ON_TRACK_THRESHOLD {
            Health::OnTrack
        } else if spi < AT_RISK_THRESHOLD || cpi < AT_RISK_THRESHOLD {
            Health::AtRisk
        } else {
            Health::Warning
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Health::OnTrack => "On Track",
            Health::Warning => "Warning",
            Health::AtRisk => "At Risk",
        }
    }
}

impl core::fmt::Display for Health {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate earned-value KPIs for a project.
///
/// Money and percentages are rounded to 2 decimals, indices to 4.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub total_planned_value: f64,
    pub total_earned_value: f64,
    pub total_actual_cost: f64,
    pub percent_complete: f64,
    pub schedule_performance_index: f64,
    pub cost_performance_index: f64,
    pub schedule_variance: f64,
    pub cost_variance: f64,
    pub estimate_at_completion: f64,
    pub variance_at_completion: f64,
    pub budget: f64,
    pub health: Health,
}

/// Running PV/EV/AC sums.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub(crate) struct Totals {
    pub pv: f64,
    pub ev: f64,
    pub ac: f64,
}

impl Totals {
    pub(crate) fn add_activity(&mut self, activity: &Activity) {
        self.pv += activity.planned_value;
        self.ev += activity.earned_value;
        self.ac += activity.actual_cost;
    }

    pub(crate) fn add(&mut self, other: &Totals) {
        self.pv += other.pv;
        self.ev += other.ev;
        self.ac += other.ac;
    }

    /// Sums that overflowed `f64` read as zero.
    pub(crate) fn finite(&self) -> Totals {
        Totals {
            pv: finite_or_zero(self.pv),
            ev: finite_or_zero(self.ev),
            ac: finite_or_zero(self.ac),
        }
    }
}

/// `numerator / denominator`, dividing by 1 when the denominator is zero.
///
/// With no planned value this makes SPI equal to the earned value itself;
/// consumers rely on always receiving a finite number, so an overflowing
/// quotient reads as zero.
fn div_or_unit(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        numerator
    } else {
        finite_or_zero(numerator / denominator)
    }
}

/// Compute aggregate KPIs over every activity of the project.
#[instrument(level = "debug", skip(model), fields(activities = model.activities.len()))]
pub fn compute_kpis(model: &ProjectModel) -> KpiSet {
    let mut totals = Totals::default();
    for activity in &model.activities {
        totals.add_activity(activity);
    }
    let Totals { pv, ev, ac } = totals.finite();

    let percent_complete = if pv > 0.0 { finite_or_zero(ev / pv * 100.0) } else { 0.0 };
    let spi = div_or_unit(ev, pv);
    let cpi = div_or_unit(ev, ac);
    let eac = div_or_unit(ac, cpi);

    KpiSet {
        total_planned_value: round_money(pv),
        total_earned_value: round_money(ev),
        total_actual_cost: round_money(ac),
        percent_complete: round_money(percent_complete),
        schedule_performance_index: round_index(spi),
        cost_performance_index: round_index(cpi),
        schedule_variance: round_money(ev - pv),
        cost_variance: round_money(ev - ac),
        estimate_at_completion: round_money(eac),
        variance_at_completion: round_money(pv - ev),
        budget: round_money(pv),
        health: Health::classify(spi, cpi),
    }
}
