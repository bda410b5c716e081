use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, instrument};

use xerlens_core::{MonthKey, finite_or_zero, round_index, round_money};
use xerlens_schedule::ProjectModel;

use crate::kpi::Totals;

/// Cumulative earned-value position at the end of one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvPoint {
    pub month: MonthKey,
    #[serde(rename = "pv")]
    pub planned_value: f64,
    #[serde(rename = "ev")]
    pub earned_value: f64,
    #[serde(rename = "ac")]
    pub actual_cost: f64,
    pub spi: f64,
    pub cpi: f64,
}

/// Cumulative monthly earned-value series.
///
/// Activities are bucketed by the month of their start date; activities with
/// a missing or unparsable start date are left out. Points are emitted for the
/// months present, ascending, each carrying totals to date. Unlike the
/// aggregate KPIs, a point's SPI/CPI is 0 while its cumulative PV/AC is not
/// positive.
#[instrument(level = "debug", skip(model), fields(activities = model.activities.len()))]
pub fn compute_time_series(model: &ProjectModel) -> Vec<EvPoint> {
    let mut buckets: BTreeMap<MonthKey, Totals> = BTreeMap::new();
    let mut undated = 0usize;

    for activity in &model.activities {
        match activity.start_month() {
            Some(month) => buckets.entry(month).or_default().add_activity(activity),
            None => undated += 1,
        }
    }

    if undated > 0 {
        debug!(undated, "activities without a usable start date left out of the series");
    }

    let mut running = Totals::default();
    buckets
        .into_iter()
        .map(|(month, bucket)| {
            running.add(&bucket);
            let Totals { pv, ev, ac } = running.finite();
            EvPoint {
                month,
                planned_value: round_money(pv),
                earned_value: round_money(ev),
                actual_cost: round_money(ac),
                spi: if pv > 0.0 { round_index(finite_or_zero(ev / pv)) } else { 0.0 },
                cpi: if ac > 0.0 { round_index(finite_or_zero(ev / ac)) } else { 0.0 },
            }
        })
        .collect()
}
