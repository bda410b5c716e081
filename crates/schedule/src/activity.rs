use serde::{Deserialize, Serialize};

use xerlens_core::MonthKey;

/// Status label used when a task row carries none.
pub const DEFAULT_ACTIVITY_STATUS: &str = "Not Started";

/// One scheduled activity (a `TASK` row).
///
/// Numeric fields are always finite. `percent_complete` is taken as exported
/// and is not clamped to `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub duration: u64,
    pub percent_complete: f64,
    pub actual_start: Option<String>,
    pub actual_finish: Option<String>,
    pub planned_value: f64,
    pub earned_value: f64,
    pub actual_cost: f64,
    pub status: String,
}

impl Activity {
    /// Calendar month of the scheduled start, if the start date parses.
    pub fn start_month(&self) -> Option<MonthKey> {
        self.start_date.as_deref().and_then(MonthKey::from_timestamp)
    }
}

impl Default for Activity {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            start_date: None,
            end_date: None,
            duration: 0,
            percent_complete: 0.0,
            actual_start: None,
            actual_finish: None,
            planned_value: 0.0,
            earned_value: 0.0,
            actual_cost: 0.0,
            status: DEFAULT_ACTIVITY_STATUS.to_string(),
        }
    }
}
