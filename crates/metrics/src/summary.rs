use serde::{Deserialize, Serialize};

use xerlens_schedule::Activity;

/// Activity counts by progress.
///
/// Percent complete is not clamped, so activities reporting a negative
/// percentage fall in none of the three buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    /// Completed share of all activities, as a whole percentage.
    pub completion_rate: u32,
}

pub fn summarize_activities(activities: &[Activity]) -> ActivitySummary {
    let total = activities.len();
    let completed = activities.iter().filter(|a| a.percent_complete >= 100.0).count();
    let in_progress = activities
        .iter()
        .filter(|a| a.percent_complete > 0.0 && a.percent_complete < 100.0)
        .count();
    let not_started = activities.iter().filter(|a| a.percent_complete == 0.0).count();

    let completion_rate = if total > 0 {
        (completed as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };

    ActivitySummary {
        total,
        completed,
        in_progress,
        not_started,
        completion_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(percent: f64) -> Activity {
        Activity {
            percent_complete: percent,
            ..Activity::default()
        }
    }

    #[test]
    fn buckets_by_percent_complete() {
        let s = summarize_activities(&[at(0.0), at(50.0), at(100.0), at(120.0), at(-5.0)]);
        assert_eq!(s.total, 5);
        assert_eq!(s.completed, 2);
        assert_eq!(s.in_progress, 1);
        assert_eq!(s.not_started, 1);
        assert_eq!(s.completion_rate, 40);
    }

    #[test]
    fn completion_rate_rounds_halves_up() {
        let mut activities = vec![at(100.0)];
        activities.extend(std::iter::repeat_with(|| at(0.0)).take(7));
        assert_eq!(summarize_activities(&activities).completion_rate, 13);
    }

    #[test]
    fn empty_list() {
        let s = summarize_activities(&[]);
        assert_eq!(s.total, 0);
        assert_eq!(s.completion_rate, 0);
    }
}
