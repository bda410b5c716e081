//! Typed projection of the known tables onto the project model.

use tracing::debug;

use xerlens_schedule::activity::DEFAULT_ACTIVITY_STATUS;
use xerlens_schedule::project::{
    DEFAULT_PROJECT_MANAGER, DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_STATUS,
};
use xerlens_schedule::resource::DEFAULT_RESOURCE_TYPE;
use xerlens_schedule::{Activity, ProjectModel, ProjectSummary, Resource};

use crate::coerce;
use crate::raw::{RawTables, Record};

pub const PROJECT_TABLE: &str = "PROJNODE";
pub const TASK_TABLE: &str = "TASK";
pub const RESOURCE_TABLE: &str = "RSRC";
pub const ASSIGNMENT_TABLE: &str = "TASKRSRC";

/// Project the known tables onto a [`ProjectModel`].
///
/// Absent tables read as empty. Only the first `PROJNODE` row is used for the
/// project header.
pub fn project_model(tables: &RawTables) -> ProjectModel {
    let projects = tables.records(PROJECT_TABLE);
    if projects.len() > 1 {
        debug!(count = projects.len(), "export holds several projects; using the first header");
    }
    let project = projects.first().map(project_summary).unwrap_or_default();

    ProjectModel {
        project,
        activities: tables.records(TASK_TABLE).iter().map(activity).collect(),
        resources: tables.records(RESOURCE_TABLE).iter().map(resource).collect(),
        task_resources: tables
            .records(ASSIGNMENT_TABLE)
            .iter()
            .cloned()
            .map(|record| record.into_fields().into_iter().collect())
            .collect(),
    }
}

/// `PROJNODE` row → project header.
pub fn project_summary(record: &Record) -> ProjectSummary {
    ProjectSummary {
        id: coerce::text(record.get("proj_id")),
        name: coerce::text_or(record.get("proj_short_name"), DEFAULT_PROJECT_NAME),
        status: coerce::text_or(record.get("status_code"), DEFAULT_PROJECT_STATUS),
        start_date: coerce::text(record.get("start_date")),
        end_date: coerce::text(record.get("end_date")),
        manager: coerce::text_or(record.get("project_manager"), DEFAULT_PROJECT_MANAGER),
    }
}

/// `TASK` row → activity.
pub fn activity(record: &Record) -> Activity {
    Activity {
        id: coerce::text(record.get("task_id")),
        name: coerce::text(record.get("task_name")),
        start_date: coerce::text(record.get("start_date")),
        end_date: coerce::text(record.get("end_date")),
        duration: coerce::count("duration", record.get("duration")),
        percent_complete: coerce::float("percent_complete", record.get("percent_complete")),
        actual_start: coerce::text(record.get("actual_start_date")),
        actual_finish: coerce::text(record.get("actual_finish_date")),
        planned_value: coerce::float("planned_value", record.get("planned_value")),
        earned_value: coerce::float("earned_value", record.get("earned_value")),
        actual_cost: coerce::float("actual_cost", record.get("actual_cost")),
        status: coerce::text_or(record.get("status_code"), DEFAULT_ACTIVITY_STATUS),
    }
}

/// `RSRC` row → resource.
pub fn resource(record: &Record) -> Resource {
    Resource {
        id: coerce::text(record.get("rsrc_id")),
        name: coerce::text(record.get("rsrc_name")),
        kind: coerce::text_or(record.get("rsrc_type"), DEFAULT_RESOURCE_TYPE),
        max_units: coerce::float("max_units", record.get("max_units")),
        rate: coerce::float("rate", record.get("rate")),
    }
}
