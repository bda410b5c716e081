use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::assignment::AssignmentRecord;
use crate::resource::Resource;

pub const DEFAULT_PROJECT_NAME: &str = "Unnamed Project";
pub const DEFAULT_PROJECT_STATUS: &str = "Not Started";
pub const DEFAULT_PROJECT_MANAGER: &str = "N/A";

/// Project header, taken from the first `PROJNODE` row of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: Option<String>,
    pub name: String,
    pub status: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub manager: String,
}

impl Default for ProjectSummary {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_PROJECT_NAME.to_string(),
            status: DEFAULT_PROJECT_STATUS.to_string(),
            start_date: None,
            end_date: None,
            manager: DEFAULT_PROJECT_MANAGER.to_string(),
        }
    }
}

/// The normalized project reconstructed from one export.
///
/// Multi-project exports are reduced to their first project header; activities
/// and resources from every project in the file are kept in file order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectModel {
    pub project: ProjectSummary,
    pub activities: Vec<Activity>,
    pub resources: Vec<Resource>,
    pub task_resources: Vec<AssignmentRecord>,
}

impl ProjectModel {
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty() && self.resources.is_empty() && self.task_resources.is_empty()
    }
}
