use serde::{Deserialize, Serialize};

/// Resource type used when an `RSRC` row carries none.
pub const DEFAULT_RESOURCE_TYPE: &str = "Material";

/// A labor, equipment or material resource (an `RSRC` row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub max_units: f64,
    pub rate: f64,
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            kind: DEFAULT_RESOURCE_TYPE.to_string(),
            max_units: 0.0,
            rate: 0.0,
        }
    }
}
