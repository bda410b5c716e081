//! Primavera P6 XER parsing.
//!
//! Parsing is two steps: [`RawTables::decode`] scans the tab-delimited text
//! into generic tables, then [`project_model`] maps the known tables
//! (`PROJNODE`, `TASK`, `RSRC`, `TASKRSRC`) onto the typed model. Either the
//! whole model is produced or a [`ParseError`] is returned; there is no
//! partial output.

pub mod coerce;
pub mod error;
pub mod project;
pub mod raw;

pub use error::ParseError;
pub use project::project_model;
pub use raw::{RawTables, Record, zip_record};

use std::borrow::Cow;

use tracing::{instrument, warn};
use xerlens_schedule::ProjectModel;

/// Parse decoded export text into a project model.
#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse(text: &str) -> Result<ProjectModel, ParseError> {
    let tables = RawTables::decode(text)?;
    Ok(project_model(&tables))
}

/// Parse raw file bytes.
///
/// Bytes that are not valid UTF-8 (Windows-1252 exports, for instance) are
/// replaced with U+FFFD; the rest of the file parses as usual.
pub fn parse_bytes(bytes: &[u8]) -> Result<ProjectModel, ParseError> {
    parse(&decode_lossy(bytes))
}

fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            warn!(valid_up_to = e.valid_up_to(), "export is not valid UTF-8; invalid bytes replaced");
            String::from_utf8_lossy(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn minimal_task_table_end_to_end() {
        let model = parse("%T TASK\n%F task_id\ttask_name\tplanned_value\n%R 1\tFoundation\t5000\n").unwrap();
        assert_eq!(model.activities.len(), 1);
        let a = &model.activities[0];
        assert_eq!(a.id.as_deref(), Some("1"));
        assert_eq!(a.name.as_deref(), Some("Foundation"));
        assert_eq!(a.planned_value, 5000.0);
        assert_eq!(a.earned_value, 0.0);
        assert_eq!(a.actual_cost, 0.0);
        assert_eq!(a.duration, 0);
        assert_eq!(a.percent_complete, 0.0);
    }

    #[test]
    fn file_without_known_tables_is_an_empty_model() {
        let model = parse("ERMHDR\t19.12\n%T\tCALENDAR\n%F\tclndr_id\n%R\t1\n%E\n").unwrap();
        assert!(model.is_empty());
        assert_eq!(model.project.name, "Unnamed Project");
    }

    #[test]
    fn non_utf8_bytes_are_replaced_not_rejected() {
        let model =
            parse_bytes(b"%T\tTASK\n%F\ttask_id\ttask_name\tplanned_value\n%R\t1\tCaf\xe9\t5000\n").unwrap();
        assert_eq!(model.activities.len(), 1);
        let a = &model.activities[0];
        assert_eq!(a.name.as_deref(), Some("Caf\u{FFFD}"));
        assert_eq!(a.planned_value, 5000.0);
    }

    #[test]
    fn structural_failure_yields_no_model() {
        let err = parse("%T\tTASK\n%F\ttask_id\n%R\t1\n%T\t\n").unwrap_err();
        assert_eq!(err, ParseError::MissingTableName { line: 4 });
    }

    proptest! {
        #[test]
        fn parsing_is_idempotent(
            rows in prop::collection::vec(("[A-Z0-9]{1,4}", "[a-z ]{0,8}", "-?[0-9]{0,5}(\\.[0-9]{1,2})?"), 0..12)
        ) {
            let mut text = String::from("%T\tTASK\n%F\ttask_id\ttask_name\tplanned_value\n");
            for (id, name, pv) in &rows {
                text.push_str(&format!("%R\t{id}\t{name}\t{pv}\n"));
            }
            let first = parse(&text).unwrap();
            let second = parse(&text).unwrap();
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.activities.len(), rows.len());
            for a in &first.activities {
                prop_assert!(a.planned_value.is_finite());
            }
        }
    }
}
