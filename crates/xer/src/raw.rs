//! Generic table decoding: XER text → table name → ordered records.
//!
//! Nothing here knows about particular tables. Typed projection of the known
//! tables lives in `project.rs`.

use std::collections::BTreeMap;

use tracing::{debug, instrument, trace};

use crate::error::ParseError;

/// One record: field name → raw value, in declared field order.
///
/// Missing and empty values are both `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    values: Vec<(String, Option<String>)>,
}

impl Record {
    /// Raw value of `field`, if the field is declared and non-empty.
    ///
    /// When a field name is declared twice the later column wins.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.iter().any(|(name, _)| name == field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Consume into `(field, value)` pairs in declared order.
    pub fn into_fields(self) -> Vec<(String, Option<String>)> {
        self.values
    }
}

/// Zip declared field names against one record's raw values.
///
/// Values missing relative to the field count become `None`, as do empty
/// values. Surplus values are ignored.
pub fn zip_record<'a, F, V>(fields: F, values: V) -> Record
where
    F: IntoIterator<Item = &'a str>,
    V: IntoIterator<Item = &'a str>,
{
    let mut values = values.into_iter();
    let zipped = fields
        .into_iter()
        .map(|field| {
            let value = values
                .next()
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            (field.to_string(), value)
        })
        .filter(|(field, _)| !field.is_empty())
        .collect();
    Record { values: zipped }
}

/// Every table of one export, keyed by table name.
///
/// Built in a single forward pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTables {
    tables: BTreeMap<String, Vec<Record>>,
}

impl RawTables {
    /// Records of `table`, or an empty slice when the export has no such table.
    pub fn records(&self, table: &str) -> &[Record] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Scan export text into tables.
    ///
    /// Line tags:
    /// - `%T name` opens (or restarts) a table and clears the field list.
    /// - `%F f1 f2 ...` appends tab-separated field names.
    /// - `%R v1 v2 ...` appends a record to the open table; dropped when no
    ///   table is open or no fields are declared.
    /// - `%E` ends the scan; later lines are ignored.
    ///
    /// Blank lines and unknown tags are skipped.
    #[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
    pub fn decode(text: &str) -> Result<Self, ParseError> {
        let mut tables: BTreeMap<String, Vec<Record>> = BTreeMap::new();
        let mut current: Option<String> = None;
        let mut fields: Vec<String> = Vec::new();

        for (idx, line) in text.split('\n').enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some((tag, payload)) = split_tag(line) else {
                trace!(line = line_no, "skipping untagged line");
                continue;
            };

            match tag {
                "%T" => {
                    let name = payload.split('\t').next().unwrap_or_default().trim();
                    if name.is_empty() {
                        return Err(ParseError::MissingTableName { line: line_no });
                    }
                    if tables.insert(name.to_string(), Vec::new()).is_some() {
                        debug!(table = name, line = line_no, "table declared again; earlier records discarded");
                    }
                    current = Some(name.to_string());
                    fields.clear();
                }
                "%F" => {
                    fields.extend(payload.split('\t').map(|f| f.trim().to_string()));
                }
                "%R" => {
                    let table = current.as_ref().and_then(|name| tables.get_mut(name));
                    match table {
                        Some(records) if !fields.is_empty() => {
                            let record = zip_record(
                                fields.iter().map(String::as_str),
                                payload.split('\t'),
                            );
                            records.push(record);
                        }
                        _ => debug!(line = line_no, "record outside a declared table dropped"),
                    }
                }
                "%E" => {
                    trace!(line = line_no, "end marker reached");
                    break;
                }
                other => trace!(tag = other, line = line_no, "skipping unknown tag"),
            }
        }

        debug!(tables = tables.len(), "decoded export tables");
        Ok(Self { tables })
    }
}

/// Split a trimmed line into its 2-character tag and payload.
///
/// One separator (tab or space) after the tag is removed.
fn split_tag(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with('%') {
        return None;
    }
    let tag = line.get(..2)?;
    let rest = line.get(2..)?;
    let payload = rest
        .strip_prefix('\t')
        .or_else(|| rest.strip_prefix(' '))
        .unwrap_or(rest);
    Some((tag, payload))
}
