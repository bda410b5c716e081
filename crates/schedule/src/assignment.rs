use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A `TASKRSRC` row, passed through as field name → raw value.
///
/// Columns keep the order they were declared in. No assignment semantics are
/// derived from it here. Serializes as a JSON object in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignmentRecord {
    columns: Vec<(String, Option<String>)>,
}

impl AssignmentRecord {
    /// Raw value of `field`; `None` when undeclared or empty.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == field)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.columns.iter().any(|(name, _)| name == field)
    }

    /// Declared field names, in column order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Set `field`, keeping its original position when already present.
    pub fn insert(&mut self, field: String, value: Option<String>) {
        match self.columns.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.columns.push((field, value)),
        }
    }
}

/// Later duplicates overwrite the value but not the position of a column.
impl FromIterator<(String, Option<String>)> for AssignmentRecord {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut record = Self::default();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

impl Serialize for AssignmentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AssignmentRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnsVisitor;

        impl<'de> Visitor<'de> for ColumnsVisitor {
            type Value = AssignmentRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field name to optional string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut record = AssignmentRecord::default();
                while let Some((field, value)) = access.next_entry::<String, Option<String>>()? {
                    record.insert(field, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(ColumnsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(columns: &[(&str, Option<&str>)]) -> AssignmentRecord {
        columns
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn keeps_declared_column_order() {
        let record = row(&[("task_id", Some("T1")), ("rsrc_id", Some("R1")), ("acct_id", None)]);
        assert_eq!(record.fields().collect::<Vec<_>>(), ["task_id", "rsrc_id", "acct_id"]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"task_id":"T1","rsrc_id":"R1","acct_id":null}"#);
    }

    #[test]
    fn duplicate_column_overwrites_in_place() {
        let record = row(&[("b", Some("1")), ("a", Some("2")), ("b", Some("3"))]);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("b"), Some("3"));
        assert_eq!(record.fields().collect::<Vec<_>>(), ["b", "a"]);
    }

    #[test]
    fn reads_back_from_json_in_order() {
        let record: AssignmentRecord = serde_json::from_str(r#"{"z":"1","a":null}"#).unwrap();
        assert_eq!(record.fields().collect::<Vec<_>>(), ["z", "a"]);
        assert!(record.contains("a"));
        assert_eq!(record.get("a"), None);
    }
}
