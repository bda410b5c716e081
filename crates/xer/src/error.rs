use thiserror::Error;

/// Structural failure while scanning an export.
///
/// Only the table scan can fail. Undecodable bytes and malformed individual
/// field values are never errors: bytes are replaced with U+FFFD and values
/// are coerced to documented defaults during projection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `%T` line declares no table name.
    #[error("table declaration without a name on line {line}")]
    MissingTableName { line: usize },
}
