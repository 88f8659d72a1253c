//! Colon-delimited record parsing shared by the passwd and group formats
//!
//! Both account files use the same line shape: one record per line, fields
//! separated by `:`. A snapshot is only produced when every line of the
//! content is well formed; the first bad line aborts the whole parse.

use thiserror::Error;

/// Field separator used by passwd and group files
pub const FIELD_DELIMITER: char = ':';

/// A typed entity built from one line of a colon-delimited account file
pub trait Record: Sized {
    /// Name of the record kind, used in diagnostics
    const KIND: &'static str;

    /// Number of fields a well-formed line must contain
    const FIELD_COUNT: usize;

    /// Build the record from exactly `FIELD_COUNT` fields
    fn from_fields(fields: &[&str]) -> Result<Self, FieldError>;
}

/// Reason a single line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("expected {expected} fields delimited by ':', found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} '{value}': {reason}")]
    InvalidId {
        field: &'static str,
        value: String,
        reason: String,
    },
}

/// A line-level failure, located in the source content
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {kind} line {line_number} \"{line}\": {source}")]
pub struct ParseError {
    pub kind: &'static str,
    /// 1-based line number
    pub line_number: usize,
    pub line: String,
    #[source]
    pub source: FieldError,
}

/// Parse the full content of an account file into records, in line order
pub fn parse_records<R: Record>(content: &str) -> Result<Vec<R>, ParseError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_line::<R>(line).map_err(|source| ParseError {
                kind: R::KIND,
                line_number: index + 1,
                line: line.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse a single line. Empty fields are kept, so `a::b` has three fields.
pub fn parse_line<R: Record>(line: &str) -> Result<R, FieldError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() != R::FIELD_COUNT {
        return Err(FieldError::FieldCount {
            expected: R::FIELD_COUNT,
            found: fields.len(),
        });
    }

    R::from_fields(&fields)
}

/// Parse a base-10 uid/gid field as a signed 32-bit id
pub fn parse_id(field: &'static str, value: &str) -> Result<i32, FieldError> {
    value.parse::<i32>().map_err(|e| FieldError::InvalidId {
        field,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
