//! # Record Errors
//!
//! The only two ways a value record can be misused: building it without a required
//! field, or asking for an update of a field it does not declare. A third variant,
//! [`RecordError::FieldType`], exists only for the dynamic `build`/`with_fields` API,
//! where a value can arrive with the wrong kind. Typed constructors and updates never
//! return it.

use thiserror::Error;

/// Errors raised by dynamic construction and dynamic updates of value records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    /// A required field was not supplied at construction.
    #[error("{record} is missing required field {field}")]
    MissingField { record: &'static str, field: String },

    /// An override named a field the record does not declare.
    #[error("{record} has no field named {field}")]
    InvalidField { record: &'static str, field: String },

    /// A field was supplied with a value of the wrong kind.
    #[error("{record}.{field} expects {expected}")]
    FieldType {
        record: &'static str,
        field: String,
        expected: &'static str,
    },
}
