//! Generic value-record framework.
//!
//! This module provides the building blocks for immutable data carriers whose
//! equality, hashing and rendering are derived from their fields.
//!
//! # Main Components
//!
//! - [`ValueRecord`] - Trait that record types implement (usually via [`value_record!`])
//! - [`FieldValue`] / [`FieldMap`] - The dynamic view of a record's fields
//! - [`RecordError`] - Missing, unknown and mistyped fields
//! - [`same_record`] - Structural equality across two record types

pub mod core;
pub mod error;
mod macros;

// Re-export core types for convenience
pub use self::core::*;
pub use error::RecordError;
pub(crate) use macros::{impl_record_traits, value_record};
