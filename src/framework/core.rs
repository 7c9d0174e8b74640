//! # Core Record Framework
//!
//! This module defines the generic building blocks for value records.
//!
//! ## Key Types
//!
//! - [`ValueRecord`]: The trait every value record implements.
//! - [`FieldValue`]: A dynamically typed field value, used by the dynamic API.
//! - [`FieldMap`]: A sparse name → value map for dynamic construction and overrides.
//! - [`RecordField`]: Conversion between Rust field types and [`FieldValue`].
//!
//! Equality, hashing and rendering always go through the typed fields. [`FieldValue`]
//! only backs the dynamic `build`/`with_fields` API.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::RecordError;

/// Multiplier used to fold per-field hashes into the record hash.
pub const HASH_MIXER: u64 = 0xA555_5529;

// =============================================================================
// 1. FIELD VALUES
// =============================================================================

/// A single field value as seen by the dynamic API.
///
/// Deserializes untagged, so a JSON object like `{"FirstName": "John", "Id": 7}`
/// maps directly onto a [`FieldMap`]. A nested object becomes [`FieldValue::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    /// The fields of a nested value record.
    Record(FieldMap),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Boolean(b) => write!(f, "{b}"),
            FieldValue::Record(fields) => {
                let body = fields
                    .iter()
                    .map(|(name, value)| format!("{name} = {value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{ {body} }}")
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

/// Field name → value, ordered by name.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// A Rust type that can be stored in a value record field.
///
/// Value records implement it too (see [`impl_record_traits!`](crate::framework::impl_record_traits)),
/// so records nest.
pub trait RecordField: Sized {
    /// Human-readable kind, reported in [`RecordError::FieldType`].
    const KIND: &'static str;

    fn to_field_value(&self) -> FieldValue;

    fn from_field_value(value: &FieldValue) -> Option<Self>;
}

impl RecordField for String {
    const KIND: &'static str = "text";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl RecordField for i64 {
    const KIND: &'static str = "integer";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl RecordField for bool {
    const KIND: &'static str = "boolean";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }

    fn from_field_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Reads a required field out of `fields`, converting it to `T`.
///
/// # Errors
/// - [`RecordError::MissingField`] if `name` is absent.
/// - [`RecordError::FieldType`] if the value has the wrong kind.
pub fn take_field<T: RecordField>(
    fields: &FieldMap,
    record: &'static str,
    name: &str,
) -> Result<T, RecordError> {
    let value = fields.get(name).ok_or_else(|| RecordError::MissingField {
        record,
        field: name.to_string(),
    })?;
    T::from_field_value(value).ok_or_else(|| RecordError::FieldType {
        record,
        field: name.to_string(),
        expected: T::KIND,
    })
}

// =============================================================================
// 2. THE ABSTRACTION
// =============================================================================

/// Trait that every immutable, structurally compared data carrier implements.
///
/// # Architecture Note
/// Implementors describe their fields: the declared names, field-by-field comparison,
/// per-field hashes and renderings taken from each field's own `PartialEq`, `Hash` and
/// `Display`, the dynamic view as [`FieldValue`]s, and how to apply a typed sparse update
/// to an owned copy. The record hash, rendering, the `with` family and destructuring are
/// provided on top of that once, for every record.
///
/// Most records never implement this by hand; see [`value_record!`](crate::framework::value_record).
///
/// # Provided Methods
/// - [`ValueRecord::derived_hash`]
/// - [`ValueRecord::to_display_string`]
/// - [`ValueRecord::with`] / [`ValueRecord::with_fields`]
/// - [`ValueRecord::destructure`]
pub trait ValueRecord: Clone + Sized {
    /// Name used in the rendered form and mixed into the hash.
    const TYPE_NAME: &'static str;

    /// Field names in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Sparse typed overrides: one `Option` per field.
    type Update: Debug + Default;

    /// The positional tuple produced by destructuring.
    type Parts;

    /// Current field values for the dynamic API, in the order of [`ValueRecord::FIELD_NAMES`].
    fn fields(&self) -> Vec<FieldValue>;

    /// Pairwise comparison of the typed fields, each with its own equality.
    /// Identity plays no part.
    fn structural_eq(&self, other: &Self) -> bool;

    /// [`field_hash`] of each typed field, in declaration order.
    fn field_hashes(&self) -> Vec<u64>;

    /// `Display` of each typed field, in declaration order.
    fn render_fields(&self) -> Vec<String>;

    /// Builds a record from a map holding every declared field.
    fn from_fields(fields: &FieldMap) -> Result<Self, RecordError>;

    /// Applies `update` to an owned copy.
    fn apply(self, update: Self::Update) -> Self;

    /// Moves the fields out positionally.
    fn into_parts(self) -> Self::Parts;

    // --- Provided ---

    fn named_fields(&self) -> Vec<(&'static str, FieldValue)> {
        Self::FIELD_NAMES.iter().copied().zip(self.fields()).collect()
    }

    fn field_map(&self) -> FieldMap {
        self.named_fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    /// Order-dependent fold of the per-field hashes, seeded with the type name.
    ///
    /// Structurally equal records always produce the same value. Unequal records
    /// may collide.
    fn derived_hash(&self) -> u64 {
        self.field_hashes()
            .into_iter()
            .fold(field_hash(Self::TYPE_NAME), |running, field| {
                running.wrapping_mul(HASH_MIXER).wrapping_add(field)
            })
    }

    /// Renders `TypeName { Field = value, ... }` in declaration order.
    fn to_display_string(&self) -> String {
        let body = Self::FIELD_NAMES
            .iter()
            .zip(self.render_fields())
            .map(|(name, value)| format!("{name} = {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {{ {} }}", Self::TYPE_NAME, body)
    }

    /// Dynamic construction. Rejects undeclared names, then requires every declared one.
    ///
    /// # Errors
    /// Besides [`RecordError::MissingField`] and [`RecordError::InvalidField`], the dynamic
    /// API can fail with [`RecordError::FieldType`] when a value has the wrong kind. The
    /// typed constructors cannot.
    fn build(fields: &FieldMap) -> Result<Self, RecordError> {
        debug!(record = Self::TYPE_NAME, ?fields, "Build");
        reject_unknown::<Self>(fields)?;
        Self::from_fields(fields)
    }

    /// Non-destructive update: returns a copy with the fields set in `update` replaced.
    fn with(&self, update: Self::Update) -> Self {
        debug!(record = Self::TYPE_NAME, ?update, "With");
        self.clone().apply(update)
    }

    /// Non-destructive update driven by field names.
    ///
    /// # Errors
    /// [`RecordError::InvalidField`] if an override names a field the record does not
    /// declare. Beyond that, and unlike the typed [`ValueRecord::with`], a dynamic value
    /// of the wrong kind fails with [`RecordError::FieldType`].
    fn with_fields(&self, overrides: &FieldMap) -> Result<Self, RecordError> {
        debug!(record = Self::TYPE_NAME, ?overrides, "With fields");
        reject_unknown::<Self>(overrides)?;
        let mut merged = self.field_map();
        merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::from_fields(&merged)
    }

    /// Reads the fields out positionally, leaving `self` intact.
    fn destructure(&self) -> Self::Parts {
        self.clone().into_parts()
    }
}

/// Structural equality across two record types.
///
/// The concrete Rust type must match exactly (labels are not enough), so a base
/// record and a subtype carrying the same base fields are never equal.
pub fn same_record<A, B>(a: &A, b: &B) -> bool
where
    A: ValueRecord + 'static,
    B: ValueRecord + 'static,
{
    match (b as &dyn Any).downcast_ref::<A>() {
        Some(b) => a.structural_eq(b),
        None => false,
    }
}

fn reject_unknown<R: ValueRecord>(fields: &FieldMap) -> Result<(), RecordError> {
    match fields
        .keys()
        .find(|name| !R::FIELD_NAMES.contains(&name.as_str()))
    {
        Some(unknown) => {
            warn!(record = R::TYPE_NAME, field = %unknown, "Unknown field");
            Err(RecordError::InvalidField {
                record: R::TYPE_NAME,
                field: unknown.clone(),
            })
        }
        None => Ok(()),
    }
}

/// Hashes one field with its own `Hash` impl.
pub fn field_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
