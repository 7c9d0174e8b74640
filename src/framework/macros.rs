//! # Record Generation
//!
//! [`value_record!`] writes the per-type boilerplate a value record needs: the struct
//! with private, construction-only fields, a typed constructor, read accessors, the
//! sparse `<Type>Update` DTO, one `with_<field>` helper per field, the
//! [`ValueRecord`](crate::framework::ValueRecord) impl and the std trait impls.
//!
//! ```rust,ignore
//! value_record! {
//!     /// A point on the plane.
//!     pub struct Point as "Point" {
//!         x: i64 => "X",
//!         y: i64 => "Y",
//!     }
//! }
//!
//! let p = Point::new(1, 2);
//! let q = p.with_y(5);
//! assert_eq!(q.to_string(), "Point { X = 1, Y = 5 }");
//! ```
//!
//! Field types need `Clone`, `Debug`, `PartialEq`, `Hash`, `Display` and
//! [`RecordField`](crate::framework::RecordField): `String`, `i64`, `bool` and any value
//! record, so records nest and compare recursively.
//!
//! Subtypes that flatten an embedded record's fields into their own (see
//! [`UserValue`](crate::model::UserValue)) implement the trait by hand and only use
//! [`impl_record_traits!`].

/// Implements `PartialEq`, `Eq`, `Hash` and `Display` for a
/// [`ValueRecord`](crate::framework::ValueRecord) in terms of its trait methods, plus
/// [`RecordField`](crate::framework::RecordField) so the record can be a field of another.
macro_rules! impl_record_traits {
    ($name:ident) => {
        impl $crate::framework::RecordField for $name {
            const KIND: &'static str = <$name as $crate::framework::ValueRecord>::TYPE_NAME;

            fn to_field_value(&self) -> $crate::framework::FieldValue {
                $crate::framework::FieldValue::Record(
                    $crate::framework::ValueRecord::field_map(self),
                )
            }

            fn from_field_value(value: &$crate::framework::FieldValue) -> Option<Self> {
                match value {
                    $crate::framework::FieldValue::Record(fields) => {
                        <$name as $crate::framework::ValueRecord>::build(fields).ok()
                    }
                    _ => None,
                }
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::framework::ValueRecord::structural_eq(self, other)
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::framework::ValueRecord::derived_hash(self));
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::framework::ValueRecord::to_display_string(self))
            }
        }
    };
}

/// Declares a value record. See the [module docs](self).
macro_rules! value_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $display:literal {
            $( $field:ident : $ty:ty => $label:literal ),+ $(,)?
        }
    ) => {
        ::paste::paste! {
            $(#[$meta])*
            #[derive(Debug, Clone)]
            $vis struct $name {
                $( $field: $ty, )+
            }

            /// Sparse overrides for a non-destructive update. `None` keeps the current value.
            #[derive(Debug, Clone, Default, PartialEq)]
            $vis struct [<$name Update>] {
                $( pub $field: Option<$ty>, )+
            }

            impl $name {
                /// Creates a record from one value per declared field, in declaration order.
                pub fn new($( $field: impl Into<$ty> ),+) -> Self {
                    Self { $( $field: $field.into(), )+ }
                }

                $(
                    pub fn $field(&self) -> &$ty {
                        &self.$field
                    }

                    /// Returns a copy with this one field replaced.
                    pub fn [<with_ $field>](&self, $field: impl Into<$ty>) -> Self {
                        $crate::framework::ValueRecord::with(
                            self,
                            [<$name Update>] {
                                $field: Some($field.into()),
                                ..Default::default()
                            },
                        )
                    }
                )+
            }

            impl $crate::framework::ValueRecord for $name {
                const TYPE_NAME: &'static str = $display;
                const FIELD_NAMES: &'static [&'static str] = &[$( $label ),+];
                type Update = [<$name Update>];
                type Parts = ($( $ty, )+);

                fn fields(&self) -> Vec<$crate::framework::FieldValue> {
                    vec![$( $crate::framework::RecordField::to_field_value(&self.$field) ),+]
                }

                fn structural_eq(&self, other: &Self) -> bool {
                    true $( && self.$field == other.$field )+
                }

                fn field_hashes(&self) -> Vec<u64> {
                    vec![$( $crate::framework::field_hash(&self.$field) ),+]
                }

                fn render_fields(&self) -> Vec<String> {
                    vec![$( self.$field.to_string() ),+]
                }

                fn from_fields(
                    fields: &$crate::framework::FieldMap,
                ) -> Result<Self, $crate::framework::RecordError> {
                    Ok(Self {
                        $( $field: $crate::framework::take_field(fields, $display, $label)?, )+
                    })
                }

                fn apply(mut self, update: Self::Update) -> Self {
                    $(
                        if let Some(value) = update.$field {
                            self.$field = value;
                        }
                    )+
                    self
                }

                fn into_parts(self) -> Self::Parts {
                    ($( self.$field, )+)
                }
            }

            $crate::framework::impl_record_traits!($name);
        }
    };
}

pub(crate) use impl_record_traits;
pub(crate) use value_record;

#[cfg(test)]
mod tests {
    use crate::framework::{same_record, FieldMap, RecordError, ValueRecord};
    use crate::model::PersonValue;

    value_record! {
        /// Same label and fields as `PersonValue`, different Rust type.
        struct Alias as "PersonValue" {
            first_name: String => "FirstName",
            last_name: String => "LastName",
        }
    }

    value_record! {
        struct Team as "Team" {
            lead: PersonValue => "Lead",
            active: bool => "Active",
        }
    }

    fn victor() -> PersonValue {
        PersonValue::new("Victor", "Marri")
    }

    #[test]
    fn a_shared_label_does_not_make_records_equal() {
        let person = victor();
        let alias = Alias::new("Victor", "Marri");

        assert_eq!(person.to_string(), alias.to_string());
        assert!(!same_record(&person, &alias));
        assert!(!same_record(&alias, &person));
        assert!(same_record(&person, &victor()));
    }

    #[test]
    fn nested_records_compare_through_their_own_equality() {
        let a = Team::new(victor(), true);
        let b = Team::new(PersonValue::new("Victor", "Marri"), true);

        assert_eq!(a, b);
        assert_eq!(a.derived_hash(), b.derived_hash());
        assert_ne!(a, Team::new(PersonValue::new("Jorge", "Mendes"), true));
        assert_ne!(a, Team::new(victor(), false));
        assert_eq!(
            a.to_string(),
            "Team { Lead = PersonValue { FirstName = Victor, LastName = Marri }, Active = true }"
        );
    }

    #[test]
    fn nested_record_updates_from_json() {
        let team = Team::new(victor(), true);
        let overrides: FieldMap =
            serde_json::from_str(r#"{"Lead": {"FirstName": "John", "LastName": "Marri"}}"#)
                .unwrap();

        let updated = team.with_fields(&overrides).unwrap();

        assert_eq!(updated.lead(), &PersonValue::new("John", "Marri"));
        assert!(*updated.active());
        assert_eq!(team.lead(), &victor());
    }

    #[test]
    fn nested_record_of_wrong_kind_is_reported() {
        let team = Team::new(victor(), true);
        let overrides: FieldMap = serde_json::from_str(r#"{"Lead": "Victor"}"#).unwrap();

        assert_eq!(
            team.with_fields(&overrides).unwrap_err(),
            RecordError::FieldType {
                record: "Team",
                field: "Lead".to_string(),
                expected: "PersonValue"
            }
        );
    }

    #[test]
    fn with_helper_replaces_a_nested_record() {
        let team = Team::new(victor(), true);
        let moved = team.with_lead(PersonValue::new("Jorge", "Mendes"));
        assert_eq!(moved.destructure(), (PersonValue::new("Jorge", "Mendes"), true));
        assert_eq!(team.destructure(), (victor(), true));
    }
}
