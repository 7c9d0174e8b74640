use crate::framework::{
    field_hash, impl_record_traits, take_field, FieldMap, FieldValue, RecordError, RecordField,
    ValueRecord,
};

use super::{PersonValue, PersonValueUpdate};

/// A registered user: a [`PersonValue`] plus a numeric id.
///
/// # Subtyping by Composition
/// The base record is embedded, not inherited. Base fields come first in the
/// rendered form and in the hash, followed by `Id`:
///
/// ```
/// use record_recipe::model::UserValue;
///
/// let user = UserValue::new(1, "Victor", "Marri");
/// assert_eq!(user.to_string(), "UserValue { FirstName = Victor, LastName = Marri, Id = 1 }");
/// ```
///
/// A `UserValue` never equals a `PersonValue`, even when the base fields match; see
/// [`same_record`](crate::framework::same_record) and [`Record`](super::Record).
#[derive(Debug, Clone)]
pub struct UserValue {
    person: PersonValue,
    id: i64,
}

/// Sparse overrides for [`UserValue`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserValueUpdate {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserValue {
    /// Creates a user, forwarding the names to [`PersonValue::new`].
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            person: PersonValue::new(first_name, last_name),
            id,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &String {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &String {
        self.person.last_name()
    }

    /// The embedded base record.
    pub fn as_person(&self) -> &PersonValue {
        &self.person
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    pub fn with_id(&self, id: i64) -> Self {
        self.with(UserValueUpdate {
            id: Some(id),
            ..Default::default()
        })
    }
}

impl From<UserValue> for PersonValue {
    fn from(user: UserValue) -> Self {
        user.person
    }
}

impl ValueRecord for UserValue {
    const TYPE_NAME: &'static str = "UserValue";
    const FIELD_NAMES: &'static [&'static str] = &["FirstName", "LastName", "Id"];
    type Update = UserValueUpdate;
    type Parts = (i64, String, String);

    fn fields(&self) -> Vec<FieldValue> {
        let mut fields = self.person.fields();
        fields.push(self.id.to_field_value());
        fields
    }

    fn structural_eq(&self, other: &Self) -> bool {
        self.person == other.person && self.id == other.id
    }

    fn field_hashes(&self) -> Vec<u64> {
        let mut hashes = self.person.field_hashes();
        hashes.push(field_hash(&self.id));
        hashes
    }

    fn render_fields(&self) -> Vec<String> {
        let mut rendered = self.person.render_fields();
        rendered.push(self.id.to_string());
        rendered
    }

    fn from_fields(fields: &FieldMap) -> Result<Self, RecordError> {
        let first_name: String = take_field(fields, Self::TYPE_NAME, "FirstName")?;
        let last_name: String = take_field(fields, Self::TYPE_NAME, "LastName")?;
        let id = take_field(fields, Self::TYPE_NAME, "Id")?;
        Ok(Self::new(id, first_name, last_name))
    }

    fn apply(mut self, update: UserValueUpdate) -> Self {
        self.person = self.person.apply(PersonValueUpdate {
            first_name: update.first_name,
            last_name: update.last_name,
        });
        if let Some(id) = update.id {
            self.id = id;
        }
        self
    }

    /// Positional order follows the constructor: `(id, first_name, last_name)`.
    fn into_parts(self) -> (i64, String, String) {
        let (first_name, last_name) = self.person.into_parts();
        (self.id, first_name, last_name)
    }
}

impl_record_traits!(UserValue);
