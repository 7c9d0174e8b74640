use std::fmt::{self, Display};

use crate::framework::ValueRecord;

use super::{PersonValue, UserValue};

/// Every value record variant the crate knows about.
///
/// Derived equality compares the variant first, so a person and a user with the same
/// names are different values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Record {
    Person(PersonValue),
    User(UserValue),
}

impl Record {
    pub fn type_name(&self) -> &'static str {
        match self {
            Record::Person(_) => PersonValue::TYPE_NAME,
            Record::User(_) => UserValue::TYPE_NAME,
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Person(person) => person.fmt(f),
            Record::User(user) => user.fmt(f),
        }
    }
}

impl From<PersonValue> for Record {
    fn from(person: PersonValue) -> Self {
        Record::Person(person)
    }
}

impl From<UserValue> for Record {
    fn from(user: UserValue) -> Self {
        Record::User(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_never_cross_compare() {
        let person = Record::from(PersonValue::new("Victor", "Marri"));
        let user = Record::from(UserValue::new(1, "Victor", "Marri"));
        assert_ne!(person, user);
        assert_eq!(person.type_name(), "PersonValue");
        assert_eq!(user.type_name(), "UserValue");
    }

    #[test]
    fn renders_through_the_inner_record() {
        let person = Record::from(PersonValue::new("Victor", "Marri"));
        assert_eq!(person.to_string(), "PersonValue { FirstName = Victor, LastName = Marri }");
    }
}
