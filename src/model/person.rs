use crate::framework::value_record;

value_record! {
    /// A person, compared by value.
    ///
    /// # Value Semantics
    /// Two `PersonValue`s holding the same names are equal and hash alike, however
    /// they were built. Fields are set once in [`PersonValue::new`]; "changing" one
    /// means asking for a copy with [`PersonValue::with_first_name`] and friends or
    /// [`ValueRecord::with`](crate::framework::ValueRecord::with).
    ///
    /// ```
    /// use record_recipe::model::PersonValue;
    ///
    /// let victor = PersonValue::new("Victor", "Marri");
    /// let john = victor.with_first_name("John");
    /// assert_eq!(john.to_string(), "PersonValue { FirstName = John, LastName = Marri }");
    /// assert_eq!(victor.first_name(), "Victor");
    /// ```
    pub struct PersonValue as "PersonValue" {
        first_name: String => "FirstName",
        last_name: String => "LastName",
    }
}

impl PersonValue {
    /// First and last name joined by a space. Computed on every call, never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn greet(&self) -> String {
        format!("Hello, {}", self.first_name)
    }
}
