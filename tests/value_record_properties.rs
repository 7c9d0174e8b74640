use proptest::prelude::*;

use record_recipe::framework::ValueRecord;
use record_recipe::model::{PersonValue, UserValue};
use record_recipe::reference::PersonReference;

proptest! {
    #[test]
    fn equal_inputs_give_equal_records(first in "\\PC*", last in "\\PC*") {
        let a = PersonValue::new(first.clone(), last.clone());
        let b = PersonValue::new(first, last);

        prop_assert!(a.structural_eq(&b));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn different_inputs_give_unequal_records(
        f1 in "\\PC*",
        l1 in "\\PC*",
        f2 in "\\PC*",
        l2 in "\\PC*",
    ) {
        prop_assume!((&f1, &l1) != (&f2, &l2));
        prop_assert_ne!(PersonValue::new(f1, l1), PersonValue::new(f2, l2));
    }

    #[test]
    fn equal_records_hash_alike(id: i64, first in "\\PC*", last in "\\PC*") {
        let a = PersonValue::new(first.clone(), last.clone());
        let b = PersonValue::new(first.clone(), last.clone());
        prop_assert_eq!(a.derived_hash(), b.derived_hash());

        let u = UserValue::new(id, first.clone(), last.clone());
        let v = UserValue::new(id, first, last);
        prop_assert_eq!(u.derived_hash(), v.derived_hash());
    }

    #[test]
    fn destructure_returns_constructor_inputs(id: i64, first in "\\PC*", last in "\\PC*") {
        let person = PersonValue::new(first.clone(), last.clone());
        prop_assert_eq!(person.destructure(), (first.clone(), last.clone()));

        let user = UserValue::new(id, first.clone(), last.clone());
        prop_assert_eq!(user.destructure(), (id, first, last));
    }

    #[test]
    fn with_leaves_its_input_unchanged(
        first in "\\PC*",
        last in "\\PC*",
        replacement in "\\PC*",
    ) {
        let original = PersonValue::new(first.clone(), last.clone());

        let updated = original.with_first_name(replacement.clone());

        prop_assert_eq!(original.first_name(), &first);
        prop_assert_eq!(original.last_name(), &last);
        prop_assert_eq!(updated.first_name(), &replacement);
        prop_assert_eq!(updated.last_name(), original.last_name());
    }

    #[test]
    fn separate_references_are_never_equal(first in "\\PC*", last in "\\PC*") {
        let a = PersonReference::new(first.clone(), last.clone());
        let b = PersonReference::new(first, last);

        prop_assert_eq!(a.first_name(), b.first_name());
        prop_assert!(*a != *b);
        prop_assert!(!PersonReference::same_instance(&a, &b));
    }
}
