use std::collections::HashSet;
use std::sync::Arc;

use record_recipe::model::PersonValue;
use record_recipe::reference::PersonReference;

#[test]
fn identical_fields_do_not_make_equal_references() {
    let c1a = PersonReference::new("Victor", "Marri");
    let c1b = PersonReference::new("Victor", "Marri");

    assert_eq!(c1a.first_name(), c1b.first_name());
    assert_eq!(c1a.last_name(), c1b.last_name());
    assert_ne!(*c1a, *c1b);
    assert!(!PersonReference::same_instance(&c1a, &c1b));
}

#[test]
fn shared_handles_are_the_same_instance() {
    let c1a = PersonReference::new("Victor", "Marri");
    let alias = Arc::clone(&c1a);
    assert!(PersonReference::same_instance(&c1a, &alias));
    assert_eq!(c1a, alias);
}

#[test]
fn hash_follows_identity() {
    let c1a = PersonReference::new("Victor", "Marri");
    let c1b = PersonReference::new("Victor", "Marri");
    assert_ne!(c1a.identity_hash(), c1b.identity_hash());

    let set: HashSet<Arc<PersonReference>> =
        [Arc::clone(&c1a), c1b, Arc::clone(&c1a)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_does_not_show_fields() {
    let c1a = PersonReference::new("Victor", "Marri");
    let rendered = c1a.to_string();
    assert!(rendered.ends_with("PersonReference"));
    assert!(!rendered.contains("Victor"));
    assert_ne!(rendered, PersonValue::new("Victor", "Marri").to_string());
}

#[test]
fn deconstruct_fills_caller_slots() {
    let c1c = PersonReference::new("Jorge", "Mendes");
    let mut first_name = String::new();
    let mut last_name = String::new();

    c1c.deconstruct(&mut first_name, &mut last_name);

    assert_eq!(first_name, "Jorge");
    assert_eq!(last_name, "Mendes");
    assert_eq!(c1c.full_name(), "Jorge Mendes");
}
