//! # Showcase
//!
//! Builds the sample instances and renders one report line per comparison: first the
//! value records, then the reference objects built from the same names.

use std::io::Write;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::framework::{same_record, FieldMap, FieldValue, RecordError, ValueRecord};
use crate::model::{PersonValue, UserValue};
use crate::reference::PersonReference;

/// Errors that can stop the showcase.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Report lines for the value-record half.
///
/// # Errors
/// Propagates a [`RecordError`] from the dynamic update. With the fixed samples it
/// does not occur.
pub fn value_record_section() -> Result<Vec<String>, ShowcaseError> {
    let _span = tracing::info_span!("value_records").entered();
    info!("Rendering section");

    let r1a = PersonValue::new("Victor", "Marri");
    let r1b = PersonValue::new("Victor", "Marri");
    let r1c = PersonValue::new("Jorge", "Mendes");

    let mut lines = vec!["Record Type:".to_string(), String::new()];
    lines.push(format!("To string: {r1a}"));
    lines.push(format!(
        "Structurally equal (r1a, r1b)? {}",
        r1a.structural_eq(&r1b)
    ));
    lines.push(format!(
        "Same reference (r1a, r1b)? {}",
        std::ptr::eq(&r1a, &r1b)
    ));
    lines.push(format!("r1a == r1b: {}", r1a == r1b));
    lines.push(format!("r1a != r1c: {}", r1a != r1c));
    lines.push(format!("Hash of r1a: {}", r1a.derived_hash()));
    lines.push(format!("Hash of r1b: {}", r1b.derived_hash()));
    lines.push(format!("Hash of r1c: {}", r1c.derived_hash()));
    lines.push(String::new());

    let (first_name, last_name) = r1a.destructure();
    lines.push(format!(
        "Destructured: first_name = {first_name}, last_name = {last_name}"
    ));

    let r1d = r1a.with_first_name("John");
    lines.push(format!("With FirstName = John: {r1d}"));
    lines.push(format!("r1a after update: {r1a}"));

    let overrides = FieldMap::from([("LastName".to_string(), FieldValue::from("Mendes"))]);
    lines.push(format!(
        "With fields LastName = Mendes: {}",
        r1a.with_fields(&overrides)?
    ));

    let bogus = FieldMap::from([("MiddleName".to_string(), FieldValue::from("Silva"))]);
    match r1a.with_fields(&bogus) {
        Ok(unexpected) => lines.push(format!("Accepted override: {unexpected}")),
        Err(e) => lines.push(format!("Rejected override: {e}")),
    }
    lines.push(String::new());

    lines.push(format!("Full name: {}", r1a.full_name()));
    lines.push(r1a.greet());
    lines.push(String::new());

    let user = UserValue::new(1, "Victor", "Marri");
    lines.push(format!("User: {user}"));
    lines.push(format!(
        "Person equals user with the same names? {}",
        same_record(&r1a, &user)
    ));
    lines.push(format!(
        "Person equals the user's base record? {}",
        same_record(&r1a, user.as_person())
    ));

    Ok(lines)
}

/// Report lines for the reference-object half.
pub fn reference_object_section() -> Vec<String> {
    let _span = tracing::info_span!("reference_objects").entered();
    info!("Rendering section");

    let c1a = PersonReference::new("Victor", "Marri");
    let c1b = PersonReference::new("Victor", "Marri");
    let c1c = PersonReference::new("Jorge", "Mendes");
    let alias = Arc::clone(&c1a);

    let mut lines = vec!["Reference Object Type:".to_string(), String::new()];
    lines.push(format!("To string: {c1a}"));
    lines.push(format!("Equal (c1a, c1b)? {}", *c1a == *c1b));
    lines.push(format!(
        "Same reference (c1a, c1b)? {}",
        PersonReference::same_instance(&c1a, &c1b)
    ));
    lines.push(format!(
        "Same reference (c1a, alias)? {}",
        PersonReference::same_instance(&c1a, &alias)
    ));
    lines.push(format!("c1a != c1c: {}", *c1a != *c1c));
    lines.push(format!("Hash of c1a: {}", c1a.identity_hash()));
    lines.push(format!("Hash of c1b: {}", c1b.identity_hash()));
    lines.push(format!("Hash of c1c: {}", c1c.identity_hash()));
    lines.push(String::new());

    let (mut first_name, mut last_name) = (String::new(), String::new());
    c1a.deconstruct(&mut first_name, &mut last_name);
    lines.push(format!(
        "Deconstructed: first_name = {first_name}, last_name = {last_name}"
    ));

    lines
}

/// The whole report, sections separated by a blank line.
pub fn report() -> Result<Vec<String>, ShowcaseError> {
    let mut lines = value_record_section()?;
    lines.push(String::new());
    lines.extend(reference_object_section());
    Ok(lines)
}

/// Writes [`report`] to `out`, one line per entry.
pub fn run_showcase<W: Write>(out: &mut W) -> Result<(), ShowcaseError> {
    for line in report()? {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
