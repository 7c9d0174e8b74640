//! The identity-compared contrast type.
//!
//! [`PersonReference`] carries the same fields as
//! [`PersonValue`](crate::model::PersonValue) but none of its value semantics:
//! equality and hashing follow the instance, rendering shows only the type, and
//! getting the fields back out means calling [`PersonReference::deconstruct`].

use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// A person compared by identity.
///
/// Fields are written once in [`PersonReference::new`] and only read afterwards.
/// The type is not `Clone`: share an instance through the returned [`Arc`].
#[derive(Debug)]
pub struct PersonReference {
    instance: u64,
    first_name: String,
    last_name: String,
}

impl PersonReference {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Arc<Self> {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::SeqCst);
        debug!(instance, "New PersonReference");
        Arc::new(Self {
            instance,
            first_name: first_name.into(),
            last_name: last_name.into(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True iff both handles point at the same allocation.
    pub fn same_instance(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Hash of the per-instance number. Unrelated to the field values.
    pub fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Copies the fields into caller-provided slots, in constructor order.
    pub fn deconstruct(&self, first_name: &mut String, last_name: &mut String) {
        first_name.clone_from(&self.first_name);
        last_name.clone_from(&self.last_name);
    }
}

impl PartialEq for PersonReference {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for PersonReference {}

impl Hash for PersonReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance.hash(state);
    }
}

impl Display for PersonReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<Self>())
    }
}
