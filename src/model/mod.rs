//! Concrete value records built on the [`ValueRecord`](crate::framework::ValueRecord) trait.

pub mod person;
pub mod user;
pub mod variant;

pub use person::*;
pub use user::*;
pub use variant::*;
