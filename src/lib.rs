#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Record Recipe
//!
//! > **Value records vs. reference objects, side by side.**
//!
//! This crate contrasts two ways of holding the same data:
//! - **Value records**: immutable carriers whose equality, hash and rendering come from their fields.
//! - **Reference objects**: carriers whose equality and hash come from the instance itself.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Describe the fields once
//! A record only says which fields it has and in what order. Everything else
//! (structural equality, the derived hash, `TypeName { Field = value }` rendering,
//! non-destructive `with` updates, destructuring) is written *once* as provided methods
//! of [`ValueRecord`](framework::ValueRecord) and reused by every record.
//!
//! ### Immutability by construction
//! Fields are private and set only by the constructor. There are no setters: an update
//! produces a new record and leaves the original untouched, so records can be shared
//! freely.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Typed and dynamic updates
//! Each record has a typed `<Type>Update` DTO with one `Option` per field, checked by the
//! compiler. The dynamic [`with_fields`](framework::ValueRecord::with_fields) API takes a
//! [`FieldMap`](framework::FieldMap) instead and reports unknown names as
//! [`RecordError::InvalidField`](framework::RecordError::InvalidField).
//!
//! ### 2. Subtypes by composition
//! [`UserValue`](model::UserValue) embeds a [`PersonValue`](model::PersonValue) and adds an
//! id. The concrete type is part of equality, so the two never compare equal.
//!
//! ### 3. Observability
//! `tracing` events on every dynamic build and update. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ValueRecord`](framework::ValueRecord), [`FieldValue`](framework::FieldValue),
//!   [`same_record`](framework::same_record).
//!
//! ### 2. The Records ([`model`])
//! - **Key items**: [`PersonValue`](model::PersonValue), [`UserValue`](model::UserValue),
//!   [`Record`](model::Record).
//!
//! ### 3. The Contrast ([`reference`])
//! - **Key items**: [`PersonReference`](reference::PersonReference).
//!
//! ### 4. The Driver ([`lifecycle`])
//! - **Key items**: [`run_showcase`](lifecycle::run_showcase), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Print the comparison report
//! cargo run
//!
//! # With debug logs on stderr
//! RUST_LOG=debug cargo run
//!
//! cargo test
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod reference;
