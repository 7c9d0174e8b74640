//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable. With it unset only errors
//! pass the filter, and the crate emits none.
//!
//! ```bash
//! # Report only
//! cargo run
//!
//! # Show every dynamic build and update with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=record_recipe::framework=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Showcase sections**: one `info` span per section (`value_records`, `reference_objects`)
//! - **Dynamic API**: `Build`, `With` and `With fields` at `debug`, with the payload as a field
//! - **Rejections**: overrides naming an unknown field, at `warn`
//!
//! With `RUST_LOG=debug`:
//!
//! ```text
//! INFO value_records: Rendering section
//! DEBUG value_records: With record="PersonValue" update=PersonValueUpdate { first_name: Some("John"), last_name: None }
//! INFO reference_objects: Rendering section
//! DEBUG reference_objects: New PersonReference instance=1
//! ```
//!
//! Events go to stderr, leaving stdout to the report.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Record names travel as fields
        .compact() // Compact format shows spans inline (e.g., "value_records: With")
        .init();
}
