//! Driver-side orchestration.
//!
//! # Main Components
//!
//! - [`run_showcase`] - Builds the samples and writes the comparison report
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod showcase;
pub mod tracing;

pub use self::showcase::*;
pub use self::tracing::*;
