//! # Record Recipe
//!
//! Prints a side-by-side comparison of value records and reference objects.
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! ```

use record_recipe::lifecycle::{run_showcase, setup_tracing, ShowcaseError};
use tracing::info;

fn main() -> Result<(), ShowcaseError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let span = tracing::info_span!("showcase");
    span.in_scope(|| -> Result<(), ShowcaseError> {
        info!("Starting showcase");

        let stdout = std::io::stdout();
        run_showcase(&mut stdout.lock())?;

        info!("Showcase completed successfully");
        Ok(())
    })
}
