//! # Storefront Terminal Application Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Seed the starter catalog
//! 3. Run the menu loop over stdin/stdout until exit
//!
//! The process exits 0 on any normal exit: the exit option, or end of
//! input. Lookup failures are printed and recovered inside the loop; they
//! never terminate the process.

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod menu;
mod seed;

fn main() -> io::Result<()> {
    init_tracing();

    let inventory = seed::starter_catalog();
    info!(products = inventory.len(), "catalog seeded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(stdin.lock(), stdout.lock(), inventory)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace for this app only
/// - Default: INFO level
///
/// Logs go to stderr so they never interleave with menu output on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
