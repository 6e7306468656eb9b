//! # hotelos-client
//!
//! Session wiring for the HotelOS dashboard: application state, the sync
//! bridge that applies snapshot deliveries to the view model in arrival
//! order, and the per-feature command handlers the UI invokes.

pub mod bridge;
pub mod commands;
pub mod events;
pub mod state;

mod error;

use tracing_subscriber::{fmt, EnvFilter};

pub use error::ClientError;
pub use state::AppState;

/// Initialize tracing for an embedding binary (respects `RUST_LOG`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("hotelos_client=debug,hotelos_sync=debug,hotelos_store=info,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
