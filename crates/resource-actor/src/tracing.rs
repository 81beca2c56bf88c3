//! # Observability & Tracing
//!
//! Every actor logs its lifecycle (`Actor started`, `Shutdown`) and each
//! operation with structured fields (`entity_type`, `id`, `size`). Clients add
//! `#[instrument]` spans, so a request shows up as one hierarchy from the
//! caller down to the actor.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for the process.
///
/// The filter comes from `RUST_LOG` when it is set and parses, otherwise from
/// `default_directive` (e.g. `"info"` or `"users_api=debug"`). Output uses the
/// compact format without the module target.
///
/// Calling it a second time is a no-op.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
