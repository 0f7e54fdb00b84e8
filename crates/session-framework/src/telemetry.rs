//! # Observability & Tracing
//!
//! Structured logging for session actors and the clients that drive them.
//!
//! [`setup_tracing`] installs a `tracing_subscriber` formatter filtered by `RUST_LOG`.
//! The compact format hides module paths (`with_target(false)`); actors log the state
//! type as a structured field instead.
//!
//! ```bash
//! # Lifecycle plus one line per applied event
//! RUST_LOG=info cargo run
//!
//! # Full event payloads and snapshot reads
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a short session reads like:
//!
//! ```text
//! INFO Session started state_type="CatalogSession"
//! INFO Event applied state_type="CatalogSession" outcome=Open(())
//! WARN Event rejected state_type="CatalogSession" error=Product form is closed
//! INFO Shutdown state_type="CatalogSession" processed=7
//! ```

/// Initializes the global tracing subscriber.
///
/// Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
