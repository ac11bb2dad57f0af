//! # Observability & Tracing
//!
//! Structured logging for the whole console, built on the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Requests**: every transport round trip at `debug`, with method, URL,
//!   and status.
//! - **Entity Operations**: create, update, patch, find, query, delete;
//!   `debug` for payloads, `info` for completed mutations, `warn` for
//!   rejections and unexpected statuses, keyed by `entity_type`.
//! - **Resolution**: resolver spans per route activation, including
//!   not-found redirects.
//!
//! ## Configuration
//!
//! Log levels come from `RUST_LOG`:
//!
//! ```bash
//! # Lifecycle events only
//! RUST_LOG=info cargo test
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo test
//!
//! # Filter to the engine
//! RUST_LOG=admin_console::framework=debug cargo test
//! ```
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! the `entity_type` field carries that context instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
