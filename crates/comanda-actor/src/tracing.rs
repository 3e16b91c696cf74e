//! # Observability & Tracing
//!
//! Tracing setup for the whole platform. The compact format hides the
//! crate/module prefix (`with_target(false)`) because actor logs carry an
//! `entity_type` field instead, which keeps lines short while preserving
//! structured data.
//!
//! Log levels are controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `debug`, client methods log full payloads once at entry via the `?`
//! field syntax (`debug!(?draft, "place called")`); subsequent logs stay
//! concise and show only the span hierarchy.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "order_placement:place")
        .init();
}
