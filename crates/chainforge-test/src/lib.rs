//! Shared test fixtures for ChainForge crates.
//!
//! This crate provides data types and pure functions for testing.
//! It does NOT depend on `chainforge-scoring`, so the scoring crate can use
//! it as a dev-dependency without pulling in a second copy of itself.
//!
//! - [`route`] - Vehicle routes modelled as a chained `previous` variable
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! chainforge-test = { workspace = true }
//! ```

pub mod route;

pub use route::{RouteSolution, Vehicle, Visit};

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly `tracing` subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
