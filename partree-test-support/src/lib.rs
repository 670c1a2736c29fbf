//! Shared test utilities used across partree crates.
//!
//! - [`tracing`] captures spans and events so tests can assert on
//!   instrumentation.
//! - [`ci`] reads environment overrides that tune property-test runs.

pub mod ci;
pub mod tracing;
