//! Shared test utilities used across arbor crates.
//!
//! - [`tracing`] captures spans and events so suites can assert on
//!   instrumentation without parsing formatted log output.
//! - [`ci`] reads environment overrides that tune property-test runs.

pub mod ci;
pub mod tracing;
