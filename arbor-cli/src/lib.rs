//! Support library for the `arbor` binary.
//!
//! Exposes the command pipeline and logging setup so doctests and
//! integration tests can drive them without spawning a process.

pub mod cli;
pub mod logging;
