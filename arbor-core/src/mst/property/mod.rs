//! Property-based tests for the Prim MST builder.
//!
//! Checks the builder against a sequential Kruskal oracle, validates the
//! structural invariants of every produced tree, and confirms that builds
//! are deterministic across repeated runs and start vertices.

mod determinism;
mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
