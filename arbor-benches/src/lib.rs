//! Benchmark support crate for arbor.
//!
//! Provides seeded synthetic point clouds and parameter types used by the
//! Criterion benchmarks for distance graph construction and Prim's
//! algorithm.

pub mod error;
pub mod params;
pub mod source;
