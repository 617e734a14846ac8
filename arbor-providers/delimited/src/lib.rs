//! Delimited-text providers for arbor graphs.
//!
//! Two formats are supported, both line oriented with blank lines skipped and
//! `#` starting a comment line:
//!
//! - adjacency matrices, one comma-separated row per line, loaded with
//!   [`load_adjacency_matrix`];
//! - point sets, one point per line with commas or whitespace between
//!   coordinates, loaded with [`load_points`].

mod errors;
mod lines;
mod matrix;
mod points;

pub use errors::{DelimitedError, DelimitedErrorCode};
pub use matrix::{load_adjacency_matrix, load_adjacency_matrix_path};
pub use points::{load_points, load_points_path};
