//! Adjacency matrix loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use arbor_core::AdjacencyMatrix;
use tracing::{debug, instrument};

use crate::DelimitedError;
use crate::lines::{Separator, read_table};

/// Loads an adjacency matrix written as comma-separated rows.
///
/// Blank lines and lines starting with `#` are skipped, and input without
/// rows is an empty graph. The rows are validated
/// with [`AdjacencyMatrix::try_from_rows`], so the result is square,
/// symmetric, non-negative and free of self-loops.
///
/// # Errors
/// Returns [`DelimitedError`] when reading fails, a field is not a number,
/// rows differ in length, or the rows do not form a valid graph.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use arbor_providers_delimited::load_adjacency_matrix;
///
/// let raw = "# triangle\n0,1,4\n1,0,2\n4,2,0\n";
/// let graph = load_adjacency_matrix(Cursor::new(raw))?;
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.weight(0, 2), Some(4.0));
/// # Ok::<(), arbor_providers_delimited::DelimitedError>(())
/// ```
pub fn load_adjacency_matrix(reader: impl BufRead) -> Result<AdjacencyMatrix, DelimitedError> {
    let rows = read_table(reader, Separator::Comma)?;
    let graph = AdjacencyMatrix::try_from_rows(rows)?;
    debug!(vertices = graph.len(), "adjacency matrix loaded");
    Ok(graph)
}

/// Opens `path` and loads an adjacency matrix from it.
///
/// # Errors
/// Returns [`DelimitedError::Io`] when the file cannot be opened or read,
/// otherwise the same errors as [`load_adjacency_matrix`].
#[instrument(name = "delimited.load_matrix", skip_all, err, fields(path = %path.display()))]
pub fn load_adjacency_matrix_path(path: &Path) -> Result<AdjacencyMatrix, DelimitedError> {
    let file = File::open(path).map_err(|source| DelimitedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_adjacency_matrix(BufReader::new(file)).map_err(|err| err.at_path(path.to_path_buf()))
}
