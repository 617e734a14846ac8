//! Point set loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::DelimitedError;
use crate::lines::{Separator, read_table};

/// Loads one point per line, coordinates separated by commas or whitespace.
///
/// Every point must have the same number of coordinates, and input without
/// points yields an empty set. Values are returned
/// as parsed; NaN and infinities are left for
/// [`arbor_core::pairwise_distances`] to reject.
///
/// # Errors
/// Returns [`DelimitedError`] when reading fails, a field is not a number,
/// or points differ in dimension.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use arbor_providers_delimited::load_points;
///
/// let points = load_points(Cursor::new("0.0 0.0\n3.0 4.0\n"))?;
/// assert_eq!(points, vec![vec![0.0, 0.0], vec![3.0, 4.0]]);
/// # Ok::<(), arbor_providers_delimited::DelimitedError>(())
/// ```
pub fn load_points(reader: impl BufRead) -> Result<Vec<Vec<f64>>, DelimitedError> {
    let points = read_table(reader, Separator::CommaOrWhitespace)?;
    debug!(
        points = points.len(),
        dimension = points.first().map_or(0, Vec::len),
        "point set loaded"
    );
    Ok(points)
}

/// Opens `path` and loads a point set from it.
///
/// # Errors
/// Returns [`DelimitedError::Io`] when the file cannot be opened or read,
/// otherwise the same errors as [`load_points`].
#[instrument(name = "delimited.load_points", skip_all, err, fields(path = %path.display()))]
pub fn load_points_path(path: &Path) -> Result<Vec<Vec<f64>>, DelimitedError> {
    let file = File::open(path).map_err(|source| DelimitedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_points(BufReader::new(file)).map_err(|err| err.at_path(path.to_path_buf()))
}
