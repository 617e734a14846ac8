//! Euclidean distance primitives and pairwise distance graphs.
//!
//! [`pairwise_distances`] turns a set of points into the dense adjacency
//! matrix consumed by the MST builder. Coordinates are validated up front so
//! the resulting matrix always satisfies the graph invariants.

use std::fmt;

use thiserror::Error;

use crate::{AdjacencyMatrix, error::define_error_codes};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Errors emitted while computing distances.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistanceError {
    /// Points had zero coordinates.
    #[error("points must have positive dimension")]
    ZeroLength,
    /// Points had different numbers of coordinates.
    #[error("dimension mismatch: left={left}, right={right}")]
    DimensionMismatch {
        /// Dimension of the first point.
        left: usize,
        /// Dimension of the offending point.
        right: usize,
    },
    /// A coordinate was NaN or infinite.
    #[error("point {row} contains a non-finite value at index {index}: {value}")]
    NonFinite {
        /// Index of the offending point.
        row: usize,
        /// Coordinate index within the point.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`DistanceError`] variants.
    enum DistanceErrorCode for DistanceError {
        /// Points had zero coordinates.
        ZeroLength => ZeroLength => "DISTANCE_ZERO_LENGTH",
        /// Points had different numbers of coordinates.
        DimensionMismatch => DimensionMismatch { .. } => "DISTANCE_DIMENSION_MISMATCH",
        /// A coordinate was NaN or infinite.
        NonFinite => NonFinite { .. } => "DISTANCE_NON_FINITE",
    }
}

/// Computes the Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use arbor_core::{euclidean_distance, DistanceError};
///
/// fn main() -> Result<(), DistanceError> {
///     let distance = euclidean_distance(&[1.0, 2.0, 3.0], &[4.0, 6.0, 8.0])?;
///     assert!((distance - 50.0_f64.sqrt()).abs() < 1e-12);
///     Ok(())
/// }
/// ```
///
/// # Errors
///
/// - [`DistanceError::ZeroLength`] when either input is empty.
/// - [`DistanceError::DimensionMismatch`] when input lengths differ.
/// - [`DistanceError::NonFinite`] when a value is NaN or infinite; `row` is
///   0 for the left point and 1 for the right.
pub fn euclidean_distance(left: &[f64], right: &[f64]) -> Result<f64, DistanceError> {
    validate_point(0, left, left.len())?;
    validate_point(1, right, left.len())?;
    Ok(squared_sum(left, right).sqrt())
}

/// Builds the complete distance graph over `points`.
///
/// Entry `(i, j)` is the Euclidean distance between points `i` and `j`. Only
/// the upper triangle is computed; the lower triangle is a mirror, so the
/// result is exactly symmetric. Coincident points get a distance of zero,
/// which the graph model reads as "no edge".
///
/// # Examples
/// ```
/// use arbor_core::pairwise_distances;
///
/// let graph = pairwise_distances(&[vec![0.0, 0.0], vec![3.0, 4.0]])?;
/// assert_eq!(graph.weight(0, 1), Some(5.0));
/// assert_eq!(graph.weight(1, 0), Some(5.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns [`DistanceError`] when points are empty, ragged, or non-finite.
pub fn pairwise_distances(points: &[Vec<f64>]) -> Result<AdjacencyMatrix, DistanceError> {
    let Some(first) = points.first() else {
        return Ok(AdjacencyMatrix::zeros(0));
    };
    let dimension = first.len();
    for (row, point) in points.iter().enumerate() {
        validate_point(row, point, dimension)?;
    }

    let order = points.len();
    let upper = upper_triangle_rows(points);
    let mut weights = vec![0.0_f64; order * order];
    for (row, distances) in upper.into_iter().enumerate() {
        for (offset, distance) in distances.into_iter().enumerate() {
            let column = row + 1 + offset;
            weights[row * order + column] = distance;
            weights[column * order + row] = distance;
        }
    }

    Ok(AdjacencyMatrix::from_validated_parts(order, weights))
}

#[cfg(feature = "parallel")]
fn upper_triangle_rows(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    (0..points.len())
        .into_par_iter()
        .map(|row| row_distances(points, row))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn upper_triangle_rows(points: &[Vec<f64>]) -> Vec<Vec<f64>> {
    (0..points.len())
        .map(|row| row_distances(points, row))
        .collect()
}

fn row_distances(points: &[Vec<f64>], row: usize) -> Vec<f64> {
    let Some(anchor) = points.get(row) else {
        return Vec::new();
    };
    points
        .iter()
        .skip(row + 1)
        .map(|other| squared_sum(anchor, other).sqrt())
        .collect()
}

fn squared_sum(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(l, r)| {
            let diff = l - r;
            diff * diff
        })
        .sum()
}

fn validate_point(row: usize, point: &[f64], dimension: usize) -> Result<(), DistanceError> {
    if point.is_empty() {
        return Err(DistanceError::ZeroLength);
    }
    if point.len() != dimension {
        return Err(DistanceError::DimensionMismatch {
            left: dimension,
            right: point.len(),
        });
    }
    if let Some((index, &value)) = point.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(DistanceError::NonFinite { row, index, value });
    }
    Ok(())
}
