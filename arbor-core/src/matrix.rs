//! Dense adjacency matrix for undirected weighted graphs.
//!
//! A weight of `0.0` means "no edge". Only strictly positive weights are
//! edges, so every vertex pair is represented exactly once per direction.

use crate::error::MatrixError;

/// Square, symmetric, non-negative adjacency matrix stored row-major.
///
/// # Examples
/// ```
/// use arbor_core::AdjacencyMatrix;
///
/// let graph = AdjacencyMatrix::try_from_rows(vec![
///     vec![0.0, 2.0, 0.0],
///     vec![2.0, 0.0, 3.0],
///     vec![0.0, 3.0, 0.0],
/// ])?;
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.weight(1, 2), Some(3.0));
/// assert_eq!(graph.neighbours(0).collect::<Vec<_>>(), [(1, 2.0)]);
/// # Ok::<(), arbor_core::MatrixError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    order: usize,
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Returns a matrix with `order` vertices and no edges.
    #[must_use]
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            weights: vec![0.0; order.saturating_mul(order)],
        }
    }

    /// Builds a matrix from nested rows, validating the graph invariants.
    ///
    /// # Errors
    /// - [`MatrixError::NotSquare`] when any row length differs from the row count.
    /// - [`MatrixError::NonFiniteWeight`] or [`MatrixError::NegativeWeight`] for
    ///   weights outside `[0, inf)`.
    /// - [`MatrixError::SelfLoop`] for a non-zero diagonal entry.
    /// - [`MatrixError::Asymmetric`] when `weight[i][j] != weight[j][i]`.
    pub fn try_from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let matrix = Self::from_rows_unchecked(rows)?;
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix from a row-major buffer holding `order * order` values.
    ///
    /// # Errors
    /// Returns [`MatrixError::LengthMismatch`] for a wrongly sized buffer, then
    /// the same validation errors as [`Self::try_from_rows`].
    pub fn try_from_row_major(order: usize, weights: Vec<f64>) -> Result<Self, MatrixError> {
        let expected = order.saturating_mul(order);
        if weights.len() != expected {
            return Err(MatrixError::LengthMismatch {
                expected,
                actual: weights.len(),
            });
        }
        let matrix = Self { order, weights };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Wraps a row-major buffer that already satisfies the graph invariants.
    pub(crate) fn from_validated_parts(order: usize, weights: Vec<f64>) -> Self {
        debug_assert_eq!(weights.len(), order.saturating_mul(order));
        Self { order, weights }
    }

    /// Builds a matrix after checking only that it is square.
    ///
    /// Symmetry, sign, finiteness, and the zero diagonal are left to the
    /// caller. Prim's algorithm treats only strictly positive entries as
    /// edges, so negative and NaN entries are skipped. For an asymmetric
    /// pair the tree copies the entry from the row of the vertex already in
    /// the tree onto both halves. The result is a tree, but not necessarily
    /// a minimum one.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotSquare`] when a row length differs from the
    /// row count.
    pub fn from_rows_unchecked(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let order = rows.len();
        let mut weights = Vec::with_capacity(order.saturating_mul(order));
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != order {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: order,
                    actual: values.len(),
                });
            }
            weights.extend(values);
        }
        Ok(Self { order, weights })
    }

    fn validate(&self) -> Result<(), MatrixError> {
        for row in 0..self.order {
            for column in 0..self.order {
                let weight = self.at(row, column);
                if !weight.is_finite() {
                    return Err(MatrixError::NonFiniteWeight { row, column });
                }
                if weight < 0.0 {
                    return Err(MatrixError::NegativeWeight {
                        row,
                        column,
                        weight,
                    });
                }
                if row == column && weight != 0.0 {
                    return Err(MatrixError::SelfLoop { vertex: row });
                }
                if column > row && weight != self.at(column, row) {
                    return Err(MatrixError::Asymmetric { row, column });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns the weight between `row` and `column`, or `None` when either
    /// index is out of range.
    #[must_use]
    pub fn weight(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.order || column >= self.order {
            return None;
        }
        Some(self.at(row, column))
    }

    /// Returns the weights of `row`, or `None` when out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.order {
            return None;
        }
        let start = row * self.order;
        self.weights.get(start..start + self.order)
    }

    /// Iterates the `(vertex, weight)` pairs joined to `vertex` by an edge.
    ///
    /// Yields nothing for an out-of-range vertex.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row(vertex)
            .unwrap_or_default()
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, weight)| weight > 0.0)
    }

    /// Returns the row-major weight buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Copies the matrix into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.order == 0 {
            return Vec::new();
        }
        self.weights
            .chunks(self.order)
            .map(<[f64]>::to_vec)
            .collect()
    }

    /// Sets `weight` on both `(row, column)` and `(column, row)`.
    pub(crate) fn set_symmetric(&mut self, row: usize, column: usize, weight: f64) {
        let forward = row * self.order + column;
        let backward = column * self.order + row;
        if let Some(slot) = self.weights.get_mut(forward) {
            *slot = weight;
        }
        if let Some(slot) = self.weights.get_mut(backward) {
            *slot = weight;
        }
    }

    fn at(&self, row: usize, column: usize) -> f64 {
        self.weights
            .get(row * self.order + column)
            .copied()
            .unwrap_or(0.0)
    }
}
