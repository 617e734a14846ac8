//! Structural verification of spanning trees.
//!
//! A minimum spanning tree is not unique when weights tie, so a tree cannot
//! be checked against one known answer. [`verify_spanning_tree`] instead
//! checks the properties every valid answer shares: shape, symmetry, edges
//! drawn from the graph, `n - 1` edges, connectivity, and total weight.

use std::fmt;

use thiserror::Error;

use crate::{AdjacencyMatrix, SpanningTree, error::define_error_codes};

/// Reasons a tree fails verification against its source graph.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum VerificationError {
    /// The tolerance is negative, NaN or infinite.
    #[error("tolerance must be finite and non-negative, got {tolerance}")]
    InvalidTolerance {
        /// Rejected tolerance.
        tolerance: f64,
    },
    /// The expected weight is NaN or infinite.
    #[error("expected weight must be finite, got {expected}")]
    InvalidExpectedWeight {
        /// Rejected expected weight.
        expected: f64,
    },
    /// Tree and graph have different vertex counts.
    #[error("tree has {tree} vertices but the graph has {graph}")]
    ShapeMismatch {
        /// Vertex count of the graph.
        graph: usize,
        /// Vertex count of the tree.
        tree: usize,
    },
    /// The tree matrix is not symmetric.
    #[error("tree is not symmetric at ({row}, {column})")]
    Asymmetric {
        /// Row of the first differing entry.
        row: usize,
        /// Column of the first differing entry.
        column: usize,
    },
    /// A tree entry does not match the graph entry it claims to copy.
    #[error("tree weight {tree} at ({row}, {column}) is not a graph edge (graph has {graph})")]
    ForeignEdge {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// Weight held by the tree.
        tree: f64,
        /// Weight held by the graph.
        graph: f64,
    },
    /// The tree does not hold `n - 1` edges.
    #[error("tree has {actual} edges but a spanning tree needs {expected}")]
    EdgeCount {
        /// Required edge count.
        expected: usize,
        /// Edge count found in the upper triangle.
        actual: usize,
    },
    /// Some vertex cannot be reached from vertex 0 over tree edges.
    #[error("tree reaches {reached} of {node_count} vertices")]
    Disconnected {
        /// Vertices reachable from vertex 0, including it.
        reached: usize,
        /// Vertex count of the tree.
        node_count: usize,
    },
    /// The total weight differs from the expected minimum.
    #[error("tree weight {actual} differs from expected {expected} by more than {tolerance}")]
    WeightMismatch {
        /// Expected minimum weight.
        expected: f64,
        /// Total weight found in the upper triangle.
        actual: f64,
        /// Permitted absolute difference.
        tolerance: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`VerificationError`] variants.
    enum VerificationErrorCode for VerificationError {
        /// The tolerance is negative or non-finite.
        InvalidTolerance => InvalidTolerance { .. } => "VERIFY_INVALID_TOLERANCE",
        /// The expected weight is non-finite.
        InvalidExpectedWeight => InvalidExpectedWeight { .. } => "VERIFY_INVALID_EXPECTED_WEIGHT",
        /// Tree and graph have different vertex counts.
        ShapeMismatch => ShapeMismatch { .. } => "VERIFY_SHAPE_MISMATCH",
        /// The tree matrix is not symmetric.
        Asymmetric => Asymmetric { .. } => "VERIFY_ASYMMETRIC",
        /// A tree entry is not a graph edge.
        ForeignEdge => ForeignEdge { .. } => "VERIFY_FOREIGN_EDGE",
        /// The tree does not hold `n - 1` edges.
        EdgeCount => EdgeCount { .. } => "VERIFY_EDGE_COUNT",
        /// Some vertex is unreachable over tree edges.
        Disconnected => Disconnected { .. } => "VERIFY_DISCONNECTED",
        /// The total weight differs from the expected minimum.
        WeightMismatch => WeightMismatch { .. } => "VERIFY_WEIGHT_MISMATCH",
    }
}

/// Summary of a tree that passed verification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeReport {
    /// Number of vertices.
    pub node_count: usize,
    /// Number of edges in the upper triangle.
    pub edge_count: usize,
    /// Sum of the upper-triangle weights.
    pub total_weight: f64,
}

/// Checks that `tree` is a spanning tree of `graph`.
///
/// `tolerance` must be finite and non-negative and `expected_weight`, when
/// given, must be finite; both are checked before the tree is inspected.
/// The checks then run in order and stop at the first failure:
/// shape, symmetry, edge subset (within `tolerance`), `n - 1` edges,
/// connectivity from vertex 0, and, when `expected_weight` is given, the
/// total weight (within `tolerance`).
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyMatrix, prim_mst, verify_spanning_tree};
///
/// let graph = AdjacencyMatrix::try_from_rows(vec![
///     vec![0.0, 5.0, 0.0, 5.0],
///     vec![5.0, 0.0, 1.0, 2.0],
///     vec![0.0, 1.0, 0.0, 4.0],
///     vec![5.0, 2.0, 4.0, 0.0],
/// ])?;
/// let tree = prim_mst(&graph)?;
/// let report = verify_spanning_tree(&graph, &tree, Some(8.0), 1e-4)?;
/// assert_eq!(report.edge_count, 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns the [`VerificationError`] of the first failing check.
pub fn verify_spanning_tree(
    graph: &AdjacencyMatrix,
    tree: &SpanningTree,
    expected_weight: Option<f64>,
    tolerance: f64,
) -> Result<TreeReport, VerificationError> {
    verify_tree_matrix(graph, tree.matrix(), expected_weight, tolerance)
}

/// Matrix-level form of [`verify_spanning_tree`] for trees produced elsewhere.
///
/// # Errors
/// Returns the [`VerificationError`] of the first failing check.
pub fn verify_tree_matrix(
    graph: &AdjacencyMatrix,
    tree: &AdjacencyMatrix,
    expected_weight: Option<f64>,
    tolerance: f64,
) -> Result<TreeReport, VerificationError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(VerificationError::InvalidTolerance { tolerance });
    }
    if let Some(expected) = expected_weight
        && !expected.is_finite()
    {
        return Err(VerificationError::InvalidExpectedWeight { expected });
    }

    let node_count = graph.len();
    if tree.len() != node_count {
        return Err(VerificationError::ShapeMismatch {
            graph: node_count,
            tree: tree.len(),
        });
    }

    let mut edge_count = 0_usize;
    let mut total_weight = 0.0_f64;
    for row in 0..node_count {
        for column in 0..node_count {
            let weight = entry(tree, row, column);
            let mirrored = entry(tree, column, row);
            if (weight - mirrored).abs() > tolerance {
                return Err(VerificationError::Asymmetric { row, column });
            }
            let source = entry(graph, row, column);
            if weight != 0.0 && (weight - source).abs() > tolerance {
                return Err(VerificationError::ForeignEdge {
                    row,
                    column,
                    tree: weight,
                    graph: source,
                });
            }
            if column > row && weight > 0.0 {
                edge_count += 1;
                total_weight += weight;
            }
        }
    }

    let expected_edges = node_count.saturating_sub(1);
    if edge_count != expected_edges {
        return Err(VerificationError::EdgeCount {
            expected: expected_edges,
            actual: edge_count,
        });
    }

    let reached = reachable_from_first(tree);
    if reached != node_count {
        return Err(VerificationError::Disconnected {
            reached,
            node_count,
        });
    }

    if let Some(expected) = expected_weight
        && (total_weight - expected).abs() > tolerance
    {
        return Err(VerificationError::WeightMismatch {
            expected,
            actual: total_weight,
            tolerance,
        });
    }

    Ok(TreeReport {
        node_count,
        edge_count,
        total_weight,
    })
}

fn entry(matrix: &AdjacencyMatrix, row: usize, column: usize) -> f64 {
    matrix.weight(row, column).unwrap_or(0.0)
}

/// Counts vertices reachable from vertex 0 with an explicit stack.
fn reachable_from_first(tree: &AdjacencyMatrix) -> usize {
    if tree.is_empty() {
        return 0;
    }
    let mut visited = vec![false; tree.len()];
    let mut stack = vec![0_usize];
    visited[0] = true;
    let mut reached = 1;
    while let Some(vertex) = stack.pop() {
        for (next, _) in tree.neighbours(vertex) {
            if let Some(seen) = visited.get_mut(next) {
                if !*seen {
                    *seen = true;
                    reached += 1;
                    stack.push(next);
                }
            }
        }
    }
    reached
}
