//! Spanning tree output type.

use crate::AdjacencyMatrix;

/// A single tree edge in selection order.
///
/// `source` is the vertex that was already in the tree when the edge was
/// chosen and `target` is the vertex the edge brought in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeEdge {
    source: usize,
    target: usize,
    weight: f64,
}

impl TreeEdge {
    pub(crate) const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the endpoint that was already in the tree.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the endpoint the edge added to the tree.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the edge weight, copied from the source graph.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Adjacency matrix of a spanning tree plus the edges in selection order.
///
/// The matrix has the same shape and symmetry convention as the graph it was
/// built from. When the graph is connected the tree holds `n - 1` edges.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    matrix: AdjacencyMatrix,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    pub(crate) fn empty(order: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::zeros(order),
            edges: Vec::with_capacity(order.saturating_sub(1)),
        }
    }

    pub(crate) fn insert(&mut self, edge: TreeEdge) {
        self.matrix
            .set_symmetric(edge.source, edge.target, edge.weight);
        self.edges.push(edge);
    }

    /// Returns the number of vertices covered by the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Returns whether the tree has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Returns the tree edges in the order they were selected.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    /// Returns the number of selected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(TreeEdge::weight).sum()
    }

    /// Returns `true` when every vertex joined the tree.
    ///
    /// Only a tree built under [`crate::DisconnectedPolicy::Partial`] can
    /// return `false`.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.matrix.len().saturating_sub(1)
    }

    /// Returns the weight stored at `(row, column)`.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.matrix.weight(row, column)
    }

    /// Returns the tree as an adjacency matrix.
    #[must_use]
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Copies the tree matrix into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.matrix.to_rows()
    }

    /// Consumes the tree and returns its adjacency matrix.
    #[must_use]
    pub fn into_matrix(self) -> AdjacencyMatrix {
        self.matrix
    }
}
