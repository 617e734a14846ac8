//! Sequential Kruskal oracle for MST property verification.
//!
//! Shares no code with the Prim builder: edges are read from the upper
//! triangle, sorted globally, and merged with a union-find.

use crate::AdjacencyMatrix;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Number of vertices in the component containing vertex 0.
    pub first_component_size: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
pub(super) fn sequential_kruskal(graph: &AdjacencyMatrix) -> SequentialMstResult {
    let node_count = graph.len();
    let mut edges: Vec<(f64, usize, usize)> = (0..node_count)
        .flat_map(|row| {
            graph
                .neighbours(row)
                .filter(move |&(column, _)| column > row)
                .map(move |(column, weight)| (weight, row, column))
        })
        .collect();
    edges.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut total_weight = 0.0_f64;
    let mut edge_count = 0_usize;
    for (weight, source, target) in edges {
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            parent[rb] = ra;
            total_weight += weight;
            edge_count += 1;
        }
    }

    let first_component_size = if node_count == 0 {
        0
    } else {
        let root = find_root(&mut parent, 0);
        (0..node_count)
            .filter(|&node| find_root(&mut parent, node) == root)
            .count()
    };

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: node_count - edge_count,
        first_component_size,
    }
}
