//! Structural invariant verification.
//!
//! For every tree produced under [`DisconnectedPolicy::Partial`], verifies:
//!
//! - **Edge subset**: every tree weight is copied bit-for-bit from the graph.
//! - **Symmetry**: the tree matrix equals its transpose.
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Coverage**: the tree spans exactly the component of the start vertex.
//! - **Rejection**: the default policy fails exactly when coverage is partial.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisconnectedPolicy, MstError, PrimBuilder, SpanningTree, prim_mst, verify_spanning_tree};

use super::helpers::find_root;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let tree = PrimBuilder::new()
        .with_disconnected_policy(DisconnectedPolicy::Partial)
        .build(&fixture.graph)
        .map_err(|e| TestCaseError::fail(format!("partial build failed: {e} ({})", fixture.describe())))?;

    validate_edge_subset(fixture, &tree)?;
    validate_symmetry(fixture, &tree)?;
    validate_acyclicity(fixture, &tree)?;

    let oracle = sequential_kruskal(&fixture.graph);
    let expected_edges = oracle.first_component_size.saturating_sub(1);
    if tree.edge_count() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "tree has {} edges but the start component needs {expected_edges} ({})",
            tree.edge_count(),
            fixture.describe(),
        )));
    }

    validate_rejection(fixture, oracle.first_component_size)?;

    if fixture.is_connected() {
        verify_spanning_tree(&fixture.graph, &tree, None, 0.0).map_err(|e| {
            TestCaseError::fail(format!("verification failed: {e} ({})", fixture.describe()))
        })?;
    }
    Ok(())
}

fn validate_edge_subset(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    for (index, edge) in tree.edges().iter().enumerate() {
        let source = fixture.graph.weight(edge.source(), edge.target());
        if source.map(f64::to_bits) != Some(edge.weight().to_bits()) {
            return Err(TestCaseError::fail(format!(
                "edge {index}: ({}, {}) weight {} does not match graph {source:?} ({})",
                edge.source(),
                edge.target(),
                edge.weight(),
                fixture.describe(),
            )));
        }
        if edge.weight() <= 0.0 {
            return Err(TestCaseError::fail(format!(
                "edge {index}: non-positive weight {} ({})",
                edge.weight(),
                fixture.describe(),
            )));
        }
    }
    Ok(())
}

fn validate_symmetry(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    let rows = tree.to_rows();
    for (i, row) in rows.iter().enumerate() {
        for (j, weight) in row.iter().enumerate() {
            if weight.to_bits() != rows[j][i].to_bits() {
                return Err(TestCaseError::fail(format!(
                    "tree is not symmetric at ({i}, {j}) ({})",
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}

fn validate_acyclicity(fixture: &MstFixture, tree: &SpanningTree) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..tree.len()).collect();
    for (index, edge) in tree.edges().iter().enumerate() {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.target());
        if ra == rb {
            return Err(TestCaseError::fail(format!(
                "edge {index}: ({}, {}) creates a cycle ({})",
                edge.source(),
                edge.target(),
                fixture.describe(),
            )));
        }
        parent[rb] = ra;
    }
    Ok(())
}

fn validate_rejection(fixture: &MstFixture, reached: usize) -> TestCaseResult {
    let node_count = fixture.graph.len();
    match prim_mst(&fixture.graph) {
        Ok(_) if reached == node_count => Ok(()),
        Err(MstError::Disconnected {
            reached: reported,
            node_count: total,
        }) if reported == reached && total == node_count && reached < node_count => Ok(()),
        other => Err(TestCaseError::fail(format!(
            "default policy returned {other:?} with {reached} of {node_count} reachable ({})",
            fixture.describe(),
        ))),
    }
}
