//! Equivalence with the sequential Kruskal oracle.
//!
//! For connected inputs, Prim must find a tree with the same total weight and
//! edge count as Kruskal. Weights are summed in different orders, so totals
//! are compared with a relative tolerance.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::prim_mst;

use super::helpers::weights_match;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    if !fixture.is_connected() {
        return Ok(());
    }

    let tree = prim_mst(&fixture.graph)
        .map_err(|e| TestCaseError::fail(format!("prim_mst failed: {e} ({})", fixture.describe())))?;
    let oracle = sequential_kruskal(&fixture.graph);

    if oracle.component_count != 1 {
        return Err(TestCaseError::fail(format!(
            "oracle found {} components in a connected fixture ({})",
            oracle.component_count,
            fixture.describe(),
        )));
    }

    if !weights_match(tree.total_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, oracle={} ({})",
            tree.total_weight(),
            oracle.total_weight,
            fixture.describe(),
        )));
    }

    if tree.edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: prim={}, oracle={} ({})",
            tree.edge_count(),
            oracle.edge_count,
            fixture.describe(),
        )));
    }
    Ok(())
}
