//! Determinism of repeated builds.
//!
//! Rebuilding the same graph must return an identical tree, and rooting the
//! build at another vertex may change which tied edges are chosen but never
//! the total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisconnectedPolicy, PrimBuilder};

use super::helpers::weights_match;
use super::types::MstFixture;

/// Number of rebuilds compared against the first build.
const REPETITIONS: usize = 3;

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let builder = PrimBuilder::new().with_disconnected_policy(DisconnectedPolicy::Partial);
    let baseline = builder
        .build(&fixture.graph)
        .map_err(|e| TestCaseError::fail(format!("baseline build failed: {e} ({})", fixture.describe())))?;

    for run in 1..=REPETITIONS {
        let rebuilt = builder
            .build(&fixture.graph)
            .map_err(|e| TestCaseError::fail(format!("run {run} failed: {e} ({})", fixture.describe())))?;
        if rebuilt != baseline {
            return Err(TestCaseError::fail(format!(
                "run {run}: tree differs from baseline ({})",
                fixture.describe(),
            )));
        }
    }

    if !fixture.is_connected() {
        return Ok(());
    }

    let last = fixture.graph.len().saturating_sub(1);
    let rerooted = builder
        .with_start_vertex(last)
        .build(&fixture.graph)
        .map_err(|e| TestCaseError::fail(format!("rerooted build failed: {e} ({})", fixture.describe())))?;
    if !weights_match(rerooted.total_weight(), baseline.total_weight()) {
        return Err(TestCaseError::fail(format!(
            "rooting at {last} changed the weight: {} vs {} ({})",
            rerooted.total_weight(),
            baseline.total_weight(),
            fixture.describe(),
        )));
    }
    Ok(())
}
