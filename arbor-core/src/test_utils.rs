//! Shared test utilities for `arbor-core`.

use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::AdjacencyMatrix;

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a validated matrix, panicking on invalid fixtures.
#[must_use]
pub(crate) fn graph(rows: &[&[f64]]) -> AdjacencyMatrix {
    AdjacencyMatrix::try_from_rows(rows.iter().map(|row| row.to_vec()).collect())
        .unwrap_or_else(|err| panic!("fixture graph is invalid: {err}"))
}

/// Four-vertex cycle with unit edges and weight-2 diagonals.
#[must_use]
pub(crate) fn unit_cycle() -> AdjacencyMatrix {
    graph(&[
        &[0.0, 1.0, 2.0, 1.0],
        &[1.0, 0.0, 1.0, 2.0],
        &[2.0, 1.0, 0.0, 1.0],
        &[1.0, 2.0, 1.0, 0.0],
    ])
}

/// Small worked graph whose minimum spanning tree weighs 8.
#[must_use]
pub(crate) fn small_graph() -> AdjacencyMatrix {
    graph(&[
        &[0.0, 5.0, 0.0, 5.0],
        &[5.0, 0.0, 1.0, 2.0],
        &[0.0, 1.0, 0.0, 4.0],
        &[5.0, 2.0, 4.0, 0.0],
    ])
}
