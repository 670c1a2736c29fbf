//! Property 1: Equivalence with sequential oracle.
//!
//! For any generated connected graph, verifies that the merge loop produces
//! a spanning tree with the same total weight and edge count as a trusted
//! sequential Kruskal oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::linkage::Linkage;

use super::helpers::run_connected_fixture;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
///
/// Disconnected fixtures are skipped; they are covered by the structural
/// property.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    if !fixture.distribution.is_connected() {
        return Ok(());
    }

    let tree = run_connected_fixture(fixture, Linkage::Compressed)?;
    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if tree.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: merge loop={}, oracle={} ({})",
            tree.total_weight(),
            oracle.total_weight,
            fixture.context(),
        )));
    }

    if tree.len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: merge loop={}, oracle={} ({})",
            tree.len(),
            oracle.edge_count,
            fixture.context(),
        )));
    }

    if oracle.component_count != 1 {
        return Err(TestCaseError::fail(format!(
            "generator produced {} components for a connected distribution ({})",
            oracle.component_count,
            fixture.context(),
        )));
    }

    Ok(())
}
