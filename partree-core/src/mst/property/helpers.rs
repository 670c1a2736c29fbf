//! Shared helper functions for merge loop property tests.

use proptest::test_runner::TestCaseError;

use crate::{
    collection::PartialTreeList, error::MstError, linkage::Linkage, mst::execute,
    result::SpanningTree,
};

use super::types::MstFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Runs the merge loop on the fixture with the requested linkage.
pub(super) fn run_fixture(
    fixture: &MstFixture,
    linkage: Linkage,
) -> Result<SpanningTree, MstError> {
    execute(PartialTreeList::initialize(&fixture.graph(), linkage))
}

/// Runs the merge loop, converting any error into a test failure.
pub(super) fn run_connected_fixture(
    fixture: &MstFixture,
    linkage: Linkage,
) -> Result<SpanningTree, TestCaseError> {
    run_fixture(fixture, linkage).map_err(|e| {
        TestCaseError::fail(format!(
            "merge loop failed with {linkage:?}: {e} ({})",
            fixture.context(),
        ))
    })
}
