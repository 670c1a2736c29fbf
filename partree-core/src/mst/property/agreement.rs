//! Property 3: Linkage and run agreement.
//!
//! Runs the merge loop under both root linkage strategies, several times
//! each, and asserts that every run returns the same edge set. Linkage only
//! changes how canonical roots are represented, never which tree a vertex
//! belongs to, so the accepted edges must be identical.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::linkage::Linkage;

use super::helpers::run_connected_fixture;
use super::types::{AgreementConfig, MstFixture};

/// Runs the agreement property for the given fixture.
pub(super) fn run_agreement_property(fixture: &MstFixture) -> TestCaseResult {
    if !fixture.distribution.is_connected() {
        return Ok(());
    }

    let config = AgreementConfig::load();
    let baseline = run_connected_fixture(fixture, Linkage::Compressed)?;

    for run in 0..config.repetitions {
        for linkage in [Linkage::Compressed, Linkage::Chained] {
            let tree = run_connected_fixture(fixture, linkage)?;

            if tree.total_weight() != baseline.total_weight() {
                return Err(TestCaseError::fail(format!(
                    "run {run} ({linkage:?}): total weight diverged, baseline={}, run={} ({})",
                    baseline.total_weight(),
                    tree.total_weight(),
                    fixture.context(),
                )));
            }

            if tree.edges() != baseline.edges() {
                return Err(TestCaseError::fail(format!(
                    "run {run} ({linkage:?}): edge set differs from baseline ({})",
                    fixture.context(),
                )));
            }
        }
    }

    Ok(())
}
