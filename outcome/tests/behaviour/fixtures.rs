//! Shared fixtures for the capture scenarios.

use outcome::{Cause, Outcome};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// State shared between the steps of one scenario.
#[derive(Debug, Default, ScenarioState)]
pub struct CaptureState {
    /// Outcome produced by the last captured block.
    pub outcome: Slot<Outcome<u32>>,
    /// Cause that escaped a capture instead of being wrapped.
    pub escaped: Slot<Cause>,
}

/// Creates an empty capture state for each scenario.
#[fixture]
pub fn capture_state() -> CaptureState {
    CaptureState::default()
}
