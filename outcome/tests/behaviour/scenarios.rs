//! Binds the capture feature file to the step registry.

use crate::fixtures::{CaptureState, capture_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/fatal_capture.feature",
    fixtures = [capture_state: CaptureState]
);
