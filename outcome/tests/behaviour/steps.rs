//! Step definitions for the capture scenarios.

use std::panic;

use anyhow::{Result, anyhow, ensure};
use outcome::{Cancelled, Cause, Outcome, catching, catching_unwind, fatal};
use rstest_bdd::ScenarioState as _;
use rstest_bdd_macros::{given, then, when};
use test_helpers::{OutcomeAssertions, errors::NullReferenceError};

use crate::fixtures::CaptureState;

#[given("the default fatal classifier")]
fn default_classifier(capture_state: &CaptureState) -> Result<()> {
    capture_state.reset();
    ensure!(
        capture_state.outcome.is_empty() && capture_state.escaped.is_empty(),
        "reset must clear previous captures"
    );
    ensure!(
        fatal::is_fatal(&Cause::new(Cancelled::new("probe"))),
        "default classifier must treat cancellation as fatal"
    );
    Ok(())
}

#[when("a block fails with the message {message}")]
fn block_fails(capture_state: &CaptureState, message: String) {
    let outcome = catching(move || Err::<u32, _>(NullReferenceError::new(message)));
    capture_state.outcome.set(outcome);
}

#[when("a block returns {value}")]
fn block_returns(capture_state: &CaptureState, value: u32) {
    capture_state.outcome.set(catching(move || Ok::<_, Cause>(value)));
}

#[when("a failure with the message {message} is thrown inside a block")]
fn failure_thrown(capture_state: &CaptureState, message: String) {
    let thrown: Outcome<u32> = Outcome::failure(NullReferenceError::new(message));
    capture_state
        .outcome
        .set(catching_unwind(move || thrown.get_or_throw()));
}

#[when("a block is cancelled")]
fn block_cancelled(capture_state: &CaptureState) -> Result<()> {
    let payload = panic::catch_unwind(|| catching(|| Err::<u32, _>(Cancelled::new("shutdown"))))
        .err()
        .ok_or_else(|| anyhow!("cancellation was captured as a failure"))?;
    let cause = payload
        .downcast::<Cause>()
        .map_err(|_| anyhow!("escaped payload was not a cause"))?;
    capture_state.escaped.set(*cause);
    Ok(())
}

#[then("the outcome is a failure with message {message}")]
fn failure_with_message(capture_state: &CaptureState, message: String) -> Result<()> {
    let outcome = capture_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome captured"))?;
    let cause = outcome.try_failure()?;
    ensure!(
        cause.is::<NullReferenceError>(),
        "unexpected cause type {}",
        cause.type_name()
    );
    ensure!(
        cause.message() == message,
        "expected message {message}, got {}",
        cause.message()
    );
    Ok(())
}

#[then("the outcome succeeds with {value}")]
fn success_with(capture_state: &CaptureState, value: u32) -> Result<()> {
    let outcome = capture_state
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome captured"))?;
    let actual = outcome.try_success()?;
    ensure!(actual == value, "expected {value}, got {actual}");
    Ok(())
}

#[then("the cancellation escapes the capture")]
fn cancellation_escaped(capture_state: &CaptureState) -> Result<()> {
    let cause = capture_state
        .escaped
        .take()
        .ok_or_else(|| anyhow!("nothing escaped the capture"))?;
    ensure!(cause.is::<Cancelled>(), "unexpected escaped cause {cause:?}");
    Ok(())
}
