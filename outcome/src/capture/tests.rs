//! Unit tests for the capture helpers.

use std::{
    cell::Cell,
    error::Error as StdError,
    io,
    panic::{self, AssertUnwindSafe},
};

use rstest::{fixture, rstest};
use thiserror::Error;

use super::{
    catching, catching_result, catching_unwind, catching_with, wrap_as, wrap_as_result,
    wrap_as_simple,
};
use crate::{
    Cause, Outcome, Panicked,
    fatal::{Cancelled, DefaultClassifier},
};

#[derive(Debug, Error)]
#[error("{message}")]
struct Wrapped {
    message: String,
    cause: Option<Cause>,
}

impl Wrapped {
    fn from_parts(message: String, cause: Cause) -> Self {
        Self {
            message,
            cause: Some(cause),
        }
    }

    fn bare(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            cause: None,
        }
    }
}

#[fixture]
fn flaky() -> io::Error {
    io::Error::other("flaky")
}

#[rstest]
fn ok_becomes_success() {
    let outcome = catching(|| Ok::<_, io::Error>(7));
    assert_eq!(outcome, Outcome::Success(7));
}

#[rstest]
fn err_becomes_failure(flaky: io::Error) {
    let outcome: Outcome<u8> = catching(move || Err(flaky));
    let cause = outcome.cause_or_none().expect("failure expected");
    assert_eq!(cause.message(), "flaky");
}

#[test]
fn block_runs_exactly_once() {
    let calls = Cell::new(0);
    let outcome = catching_unwind(|| calls.set(calls.get() + 1));
    assert!(outcome.is_success());
    assert_eq!(calls.get(), 1);
}

#[test]
fn string_panics_become_panicked_causes() {
    let outcome: Outcome<()> = catching_unwind(|| panic!("bug in block"));
    let cause = outcome.cause_or_none().expect("failure expected");
    let panicked = cause.downcast_ref::<Panicked>().expect("panicked cause");
    assert_eq!(panicked.message(), "bug in block");
}

#[test]
fn thrown_causes_keep_identity() {
    let original = Cause::new(io::Error::other("thrown"));
    let thrown: Outcome<u8> = Outcome::Failure(original.clone());
    let recaptured = catching_unwind(move || thrown.get_or_throw());
    assert_eq!(recaptured, Outcome::Failure(original));
}

#[test]
fn fatal_errors_are_reraised() {
    let result = panic::catch_unwind(|| {
        catching_with(&DefaultClassifier, || {
            Err::<(), _>(Cancelled::new("stop"))
        })
    });
    let payload = result.expect_err("cancellation must not be captured");
    let cause = payload.downcast::<Cause>().expect("cause payload");
    assert!(cause.is::<Cancelled>());
}

#[test]
fn fatal_panics_are_reraised() {
    let result = panic::catch_unwind(|| {
        catching_with(&DefaultClassifier, || -> Result<(), io::Error> {
            panic::panic_any(Cause::new(Cancelled::new("stop")))
        })
    });
    assert!(result.is_err());
}

#[test]
fn cancelled_panic_payloads_resume_unwinding() {
    let result = panic::catch_unwind(|| {
        catching_with(&DefaultClassifier, || -> Result<u8, io::Error> {
            panic::panic_any(Cancelled::new("shutdown"))
        })
    });
    let payload = result.expect_err("cancellation must not be captured");
    let cancelled = payload
        .downcast::<Cancelled>()
        .expect("original payload should resume");
    assert_eq!(cancelled.reason(), "shutdown");
}

#[test]
fn cancelled_payloads_are_captured_when_the_classifier_allows() {
    let nothing = |_: &Cause| false;
    let outcome = catching_with(&nothing, || -> Result<u8, io::Error> {
        panic::panic_any(Cancelled::new("ignored"))
    });
    let cause = outcome.cause_or_none().expect("failure expected");
    assert!(cause.is::<Cancelled>());
}

#[test]
fn boxed_error_payloads_keep_their_error() {
    let outcome = catching_with(&DefaultClassifier, || -> Result<u8, io::Error> {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(io::Error::other("boxed"));
        panic::panic_any(boxed)
    });
    let cause = outcome.cause_or_none().expect("failure expected");
    assert!(cause.is::<io::Error>());
    assert_eq!(cause.message(), "boxed");
}

#[test]
fn fatal_boxed_error_payloads_are_reraised_as_causes() {
    let result = panic::catch_unwind(|| {
        catching_with(&DefaultClassifier, || -> Result<u8, io::Error> {
            let boxed: Box<dyn StdError + Send + Sync> = Box::new(Cancelled::new("stop"));
            panic::panic_any(boxed)
        })
    });
    let payload = result.expect_err("cancellation must not be captured");
    let cause = payload.downcast::<Cause>().expect("cause payload");
    assert!(cause.is::<Cancelled>());
}

#[test]
fn custom_classifier_resumes_foreign_payloads() {
    let everything = |_: &Cause| true;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        catching_with(&everything, || -> Result<(), io::Error> { panic!("abort") })
    }));
    let payload = result.expect_err("classifier flags every cause");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"abort"));
}

#[rstest]
fn catching_result_returns_std_result(flaky: io::Error) {
    let ok = catching_result(|| Ok::<_, io::Error>("fine"));
    assert_eq!(ok.ok(), Some("fine"));
    let err = catching_result(move || Err::<(), _>(flaky));
    assert!(err.is_err_and(|cause| cause.is::<io::Error>()));
}

#[rstest]
fn wrap_as_wraps_foreign_causes(flaky: io::Error) {
    let outcome: Outcome<()> = wrap_as(Wrapped::from_parts, move || Err(flaky));
    let cause = outcome.cause_or_none().expect("failure expected");
    let wrapped = cause.downcast_ref::<Wrapped>().expect("wrapped cause");
    assert_eq!(wrapped.message, "flaky");
    assert!(
        wrapped
            .cause
            .as_ref()
            .is_some_and(|inner| inner.is::<io::Error>())
    );
}

#[test]
fn wrap_as_keeps_causes_of_the_target_type() {
    let outcome: Outcome<()> = wrap_as(Wrapped::from_parts, || Err(Wrapped::bare("already")));
    let cause = outcome.cause_or_none().expect("failure expected");
    let wrapped = cause.downcast_ref::<Wrapped>().expect("wrapped cause");
    assert_eq!(wrapped.message, "already");
    assert!(wrapped.cause.is_none(), "cause must not be wrapped twice");
}

#[rstest]
fn wrap_as_simple_uses_the_cause_only(flaky: io::Error) {
    let outcome: Outcome<()> = wrap_as_simple(
        |cause: Cause| Wrapped::from_parts(String::from("simple"), cause),
        move || Err(flaky),
    );
    let message = outcome.cause_or_none().map(|cause| cause.message());
    assert_eq!(message.as_deref(), Some("simple"));
}

#[test]
fn wrap_as_leaves_successes_alone() {
    let outcome = wrap_as(Wrapped::from_parts, || Ok::<_, io::Error>(5));
    assert_eq!(outcome.get_or_none(), Some(5));
}

#[rstest]
fn wrap_as_result_returns_wrapped_causes(flaky: io::Error) {
    let wrapped = wrap_as_result(Wrapped::from_parts, move || Err::<(), _>(flaky));
    let cause = wrapped.expect_err("failure expected");
    assert!(cause.is::<Wrapped>());
    let fine = wrap_as_result(Wrapped::from_parts, || Ok::<_, io::Error>(5));
    assert_eq!(fine.ok(), Some(5));
}
