//! Test helpers shared across crates that use `outcome`.
//!
//! - [`OutcomeAssertions`] asserts on the variant of an [`outcome::Outcome`]
//!   and hands back its contents.
//! - [`classifier`] serialises tests that swap the process-wide fatal
//!   classifier.
//! - [`errors`] holds small error types for fixtures.

pub mod assertions;
pub mod classifier;
pub mod errors;

pub use assertions::OutcomeAssertions;
