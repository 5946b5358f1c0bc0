//! Behavioural scenarios for the capture helpers, driven by `rstest-bdd`.
//!
//! Fixtures live in [`fixtures`], step implementations in [`steps`], and
//! [`scenarios`] binds the `.feature` files to both.

mod fixtures;
mod scenarios;
mod steps;
