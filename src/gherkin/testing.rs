//! Testing utilities for node assertions
//!
//! # Writing Model Tests
//!
//!     Two tools are meant to be used together:
//!
//!         1. [`Samples`] - curated feature documents under `samples/`, embedded into the crate.
//!         2. [`assert_feature`] - fluent assertions over a whole feature tree.
//!
//! ## Use Samples for Test Content
//!
//!     Gherkin details are easy to get slightly wrong by hand (a missing colon turns a title
//!     into a description line). The samples are checked once and shared by the unit and
//!     integration tests, so a grammar change only means revisiting one folder.
//!
//!     ```rust-example
//!     let feature = Samples::feature("refunds.feature");
//!     ```
//!
//! ## Use Fluent Assertions for Trees
//!
//!     Each assertion carries a context path (`feature:tests[1]:steps[0]`) that is printed
//!     on failure, and child assertions are scoped with closures:
//!
//!     ```rust-example
//!     assert_feature(&feature)
//!         .name("Refunds")
//!         .tags(&["@billing", "@refunds"])
//!         .test(0, |test| {
//!             test.is_scenario()
//!                 .step(0, |step| step.keyword("When").table_values(&[&["item"]]));
//!         });
//!     ```

mod assertions;
mod samples;

pub use assertions::{
    assert_feature, ExampleAssertion, FeatureAssertion, StepAssertion, TestAssertion,
};
pub use samples::Samples;
