//! Round-trip stability of the canonical serializer
//!
//! Every curated sample and every generated feature must serialize to text that parses
//! back to an equal feature and serializes to the exact same text.

use feature_tree::gherkin::parsing::{Parser, SchemaVersion};
use feature_tree::gherkin::testing::Samples;
use feature_tree::{Feature, FeatureFile, Scenario, Step, Table, Tag, Test};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn samples_round_trip(
    #[values(SchemaVersion::Legacy, SchemaVersion::Ast, SchemaVersion::Messages)]
    version: SchemaVersion,
    #[values(
        "australian.feature",
        "descriptions.feature",
        "escaping.feature",
        "french.feature",
        "minimal.feature",
        "refunds.feature"
    )]
    name: &str,
) {
    let parser = Parser::with_schema(version).with_dialect(Samples::dialect(name));
    let file = FeatureFile::from_source_with(name, Samples::source(name), &parser)
        .expect("sample to parse");
    let feature = file.feature.expect("sample to hold a feature");

    let text = feature.to_text();
    let reparsed = Feature::from_source_with(&text, &parser).expect("canonical text to parse");

    assert_eq!(reparsed, feature, "{name} ({version})");
    assert_eq!(reparsed.to_text(), text, "{name} ({version})");
}

#[rstest]
#[case(SchemaVersion::Legacy)]
#[case(SchemaVersion::Ast)]
#[case(SchemaVersion::Messages)]
fn schema_versions_build_equal_trees(#[case] version: SchemaVersion) {
    let reference = Samples::feature("refunds.feature");
    let parser = Parser::with_schema(version);
    let feature = Feature::from_source_with(Samples::source("refunds.feature"), &parser)
        .expect("sample to parse");

    assert_eq!(feature, reference);
    assert_eq!(feature.to_text(), reference.to_text());
}

#[test]
fn canonical_text_is_stable_for_the_refunds_sample() {
    let feature = Samples::feature("refunds.feature");
    insta::assert_snapshot!(feature.to_text(), @r###"
    @billing @refunds
    Feature: Refunds

    Customers can return items
    within thirty days.

      Indented notes stay indented.

      Background:
        Given a customer with an order

      @smoke
      Scenario: Full refund
        When the customer returns every item
          | item  | quantity |
          | shirt | 1        |
          | socks | 3        |
        Then the refund is issued
          """json
          {"amount": 42}
          """

      Scenario Outline: Partial refund

      Scenario descriptions are allowed.

        When the customer returns <count> of <total> items
        Then the refund is <amount>

        @common
        Examples: usual amounts
          | count | total | amount |
          | 1     | 2     | 10     |
          | 2     | 4     | 20     |

        Examples: edge cases
          | count | total | amount |
          | 0     | 2     | 0      |
    "###);
}

// ============================================================================
// GENERATED FEATURES
// ============================================================================

fn words() -> impl Strategy<Value = String> {
    "[a-z]([a-z ]{0,10}[a-z])?"
}

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(words(), 0..3).prop_map(|lines| lines.join("\n"))
}

fn tags() -> impl Strategy<Value = Vec<Tag>> {
    prop::collection::vec("@[a-z]{1,5}", 0..3)
        .prop_map(|names| names.into_iter().map(Tag::new).collect())
}

fn table() -> impl Strategy<Value = Table> {
    (1usize..4).prop_flat_map(|columns| {
        prop::collection::vec(prop::collection::vec("[a-z0-9|\\\\]{1,6}", columns), 1..4)
            .prop_map(|rows| Table::from_values(rows))
    })
}

fn step() -> impl Strategy<Value = Step> {
    (
        prop::sample::select(vec!["Given", "When", "Then", "And", "But", "*"]),
        words(),
        prop::option::of(table()),
    )
        .prop_map(|(keyword, text, table)| {
            let step = Step::new(keyword, text);
            match table {
                Some(table) => step.with_block(table),
                None => step,
            }
        })
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (words(), tags(), description(), prop::collection::vec(step(), 1..4)).prop_map(
        |(name, tags, description, steps)| {
            let mut scenario = Scenario::default();
            scenario.name = name;
            scenario.tags = tags;
            scenario.description = description;
            scenario.steps = steps;
            scenario
        },
    )
}

fn feature() -> impl Strategy<Value = Feature> {
    (words(), tags(), description(), prop::collection::vec(scenario(), 0..3)).prop_map(
        |(name, tags, description, scenarios)| {
            let mut feature = Feature::default();
            feature.name = name;
            feature.tags = tags;
            feature.description = description;
            feature.tests = scenarios.into_iter().map(Test::from).collect();
            feature
        },
    )
}

proptest! {
    #[test]
    fn generated_features_round_trip(feature in feature()) {
        let text = feature.to_text();
        let reparsed = Feature::from_source(&text).expect("canonical text to parse");

        prop_assert_eq!(reparsed.to_text(), text);
        prop_assert!(reparsed == feature);
    }
}
