//! Fluent assertions for feature trees

use crate::gherkin::ast::{Block, Example, Feature, Step, Tag, Test};

/// Start asserting on a feature
pub fn assert_feature(feature: &Feature) -> FeatureAssertion<'_> {
    FeatureAssertion {
        feature,
        context: "feature".to_string(),
    }
}

fn tag_names(tags: &[Tag]) -> Vec<&str> {
    tags.iter().map(|tag| tag.name.as_str()).collect()
}

fn assert_tags(context: &str, tags: &[Tag], expected: &[&str]) {
    let actual = tag_names(tags);
    assert_eq!(
        actual, expected,
        "{}: Expected tags {:?}, found {:?}",
        context, expected, actual
    );
}

fn assert_text(context: &str, what: &str, actual: &str, expected: &str) {
    assert_eq!(
        actual, expected,
        "{}: Expected {} '{}', found '{}'",
        context, what, expected, actual
    );
}

pub struct FeatureAssertion<'a> {
    pub(crate) feature: &'a Feature,
    pub(crate) context: String,
}

impl<'a> FeatureAssertion<'a> {
    pub fn keyword(self, expected: &str) -> Self {
        assert_text(&self.context, "keyword", &self.feature.keyword, expected);
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_text(&self.context, "name", &self.feature.name, expected);
        self
    }

    pub fn description(self, expected: &str) -> Self {
        assert_text(&self.context, "description", &self.feature.description, expected);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        assert_tags(&self.context, &self.feature.tags, expected);
        self
    }

    pub fn has_background(self, expected: bool) -> Self {
        assert_eq!(
            self.feature.has_background(),
            expected,
            "{}: Expected background present = {}",
            self.context,
            expected
        );
        self
    }

    /// Steps of the background, which must exist
    pub fn background_step<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StepAssertion<'a>),
    {
        let background = self
            .feature
            .background
            .as_ref()
            .unwrap_or_else(|| panic!("{}: Expected a background, found none", self.context));
        let context = format!("{}:background", self.context);
        assertion(step_assertion(&background.steps, index, &context));
        self
    }

    pub fn test_count(self, expected: usize) -> Self {
        let actual = self.feature.tests.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} tests, found {} tests",
            self.context, expected, actual
        );
        self
    }

    pub fn test<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TestAssertion<'a>),
    {
        assert!(
            index < self.feature.tests.len(),
            "{}: Test index {} out of bounds (feature has {} tests)",
            self.context,
            index,
            self.feature.tests.len()
        );
        assertion(TestAssertion {
            test: &self.feature.tests[index],
            context: format!("{}:tests[{}]", self.context, index),
        });
        self
    }
}

pub struct TestAssertion<'a> {
    pub(crate) test: &'a Test,
    pub(crate) context: String,
}

impl<'a> TestAssertion<'a> {
    pub fn is_scenario(self) -> Self {
        assert!(
            self.test.as_scenario().is_some(),
            "{}: Expected a scenario, found an outline",
            self.context
        );
        self
    }

    pub fn is_outline(self) -> Self {
        assert!(
            self.test.as_outline().is_some(),
            "{}: Expected an outline, found a scenario",
            self.context
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_text(&self.context, "name", self.test.name(), expected);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        assert_tags(&self.context, self.test.tags(), expected);
        self
    }

    pub fn step_count(self, expected: usize) -> Self {
        let actual = self.test.steps().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} steps, found {} steps",
            self.context, expected, actual
        );
        self
    }

    pub fn step<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StepAssertion<'a>),
    {
        assertion(step_assertion(self.test.steps(), index, &self.context));
        self
    }

    pub fn example_count(self, expected: usize) -> Self {
        let actual = self.test.as_outline().map_or(0, |outline| outline.examples.len());
        assert_eq!(
            actual, expected,
            "{}: Expected {} examples, found {} examples",
            self.context, expected, actual
        );
        self
    }

    pub fn example<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ExampleAssertion<'a>),
    {
        let examples: &'a [Example] = match self.test {
            Test::Outline(outline) => &outline.examples,
            Test::Scenario(_) => panic!(
                "{}: Expected an outline with examples, found a scenario",
                self.context
            ),
        };
        assert!(
            index < examples.len(),
            "{}: Example index {} out of bounds (outline has {} examples)",
            self.context,
            index,
            examples.len()
        );
        assertion(ExampleAssertion {
            example: &examples[index],
            context: format!("{}:examples[{}]", self.context, index),
        });
        self
    }
}

fn step_assertion<'a>(steps: &'a [Step], index: usize, context: &str) -> StepAssertion<'a> {
    assert!(
        index < steps.len(),
        "{}: Step index {} out of bounds ({} steps)",
        context,
        index,
        steps.len()
    );
    StepAssertion {
        step: &steps[index],
        context: format!("{}:steps[{}]", context, index),
    }
}

pub struct StepAssertion<'a> {
    pub(crate) step: &'a Step,
    pub(crate) context: String,
}

impl StepAssertion<'_> {
    pub fn keyword(self, expected: &str) -> Self {
        assert_text(&self.context, "keyword", &self.step.keyword, expected);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_text(&self.context, "text", &self.step.text, expected);
        self
    }

    pub fn has_block(self, expected: bool) -> Self {
        assert_eq!(
            self.step.block.is_some(),
            expected,
            "{}: Expected block present = {}",
            self.context,
            expected
        );
        self
    }

    /// Cell values of the step's table, row by row
    pub fn table_values(self, expected: &[&[&str]]) -> Self {
        let table = self
            .step
            .block
            .as_ref()
            .and_then(Block::as_table)
            .unwrap_or_else(|| panic!("{}: Expected a table argument", self.context));
        let actual: Vec<Vec<&str>> = table.rows.iter().map(|row| row.values()).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected table {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn doc_string(self, expected_content: &str) -> Self {
        let doc_string = self
            .step
            .block
            .as_ref()
            .and_then(Block::as_doc_string)
            .unwrap_or_else(|| panic!("{}: Expected a doc string argument", self.context));
        assert_text(&self.context, "doc string", &doc_string.content, expected_content);
        self
    }
}

pub struct ExampleAssertion<'a> {
    pub(crate) example: &'a Example,
    pub(crate) context: String,
}

impl ExampleAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_text(&self.context, "name", &self.example.name, expected);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        assert_tags(&self.context, &self.example.tags, expected);
        self
    }

    pub fn parameters(self, expected: &[&str]) -> Self {
        let actual = self.example.parameters();
        assert_eq!(
            actual, expected,
            "{}: Expected parameters {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Argument rows only, the parameter row excluded
    pub fn argument_rows(self, expected: &[&[&str]]) -> Self {
        let actual: Vec<Vec<&str>> = self
            .example
            .argument_rows()
            .iter()
            .map(|row| row.values())
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Expected argument rows {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::testing::Samples;

    #[test]
    fn test_refunds_sample_shape() {
        let feature = Samples::feature("refunds.feature");
        assert_feature(&feature)
            .name("Refunds")
            .tags(&["@billing", "@refunds"])
            .has_background(true)
            .background_step(0, |step| {
                step.keyword("Given").text("a customer with an order");
            })
            .test_count(2)
            .test(0, |test| {
                test.is_scenario()
                    .name("Full refund")
                    .tags(&["@smoke"])
                    .step(0, |step| {
                        step.keyword("When").table_values(&[
                            &["item", "quantity"],
                            &["shirt", "1"],
                            &["socks", "3"],
                        ]);
                    })
                    .step(1, |step| {
                        step.doc_string("{\"amount\": 42}");
                    });
            })
            .test(1, |test| {
                test.is_outline()
                    .step_count(2)
                    .example_count(2)
                    .example(0, |example| {
                        example
                            .name("usual amounts")
                            .tags(&["@common"])
                            .parameters(&["count", "total", "amount"])
                            .argument_rows(&[&["1", "2", "10"], &["2", "4", "20"]]);
                    });
            });
    }

    #[test]
    #[should_panic(expected = "feature:tests[0]: Expected name 'other'")]
    fn test_failure_names_the_context() {
        let feature = Samples::feature("refunds.feature");
        assert_feature(&feature).test(0, |test| {
            test.name("other");
        });
    }

    #[test]
    #[should_panic(expected = "Expected an outline with examples")]
    fn test_examples_of_a_scenario() {
        let feature = Samples::feature("refunds.feature");
        assert_feature(&feature).test(0, |test| {
            test.example(0, |_| {});
        });
    }
}
