//! Curated sample documents
//!
//!     Every sample round-trips: parsing it, serializing the feature and parsing the output
//!     again yields an equal feature. Samples with a `# language:` header parse with the
//!     header's dialect; their serialized text has no header and needs a parser set to the
//!     same dialect.

use crate::gherkin::ast::{Feature, FeatureFile};

const SAMPLES: &[(&str, &str)] = &[
    (
        "australian.feature",
        include_str!("../../../samples/australian.feature"),
    ),
    (
        "descriptions.feature",
        include_str!("../../../samples/descriptions.feature"),
    ),
    (
        "escaping.feature",
        include_str!("../../../samples/escaping.feature"),
    ),
    (
        "french.feature",
        include_str!("../../../samples/french.feature"),
    ),
    (
        "minimal.feature",
        include_str!("../../../samples/minimal.feature"),
    ),
    (
        "refunds.feature",
        include_str!("../../../samples/refunds.feature"),
    ),
];

/// Dialect keys of the samples that declare one
const DIALECTS: &[(&str, &str)] = &[("australian.feature", "en-au"), ("french.feature", "fr")];

pub struct Samples;

impl Samples {
    /// Sample names in file name order
    pub fn names() -> Vec<&'static str> {
        SAMPLES.iter().map(|(name, _)| *name).collect()
    }

    pub fn get(name: &str) -> Option<&'static str> {
        SAMPLES
            .iter()
            .find(|(sample, _)| *sample == name)
            .map(|(_, text)| *text)
    }

    /// Name and text of every sample
    pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
        SAMPLES.iter().copied()
    }

    /// The dialect declared by the sample's header, English otherwise
    pub fn dialect(name: &str) -> &'static str {
        DIALECTS
            .iter()
            .find(|(sample, _)| *sample == name)
            .map_or("en", |(_, dialect)| *dialect)
    }

    /// The text of a sample; panics on an unknown name
    pub fn source(name: &str) -> &'static str {
        Self::get(name).unwrap_or_else(|| {
            panic!(
                "unknown sample '{}', available: {}",
                name,
                Self::names().join(", ")
            )
        })
    }

    /// Parse a sample as a feature file; panics if it does not parse
    pub fn feature_file(name: &str) -> FeatureFile {
        FeatureFile::from_source(name, Self::source(name))
            .unwrap_or_else(|error| panic!("sample '{name}' failed to parse: {error}"))
    }

    /// The feature of a sample; panics if it has none
    pub fn feature(name: &str) -> Feature {
        Self::feature_file(name)
            .feature
            .unwrap_or_else(|| panic!("sample '{name}' has no feature"))
    }
}
