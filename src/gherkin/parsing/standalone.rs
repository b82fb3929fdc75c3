//! Wrapping of stand-alone fragments into parseable documents

use super::Keywords;
use crate::gherkin::ast::error::ParseError;
use crate::gherkin::ast::NodeKind;

const FAKE_FEATURE_NAME: &str = "Fake feature to parse";
const FAKE_STEP_TEXT: &str = "fake step";

/// A kind of node parsed from text on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Feature,
    Background,
    Scenario,
    Outline,
    Example,
    Step,
    Table,
    DocString,
    Row,
    Cell,
    Tag,
    Comment,
}

impl Fragment {
    pub fn kind(&self) -> NodeKind {
        match self {
            Fragment::Feature => NodeKind::Feature,
            Fragment::Background => NodeKind::Background,
            Fragment::Scenario => NodeKind::Scenario,
            Fragment::Outline => NodeKind::Outline,
            Fragment::Example => NodeKind::Example,
            Fragment::Step => NodeKind::Step,
            Fragment::Table => NodeKind::Table,
            Fragment::DocString => NodeKind::DocString,
            Fragment::Row => NodeKind::Row,
            Fragment::Cell => NodeKind::Cell,
            Fragment::Tag => NodeKind::Tag,
            Fragment::Comment => NodeKind::Comment,
        }
    }

    /// Synthetic file name used for the parse
    pub fn file_name(&self) -> String {
        format!("stand_alone_{}.feature", self.kind())
    }

    /// The error for a parse that succeeded but held no node of this kind
    pub fn missing(&self) -> ParseError {
        ParseError::Missing {
            file_name: self.file_name(),
            expected: self.kind().to_string(),
        }
    }

    /// Embed `source` in the smallest document that gives it a valid place
    pub fn wrap(&self, source: &str, keywords: &Keywords) -> String {
        let feature = format!("{}: {}\n", keywords.feature, FAKE_FEATURE_NAME);
        let scenario = format!("{}:\n", keywords.scenario);
        let outline = format!("{}:\n", keywords.outline);
        let step = format!("{} {}\n", keywords.step, FAKE_STEP_TEXT);
        let examples = format!("{}:\n", keywords.examples);

        match self {
            Fragment::Feature => source.to_string(),
            Fragment::Background | Fragment::Scenario | Fragment::Outline => {
                format!("{feature}{source}")
            }
            Fragment::Example => format!("{feature}{outline}{step}{source}"),
            Fragment::Step => format!("{feature}{scenario}{source}"),
            Fragment::Table | Fragment::DocString => format!("{feature}{scenario}{step}{source}"),
            Fragment::Row => format!("{feature}{outline}{step}{examples}{source}"),
            Fragment::Cell => format!("{feature}{outline}{step}{examples}|{source}|"),
            Fragment::Tag | Fragment::Comment => format!("{source}\n{}", feature.trim_end()),
        }
    }
}
