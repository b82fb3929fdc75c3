//! Node building from normalized records
//!
//!     Records come out of [`normalize`](crate::gherkin::parsing::normalize) with raw
//!     descriptions, one-based lines and the adapter's JSON for each node. Building turns
//!     them into model nodes:
//!
//!         1. Descriptions are trimmed (see [`trim_description`]).
//!         2. Lines and raw JSON become the node's source information.
//!         3. Step arguments become [`Block`]s and examples keep their header row first.
//!
//!     Building never fails: anything a record can hold is a valid node. Directory loading
//!     is the exception, since every scanned document still has to be parsed.

use crate::gherkin::ast::description::trim_description;
use crate::gherkin::ast::elements::SourceInfo;
use crate::gherkin::ast::error::ModelError;
use crate::gherkin::ast::{
    Background, Block, Cell, Comment, Directory, DocString, Example, Feature, FeatureFile,
    Outline, Row, Scenario, Step, Table, Tag, Test,
};
use crate::gherkin::parsing::records::{
    ArgumentRecord, BackgroundRecord, CellRecord, CommentRecord, DocStringRecord, DocumentRecord,
    ExamplesRecord, FeatureRecord, RowRecord, StepRecord, TableRecord, TagRecord, TestKind,
    TestRecord,
};
use crate::gherkin::parsing::Parser;
use crate::gherkin::scanning::ScannedDirectory;
use std::path::PathBuf;

// ============================================================================
// SECTIONS
// ============================================================================

pub(crate) fn feature(record: FeatureRecord) -> Feature {
    tracing::debug!(name = %record.name, tests = record.tests.len(), "building feature");
    Feature {
        keyword: record.keyword,
        name: record.name,
        description: trim_description(&record.description),
        tags: record.tags.into_iter().map(tag).collect(),
        background: record.background.map(background),
        tests: record.tests.into_iter().map(test).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn background(record: BackgroundRecord) -> Background {
    Background {
        keyword: record.keyword,
        name: record.name,
        description: trim_description(&record.description),
        steps: record.steps.into_iter().map(step).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn test(record: TestRecord) -> Test {
    match record.kind {
        TestKind::Scenario => Test::Scenario(scenario(record)),
        TestKind::Outline => Test::Outline(outline(record)),
    }
}

/// Examples on a scenario record are dropped; records with examples are outlines
pub(crate) fn scenario(record: TestRecord) -> Scenario {
    Scenario {
        keyword: record.keyword,
        name: record.name,
        description: trim_description(&record.description),
        tags: record.tags.into_iter().map(tag).collect(),
        steps: record.steps.into_iter().map(step).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn outline(record: TestRecord) -> Outline {
    Outline {
        keyword: record.keyword,
        name: record.name,
        description: trim_description(&record.description),
        tags: record.tags.into_iter().map(tag).collect(),
        steps: record.steps.into_iter().map(step).collect(),
        examples: record.examples.into_iter().map(example).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn example(record: ExamplesRecord) -> Example {
    Example {
        keyword: record.keyword,
        name: record.name,
        description: trim_description(&record.description),
        tags: record.tags.into_iter().map(tag).collect(),
        rows: record.rows.into_iter().map(row).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

// ============================================================================
// STEPS AND ARGUMENTS
// ============================================================================

pub(crate) fn step(record: StepRecord) -> Step {
    Step {
        keyword: record.keyword,
        text: record.text,
        block: record.argument.map(|argument| match argument {
            ArgumentRecord::Table(record) => Block::Table(table(record)),
            ArgumentRecord::DocString(record) => Block::DocString(doc_string(record)),
        }),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn table(record: TableRecord) -> Table {
    Table {
        rows: record.rows.into_iter().map(row).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn doc_string(record: DocStringRecord) -> DocString {
    DocString {
        content_type: record.content_type,
        content: record.content,
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn row(record: RowRecord) -> Row {
    Row {
        cells: record.cells.into_iter().map(cell).collect(),
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn cell(record: CellRecord) -> Cell {
    Cell {
        value: record.value,
        source: SourceInfo::new(record.line, record.raw),
    }
}

// ============================================================================
// LEAVES AND FILES
// ============================================================================

pub(crate) fn tag(record: TagRecord) -> Tag {
    Tag {
        name: record.name,
        source: SourceInfo::new(record.line, record.raw),
    }
}

pub(crate) fn comment(record: CommentRecord) -> Comment {
    Comment {
        text: record.text,
        source: SourceInfo::new(record.line, record.raw),
    }
}

/// A feature file has no line of its own; its raw data is the whole document
pub(crate) fn feature_file(path: PathBuf, text: &str, document: DocumentRecord) -> FeatureFile {
    FeatureFile {
        path,
        feature: document.feature.map(feature),
        comments: document.comments.into_iter().map(comment).collect(),
        text: text.to_string(),
        source: SourceInfo {
            line: None,
            raw: Some(document.raw),
        },
    }
}

/// Parse every scanned document, recursing into sub-directories
pub(crate) fn directory(scanned: ScannedDirectory, parser: &Parser) -> Result<Directory, ModelError> {
    tracing::debug!(
        path = %scanned.path.display(),
        documents = scanned.documents.len(),
        directories = scanned.directories.len(),
        "building directory"
    );

    let feature_files = scanned
        .documents
        .into_iter()
        .map(|document| FeatureFile::from_source_with(document.path, &document.text, parser))
        .collect::<Result<Vec<_>, _>>()?;
    let directories = scanned
        .directories
        .into_iter()
        .map(|child| directory(child, parser))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Directory {
        path: scanned.path,
        feature_files,
        directories,
        source: SourceInfo::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gherkin::ast::AstNode;
    use serde_json::json;

    #[test]
    fn test_descriptions_are_trimmed() {
        let built = feature(FeatureRecord {
            keyword: "Feature".to_string(),
            description: "\n    First line\n      indented\n".to_string(),
            line: 3,
            raw: json!({"marker": true}),
            ..FeatureRecord::default()
        });
        assert_eq!(built.description, "First line\n  indented");
        assert_eq!(built.source_line(), Some(3));
        assert_eq!(built.parsing_data(), Some(&json!({"marker": true})));
    }

    #[test]
    fn test_test_kind_selects_the_node() {
        let record = TestRecord {
            kind: TestKind::Outline,
            keyword: "Scenario Outline".to_string(),
            examples: vec![ExamplesRecord::default()],
            ..TestRecord::default()
        };
        match test(record) {
            Test::Outline(outline) => assert_eq!(outline.examples.len(), 1),
            Test::Scenario(_) => panic!("expected an outline"),
        }
    }

    #[test]
    fn test_step_argument_becomes_a_block() {
        let built = step(StepRecord {
            keyword: "Given".to_string(),
            text: "text".to_string(),
            argument: Some(ArgumentRecord::DocString(DocStringRecord {
                content: "body".to_string(),
                ..DocStringRecord::default()
            })),
            line: 1,
            raw: serde_json::Value::Null,
        });
        assert_eq!(
            built.block.as_ref().and_then(Block::as_doc_string).map(|doc| doc.content.as_str()),
            Some("body")
        );
    }

    #[test]
    fn test_feature_file_has_no_line() {
        let file = feature_file(PathBuf::from("a.feature"), "", DocumentRecord::default());
        assert_eq!(file.source_line(), None);
        assert!(file.feature.is_none());
    }
}
