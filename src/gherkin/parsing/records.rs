//! Normalized parser records
//!
//! Whatever schema version a parsing adapter speaks, [`normalize`](super::normalize)
//! turns its output into these records. The node builders only ever see records, so the
//! node hierarchy never branches on schema version.
//!
//! Every record carries the one-based line it started on and `raw`, the unprocessed
//! fragment of adapter output it was decoded from. Records produced directly by a reader
//! (before encoding) have `Value::Null` as raw.

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRecord {
    pub feature: Option<FeatureRecord>,
    pub comments: Vec<CommentRecord>,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord {
    pub keyword: String,
    pub name: String,
    /// As found in the source, indentation included
    pub description: String,
    pub tags: Vec<TagRecord>,
    pub background: Option<BackgroundRecord>,
    pub tests: Vec<TestRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackgroundRecord {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub steps: Vec<StepRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TestKind {
    #[default]
    Scenario,
    Outline,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestRecord {
    pub kind: TestKind,
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<TagRecord>,
    pub steps: Vec<StepRecord>,
    pub examples: Vec<ExamplesRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamplesRecord {
    pub keyword: String,
    pub name: String,
    pub description: String,
    pub tags: Vec<TagRecord>,
    /// Header row first
    pub rows: Vec<RowRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepRecord {
    /// Trimmed; `Given`, not `Given `
    pub keyword: String,
    pub text: String,
    pub argument: Option<ArgumentRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentRecord {
    Table(TableRecord),
    DocString(DocStringRecord),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRecord {
    pub rows: Vec<RowRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocStringRecord {
    pub content_type: String,
    pub content: String,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRecord {
    pub cells: Vec<CellRecord>,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellRecord {
    pub value: String,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagRecord {
    pub name: String,
    pub line: usize,
    pub raw: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentRecord {
    pub text: String,
    pub line: usize,
    pub raw: Value,
}
