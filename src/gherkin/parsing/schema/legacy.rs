//! Legacy schema: a flat array of features
//!
//! ```text
//! [ { uri, keyword, name, line, description, tags: [{name, line}],
//!     elements: [{ type: background | scenario | scenario_outline, keyword, name, line,
//!                  description, tags, steps, examples }],
//!     comments: [{value, line}] } ]
//! ```
//!
//! Step keywords keep their trailing space and tables are arrays of plain string cells.
//! A document without a feature is an empty array, or a single entry holding only a `uri`
//! and `comments` when the document has comments.

use super::super::records::{
    ArgumentRecord, BackgroundRecord, CellRecord, CommentRecord, DocStringRecord, DocumentRecord,
    ExamplesRecord, FeatureRecord, RowRecord, StepRecord, TableRecord, TagRecord, TestKind,
    TestRecord,
};
use super::{Decoder, SchemaVersion};
use crate::gherkin::ast::error::ParseError;
use serde_json::{json, Map, Value};

pub fn encode(document: &DocumentRecord, file_name: &str) -> Value {
    let comments: Vec<Value> = document
        .comments
        .iter()
        .map(|comment| json!({ "value": comment.text, "line": comment.line }))
        .collect();

    match &document.feature {
        Some(feature) => json!([{
            "uri": file_name,
            "keyword": feature.keyword,
            "name": feature.name,
            "line": feature.line,
            "description": feature.description,
            "tags": encode_tags(&feature.tags),
            "elements": feature
                .background
                .iter()
                .map(encode_background)
                .chain(feature.tests.iter().map(encode_test))
                .collect::<Vec<_>>(),
            "comments": comments,
        }]),
        None if comments.is_empty() => json!([]),
        None => json!([{ "uri": file_name, "comments": comments }]),
    }
}

fn encode_tags(tags: &[TagRecord]) -> Vec<Value> {
    tags.iter()
        .map(|tag| json!({ "name": tag.name, "line": tag.line }))
        .collect()
}

fn encode_background(background: &BackgroundRecord) -> Value {
    json!({
        "type": "background",
        "keyword": background.keyword,
        "name": background.name,
        "line": background.line,
        "description": background.description,
        "steps": background.steps.iter().map(encode_step).collect::<Vec<_>>(),
    })
}

fn encode_test(test: &TestRecord) -> Value {
    let mut element = json!({
        "type": match test.kind {
            TestKind::Scenario => "scenario",
            TestKind::Outline => "scenario_outline",
        },
        "keyword": test.keyword,
        "name": test.name,
        "line": test.line,
        "description": test.description,
        "tags": encode_tags(&test.tags),
        "steps": test.steps.iter().map(encode_step).collect::<Vec<_>>(),
    });
    if test.kind == TestKind::Outline {
        element["examples"] = test.examples.iter().map(encode_examples).collect();
    }
    element
}

fn encode_examples(examples: &ExamplesRecord) -> Value {
    json!({
        "keyword": examples.keyword,
        "name": examples.name,
        "line": examples.line,
        "description": examples.description,
        "tags": encode_tags(&examples.tags),
        "rows": encode_rows(&examples.rows),
    })
}

fn encode_step(step: &StepRecord) -> Value {
    let mut value = json!({
        "keyword": format!("{} ", step.keyword),
        "name": step.text,
        "line": step.line,
    });
    match &step.argument {
        Some(ArgumentRecord::Table(table)) => value["rows"] = encode_rows(&table.rows).into(),
        Some(ArgumentRecord::DocString(doc)) => {
            value["doc_string"] = json!({
                "value": doc.content,
                "content_type": doc.content_type,
                "line": doc.line,
            })
        }
        None => {}
    }
    value
}

fn encode_rows(rows: &[RowRecord]) -> Vec<Value> {
    rows.iter()
        .map(|row| {
            json!({
                "cells": row.cells.iter().map(|cell| cell.value.clone()).collect::<Vec<_>>(),
                "line": row.line,
            })
        })
        .collect()
}

pub fn decode(data: &Value, file_name: &str) -> Result<DocumentRecord, ParseError> {
    let decoder = Decoder::new(SchemaVersion::Legacy, file_name);
    let entries = data
        .as_array()
        .ok_or_else(|| decoder.malformed("expected an array of features"))?;

    let mut document = DocumentRecord {
        raw: data.clone(),
        ..DocumentRecord::default()
    };
    let Some(entry) = entries.first() else {
        return Ok(document);
    };
    let map = decoder.object(entry, "feature")?;

    for comment in decoder.array(map, "comments")? {
        let comment_map = decoder.object(comment, "comment")?;
        document.comments.push(CommentRecord {
            text: decoder.string(comment_map, "value")?,
            line: decoder.line(comment_map, "line")?,
            raw: comment.clone(),
        });
    }
    if map.contains_key("keyword") {
        document.feature = Some(decode_feature(&decoder, entry, map)?);
    }
    Ok(document)
}

fn decode_feature(
    decoder: &Decoder,
    raw: &Value,
    map: &Map<String, Value>,
) -> Result<FeatureRecord, ParseError> {
    let mut feature = FeatureRecord {
        keyword: decoder.string(map, "keyword")?,
        name: decoder.string(map, "name")?,
        description: decoder.string(map, "description")?,
        tags: decode_tags(decoder, map)?,
        line: decoder.line(map, "line")?,
        raw: raw.clone(),
        ..FeatureRecord::default()
    };

    for element in decoder.array(map, "elements")? {
        let element_map = decoder.object(element, "element")?;
        match decoder.string(element_map, "type")?.as_str() {
            "background" => {
                feature.background = Some(BackgroundRecord {
                    keyword: decoder.string(element_map, "keyword")?,
                    name: decoder.string(element_map, "name")?,
                    description: decoder.string(element_map, "description")?,
                    steps: decode_steps(decoder, element_map)?,
                    line: decoder.line(element_map, "line")?,
                    raw: element.clone(),
                })
            }
            kind @ ("scenario" | "scenario_outline") => {
                let examples = decoder
                    .array(element_map, "examples")?
                    .iter()
                    .map(|examples| decode_examples(decoder, examples))
                    .collect::<Result<Vec<_>, _>>()?;
                feature.tests.push(TestRecord {
                    kind: if kind == "scenario" {
                        TestKind::Scenario
                    } else {
                        TestKind::Outline
                    },
                    keyword: decoder.string(element_map, "keyword")?,
                    name: decoder.string(element_map, "name")?,
                    description: decoder.string(element_map, "description")?,
                    tags: decode_tags(decoder, element_map)?,
                    steps: decode_steps(decoder, element_map)?,
                    examples,
                    line: decoder.line(element_map, "line")?,
                    raw: element.clone(),
                });
            }
            other => {
                tracing::warn!(element_type = other, "skipping unknown legacy element");
            }
        }
    }
    Ok(feature)
}

fn decode_tags(decoder: &Decoder, map: &Map<String, Value>) -> Result<Vec<TagRecord>, ParseError> {
    decoder
        .array(map, "tags")?
        .iter()
        .map(|tag| {
            let tag_map = decoder.object(tag, "tag")?;
            Ok(TagRecord {
                name: decoder.string(tag_map, "name")?,
                line: decoder.line(tag_map, "line")?,
                raw: tag.clone(),
            })
        })
        .collect()
}

fn decode_examples(decoder: &Decoder, raw: &Value) -> Result<ExamplesRecord, ParseError> {
    let map = decoder.object(raw, "examples")?;
    Ok(ExamplesRecord {
        keyword: decoder.string(map, "keyword")?,
        name: decoder.string(map, "name")?,
        description: decoder.string(map, "description")?,
        tags: decode_tags(decoder, map)?,
        rows: decode_rows(decoder, map)?,
        line: decoder.line(map, "line")?,
        raw: raw.clone(),
    })
}

fn decode_steps(decoder: &Decoder, map: &Map<String, Value>) -> Result<Vec<StepRecord>, ParseError> {
    decoder
        .array(map, "steps")?
        .iter()
        .map(|step| {
            let step_map = decoder.object(step, "step")?;
            let line = decoder.line(step_map, "line")?;

            let argument = if let Some(doc) = decoder.child(step_map, "doc_string")? {
                Some(ArgumentRecord::DocString(DocStringRecord {
                    content_type: decoder.string(doc, "content_type")?,
                    content: decoder.string(doc, "value")?,
                    line: decoder.line(doc, "line")?,
                    raw: step_map.get("doc_string").cloned().unwrap_or_default(),
                }))
            } else if step_map.contains_key("rows") {
                let rows = decode_rows(decoder, step_map)?;
                Some(ArgumentRecord::Table(TableRecord {
                    line: rows.first().map(|row| row.line).unwrap_or(line + 1),
                    rows,
                    raw: step_map.get("rows").cloned().unwrap_or_default(),
                }))
            } else {
                None
            };

            Ok(StepRecord {
                keyword: decoder.string(step_map, "keyword")?.trim().to_string(),
                text: decoder.string(step_map, "name")?,
                argument,
                line,
                raw: step.clone(),
            })
        })
        .collect()
}

fn decode_rows(decoder: &Decoder, map: &Map<String, Value>) -> Result<Vec<RowRecord>, ParseError> {
    decoder
        .array(map, "rows")?
        .iter()
        .map(|row| {
            let row_map = decoder.object(row, "row")?;
            let line = decoder.line(row_map, "line")?;
            let cells = decoder
                .array(row_map, "cells")?
                .iter()
                .map(|cell| {
                    let value = cell
                        .as_str()
                        .ok_or_else(|| decoder.malformed("expected cells to be strings"))?;
                    Ok(CellRecord {
                        value: value.to_string(),
                        line,
                        raw: cell.clone(),
                    })
                })
                .collect::<Result<Vec<_>, ParseError>>()?;
            Ok(RowRecord {
                cells,
                line,
                raw: row.clone(),
            })
        })
        .collect()
}
