//! Typed AST schema
//!
//! ```text
//! { type: GherkinDocument,
//!   feature: { type: Feature, tags, location, keyword, name, description,
//!              children: [{ type: Background | Scenario | ScenarioOutline, ... }] },
//!   comments: [{ type: Comment, location, text }] }
//! ```
//!
//! Every node has a `type` and a `location`. Step arguments are `DataTable` or
//! `DocString` nodes; examples split their table into `tableHeader` and `tableBody`.

use super::super::records::{
    ArgumentRecord, BackgroundRecord, CellRecord, CommentRecord, DocStringRecord, DocumentRecord,
    ExamplesRecord, FeatureRecord, RowRecord, StepRecord, TableRecord, TagRecord, TestKind,
    TestRecord,
};
use super::{location, Decoder, SchemaVersion};
use crate::gherkin::ast::error::ParseError;
use serde_json::{json, Map, Value};

pub fn encode(document: &DocumentRecord, _file_name: &str) -> Value {
    let mut data = json!({
        "type": "GherkinDocument",
        "comments": document
            .comments
            .iter()
            .map(|comment| json!({
                "type": "Comment",
                "location": location(comment.line),
                "text": comment.text,
            }))
            .collect::<Vec<_>>(),
    });
    if let Some(feature) = &document.feature {
        data["feature"] = encode_feature(feature);
    }
    data
}

fn encode_feature(feature: &FeatureRecord) -> Value {
    json!({
        "type": "Feature",
        "tags": encode_tags(&feature.tags),
        "location": location(feature.line),
        "keyword": feature.keyword,
        "name": feature.name,
        "description": feature.description,
        "children": feature
            .background
            .iter()
            .map(encode_background)
            .chain(feature.tests.iter().map(encode_test))
            .collect::<Vec<_>>(),
    })
}

fn encode_tags(tags: &[TagRecord]) -> Vec<Value> {
    tags.iter()
        .map(|tag| json!({ "type": "Tag", "location": location(tag.line), "name": tag.name }))
        .collect()
}

fn encode_background(background: &BackgroundRecord) -> Value {
    json!({
        "type": "Background",
        "location": location(background.line),
        "keyword": background.keyword,
        "name": background.name,
        "description": background.description,
        "steps": background.steps.iter().map(encode_step).collect::<Vec<_>>(),
    })
}

fn encode_test(test: &TestRecord) -> Value {
    let mut value = json!({
        "type": match test.kind {
            TestKind::Scenario => "Scenario",
            TestKind::Outline => "ScenarioOutline",
        },
        "tags": encode_tags(&test.tags),
        "location": location(test.line),
        "keyword": test.keyword,
        "name": test.name,
        "description": test.description,
        "steps": test.steps.iter().map(encode_step).collect::<Vec<_>>(),
    });
    if test.kind == TestKind::Outline {
        value["examples"] = test.examples.iter().map(encode_examples).collect();
    }
    value
}

fn encode_examples(examples: &ExamplesRecord) -> Value {
    let (header, body): (Value, Vec<Value>) = match examples.rows.split_first() {
        Some((header, body)) => (encode_row(header), body.iter().map(encode_row).collect()),
        None => (Value::Null, Vec::new()),
    };
    json!({
        "type": "Examples",
        "tags": encode_tags(&examples.tags),
        "location": location(examples.line),
        "keyword": examples.keyword,
        "name": examples.name,
        "description": examples.description,
        "tableHeader": header,
        "tableBody": body,
    })
}

fn encode_step(step: &StepRecord) -> Value {
    let mut value = json!({
        "type": "Step",
        "location": location(step.line),
        "keyword": format!("{} ", step.keyword),
        "text": step.text,
    });
    match &step.argument {
        Some(ArgumentRecord::Table(table)) => {
            value["argument"] = json!({
                "type": "DataTable",
                "location": location(table.line),
                "rows": table.rows.iter().map(encode_row).collect::<Vec<_>>(),
            })
        }
        Some(ArgumentRecord::DocString(doc)) => {
            value["argument"] = json!({
                "type": "DocString",
                "location": location(doc.line),
                "contentType": doc.content_type,
                "content": doc.content,
            })
        }
        None => {}
    }
    value
}

fn encode_row(row: &RowRecord) -> Value {
    json!({
        "type": "TableRow",
        "location": location(row.line),
        "cells": row
            .cells
            .iter()
            .map(|cell| json!({
                "type": "TableCell",
                "location": location(cell.line),
                "value": cell.value,
            }))
            .collect::<Vec<_>>(),
    })
}

pub fn decode(data: &Value, file_name: &str) -> Result<DocumentRecord, ParseError> {
    let decoder = Decoder::new(SchemaVersion::Ast, file_name);
    let map = decoder.object(data, "document")?;

    let comments = decoder
        .array(map, "comments")?
        .iter()
        .map(|comment| {
            let comment_map = decoder.object(comment, "comment")?;
            Ok(CommentRecord {
                text: decoder.string(comment_map, "text")?,
                line: decoder.location(comment_map)?,
                raw: comment.clone(),
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    let feature = match map.get("feature") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(decode_feature(&decoder, raw)?),
    };

    Ok(DocumentRecord {
        feature,
        comments,
        raw: data.clone(),
    })
}

fn decode_feature(decoder: &Decoder, raw: &Value) -> Result<FeatureRecord, ParseError> {
    let map = decoder.object(raw, "feature")?;
    let mut feature = FeatureRecord {
        keyword: decoder.string(map, "keyword")?,
        name: decoder.string(map, "name")?,
        description: decoder.string(map, "description")?,
        tags: decode_tags(decoder, map)?,
        line: decoder.location(map)?,
        raw: raw.clone(),
        ..FeatureRecord::default()
    };

    for child in decoder.array(map, "children")? {
        let child_map = decoder.object(child, "feature child")?;
        let kind = match decoder.string(child_map, "type")?.as_str() {
            "Background" => {
                feature.background = Some(BackgroundRecord {
                    keyword: decoder.string(child_map, "keyword")?,
                    name: decoder.string(child_map, "name")?,
                    description: decoder.string(child_map, "description")?,
                    steps: decode_steps(decoder, child_map)?,
                    line: decoder.location(child_map)?,
                    raw: child.clone(),
                });
                continue;
            }
            "Scenario" => TestKind::Scenario,
            "ScenarioOutline" => TestKind::Outline,
            other => {
                tracing::warn!(node_type = other, "skipping unknown feature child");
                continue;
            }
        };

        let examples = decoder
            .array(child_map, "examples")?
            .iter()
            .map(|examples| decode_examples(decoder, examples))
            .collect::<Result<Vec<_>, _>>()?;
        feature.tests.push(TestRecord {
            kind,
            keyword: decoder.string(child_map, "keyword")?,
            name: decoder.string(child_map, "name")?,
            description: decoder.string(child_map, "description")?,
            tags: decode_tags(decoder, child_map)?,
            steps: decode_steps(decoder, child_map)?,
            examples,
            line: decoder.location(child_map)?,
            raw: child.clone(),
        });
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
                line: decoder.location(tag_map)?,
                raw: tag.clone(),
            })
        })
        .collect()
}

fn decode_examples(decoder: &Decoder, raw: &Value) -> Result<ExamplesRecord, ParseError> {
    let map = decoder.object(raw, "examples")?;
    let mut rows = Vec::new();
    if let Some(header) = map.get("tableHeader").filter(|header| !header.is_null()) {
        rows.push(decode_row(decoder, header)?);
    }
    for row in decoder.array(map, "tableBody")? {
        rows.push(decode_row(decoder, row)?);
    }

    Ok(ExamplesRecord {
        keyword: decoder.string(map, "keyword")?,
        name: decoder.string(map, "name")?,
        description: decoder.string(map, "description")?,
        tags: decode_tags(decoder, map)?,
        rows,
        line: decoder.location(map)?,
        raw: raw.clone(),
    })
}

fn decode_steps(decoder: &Decoder, map: &Map<String, Value>) -> Result<Vec<StepRecord>, ParseError> {
    decoder
        .array(map, "steps")?
        .iter()
        .map(|step| {
            let step_map = decoder.object(step, "step")?;
            let argument = match decoder.child(step_map, "argument")? {
                None => None,
                Some(argument) => Some(decode_argument(decoder, step_map, argument)?),
            };
            Ok(StepRecord {
                keyword: decoder.string(step_map, "keyword")?.trim().to_string(),
                text: decoder.string(step_map, "text")?,
                argument,
                line: decoder.location(step_map)?,
                raw: step.clone(),
            })
        })
        .collect()
}

fn decode_argument(
    decoder: &Decoder,
    step_map: &Map<String, Value>,
    argument: &Map<String, Value>,
) -> Result<ArgumentRecord, ParseError> {
    let raw = step_map.get("argument").cloned().unwrap_or_default();
    match decoder.string(argument, "type")?.as_str() {
        "DataTable" => Ok(ArgumentRecord::Table(TableRecord {
            rows: decoder
                .array(argument, "rows")?
                .iter()
                .map(|row| decode_row(decoder, row))
                .collect::<Result<Vec<_>, _>>()?,
            line: decoder.location(argument)?,
            raw,
        })),
        "DocString" => Ok(ArgumentRecord::DocString(DocStringRecord {
            content_type: decoder.string(argument, "contentType")?,
            content: decoder.string(argument, "content")?,
            line: decoder.location(argument)?,
            raw,
        })),
        other => Err(decoder.malformed(format!("unknown step argument type '{other}'"))),
    }
}

fn decode_row(decoder: &Decoder, raw: &Value) -> Result<RowRecord, ParseError> {
    let map = decoder.object(raw, "row")?;
    let cells = decoder
        .array(map, "cells")?
        .iter()
        .map(|cell| {
            let cell_map = decoder.object(cell, "cell")?;
            Ok(CellRecord {
                value: decoder.string(cell_map, "value")?,
                line: decoder.location(cell_map)?,
                raw: cell.clone(),
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(RowRecord {
        cells,
        line: decoder.location(map)?,
        raw: raw.clone(),
    })
}
