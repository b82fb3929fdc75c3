//! Messages schema: a `gherkinDocument` envelope
//!
//! ```text
//! { gherkinDocument: { uri,
//!     feature: { location, tags, keyword, name, description,
//!                children: [{ background: {...} } | { scenario: {..., examples} }] },
//!     comments: [{ location, text }] } }
//! ```
//!
//! There is no separate outline node: a scenario with examples, or one whose keyword is an
//! outline keyword of a known dialect, decodes as an outline. Steps carry `dataTable` or
//! `docString`, and most nodes carry an `id`.

use super::super::records::{
    ArgumentRecord, BackgroundRecord, CellRecord, CommentRecord, DocStringRecord, DocumentRecord,
    ExamplesRecord, FeatureRecord, RowRecord, StepRecord, TableRecord, TagRecord, TestKind,
    TestRecord,
};
use super::{is_outline_keyword, location, Decoder, SchemaVersion};
use crate::gherkin::ast::error::ParseError;
use serde_json::{json, Map, Value};

/// Hands out node ids in document order
#[derive(Default)]
struct Ids(usize);

impl Ids {
    fn next(&mut self) -> String {
        let id = self.0.to_string();
        self.0 += 1;
        id
    }
}

pub fn encode(document: &DocumentRecord, file_name: &str) -> Value {
    let mut ids = Ids::default();
    let mut inner = json!({
        "uri": file_name,
        "comments": document
            .comments
            .iter()
            .map(|comment| json!({ "location": location(comment.line), "text": comment.text }))
            .collect::<Vec<_>>(),
    });
    if let Some(feature) = &document.feature {
        inner["feature"] = encode_feature(feature, &mut ids);
    }
    json!({ "gherkinDocument": inner })
}

fn encode_feature(feature: &FeatureRecord, ids: &mut Ids) -> Value {
    let mut children = Vec::new();
    if let Some(background) = &feature.background {
        children.push(json!({
            "background": {
                "id": ids.next(),
                "location": location(background.line),
                "keyword": background.keyword,
                "name": background.name,
                "description": background.description,
                "steps": encode_steps(&background.steps, ids),
            }
        }));
    }
    for test in &feature.tests {
        children.push(json!({ "scenario": encode_test(test, ids) }));
    }

    json!({
        "location": location(feature.line),
        "tags": encode_tags(&feature.tags, ids),
        "keyword": feature.keyword,
        "name": feature.name,
        "description": feature.description,
        "children": children,
    })
}

fn encode_tags(tags: &[TagRecord], ids: &mut Ids) -> Vec<Value> {
    tags.iter()
        .map(|tag| json!({ "location": location(tag.line), "name": tag.name, "id": ids.next() }))
        .collect()
}

fn encode_test(test: &TestRecord, ids: &mut Ids) -> Value {
    let steps = encode_steps(&test.steps, ids);
    let examples: Vec<Value> = test
        .examples
        .iter()
        .map(|examples| {
            let (header, body): (Value, Vec<Value>) = match examples.rows.split_first() {
                Some((header, body)) => (
                    encode_row(header, ids),
                    body.iter().map(|row| encode_row(row, ids)).collect(),
                ),
                None => (Value::Null, Vec::new()),
            };
            json!({
                "id": ids.next(),
                "location": location(examples.line),
                "tags": encode_tags(&examples.tags, ids),
                "keyword": examples.keyword,
                "name": examples.name,
                "description": examples.description,
                "tableHeader": header,
                "tableBody": body,
            })
        })
        .collect();

    json!({
        "id": ids.next(),
        "location": location(test.line),
        "tags": encode_tags(&test.tags, ids),
        "keyword": test.keyword,
        "name": test.name,
        "description": test.description,
        "steps": steps,
        "examples": examples,
    })
}

fn encode_steps(steps: &[StepRecord], ids: &mut Ids) -> Vec<Value> {
    steps
        .iter()
        .map(|step| {
            let mut value = json!({
                "id": ids.next(),
                "location": location(step.line),
                "keyword": format!("{} ", step.keyword),
                "text": step.text,
            });
            match &step.argument {
                Some(ArgumentRecord::Table(table)) => {
                    value["dataTable"] = json!({
                        "location": location(table.line),
                        "rows": table.rows.iter().map(|row| encode_row(row, ids)).collect::<Vec<_>>(),
                    })
                }
                Some(ArgumentRecord::DocString(doc)) => {
                    value["docString"] = json!({
                        "location": location(doc.line),
                        "mediaType": doc.content_type,
                        "content": doc.content,
                    })
                }
                None => {}
            }
            value
        })
        .collect()
}

fn encode_row(row: &RowRecord, ids: &mut Ids) -> Value {
    json!({
        "id": ids.next(),
        "location": location(row.line),
        "cells": row
            .cells
            .iter()
            .map(|cell| json!({ "location": location(cell.line), "value": cell.value }))
            .collect::<Vec<_>>(),
    })
}

pub fn decode(data: &Value, file_name: &str) -> Result<DocumentRecord, ParseError> {
    let decoder = Decoder::new(SchemaVersion::Messages, file_name);
    let envelope = decoder.object(data, "envelope")?;
    let map = decoder
        .child(envelope, "gherkinDocument")?
        .ok_or_else(|| decoder.malformed("missing 'gherkinDocument'"))?;

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
        if let Some(background) = child_map.get("background") {
            let background_map = decoder.object(background, "background")?;
            feature.background = Some(BackgroundRecord {
                keyword: decoder.string(background_map, "keyword")?,
                name: decoder.string(background_map, "name")?,
                description: decoder.string(background_map, "description")?,
                steps: decode_steps(decoder, background_map)?,
                line: decoder.location(background_map)?,
                raw: background.clone(),
            });
        } else if let Some(scenario) = child_map.get("scenario") {
            feature.tests.push(decode_test(decoder, scenario)?);
        } else {
            let keys: Vec<&String> = child_map.keys().collect();
            tracing::warn!(?keys, "skipping unknown feature child");
        }
    }
    Ok(feature)
}

fn decode_test(decoder: &Decoder, raw: &Value) -> Result<TestRecord, ParseError> {
    let map = decoder.object(raw, "scenario")?;
    let keyword = decoder.string(map, "keyword")?;
    let examples = decoder
        .array(map, "examples")?
        .iter()
        .map(|examples| decode_examples(decoder, examples))
        .collect::<Result<Vec<_>, _>>()?;

    let kind = if !examples.is_empty() || is_outline_keyword(&keyword) {
        TestKind::Outline
    } else {
        TestKind::Scenario
    };

    Ok(TestRecord {
        kind,
        keyword,
        name: decoder.string(map, "name")?,
        description: decoder.string(map, "description")?,
        tags: decode_tags(decoder, map)?,
        steps: decode_steps(decoder, map)?,
        examples,
        line: decoder.location(map)?,
        raw: raw.clone(),
    })
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

            let argument = if let Some(table) = decoder.child(step_map, "dataTable")? {
                Some(ArgumentRecord::Table(TableRecord {
                    rows: decoder
                        .array(table, "rows")?
                        .iter()
                        .map(|row| decode_row(decoder, row))
                        .collect::<Result<Vec<_>, _>>()?,
                    line: decoder.location(table)?,
                    raw: step_map.get("dataTable").cloned().unwrap_or_default(),
                }))
            } else if let Some(doc) = decoder.child(step_map, "docString")? {
                Some(ArgumentRecord::DocString(DocStringRecord {
                    content_type: decoder.string(doc, "mediaType")?,
                    content: decoder.string(doc, "content")?,
                    line: decoder.location(doc)?,
                    raw: step_map.get("docString").cloned().unwrap_or_default(),
                }))
            } else {
                None
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
