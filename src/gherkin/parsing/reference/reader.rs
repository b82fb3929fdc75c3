//! Line-based reader producing document records
//!
//! The reader walks the classified lines once, with a cursor that can be rewound. It knows
//! nothing about schema versions: the records it returns carry `Value::Null` as raw data
//! and are encoded into a versioned tree by the adapter.

use super::dialect::Dialect;
use super::lines::{self, Construct, LineKind};
use crate::gherkin::ast::error::ParseError;
use crate::gherkin::parsing::records::{
    ArgumentRecord, BackgroundRecord, CellRecord, CommentRecord, DocStringRecord, DocumentRecord,
    ExamplesRecord, FeatureRecord, RowRecord, StepRecord, TableRecord, TagRecord, TestKind,
    TestRecord,
};

pub(crate) struct Reader<'s> {
    lines: Vec<&'s str>,
    pos: usize,
    dialect: &'static Dialect,
    file_name: &'s str,
    comments: Vec<CommentRecord>,
}

impl<'s> Reader<'s> {
    pub(crate) fn new(source: &'s str, dialect: &'static Dialect, file_name: &'s str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
            dialect,
            file_name,
            comments: Vec::new(),
        }
    }

    pub(crate) fn read_document(mut self) -> Result<DocumentRecord, ParseError> {
        self.skip_trivia(true);
        let tags = self.read_tags()?;
        self.skip_trivia(false);

        let feature = match self.peek() {
            None if tags.is_empty() => None,
            None => return Err(self.dangling_tags(&tags)),
            Some(LineKind::Title {
                construct: Construct::Feature,
                keyword,
                name,
            }) => Some(self.read_feature(tags, keyword, name)?),
            Some(_) => return Err(self.unexpected()),
        };

        self.skip_trivia(false);
        if self.peek().is_some() {
            return Err(self.unexpected());
        }

        Ok(DocumentRecord {
            feature,
            comments: self.comments,
            raw: serde_json::Value::Null,
        })
    }

    fn read_feature(
        &mut self,
        tags: Vec<TagRecord>,
        keyword: &str,
        name: &str,
    ) -> Result<FeatureRecord, ParseError> {
        let mut feature = FeatureRecord {
            keyword: keyword.to_string(),
            name: name.to_string(),
            tags,
            line: self.line(),
            ..FeatureRecord::default()
        };
        self.pos += 1;
        feature.description = self.read_description();

        loop {
            self.skip_trivia(false);
            let tags = self.read_tags()?;
            self.skip_trivia(false);

            match self.peek() {
                None if tags.is_empty() => break,
                None => return Err(self.dangling_tags(&tags)),
                Some(LineKind::Title {
                    construct: Construct::Background,
                    keyword,
                    name,
                }) => {
                    if !tags.is_empty() {
                        return Err(self.error("tags are not allowed on a background"));
                    }
                    if feature.background.is_some() || !feature.tests.is_empty() {
                        return Err(self.unexpected());
                    }
                    feature.background = Some(self.read_background(keyword, name)?);
                }
                Some(LineKind::Title {
                    construct: construct @ (Construct::Scenario | Construct::Outline),
                    keyword,
                    name,
                }) => {
                    let test = self.read_test(tags, construct, keyword, name)?;
                    feature.tests.push(test);
                }
                Some(LineKind::Tags(_)) => return Err(self.dangling_tags(&tags)),
                Some(_) => return Err(self.unexpected()),
            }
        }
        Ok(feature)
    }

    fn read_background(&mut self, keyword: &str, name: &str) -> Result<BackgroundRecord, ParseError> {
        let line = self.line();
        self.pos += 1;
        let description = self.read_description();
        let steps = self.read_steps()?;
        Ok(BackgroundRecord {
            keyword: keyword.to_string(),
            name: name.to_string(),
            description,
            steps,
            line,
            raw: serde_json::Value::Null,
        })
    }

    fn read_test(
        &mut self,
        tags: Vec<TagRecord>,
        construct: Construct,
        keyword: &str,
        name: &str,
    ) -> Result<TestRecord, ParseError> {
        let line = self.line();
        self.pos += 1;
        let description = self.read_description();
        let steps = self.read_steps()?;

        let mut examples = Vec::new();
        loop {
            let (saved_pos, saved_comments) = (self.pos, self.comments.len());
            self.skip_trivia(false);
            let example_tags = self.read_tags()?;
            self.skip_trivia(false);

            match self.peek() {
                Some(LineKind::Title {
                    construct: Construct::Examples,
                    keyword,
                    name,
                }) => examples.push(self.read_examples(example_tags, keyword, name)?),
                _ => {
                    self.pos = saved_pos;
                    self.comments.truncate(saved_comments);
                    break;
                }
            }
        }

        let kind = if construct == Construct::Outline || !examples.is_empty() {
            TestKind::Outline
        } else {
            TestKind::Scenario
        };

        Ok(TestRecord {
            kind,
            keyword: keyword.to_string(),
            name: name.to_string(),
            description,
            tags,
            steps,
            examples,
            line,
            raw: serde_json::Value::Null,
        })
    }

    fn read_examples(
        &mut self,
        tags: Vec<TagRecord>,
        keyword: &str,
        name: &str,
    ) -> Result<ExamplesRecord, ParseError> {
        let line = self.line();
        self.pos += 1;
        let description = self.read_description();
        let rows = self.read_rows()?;
        Ok(ExamplesRecord {
            keyword: keyword.to_string(),
            name: name.to_string(),
            description,
            tags,
            rows,
            line,
            raw: serde_json::Value::Null,
        })
    }

    fn read_steps(&mut self) -> Result<Vec<StepRecord>, ParseError> {
        let mut steps = Vec::new();
        loop {
            self.skip_trivia(false);
            let Some(LineKind::Step { keyword, text }) = self.peek() else {
                break;
            };
            let line = self.line();
            self.pos += 1;

            self.skip_trivia(false);
            let argument = match self.peek() {
                Some(LineKind::Row(_)) => {
                    let table_line = self.line();
                    Some(ArgumentRecord::Table(TableRecord {
                        rows: self.read_rows()?,
                        line: table_line,
                        raw: serde_json::Value::Null,
                    }))
                }
                Some(LineKind::DocStringSeparator {
                    delimiter,
                    content_type,
                }) => Some(ArgumentRecord::DocString(
                    self.read_doc_string(delimiter, content_type)?,
                )),
                _ => None,
            };

            steps.push(StepRecord {
                keyword: keyword.to_string(),
                text: text.to_string(),
                argument,
                line,
                raw: serde_json::Value::Null,
            });
        }
        Ok(steps)
    }

    /// Consecutive table rows, trivia between them allowed
    fn read_rows(&mut self) -> Result<Vec<RowRecord>, ParseError> {
        let mut rows: Vec<RowRecord> = Vec::new();
        loop {
            let (saved_pos, saved_comments) = (self.pos, self.comments.len());
            self.skip_trivia(false);
            let Some(LineKind::Row(values)) = self.peek() else {
                self.pos = saved_pos;
                self.comments.truncate(saved_comments);
                break;
            };
            let line = self.line();
            if let Some(first) = rows.first() {
                if first.cells.len() != values.len() {
                    return Err(self.error("inconsistent cell count within the table"));
                }
            }
            rows.push(RowRecord {
                cells: values
                    .into_iter()
                    .map(|value| CellRecord {
                        value,
                        line,
                        raw: serde_json::Value::Null,
                    })
                    .collect(),
                line,
                raw: serde_json::Value::Null,
            });
            self.pos += 1;
        }
        Ok(rows)
    }

    fn read_doc_string(
        &mut self,
        delimiter: &'static str,
        content_type: &str,
    ) -> Result<DocStringRecord, ParseError> {
        let line = self.line();
        let opening = self.lines[self.pos];
        let indent = opening.len() - opening.trim_start().len();
        let content_type = content_type.to_string();
        self.pos += 1;

        let mut content = Vec::new();
        while let Some(&raw) = self.lines.get(self.pos) {
            self.pos += 1;
            if raw.trim() == delimiter {
                return Ok(DocStringRecord {
                    content_type,
                    content: content.join("\n"),
                    line,
                    raw: serde_json::Value::Null,
                });
            }
            content.push(lines::unescape_doc_string_line(
                strip_indent(raw, indent),
                delimiter,
            ));
        }
        Err(ParseError::Syntax {
            file_name: self.file_name.to_string(),
            line,
            message: "unterminated doc string".to_string(),
        })
    }

    /// Free-form lines up to the next construct, blank edges removed
    fn read_description(&mut self) -> String {
        let mut collected: Vec<&str> = Vec::new();
        while let Some(kind) = self.peek() {
            match kind {
                LineKind::Empty | LineKind::Other(_) => collected.push(self.lines[self.pos]),
                LineKind::Comment(_) | LineKind::Language(_) => {
                    let text = self.lines[self.pos].trim();
                    self.record_comment(text);
                }
                _ => break,
            }
            self.pos += 1;
        }

        while collected.first().is_some_and(|line| line.trim().is_empty()) {
            collected.remove(0);
        }
        while collected.last().is_some_and(|line| line.trim().is_empty()) {
            collected.pop();
        }
        collected.join("\n")
    }

    fn read_tags(&mut self) -> Result<Vec<TagRecord>, ParseError> {
        let mut tags = Vec::new();
        loop {
            let (saved_pos, saved_comments) = (self.pos, self.comments.len());
            self.skip_trivia(false);
            let Some(LineKind::Tags(tokens)) = self.peek() else {
                self.pos = saved_pos;
                self.comments.truncate(saved_comments);
                break;
            };
            let line = self.line();
            for token in tokens {
                if token.len() < 2 || token[1..].contains('@') {
                    return Err(self.error(&format!("invalid tag '{token}'")));
                }
                tags.push(TagRecord {
                    name: token.to_string(),
                    line,
                    raw: serde_json::Value::Null,
                });
            }
            self.pos += 1;
        }
        Ok(tags)
    }

    /// Skip blank lines and comments, recording the comments
    ///
    /// A `# language:` line counts as a comment unless it is the document header.
    fn skip_trivia(&mut self, header: bool) {
        while let Some(kind) = self.peek() {
            match kind {
                LineKind::Empty => {}
                LineKind::Language(_) if header => {}
                LineKind::Language(_) => {
                    let text = self.lines[self.pos].trim();
                    self.record_comment(text);
                }
                LineKind::Comment(text) => self.record_comment(text),
                _ => break,
            }
            self.pos += 1;
        }
    }

    fn record_comment(&mut self, text: &str) {
        self.comments.push(CommentRecord {
            text: text.to_string(),
            line: self.line(),
            raw: serde_json::Value::Null,
        });
    }

    fn peek(&self) -> Option<LineKind<'s>> {
        self.lines
            .get(self.pos)
            .map(|line| lines::classify(line, self.dialect))
    }

    fn line(&self) -> usize {
        self.pos + 1
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError::Syntax {
            file_name: self.file_name.to_string(),
            line: self.line(),
            message: message.to_string(),
        }
    }

    fn unexpected(&self) -> ParseError {
        let text = self.lines.get(self.pos).map(|line| line.trim()).unwrap_or("");
        self.error(&format!("unexpected line '{text}'"))
    }

    fn dangling_tags(&self, tags: &[TagRecord]) -> ParseError {
        ParseError::Syntax {
            file_name: self.file_name.to_string(),
            line: tags.last().map(|tag| tag.line).unwrap_or_else(|| self.line()),
            message: "tags must be followed by a feature, scenario, outline or examples"
                .to_string(),
        }
    }
}

/// Remove up to `indent` leading whitespace characters
fn strip_indent(line: &str, indent: usize) -> &str {
    let mut rest = line;
    for _ in 0..indent {
        match rest.strip_prefix(|c: char| c.is_whitespace()) {
            Some(stripped) => rest = stripped,
            None => break,
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(source: &str) -> Result<DocumentRecord, ParseError> {
        Reader::new(source, Dialect::find("en").unwrap(), "test.feature").read_document()
    }

    #[test]
    fn test_reads_a_full_feature() {
        let source = "# language: en\n@f1\nFeature: Eating\n  Some text\n\n  Background:\n    Given a pantry\n\n  @s1 @s2\n  Scenario: one\n    When I eat\n      | a | b |\n      | c | d |\n\n  Scenario Outline: two\n    Then <x>\n    # inline\n    Examples:\n      | x |\n      | 1 |\n";
        let document = read(source).unwrap();
        let feature = document.feature.unwrap();

        assert_eq!(feature.line, 3);
        assert_eq!(feature.tags[0].name, "@f1");
        assert_eq!(feature.description, "  Some text");
        assert_eq!(feature.background.as_ref().unwrap().steps.len(), 1);
        assert_eq!(feature.tests.len(), 2);
        assert_eq!(feature.tests[0].kind, TestKind::Scenario);
        assert_eq!(feature.tests[0].tags.len(), 2);
        assert_eq!(feature.tests[1].kind, TestKind::Outline);
        assert_eq!(feature.tests[1].examples[0].rows.len(), 2);
        assert_eq!(document.comments.len(), 1);
        assert_eq!(document.comments[0].text, "# inline");
        assert_eq!(document.comments[0].line, 17);
    }

    #[test]
    fn test_doc_string_strips_delimiter_indent() {
        let source = "Feature:\n  Scenario:\n    * a step\n      ```md\n      # not a comment\n        nested\n      \\`\\`\\`\n      ```\n";
        let feature = read(source).unwrap().feature.unwrap();
        let step = &feature.tests[0].steps[0];
        match step.argument.as_ref().unwrap() {
            ArgumentRecord::DocString(doc) => {
                assert_eq!(doc.content_type, "md");
                assert_eq!(doc.content, "# not a comment\n  nested\n```");
                assert_eq!(doc.line, 4);
            }
            other => panic!("expected a doc string, got {other:?}"),
        }
    }

    #[test]
    fn test_scenario_with_examples_is_an_outline() {
        let source = "Feature:\n  Scenario: s\n    * <a>\n    Examples:\n      | a |\n";
        let feature = read(source).unwrap().feature.unwrap();
        assert_eq!(feature.tests[0].kind, TestKind::Outline);
        assert_eq!(feature.tests[0].keyword, "Scenario");
    }

    #[test]
    fn test_syntax_errors() {
        let cases = [
            ("Feature:\n  Scenario:\n  @dangling", 3),
            ("Feature:\n  Scenario:\n    * s\n      | a |\n      | b | c |", 5),
            ("Feature:\n  Scenario:\n    * s\n      \"\"\"\n      open", 4),
            ("Feature:\n  @tag\n  Background:", 3),
            ("Feature:\n  Scenario:\n  Background:", 3),
            ("bogus", 1),
        ];
        for (source, expected_line) in cases {
            match read(source) {
                Err(ParseError::Syntax { file_name, line, .. }) => {
                    assert_eq!(file_name, "test.feature");
                    assert_eq!(line, expected_line, "for {source:?}");
                }
                other => panic!("expected a syntax error for {source:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_document_has_no_feature() {
        let document = read("\n# just a note\n").unwrap();
        assert!(document.feature.is_none());
        assert_eq!(document.comments.len(), 1);
    }
}
