use super::formatting_rules::FormattingRules;
use crate::gherkin::ast::{
    AstNode, Background, Cell, Comment, Directory, DocString, Example, Feature, FeatureFile,
    Outline, Row, Scenario, Step, Table, Tag, Visitor,
};
use unicode_width::UnicodeWidthStr;

const DOC_STRING_DELIMITER: &str = "\"\"\"";

/// Escape a cell value for a table line
pub fn escape_cell(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '|' => escaped.push_str("\\|"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape delimiter sequences inside doc string content
pub fn escape_doc_string_line(line: &str) -> String {
    line.replace(DOC_STRING_DELIMITER, "\\\"\\\"\\\"")
}

pub struct GherkinSerializer {
    rules: FormattingRules,
    output: String,
    indent_level: usize,
    consecutive_newlines: usize,
    /// Column widths of the enclosing tables, innermost last
    width_stack: Vec<Vec<usize>>,
    /// Rows being written, so their cells are not written again on their own
    row_depth: usize,
    /// Inside a feature file or directory, which only write their path
    suppressed: usize,
}

impl GherkinSerializer {
    pub fn new(rules: FormattingRules) -> Self {
        Self {
            rules,
            output: String::new(),
            indent_level: 0,
            consecutive_newlines: 2, // Start as if we have blank lines
            width_stack: Vec::new(),
            row_depth: 0,
            suppressed: 0,
        }
    }

    pub fn serialize(mut self, node: &dyn AstNode) -> String {
        node.accept(&mut self);
        self.output.trim_end_matches('\n').to_string()
    }

    fn indent(&self) -> String {
        self.rules.indent_string.repeat(self.indent_level)
    }

    fn write_line(&mut self, text: &str) {
        if self.suppressed > 0 {
            return;
        }
        if text.is_empty() {
            self.output.push('\n');
            self.consecutive_newlines += 1;
            return;
        }
        self.output.push_str(&self.indent());
        self.output.push_str(text);
        self.output.push('\n');
        self.consecutive_newlines = 1;
    }

    fn ensure_blank_lines(&mut self, count: usize) {
        if self.suppressed > 0 {
            return;
        }
        let target_newlines = count + 1;
        while self.consecutive_newlines < target_newlines {
            self.output.push('\n');
            self.consecutive_newlines += 1;
        }
    }

    fn write_tags(&mut self, tags: &[Tag]) {
        if !tags.is_empty() {
            let line = tags
                .iter()
                .map(|tag| tag.name.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            self.write_line(&line);
        }
    }

    /// Title line and description of a section, then one level deeper for its body
    fn open_section(&mut self, keyword: &str, name: &str, description: &str) {
        if name.is_empty() {
            self.write_line(&format!("{keyword}:"));
        } else {
            self.write_line(&format!("{keyword}: {name}"));
        }
        if !description.is_empty() {
            self.ensure_blank_lines(1);
            for line in description.split('\n') {
                self.write_line(line);
            }
            self.ensure_blank_lines(1);
        }
        self.indent_level += 1;
    }

    fn close_section(&mut self) {
        self.indent_level -= 1;
    }

    fn open_table(&mut self, rows: &[Row]) {
        let mut widths: Vec<usize> = Vec::new();
        for row in rows {
            for (column, cell) in row.cells.iter().enumerate() {
                let width = escape_cell(&cell.value).width();
                match widths.get_mut(column) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        self.width_stack.push(widths);
    }

    fn row_line(&self, row: &Row) -> String {
        let widths = self.width_stack.last();
        let cells: Vec<String> = row
            .cells
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let escaped = escape_cell(&cell.value);
                let width = widths
                    .and_then(|widths| widths.get(column))
                    .copied()
                    .unwrap_or(0);
                let padding = width.saturating_sub(escaped.width());
                format!(" {escaped}{} |", " ".repeat(padding))
            })
            .collect();
        format!("|{}", cells.concat())
    }
}

impl Default for GherkinSerializer {
    fn default() -> Self {
        Self::new(FormattingRules::default())
    }
}

impl Visitor for GherkinSerializer {
    fn visit_directory(&mut self, directory: &Directory) {
        self.write_line(&directory.path.display().to_string());
        self.suppressed += 1;
    }

    fn leave_directory(&mut self, _directory: &Directory) {
        self.suppressed -= 1;
    }

    fn visit_feature_file(&mut self, feature_file: &FeatureFile) {
        self.write_line(&feature_file.path.display().to_string());
        self.suppressed += 1;
    }

    fn leave_feature_file(&mut self, _feature_file: &FeatureFile) {
        self.suppressed -= 1;
    }

    fn visit_feature(&mut self, feature: &Feature) {
        self.write_tags(&feature.tags);
        self.open_section(&feature.keyword, &feature.name, &feature.description);
    }

    fn leave_feature(&mut self, _feature: &Feature) {
        self.close_section();
    }

    fn visit_background(&mut self, background: &Background) {
        self.ensure_blank_lines(1);
        self.open_section(&background.keyword, &background.name, &background.description);
    }

    fn leave_background(&mut self, _background: &Background) {
        self.close_section();
    }

    fn visit_scenario(&mut self, scenario: &Scenario) {
        self.ensure_blank_lines(1);
        self.write_tags(&scenario.tags);
        self.open_section(&scenario.keyword, &scenario.name, &scenario.description);
    }

    fn leave_scenario(&mut self, _scenario: &Scenario) {
        self.close_section();
    }

    fn visit_outline(&mut self, outline: &Outline) {
        self.ensure_blank_lines(1);
        self.write_tags(&outline.tags);
        self.open_section(&outline.keyword, &outline.name, &outline.description);
    }

    fn leave_outline(&mut self, _outline: &Outline) {
        self.close_section();
    }

    fn visit_example(&mut self, example: &Example) {
        self.ensure_blank_lines(1);
        self.write_tags(&example.tags);
        self.open_section(&example.keyword, &example.name, &example.description);
        self.open_table(&example.rows);
    }

    fn leave_example(&mut self, _example: &Example) {
        self.width_stack.pop();
        self.close_section();
    }

    fn visit_step(&mut self, step: &Step) {
        if step.text.is_empty() {
            self.write_line(&step.keyword);
        } else {
            self.write_line(&format!("{} {}", step.keyword, step.text));
        }
        self.indent_level += 1;
    }

    fn leave_step(&mut self, _step: &Step) {
        self.indent_level -= 1;
    }

    fn visit_table(&mut self, table: &Table) {
        self.open_table(&table.rows);
    }

    fn leave_table(&mut self, _table: &Table) {
        self.width_stack.pop();
    }

    fn visit_doc_string(&mut self, doc_string: &DocString) {
        self.write_line(&format!("{DOC_STRING_DELIMITER}{}", doc_string.content_type));
        if !doc_string.content.is_empty() {
            for line in doc_string.content.split('\n') {
                self.write_line(&escape_doc_string_line(line));
            }
        }
        self.write_line(DOC_STRING_DELIMITER);
    }

    fn visit_row(&mut self, row: &Row) {
        let line = self.row_line(row);
        self.write_line(&line);
        self.row_depth += 1;
    }

    fn leave_row(&mut self, _row: &Row) {
        self.row_depth -= 1;
    }

    fn visit_cell(&mut self, cell: &Cell) {
        if self.row_depth == 0 {
            self.write_line(&escape_cell(&cell.value));
        }
    }

    fn visit_tag(&mut self, tag: &Tag) {
        self.write_line(&tag.name);
    }

    fn visit_comment(&mut self, comment: &Comment) {
        self.write_line(&comment.text);
    }
}
