//! Line classification
//!
//! Every source line outside a doc string is classified on its own, given the dialect's
//! keywords. The reader decides what a line means in context.

use super::dialect::Dialect;
use once_cell::sync::Lazy;
use regex::Regex;

static LANGUAGE_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*language\s*:\s*([A-Za-z0-9_-]+)\s*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Construct {
    Feature,
    Background,
    Scenario,
    Outline,
    Examples,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'s> {
    Empty,
    /// A `# language: xx` header
    Language(&'s str),
    Comment(&'s str),
    Tags(Vec<&'s str>),
    Title {
        construct: Construct,
        keyword: &'static str,
        name: &'s str,
    },
    Step {
        keyword: &'static str,
        text: &'s str,
    },
    Row(Vec<String>),
    DocStringSeparator {
        delimiter: &'static str,
        content_type: &'s str,
    },
    Other(&'s str),
}

/// The dialect named by a `# language:` header line, if the line is one
pub(crate) fn language_header(line: &str) -> Option<&str> {
    LANGUAGE_HEADER
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|code| code.as_str())
}

pub(crate) fn classify<'s>(line: &'s str, dialect: &Dialect) -> LineKind<'s> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Empty;
    }
    if trimmed.starts_with('#') {
        return match language_header(line) {
            Some(code) => LineKind::Language(code),
            None => LineKind::Comment(trimmed),
        };
    }
    if trimmed.starts_with('@') {
        let tokens = trimmed
            .split_whitespace()
            .take_while(|token| !token.starts_with('#'))
            .collect();
        return LineKind::Tags(tokens);
    }
    if trimmed.starts_with('|') {
        return LineKind::Row(split_cells(trimmed));
    }
    for delimiter in ["\"\"\"", "```"] {
        if let Some(rest) = trimmed.strip_prefix(delimiter) {
            return LineKind::DocStringSeparator {
                delimiter,
                content_type: rest.trim(),
            };
        }
    }
    if let Some(title) = title(trimmed, dialect) {
        return title;
    }
    if let Some(step) = step(trimmed, dialect) {
        return step;
    }
    LineKind::Other(line)
}

fn title<'s>(trimmed: &'s str, dialect: &Dialect) -> Option<LineKind<'s>> {
    let constructs = [
        (Construct::Feature, dialect.feature),
        (Construct::Background, dialect.background),
        (Construct::Scenario, dialect.scenario),
        (Construct::Outline, dialect.outline),
        (Construct::Examples, dialect.examples),
    ];
    constructs.iter().find_map(|(construct, keywords)| {
        keywords.iter().find_map(|keyword| {
            trimmed
                .strip_prefix(keyword)
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|name| LineKind::Title {
                    construct: *construct,
                    keyword,
                    name: name.trim(),
                })
        })
    })
}

fn step<'s>(trimmed: &'s str, dialect: &Dialect) -> Option<LineKind<'s>> {
    let mut keywords: Vec<&'static str> = dialect.steps.to_vec();
    keywords.sort_by_key(|keyword| std::cmp::Reverse(keyword.chars().count()));

    keywords.into_iter().find_map(|keyword| {
        let rest = trimmed.strip_prefix(keyword)?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(LineKind::Step {
                keyword,
                text: rest.trim(),
            })
        } else {
            None
        }
    })
}

/// Split a table line into unescaped, trimmed cell values
///
/// Text after the last pipe is ignored. Escapes: `\|` is a pipe, `\\` a backslash and
/// `\n` a newline; any other escaped character is kept as written.
pub(crate) fn split_cells(trimmed: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed.strip_prefix('|').unwrap_or(trimmed).chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push('\\');
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '|' => {
                cells.push(unescape_cell(current.trim()));
                current.clear();
            }
            _ => current.push(c),
        }
    }
    cells
}

fn unescape_cell(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('|') => value.push('|'),
            Some('\\') => value.push('\\'),
            Some('n') => value.push('\n'),
            Some(other) => {
                value.push('\\');
                value.push(other);
            }
            None => value.push('\\'),
        }
    }
    value
}

/// Undo doc string content escaping for the given delimiter
pub(crate) fn unescape_doc_string_line(line: &str, delimiter: &str) -> String {
    let escaped: String = delimiter.chars().flat_map(|c| ['\\', c]).collect();
    line.replace(&escaped, delimiter)
}
