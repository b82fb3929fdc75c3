//! Description normalization
//!
//!     Parsers hand back descriptions with the indentation they had in the source. Before a
//!     description is stored it is normalized:
//!
//!         1. Fully blank leading and trailing lines are dropped. Interior blank lines stay.
//!         2. The smallest leading-whitespace count among non-blank lines is the common indent.
//!         3. That many whitespace characters are stripped from every line. Blank lines become
//!            empty strings. Indentation beyond the common indent and trailing spaces are kept.
//!         4. Lines are joined with `\n`.
//!
//!     Serialization writes the normalized text back at the structural indent of the owning
//!     node and never re-indents it otherwise, so the normalization is stable across
//!     round trips.

/// Normalize a raw description block
pub fn trim_description(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();

    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };
    let lines = &lines[first..=last];

    let indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if is_blank(line) {
                ""
            } else {
                strip_chars(line, indent)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((offset, _)) => &line[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_indent_is_removed() {
        let raw = ["  ", "   A", "", "  B  "].join("\n");
        let trimmed = trim_description(&raw);

        assert_eq!(
            trimmed.split('\n').collect::<Vec<_>>(),
            vec![" A", "", "B  "]
        );
    }

    #[test]
    fn test_blank_interior_lines_become_empty() {
        let raw = "    first\n      \n    second";
        assert_eq!(trim_description(raw), "first\n\nsecond");
    }

    #[test]
    fn test_unindented_line_keeps_others_verbatim() {
        let raw = [
            "       description line 1",
            "",
            "  description line 2",
            "    description line 3",
        ]
        .join("\n");

        assert_eq!(
            trim_description(&raw).split('\n').collect::<Vec<_>>(),
            vec![
                "     description line 1",
                "",
                "description line 2",
                "  description line 3",
            ]
        );
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(trim_description(""), "");
        assert_eq!(trim_description("   \n\n  "), "");
    }

    #[test]
    fn test_trimming_is_idempotent() {
        let once = trim_description("\n\n   alpha\n     beta  \n\n");
        assert_eq!(trim_description(&once), once);
    }
}
