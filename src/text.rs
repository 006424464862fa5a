//! Text normalization and comparison shared by all content assertions.
//!
//! Two rules are used:
//! - [`compare_text`] compares a file's content against an *expected literal*, usually
//!   written inline in a test. The literal has its common indentation stripped
//!   (see [`trim_indent`]) and the file content has its line separators converted to `\n`.
//! - [`compare_text_with_file_content`] compares an in-memory string against a file
//!   (e.g. a snapshot). Neither side is an indented literal, so only line separators
//!   are converted, on both sides.

use std::borrow::Cow;

use difference::{Changeset, Difference};



/// The outcome of comparing two texts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextComparison {
    /// The texts are equal after normalization.
    Matches,

    /// The texts differ after normalization.
    Mismatch {
        /// Expected text, normalized.
        expected: String,

        /// Actual text, normalized.
        actual: String,
    },
}

impl TextComparison {
    /// Returns `true` if the texts matched.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matches)
    }
}


/// Converts all `\r\n` and lone `\r` line separators into `\n`.
///
/// Returns the borrowed input if it contains no `\r`.
pub fn convert_line_separators(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut converted = String::with_capacity(text.len());
    let mut characters = text.chars().peekable();

    while let Some(character) = characters.next() {
        if character == '\r' {
            if characters.peek() == Some(&'\n') {
                characters.next();
            }

            converted.push('\n');
        } else {
            converted.push(character);
        }
    }

    Cow::Owned(converted)
}


/// Removes the common leading indentation from every line of `text`.
///
/// Lines may be separated by `\n`, `\r\n` or `\r`; the result always uses `\n`.
/// The minimal indentation is computed over lines that are not blank.
/// If the first or the last line is blank, it is removed. A blank line that
/// is shorter than the common indentation becomes empty.
///
/// ```
/// # use fs_assertions::text::trim_indent;
/// assert_eq!(
///     trim_indent("
///         fn main() {
///             println!();
///         }
///     "),
///     "fn main() {\n    println!();\n}"
/// );
/// ```
pub fn trim_indent(text: &str) -> String {
    let text = convert_line_separators(text);
    let lines: Vec<&str> = text.split('\n').collect();

    let minimum_indent = lines
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    let last_line_index = lines.len() - 1;

    lines
        .iter()
        .enumerate()
        .filter(|(line_index, line)| {
            !((*line_index == 0 || *line_index == last_line_index) && is_blank(line))
        })
        .map(|(_, line)| line.chars().skip(minimum_indent).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|character| character.is_whitespace())
        .count()
}


/// Compares `actual` text (usually read from a file) against an expected literal.
///
/// The expected literal has its common indentation removed ([`trim_indent`]),
/// while `actual` has its line separators converted ([`convert_line_separators`]).
pub fn compare_text(expected_literal: &str, actual: &str) -> TextComparison {
    let expected = trim_indent(expected_literal);
    let actual = convert_line_separators(actual);

    if expected == actual {
        TextComparison::Matches
    } else {
        TextComparison::Mismatch {
            expected,
            actual: actual.into_owned(),
        }
    }
}


/// Compares an in-memory `actual` string against content that was read from a file.
///
/// Line separators are converted on both sides; indentation is left untouched.
pub fn compare_text_with_file_content(file_content: &str, actual: &str) -> TextComparison {
    let expected = convert_line_separators(file_content);
    let actual = convert_line_separators(actual);

    if expected == actual {
        TextComparison::Matches
    } else {
        TextComparison::Mismatch {
            expected: expected.into_owned(),
            actual: actual.into_owned(),
        }
    }
}


/// Renders a line-based diff between `expected` and `actual`.
///
/// Lines only present in `expected` are prefixed with `-`, lines only present
/// in `actual` with `+`, and common lines with a space.
pub fn render_line_diff(expected: &str, actual: &str) -> String {
    let changeset = Changeset::new(expected, actual, "\n");

    let mut rendered_lines: Vec<String> = Vec::new();

    for difference in &changeset.diffs {
        let (prefix, chunk) = match difference {
            Difference::Same(chunk) => (' ', chunk),
            Difference::Rem(chunk) => ('-', chunk),
            Difference::Add(chunk) => ('+', chunk),
        };

        for line in chunk.split('\n') {
            rendered_lines.push(format!("{}{}", prefix, line));
        }
    }

    rendered_lines.join("\n")
}



#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn line_separators_are_converted() {
        assert_eq!(convert_line_separators("a\r\nb\rc\nd"), "a\nb\nc\nd");
        assert_eq!(convert_line_separators("\r\n\r\n"), "\n\n");
        assert_eq!(convert_line_separators("trailing\r"), "trailing\n");
    }

    #[test]
    fn text_without_carriage_returns_is_borrowed() {
        assert!(matches!(
            convert_line_separators("a\nb"),
            Cow::Borrowed("a\nb")
        ));
    }

    #[test]
    fn trim_indent_strips_common_indentation_and_blank_edges() {
        assert_eq!(trim_indent("\n  line1\n  line2\n  "), "line1\nline2");
        assert_eq!(trim_indent("\n    a\n      b\n    c\n"), "a\n  b\nc");
    }

    #[test]
    fn trim_indent_keeps_inner_blank_lines() {
        assert_eq!(trim_indent("\n    a\n\n    b\n    "), "a\n\nb");
        assert_eq!(trim_indent("\n    a\n      \n    b\n"), "a\n  \nb");
    }

    #[test]
    fn trim_indent_leaves_unindented_text_alone() {
        assert_eq!(trim_indent("hello"), "hello");
        assert_eq!(trim_indent("a\n b"), "a\n b");
        assert_eq!(trim_indent(""), "");
        assert_eq!(trim_indent("   "), "");
    }

    #[test]
    fn trim_indent_accepts_windows_line_separators() {
        assert_eq!(trim_indent("\r\n  a\r\n  b\r\n"), "a\nb");
    }

    #[test]
    fn compare_text_trims_expected_and_converts_actual() {
        assert!(compare_text("\n    line1\n    line2\n    ", "line1\r\nline2").is_match());
    }

    #[test]
    fn compare_text_reports_normalized_texts_on_mismatch() {
        let comparison = compare_text("\n    line1\n    line2\n    ", "line1\r\nline3");

        assert_eq!(
            comparison,
            TextComparison::Mismatch {
                expected: "line1\nline2".to_string(),
                actual: "line1\nline3".to_string(),
            }
        );
    }

    #[test]
    fn file_content_comparison_does_not_trim_indentation() {
        assert!(compare_text_with_file_content("  a\r\n  b\n", "  a\n  b\r\n").is_match());
        assert!(!compare_text_with_file_content("  a\n  b", "a\nb").is_match());
    }

    #[test]
    fn line_diff_marks_removed_and_added_lines() {
        let rendered = render_line_diff("a\nb\nc", "a\nx\nc");

        assert!(rendered.contains(" a"));
        assert!(rendered.contains("-b"));
        assert!(rendered.contains("+x"));
        assert!(rendered.contains(" c"));
    }
}
