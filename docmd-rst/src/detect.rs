use std::sync::LazyLock;

use regex::Regex;

use crate::{rules, sections::Section};

// `text::` and `text ::`, but not a bare `::` or `:::` line
#[allow(clippy::expect_used)]
static LITERAL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s|\w)::\n").expect("literal marker pattern is a valid regular expression")
});

const SESSION_PROMPT: &str = "\n>>> ";

/// Cheap check for whether `text` is worth running through the converter.
///
/// True when the text has an underlined section title, matches any directive
/// rule, has a paragraph ending in `::`, or contains an interactive session
/// after its first line.
///
/// ```
/// use docmd_rst::looks_like_structured_markup;
///
/// assert!(looks_like_structured_markup("Returns\n-------\nint\n"));
/// assert!(!looks_like_structured_markup("Return the answer."));
/// ```
#[must_use]
pub fn looks_like_structured_markup(text: &str) -> bool {
    Section::ALL
        .into_iter()
        .any(|section| section.is_underlined_in(text))
        || rules::directives()
            .iter()
            .any(|rule| rule.pattern().is_match(text))
        || LITERAL_MARKER.is_match(text)
        || text.contains(SESSION_PROMPT)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::returns_section("Compute.\n\nReturns\n-------\nint\n", true)]
    #[case::see_also_section("See Also\n--------\nother\n", true)]
    #[case::short_underline("Returns\n----\nint\n", false)]
    #[case::underline_without_break("Returns\n-------", false)]
    #[case::version_added("Text.\n\n.. versionadded:: 2.0", true)]
    #[case::math_role("Holds :math:`x`.", true)]
    #[case::link("See `docs <https://example.com>`_.", true)]
    #[case::literal_paragraph("Example::\n\n    x\n", true)]
    #[case::spaced_literal_paragraph("Example ::\n\n    x\n", true)]
    #[case::bare_double_colon("::\n", false)]
    #[case::session("Example:\n>>> 1 + 1\n2", true)]
    #[case::session_on_first_line(">>> 1 + 1", false)]
    #[case::plain_prose("Return the sum of two numbers.\n\nBoth must be finite.", false)]
    #[case::empty("", false)]
    fn classifies(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(looks_like_structured_markup(text), expected);
    }
}
