//! NumPy-style section titles.
//!
//! A section heading is a title line followed by a line of exactly as many
//! dashes as the title has characters:
//!
//! ```text
//! Parameters
//! ----------
//! ```
//!
//! Only the closed set of titles in [`Section::ALL`] is recognised.

use std::{fmt, sync::LazyLock};

use regex::{NoExpand, Regex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Parameters,
    Returns,
    SeeAlso,
    Examples,
    Attributes,
    Notes,
    References,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Parameters,
        Section::Returns,
        Section::SeeAlso,
        Section::Examples,
        Section::Attributes,
        Section::Notes,
        Section::References,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Parameters => "Parameters",
            Section::Returns => "Returns",
            Section::SeeAlso => "See Also",
            Section::Examples => "Examples",
            Section::Attributes => "Attributes",
            Section::Notes => "Notes",
            Section::References => "References",
        }
    }

    /// The dash line that has to follow the title.
    #[must_use]
    pub fn underline(self) -> String {
        "-".repeat(self.title().len())
    }

    /// Match a title exactly (no surrounding whitespace allowed).
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.title() == title)
    }

    /// Whether `text` contains this title immediately followed by its underline
    /// and a line break.
    #[must_use]
    pub fn is_underlined_in(self, text: &str) -> bool {
        text.contains(&format!("{}\n{}\n", self.title(), self.underline()))
    }

    fn heading(self) -> String {
        format!("\n#### {}\n", self.title())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

static HEADINGS: LazyLock<Vec<(Section, Regex)>> = LazyLock::new(|| {
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            // the line break before the title belongs to the heading
            let pattern = format!(
                r"(?:\A|\n){}\n-{{{}}}(?m:$)",
                regex::escape(section.title()),
                section.title().len()
            );
            Regex::new(&pattern).ok().map(|regex| (section, regex))
        })
        .collect()
});

/// Rewrite every underlined section title into a level-4 Markdown heading.
///
/// The heading replaces the title, its underline and the line break before
/// the title, so a title in the middle of the text ends up one blank line
/// below the preceding paragraph.
#[must_use]
pub fn rewrite_headings(text: &str) -> String {
    HEADINGS
        .iter()
        .fold(text.to_string(), |text, (section, regex)| {
            regex
                .replace_all(&text, NoExpand(&section.heading()))
                .into_owned()
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Parameters", Some(Section::Parameters))]
    #[case("See Also", Some(Section::SeeAlso))]
    #[case("References", Some(Section::References))]
    #[case("parameters", None)]
    #[case(" Returns", None)]
    #[case("Yields", None)]
    fn recognises_titles(#[case] title: &str, #[case] expected: Option<Section>) {
        assert_eq!(Section::from_title(title), expected);
    }

    #[test]
    fn every_section_compiles_a_heading_pattern() {
        assert_eq!(HEADINGS.len(), Section::ALL.len());
    }

    #[test]
    fn underline_matches_title_width() {
        assert_eq!(Section::SeeAlso.underline(), "--------");
        assert_eq!(Section::Notes.underline(), "-----");
    }

    #[rstest]
    #[case::after_blank_line("Summary.\n\nReturns\n-------\nint", "Summary.\n\n#### Returns\n\nint")]
    #[case::after_text_line("A\nNotes\n-----\ntext", "A\n#### Notes\n\ntext")]
    #[case::back_to_back(
        "Returns\n-------\nNotes\n-----\nx",
        "\n#### Returns\n\n#### Notes\n\nx"
    )]
    fn heading_absorbs_preceding_line_break(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(rewrite_headings(input), expected);
    }

    #[test]
    fn rewrites_heading_on_first_line() {
        assert_eq!(
            rewrite_headings("Parameters\n----------\nx"),
            "\n#### Parameters\n\nx"
        );
    }

    #[test]
    fn rewrites_heading_at_end_of_text() {
        assert_eq!(rewrite_headings("Notes\n-----"), "\n#### Notes\n");
    }

    #[rstest]
    #[case::short_underline("Returns\n------\nint")]
    #[case::long_underline("Returns\n--------\nint")]
    #[case::indented_title("  Returns\n  -------\nint")]
    #[case::unknown_title("Yields\n------\nint")]
    fn leaves_other_underlines_alone(#[case] input: &str) {
        assert_eq!(rewrite_headings(input), input);
    }

    #[test]
    fn detects_underlined_title() {
        assert!(Section::Returns.is_underlined_in("x\nReturns\n-------\nint"));
        assert!(!Section::Returns.is_underlined_in("x\nReturns\nint"));
    }
}
