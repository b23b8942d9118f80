//! Text substitution rules for buffered prose.
//!
//! The rules are an ordered table: each one replaces every non-overlapping
//! match of its pattern, and later rules see the text already rewritten by
//! earlier ones. The escaping rules run after all directive rules and
//! neutralise sequences a Markdown renderer would otherwise pick up.
//!
//! Two directive rules carry a [`RuleName`] so the converter can reuse their
//! patterns on single lines (to read the highlight language and to detect an
//! explicit code block) without keeping a second copy of the regex around.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

/// Symbolic handle for the rules that are looked up individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleName {
    /// `.. highlight:: <language>`
    Highlight,
    /// `.. code-block:: [language]` and `.. productionlist::`
    CodeBlock,
}

/// A pattern and the replacement template used for every match.
///
/// Replacement templates use the `regex` crate syntax (`${name}` for a named
/// group, `$$` for a literal dollar sign).
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
    name: Option<RuleName>,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: compile(pattern),
            replacement,
            name: None,
        }
    }

    fn named(mut self, name: RuleName) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }

    #[must_use]
    pub fn name(&self) -> Option<RuleName> {
        self.name
    }

    /// Replace every match of this rule in `text`.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

#[allow(clippy::expect_used)] // only ever called with the literal patterns below
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule patterns are valid regular expressions")
}

static DIRECTIVES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::new(
            r"\.\. versionchanged:: (?P<version>\S+)(?P<end>$|\n)",
            "*Changed in ${version}*${end}",
        ),
        Rule::new(
            r"\.\. versionadded:: (?P<version>\S+)(?P<end>$|\n)",
            "*Added in ${version}*${end}",
        ),
        Rule::new(
            r"\.\. deprecated:: (?P<version>\S+)(?P<end>$|\n)",
            "*Deprecated since ${version}*${end}",
        ),
        Rule::new(r"\.\. warning::", "**Warning**:"),
        Rule::new(
            r"\.\. seealso::(?P<short_form>.*)(?P<end>$|\n)",
            "*See also*${short_form}${end}",
        ),
        Rule::new(
            r":ref:`(?P<label>[^<`]+?)\s*<(?P<ref>[^>`]+?)>`",
            "${label}: `${ref}`",
        ),
        // the label may wrap onto the next line before the url
        Rule::new(
            r"`(?P<label>[^<`]+?)(\n?)<(?P<url>[^>`]+)>`_+",
            "[${label}](${url})",
        ),
        Rule::new(r":mod:`(?P<label>[^`]+)`", "`${label}`"),
        Rule::new(r"\.\. currentmodule:: (?P<module>.+)(?P<end>$|\n)", ""),
        Rule::new(r":math:`(?P<latex>[^`]+?)`", "$$${latex}$$"),
        Rule::new(r"\.\. highlight:: (?P<language>.+)(?P<end>$|\n)", "").named(RuleName::Highlight),
        Rule::new(
            r"\.\. (code-block|productionlist)::(?P<language>.*)(?P<end>$|\n)",
            "${end}",
        )
        .named(RuleName::CodeBlock),
    ]
});

static ESCAPES: LazyLock<Vec<Rule>> =
    LazyLock::new(|| vec![Rule::new(r"__(?P<text>\S+)__", r"\_\_${text}\_\_")]);

/// The directive rules, in application order.
#[must_use]
pub fn directives() -> &'static [Rule] {
    &DIRECTIVES
}

/// The escaping rules, applied after [`directives`].
#[must_use]
pub fn escapes() -> &'static [Rule] {
    &ESCAPES
}

/// Look up a directive rule by its symbolic name.
#[must_use]
pub fn directive(name: RuleName) -> Option<&'static Rule> {
    DIRECTIVES.iter().find(|rule| rule.name() == Some(name))
}

/// Run the whole table (directives, then escapes) over `text`.
#[must_use]
pub fn apply_all(text: &str) -> String {
    DIRECTIVES
        .iter()
        .chain(ESCAPES.iter())
        .fold(text.to_string(), |text, rule| rule.apply(&text).into_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::version_added(".. versionadded:: 1.2\n", "*Added in 1.2*\n")]
    #[case::version_added_at_end(".. versionadded:: 1.2", "*Added in 1.2*")]
    #[case::version_changed(".. versionchanged:: 0.9\nmore", "*Changed in 0.9*\nmore")]
    #[case::deprecated(".. deprecated:: 3.0\n", "*Deprecated since 3.0*\n")]
    #[case::inline_warning("    .. warning:: careful", "    **Warning**: careful")]
    #[case::see_also_short(".. seealso:: other\n", "*See also* other\n")]
    #[case::see_also_long(".. seealso::\n    other", "*See also*\n    other")]
    #[case::reference(
        "see :ref:`the guide <guide-intro>` first",
        "see the guide: `guide-intro` first"
    )]
    #[case::link("`Python <https://python.org>`_", "[Python ](https://python.org)")]
    #[case::anonymous_link("`Python <https://python.org>`__", "[Python ](https://python.org)")]
    #[case::wrapped_link("`The Python\n<https://python.org>`_", "[The Python](https://python.org)")]
    #[case::module("uses :mod:`os.path`", "uses `os.path`")]
    #[case::current_module(".. currentmodule:: numpy\nText", "Text")]
    #[case::math("so :math:`a^2 + b^2` holds", "so $a^2 + b^2$ holds")]
    #[case::highlight(".. highlight:: cpp\nText", "Text")]
    #[case::code_block(".. code-block:: python\n", "\n")]
    #[case::production_list(".. productionlist::\n", "\n")]
    #[case::dunder("calls __init__ first", r"calls \_\_init\_\_ first")]
    #[case::plain("nothing to see here", "nothing to see here")]
    fn applies_rules_in_order(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_all(input), expected);
    }

    #[test]
    fn dunder_escaped_even_without_directives() {
        assert_eq!(
            apply_all("__init__ and __call__"),
            r"\_\_init\_\_ and \_\_call\_\_"
        );
    }

    #[test]
    fn named_rules_are_addressable() {
        let highlight = directive(RuleName::Highlight).map(Rule::pattern);
        let language = highlight
            .and_then(|pattern| pattern.captures(".. highlight:: rust"))
            .and_then(|captures| captures.name("language"))
            .map(|language| language.as_str());
        assert_eq!(language, Some("rust"));

        let code_block = directive(RuleName::CodeBlock);
        assert_eq!(code_block.and_then(Rule::name), Some(RuleName::CodeBlock));
        assert_eq!(
            directives().iter().filter(|rule| rule.name().is_some()).count(),
            2
        );
        assert!(code_block.is_some_and(|rule| rule.pattern().is_match(".. code-block:: c")));
        assert_eq!(code_block.map(Rule::replacement), Some("${end}"));
    }

    #[test]
    fn escapes_are_kept_apart_from_directives() {
        assert_eq!(escapes().len(), 1);
        assert!(directives().iter().all(|rule| !rule.pattern().is_match("__init__")));
    }
}
