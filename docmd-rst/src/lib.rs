//! Markdown converter for reStructuredText docstrings.
//!
//! The conversion is heuristic and line oriented: it does not build a
//! document tree. Prose is buffered and run through an ordered table of
//! regex [`rules`]; code-like regions (interactive sessions, `::` literal
//! blocks, `.. code-block::`, `.. math::`, notes and warnings) are picked up
//! by [`blocks`] parsers and emitted as fenced Markdown.
//!
//! # Example
//!
//! ```
//! let markdown = docmd_rst::convert("Parameters\n----------\nn : int\n    Size.");
//! assert_eq!(markdown, "\n#### Parameters\n\n- `n`: int\n    Size.");
//! ```
//!
//! # Supported markup
//!
//! - NumPy-style section headings with an exact-length dash underline
//! - `name : type` parameter lines, `*args`/`**kwargs` and `x1, x2, ... : type`
//!   groups in a `Parameters` section
//! - `>>>` sessions and their printed output
//! - paragraphs ending in `::`, `.. code-block::`, `.. productionlist::`,
//!   `.. highlight::`
//! - `.. math::` blocks and `:math:` roles
//! - `.. note::` / `.. warning::` admonitions
//! - version directives, `.. seealso::`, `:ref:`, `:mod:` and hyperlinks
//!
//! Anything else passes through unchanged. Conversion never fails.
//!
//! [`looks_like_structured_markup`] is a cheap classifier meant to run before
//! the converter, so plain-text docstrings can be left alone entirely.

pub mod blocks;
mod converter;
mod detect;
pub mod items;
mod options;
pub mod rules;
pub mod sections;

#[cfg(test)]
mod proptests;

pub use converter::Converter;
pub use detect::looks_like_structured_markup;
pub use options::{DEFAULT_LANGUAGE, Options, OptionsBuilder};

/// Convert a docstring to Markdown with the default [`Options`].
#[must_use]
pub fn convert(text: &str) -> String {
    Converter::default().convert(text)
}

/// Convert a docstring to Markdown with explicit [`Options`].
///
/// # Example
///
/// ```
/// use docmd_rst::{Options, convert_with_options};
///
/// let options = Options::builder().with_language("cpp").build();
/// let markdown = convert_with_options("Usage::\n\n    f();", &options);
/// assert_eq!(markdown, "Usage\n\n```cpp\nf();\n```\n");
/// ```
#[must_use]
pub fn convert_with_options(text: &str, options: &Options) -> String {
    Converter::new(options.clone()).convert(text)
}
