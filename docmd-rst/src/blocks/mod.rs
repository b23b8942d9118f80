//! Block parsers that turn code-like regions into fenced Markdown.
//!
//! Every parser follows the same lifecycle, driven by the converter:
//!
//! 1. [`BlockParser::can_parse`] decides whether a line opens a block;
//! 2. [`BlockParser::initiate_parsing`] opens it and hands back the part of
//!    the line that is ordinary prose ([`BlockBeginning::remainder`]);
//! 3. [`BlockParser::consume`] is fed every line for which
//!    [`BlockParser::can_consume`] holds;
//! 4. [`BlockParser::finish_consumption`] renders the block and resets the
//!    parser so it can be reused for the next block of its kind.
//!
//! A parser may name a [`BlockParser::follower`], which is offered the line
//! that ended the block before the converter gives up the active slot.

mod admonition;
mod code;
mod fence;
mod literal;
mod math;
mod prompt;

pub use admonition::AdmonitionBlock;
pub use code::ExplicitCodeBlock;
pub use fence::{Fence, IndentedFence};
pub use literal::DoubleColonBlock;
pub use math::MathBlock;
pub use prompt::{PromptCodeBlock, PromptOutputBlock};

/// Prose left over on the line that opened a block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockBeginning {
    /// Text to run through ordinary line processing, possibly empty.
    pub remainder: String,
}

impl BlockBeginning {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn with_remainder(remainder: String) -> Self {
        Self { remainder }
    }
}

/// The lifecycle shared by every block kind.
pub trait BlockParser {
    /// Whether `line` opens a block of this kind.
    fn can_parse(&self, line: &str) -> bool;

    /// Open a block on `line` (which passed [`BlockParser::can_parse`]).
    ///
    /// `current_language` is the highlighting language to use when the line
    /// itself does not name one.
    fn initiate_parsing(&mut self, line: &str, current_language: &str) -> BlockBeginning;

    /// Whether `line` still belongs to the open block.
    fn can_consume(&self, line: &str) -> bool;

    /// Add `line` to the open block. Must only be called after
    /// [`BlockParser::initiate_parsing`].
    fn consume(&mut self, line: &str);

    /// Close the block and return its Markdown.
    ///
    /// When `last` is false another fragment follows, so one extra line break
    /// is appended.
    fn finish_consumption(&mut self, last: bool) -> String;

    /// A parser to offer the terminating line to once this block is done.
    fn follower(&self) -> Option<Box<dyn BlockParser>> {
        None
    }
}

/// Fresh block parsers in the order they are offered a new line.
///
/// The order matters: the double-colon check would also fire on most of the
/// directive lines handled by the parsers before it.
#[must_use]
pub fn starters() -> Vec<Box<dyn BlockParser>> {
    vec![
        Box::new(PromptCodeBlock::new()),
        Box::new(AdmonitionBlock::new()),
        Box::new(MathBlock::new()),
        Box::new(ExplicitCodeBlock::new()),
        Box::new(DoubleColonBlock::new()),
    ]
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
