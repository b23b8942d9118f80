//! Literal blocks introduced by a paragraph ending in `::`.

use super::{BlockBeginning, BlockParser, Fence, IndentedFence};

const MARKER: &str = "::";
const AUTOSUMMARY: &str = ".. autosummary::";

/// The indented block after a `text::` or `text ::` paragraph line.
///
/// The marker is removed from the opening line and the text before it goes
/// back to the converter as prose. An `.. autosummary::` directive produces an
/// untagged block and no prose.
#[derive(Debug, Clone)]
pub struct DoubleColonBlock {
    block: IndentedFence,
}

impl DoubleColonBlock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            block: IndentedFence::new(Fence::BACKTICKS),
        }
    }
}

impl Default for DoubleColonBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser for DoubleColonBlock {
    fn can_parse(&self, line: &str) -> bool {
        // both `text ::` and `text::`
        line.trim_end().ends_with(MARKER)
    }

    fn initiate_parsing(&mut self, line: &str, current_language: &str) -> BlockBeginning {
        let (language, prose) = if line.trim() == AUTOSUMMARY {
            ("", "")
        } else {
            (current_language, line.strip_suffix(MARKER).unwrap_or(line))
        };
        self.block.start(language);
        BlockBeginning::with_remainder(format!("{}\n\n", prose.trim_end()))
    }

    fn can_consume(&self, line: &str) -> bool {
        self.block.can_consume(line)
    }

    fn consume(&mut self, line: &str) {
        self.block.consume(line);
    }

    fn finish_consumption(&mut self, last: bool) -> String {
        self.block.finish(last)
    }
}
