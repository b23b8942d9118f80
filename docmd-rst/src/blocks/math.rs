//! `.. math::` display blocks.

use super::{BlockBeginning, BlockParser, IndentedFence};

const DIRECTIVE: &str = ".. math::";

/// Display math, fenced with `$$` instead of backticks.
#[derive(Debug, Clone)]
pub struct MathBlock {
    block: IndentedFence,
}

impl MathBlock {
    pub const ENCLOSURE: &'static str = "$$";

    #[must_use]
    pub fn new() -> Self {
        Self {
            block: IndentedFence::new(Self::ENCLOSURE),
        }
    }
}

impl Default for MathBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser for MathBlock {
    fn can_parse(&self, line: &str) -> bool {
        line.trim() == DIRECTIVE
    }

    fn initiate_parsing(&mut self, _line: &str, _current_language: &str) -> BlockBeginning {
        self.block.start("");
        BlockBeginning::empty()
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
