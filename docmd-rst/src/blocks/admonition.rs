//! `.. note::` and `.. warning::` call-outs.

use super::{BlockBeginning, BlockParser, IndentedFence};

/// Admonition block framed by horizontal rules with a bold label on top.
#[derive(Debug, Clone)]
pub struct AdmonitionBlock {
    block: IndentedFence,
}

impl AdmonitionBlock {
    pub const ENCLOSURE: &'static str = "\n---";
    const DIRECTIVES: [&'static str; 2] = [".. note::", ".. warning::"];

    #[must_use]
    pub fn new() -> Self {
        Self {
            block: IndentedFence::new(Self::ENCLOSURE),
        }
    }
}

impl Default for AdmonitionBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser for AdmonitionBlock {
    fn can_parse(&self, line: &str) -> bool {
        Self::DIRECTIVES.contains(&line.trim())
    }

    fn initiate_parsing(&mut self, line: &str, _current_language: &str) -> BlockBeginning {
        let label = if line.contains("note") {
            "\n**Note**\n"
        } else {
            "\n**Warning**\n"
        };
        self.block.start(label);
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
