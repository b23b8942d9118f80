//! `.. code-block::` and `.. productionlist::` directives.

use crate::rules::{self, RuleName};

use super::{BlockBeginning, BlockParser, Fence, IndentedFence};

/// An explicit code block; the directive argument, when present, overrides
/// the current highlighting language.
#[derive(Debug, Clone)]
pub struct ExplicitCodeBlock {
    block: IndentedFence,
}

impl ExplicitCodeBlock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            block: IndentedFence::new(Fence::BACKTICKS),
        }
    }

    /// The trimmed directive argument when `line` starts with the directive.
    fn directive_language(line: &str) -> Option<&str> {
        let captures = rules::directive(RuleName::CodeBlock)?
            .pattern()
            .captures(line)?;
        if captures.get(0)?.start() != 0 {
            return None;
        }
        Some(captures.name("language").map_or("", |language| language.as_str().trim()))
    }
}

impl Default for ExplicitCodeBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser for ExplicitCodeBlock {
    fn can_parse(&self, line: &str) -> bool {
        Self::directive_language(line).is_some()
    }

    fn initiate_parsing(&mut self, line: &str, current_language: &str) -> BlockBeginning {
        let language = Self::directive_language(line)
            .filter(|language| !language.is_empty())
            .unwrap_or(current_language);
        self.block.start(language);
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
