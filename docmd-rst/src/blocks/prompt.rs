//! Interactive interpreter sessions (`>>>` examples) and their output.

use super::{BlockBeginning, BlockParser, Fence, is_blank};

const PROMPT: &str = ">>>";
const CONTINUATION: &str = "...";
const SESSION_LANGUAGE: &str = "python";

/// Code typed at an interactive prompt, with the prompts removed.
#[derive(Debug, Clone)]
pub struct PromptCodeBlock {
    fence: Fence,
}

impl PromptCodeBlock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fence: Fence::new(Fence::BACKTICKS),
        }
    }

    fn strip_prompt(line: &str) -> &str {
        let width = if line.starts_with(">>> ") || line.starts_with("... ") {
            4
        } else {
            3
        };
        line.get(width..).unwrap_or_default()
    }
}

impl Default for PromptCodeBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser for PromptCodeBlock {
    fn can_parse(&self, line: &str) -> bool {
        line.starts_with(PROMPT)
    }

    fn initiate_parsing(&mut self, line: &str, _current_language: &str) -> BlockBeginning {
        self.fence.start(SESSION_LANGUAGE);
        self.consume(line);
        BlockBeginning::empty()
    }

    fn can_consume(&self, line: &str) -> bool {
        line.starts_with(PROMPT) || line.starts_with(CONTINUATION)
    }

    fn consume(&mut self, line: &str) {
        self.fence.push(Self::strip_prompt(line));
    }

    fn finish_consumption(&mut self, last: bool) -> String {
        self.fence.finish(last)
    }

    fn follower(&self) -> Option<Box<dyn BlockParser>> {
        Some(Box::new(PromptOutputBlock::new()))
    }
}

/// What the interpreter printed after a prompt block; rendered untagged.
#[derive(Debug, Clone)]
pub struct PromptOutputBlock {
    fence: Fence,
}

impl PromptOutputBlock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fence: Fence::new(Fence::BACKTICKS),
        }
    }
}

impl Default for PromptOutputBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser for PromptOutputBlock {
    fn can_parse(&self, line: &str) -> bool {
        !is_blank(line)
    }

    fn initiate_parsing(&mut self, line: &str, _current_language: &str) -> BlockBeginning {
        self.fence.start("");
        self.consume(line);
        BlockBeginning::empty()
    }

    fn can_consume(&self, line: &str) -> bool {
        !is_blank(line) && !line.starts_with(PROMPT)
    }

    fn consume(&mut self, line: &str) {
        self.fence.push(line);
    }

    fn finish_consumption(&mut self, last: bool) -> String {
        self.fence.finish(last)
    }
}
