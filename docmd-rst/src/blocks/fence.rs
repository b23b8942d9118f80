//! Accumulation buffers shared by the concrete block parsers.

/// Lines collected between an opening and a closing enclosure.
#[derive(Debug, Clone)]
pub struct Fence {
    enclosure: &'static str,
    buffer: Vec<String>,
    started: bool,
}

impl Fence {
    /// The generic Markdown code fence.
    pub const BACKTICKS: &'static str = "```";

    #[must_use]
    pub fn new(enclosure: &'static str) -> Self {
        Self {
            enclosure,
            buffer: Vec::new(),
            started: false,
        }
    }

    /// Open the block; `label` directly follows the enclosure (usually a
    /// language tag).
    pub fn start(&mut self, label: &str) {
        self.buffer.push(format!("{}{label}", self.enclosure));
        self.started = true;
    }

    pub fn push(&mut self, line: impl Into<String>) {
        debug_assert!(self.started, "block has not started");
        self.buffer.push(line.into());
    }

    /// Close the block, drop a trailing blank line and reset the buffer.
    pub fn finish(&mut self, last: bool) -> String {
        if self
            .buffer
            .last()
            .is_some_and(|line| line.trim().is_empty())
        {
            self.buffer.pop();
        }
        self.buffer.push(format!("{}\n", self.enclosure));
        let mut block = std::mem::take(&mut self.buffer).join("\n");
        if !last {
            block.push('\n');
        }
        self.started = false;
        block
    }
}

/// A [`Fence`] whose extent is given by indentation.
///
/// The block runs while lines are blank or start with whitespace. A single
/// blank line right after the opening line is skipped, and the indent width
/// of the first consumed line is removed from every line.
#[derive(Debug, Clone)]
pub struct IndentedFence {
    fence: Fence,
    at_beginning: bool,
    indent: Option<usize>,
}

impl IndentedFence {
    #[must_use]
    pub fn new(enclosure: &'static str) -> Self {
        Self {
            fence: Fence::new(enclosure),
            at_beginning: false,
            indent: None,
        }
    }

    pub fn start(&mut self, label: &str) {
        self.fence.start(label);
        self.indent = None;
        self.at_beginning = true;
    }

    #[must_use]
    pub fn can_consume(&self, line: &str) -> bool {
        line.chars().next().is_none_or(char::is_whitespace)
    }

    pub fn consume(&mut self, line: &str) {
        if std::mem::take(&mut self.at_beginning) && super::is_blank(line) {
            return;
        }
        let indent = *self.indent.get_or_insert_with(|| {
            line.chars().take_while(|c| c.is_whitespace()).count()
        });
        self.fence.push(line.chars().skip(indent).collect::<String>());
    }

    pub fn finish(&mut self, last: bool) -> String {
        self.at_beginning = false;
        self.indent = None;
        self.fence.finish(last)
    }
}
