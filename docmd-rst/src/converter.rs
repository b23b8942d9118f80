//! The line driver: interleaves prose buffering with block extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    Options,
    blocks::{self, BlockParser},
    items,
    rules::{self, RuleName},
    sections::{self, Section},
};

#[allow(clippy::expect_used)] // literal patterns
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("signature patterns are valid regular expressions")
}

static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| compile(r"^(?P<name>\S+)\((?P<params>.*)\)$"));

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\p{XID_Start}_]\p{XID_Continue}*$"));

/// Converts docstrings with a fixed set of [`Options`].
///
/// Block parsers are created for every call, so one converter can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: Options,
}

impl Converter {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Convert one docstring to Markdown. Never fails; text that is not
    /// recognised is passed through.
    #[tracing::instrument(skip_all, fields(len = text.len()))]
    #[must_use]
    pub fn convert(&self, text: &str) -> String {
        let mut conversion = Conversion::new(&self.options);
        for (index, line) in text.split('\n').enumerate() {
            if index == 0 && self.options.echo_signature && is_signature(line) {
                conversion.echo_signature(line);
                continue;
            }
            conversion.process_line(line);
        }
        conversion.finish()
    }
}

fn is_signature(line: &str) -> bool {
    SIGNATURE
        .captures(line)
        .and_then(|captures| captures.name("name"))
        .is_some_and(|name| IDENTIFIER.is_match(name.as_str()))
}

/// Where the active parser lives: one of the per-call starters, or a follower
/// that was handed the slot when its predecessor finished.
enum Active {
    Starter(usize),
    Follower(Box<dyn BlockParser>),
}

struct Conversion<'o> {
    options: &'o Options,
    language: String,
    starters: Vec<Box<dyn BlockParser>>,
    active: Option<Active>,
    buffer: Vec<String>,
    section: Option<Section>,
    markdown: String,
}

impl<'o> Conversion<'o> {
    fn new(options: &'o Options) -> Self {
        Self {
            options,
            language: options.language.clone(),
            starters: blocks::starters(),
            active: None,
            buffer: Vec::new(),
            section: None,
            markdown: String::new(),
        }
    }

    fn echo_signature(&mut self, line: &str) {
        self.markdown
            .push_str(&format!("```{}\n{line}\n```\n", self.options.language));
    }

    fn active_parser(&mut self) -> Option<&mut (dyn BlockParser + 'static)> {
        match self.active.as_mut()? {
            Active::Starter(index) => self.starters.get_mut(*index).map(|parser| &mut **parser),
            Active::Follower(parser) => Some(&mut **parser),
        }
    }

    fn process_line(&mut self, line: &str) {
        if let Some(parser) = self.active_parser() {
            if parser.can_consume(line) {
                parser.consume(line);
                return;
            }
            self.hand_off(line);
            if self.active.is_some() {
                return;
            }
        }

        let trimmed = line.trim_start();
        let line = match self.start_block(line) {
            Some(beginning) => beginning.remainder,
            None => line.to_string(),
        };
        let line = self.rewrite_line(trimmed, line);
        self.track_language(&line);
        self.buffer.push(line);
    }

    /// Close the active block on the line it rejected, passing the slot to
    /// its follower when the follower accepts that line.
    fn hand_off(&mut self, line: &str) {
        self.flush();
        let follower = match self.active.take() {
            Some(Active::Starter(index)) => self
                .starters
                .get_mut(index)
                .and_then(|parser| close(&mut **parser, &mut self.markdown)),
            Some(Active::Follower(mut parser)) => close(&mut *parser, &mut self.markdown),
            None => None,
        };
        if let Some(mut follower) = follower.filter(|follower| follower.can_parse(line)) {
            tracing::trace!(line, "handing block over to its follower");
            follower.initiate_parsing(line, &self.language);
            self.active = Some(Active::Follower(follower));
        }
    }

    fn start_block(&mut self, line: &str) -> Option<blocks::BlockBeginning> {
        let (index, parser) = self
            .starters
            .iter_mut()
            .enumerate()
            .find(|(_, parser)| parser.can_parse(line))?;
        tracing::trace!(line, language = %self.language, "starting block");
        let beginning = parser.initiate_parsing(line, &self.language);
        self.active = Some(Active::Starter(index));
        Some(beginning)
    }

    fn rewrite_line(&mut self, trimmed: &str, line: String) -> String {
        if let Some(item) = items::definition(trimmed) {
            return item;
        }
        if self.section == Some(Section::Parameters) {
            if let Some(item) = items::variadic(trimmed).or_else(|| items::numbered_group(trimmed)) {
                return item;
            }
        } else if let Some(section) = Section::from_title(trimmed.trim_end()) {
            tracing::debug!(%section, "entering section");
            self.section = Some(section);
        }
        line
    }

    fn track_language(&mut self, line: &str) {
        let language = rules::directive(RuleName::Highlight)
            .and_then(|rule| rule.pattern().captures(line))
            .and_then(|captures| captures.name("language"))
            .map(|language| language.as_str().trim())
            .filter(|language| !language.is_empty());
        if let Some(language) = language {
            tracing::debug!(language, "switching highlight language");
            self.language = language.to_string();
        }
    }

    /// Run the buffered prose through the rule table and section rewrite.
    fn flush(&mut self) {
        let prose = std::mem::take(&mut self.buffer).join("\n");
        let prose = rules::apply_all(&prose);
        self.markdown.push_str(&sections::rewrite_headings(&prose));
    }

    fn finish(mut self) -> String {
        self.flush();
        if let Some(parser) = self.active_parser() {
            let block = parser.finish_consumption(true);
            self.markdown.push_str(&block);
        }
        self.markdown
    }
}

fn close(parser: &mut dyn BlockParser, markdown: &mut String) -> Option<Box<dyn BlockParser>> {
    tracing::trace!("finishing block");
    markdown.push_str(&parser.finish_consumption(false));
    parser.follower()
}
