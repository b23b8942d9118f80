use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Args as ClapArgs;
use docmd_rst::{Converter, DEFAULT_LANGUAGE, Options, looks_like_structured_markup};
use rayon::prelude::*;

use crate::error::{self, Error};

/// Convert docstrings to Markdown
#[derive(ClapArgs, Debug)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally booleans
pub struct Args {
    /// Docstring files to convert; each one is written next to its input
    /// with an `.md` extension
    #[arg(conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Read a single docstring from stdin and print the Markdown
    #[arg(long, conflicts_with = "files")]
    pub stdin: bool,

    /// Language for code blocks that do not name one
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Treat a leading `name(args)` line as prose
    #[arg(long)]
    pub no_signature: bool,

    /// Convert even when the input does not look like reStructuredText
    #[arg(short, long)]
    pub force: bool,

    /// Print the Markdown instead of writing `.md` files
    #[arg(long)]
    pub stdout: bool,
}

impl Args {
    fn options(&self) -> Options {
        let builder = Options::builder().with_language(self.language.as_str());
        if self.no_signature {
            builder.without_signature_echo().build()
        } else {
            builder.build()
        }
    }
}

pub fn run(args: &Args) -> miette::Result<()> {
    let converter = Converter::new(args.options());

    if args.stdin {
        let text = super::read_stdin()?;
        let markdown = render(&converter, &text, args.force);
        io::stdout()
            .lock()
            .write_all(markdown.as_bytes())
            .map_err(Error::Stdout)?;
        return Ok(());
    }

    if args.files.is_empty() {
        return Err(Error::NoInput.into());
    }

    let errors: Vec<Error> = if args.stdout {
        // one after the other so documents do not interleave
        args.files
            .iter()
            .filter_map(|file| print_file(&converter, file, args.force).err())
            .collect()
    } else {
        args.files
            .par_iter()
            .filter_map(|file| convert_file(&converter, file, args.force).err())
            .collect()
    };

    error::report(errors)?;
    Ok(())
}

/// Convert `text`, or hand it back untouched when it is plain prose and
/// `force` is off.
fn render(converter: &Converter, text: &str, force: bool) -> String {
    if force || looks_like_structured_markup(text) {
        converter.convert(text)
    } else {
        tracing::info!("no reStructuredText markup found, passing input through");
        text.to_string()
    }
}

/// The `.md` sibling of `input`.
fn output_path(input: &Path) -> Result<PathBuf, Error> {
    let output = input.with_extension("md");
    if output == input {
        return Err(Error::OutputPathSameAsInput(input.to_path_buf()));
    }
    Ok(output)
}

#[tracing::instrument(skip(converter))]
fn convert_file(converter: &Converter, input: &Path, force: bool) -> Result<PathBuf, Error> {
    let output = output_path(input)?;
    let text = super::read_file(input)?;
    let markdown = render(converter, &text, force);
    fs::write(&output, markdown).map_err(|source| Error::io(&output, source))?;
    tracing::info!(output = %output.display(), "converted");
    Ok(output)
}

#[tracing::instrument(skip(converter))]
fn print_file(converter: &Converter, input: &Path, force: bool) -> Result<(), Error> {
    let text = super::read_file(input)?;
    let markdown = render(converter, &text, force);
    io::stdout()
        .lock()
        .write_all(markdown.as_bytes())
        .map_err(Error::Stdout)
}
