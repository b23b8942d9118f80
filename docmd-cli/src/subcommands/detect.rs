use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Args as ClapArgs;
use docmd_rst::looks_like_structured_markup;
use rayon::prelude::*;

use crate::error::{self, Error};

const STDIN_NAME: &str = "<stdin>";

/// Report which inputs look like reStructuredText
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// Files to classify
    #[arg(conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Classify a single docstring read from stdin
    #[arg(long, conflicts_with = "files")]
    pub stdin: bool,
}

fn verdict(text: &str) -> &'static str {
    if looks_like_structured_markup(text) {
        "rst"
    } else {
        "plain"
    }
}

type Verdict = (String, &'static str);

/// Classify every readable file, keeping input order; unreadable files are
/// returned as errors alongside.
fn classify(files: &[PathBuf]) -> (Vec<Verdict>, Vec<Error>) {
    let (read, errors): (Vec<_>, Vec<_>) = files
        .par_iter()
        .map(|file| {
            super::read_file(file).map(|text| (file.display().to_string(), verdict(&text)))
        })
        .partition(Result::is_ok);
    (
        read.into_iter().filter_map(Result::ok).collect(),
        errors.into_iter().filter_map(Result::err).collect(),
    )
}

fn write_verdicts(out: &mut impl Write, verdicts: &[Verdict]) -> Result<(), Error> {
    for (name, verdict) in verdicts {
        writeln!(out, "{name}: {verdict}").map_err(Error::Stdout)?;
    }
    Ok(())
}

pub fn run(args: &Args) -> miette::Result<()> {
    let (verdicts, errors) = if args.stdin {
        let text = super::read_stdin()?;
        (vec![(STDIN_NAME.to_string(), verdict(&text))], Vec::new())
    } else if args.files.is_empty() {
        return Err(Error::NoInput.into());
    } else {
        classify(&args.files)
    };

    // readable inputs are reported even when others failed
    write_verdicts(&mut io::stdout().lock(), &verdicts)?;
    error::report(errors)?;

    if verdicts.iter().all(|(_, verdict)| *verdict == "plain") {
        return Err(Error::NothingDetected.into());
    }
    Ok(())
}
