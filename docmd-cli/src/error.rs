use std::{io, path::PathBuf};

use miette::Diagnostic;

#[derive(Debug, Diagnostic, thiserror::Error)]
pub(crate) enum Error {
    #[error("I/O error on {}", .path.display())]
    #[diagnostic(code(docmd::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read standard input")]
    #[diagnostic(code(docmd::stdin))]
    Stdin(#[source] io::Error),

    #[error("failed to write to standard output")]
    #[diagnostic(code(docmd::stdout))]
    Stdout(#[source] io::Error),

    #[error("refusing to overwrite the input file {}", .0.display())]
    #[diagnostic(
        code(docmd::output_is_input),
        help("pass --stdout to print the Markdown instead")
    )]
    OutputPathSameAsInput(PathBuf),

    #[error("no input given")]
    #[diagnostic(code(docmd::no_input), help("pass one or more files, or --stdin"))]
    NoInput,

    #[error("none of the inputs looks like reStructuredText")]
    #[diagnostic(code(docmd::nothing_detected))]
    NothingDetected,

    #[error("failed to process {0} file(s)")]
    #[diagnostic(code(docmd::failed))]
    Failed(usize),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Print every per-file failure, then fold them into one [`Error::Failed`].
pub(crate) fn report(errors: Vec<Error>) -> Result<(), Error> {
    if errors.is_empty() {
        return Ok(());
    }
    let count = errors.len();
    for error in errors {
        eprintln!("{:?}", miette::Report::new(error));
    }
    Err(Error::Failed(count))
}
