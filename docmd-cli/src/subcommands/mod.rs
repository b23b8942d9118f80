use std::{fs, io, path::Path};

use crate::error::Error;

pub mod convert;
pub mod detect;

fn read_stdin() -> Result<String, Error> {
    io::read_to_string(io::stdin().lock()).map_err(Error::Stdin)
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::io(path, source))
}
