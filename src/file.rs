//! Reading configuration documents from disk.

use std::path::Path;

use crate::parser::{parse_with_options, ParseOptions};
use crate::spec::Spec;
use crate::tree::Config;
use crate::Error;

/// Reads and parses the file at `path` with default [`ParseOptions`].
pub fn parse_file(spec: &Spec, path: impl AsRef<Path>) -> Result<Config, Error> {
    parse_file_with_options(spec, path, &ParseOptions::default())
}

/// Reads and parses the file at `path`. Parse errors keep their line number
/// and are tagged with the path.
pub fn parse_file_with_options(
    spec: &Spec,
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Config, Error> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(Error::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    parse_with_options(spec, &contents, options).map_err(|e| Error::ParseFile {
        path: path.to_path_buf(),
        source: e,
    })
}
