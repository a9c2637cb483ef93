use std::path::PathBuf;

use crate::parser::ParseError;
use crate::spec::SpecError;
use crate::tree::AccessError;
use thiserror::Error;

/// Top-level error type for the schemaconf library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}:{source}", path.display())]
    ParseFile { path: PathBuf, source: ParseError },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("spec error: {0}")]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Access(#[from] AccessError),
}
