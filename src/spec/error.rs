use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a spec from TOML.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpecError {
    #[error("schema file not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read schema file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file was read but does not describe a valid schema.
    #[error("invalid schema in '{path}': {source}")]
    InvalidFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid schema: {0}")]
    Invalid(#[from] toml::de::Error),

    /// A property or block pattern is the empty string. Holds its
    /// `/`-separated location.
    #[error("empty property or block name at '{0}'")]
    EmptyName(String),
}
