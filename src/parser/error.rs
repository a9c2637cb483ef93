use std::fmt;
use thiserror::Error;

use crate::lexer::LexError;

/// Which stage of parsing rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Malformed string or illegal character.
    Lexical,
    /// Wrong token where an identifier, `=`, `{` or `}` was expected.
    Syntax,
    /// Unknown name, duplicate entry, or missing required entry.
    Schema,
    /// Literal does not fit the declared type.
    Value,
    /// Rejected by a caller-supplied validator.
    Validation,
    /// Blocks nested deeper than the configured limit.
    Limit,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::Schema => "schema error",
            Self::Value => "value error",
            Self::Validation => "validation error",
            Self::Limit => "limit exceeded",
        })
    }
}

/// The first failure encountered while parsing, with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            line,
            kind,
            message: message.into(),
        }
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::Syntax, message, line)
    }

    pub fn schema(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::Schema, message, line)
    }

    pub fn value(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::Value, message, line)
    }

    pub(crate) fn lexical(err: LexError, line: usize) -> Self {
        Self::new(ParseErrorKind::Lexical, err.to_string(), line)
    }
}
