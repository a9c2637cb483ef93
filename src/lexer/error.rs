use thiserror::Error;

/// Failure to form a token. The tokenizer does not know which line the
/// caller wants to blame, so the parser attaches it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexError {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),

    #[error("unterminated string")]
    UnterminatedString,

    #[error("unexpected end of input")]
    UnexpectedEof,
}
