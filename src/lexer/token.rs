/// A single lexical token.
///
/// Identifiers are kept as raw text; what they mean (number, duration,
/// boolean) is decided by the parser from the expected property type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    BlockStart,
    /// `}`
    BlockEnd,
    /// `,`
    Comma,
    /// `=`
    Equals,
    /// Unquoted run of characters starting with a letter or digit.
    Ident(String),
    /// Double-quoted string with escapes already resolved.
    Str(String),
}
