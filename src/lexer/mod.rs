//! Tokenizer for the configuration language.
//!
//! Whitespace, `;` separators, and `#` line comments never reach the parser.
//! Everything else is one of six tokens (see [`Token`]). The tokenizer keeps
//! a one-token pushback slot so the parser can look ahead by exactly one.

mod error;
mod token;

use std::iter::Peekable;
use std::str::Chars;

pub use error::LexError;
pub use token::Token;

/// Pull-based tokenizer over a borrowed input string.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    last: Option<Token>,
    pending: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            last: None,
            pending: None,
        }
    }

    /// Current 1-based line, positioned at or before the next token.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Skips insignificant input and reports whether another token exists.
    pub fn has_next(&mut self) -> bool {
        self.skip_insignificant();
        self.pending.is_some() || self.chars.peek().is_some()
    }

    /// Returns the next token, or the pushed-back one if [`unread`](Self::unread)
    /// was called since the last read.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if let Some(tok) = self.pending.take() {
            return Ok(tok);
        }

        self.skip_insignificant();

        let c = self.chars.next().ok_or(LexError::UnexpectedEof)?;
        let tok = match c {
            '}' => Token::BlockEnd,
            '{' => Token::BlockStart,
            ',' => Token::Comma,
            '=' => Token::Equals,
            '"' => Token::Str(self.read_string()?),
            c if c.is_alphanumeric() => Token::Ident(self.read_ident(c)),
            c => return Err(LexError::UnexpectedChar(c)),
        };

        self.last = Some(tok.clone());
        Ok(tok)
    }

    /// Pushes the most recently returned token back.
    ///
    /// Only one level of pushback exists; calling this twice without an
    /// intervening read, or before any read, is a bug in the caller.
    pub fn unread(&mut self) {
        assert!(self.pending.is_none(), "only one token of pushback is supported");
        self.pending = Some(
            self.last
                .clone()
                .expect("unread called before any token was read"),
        );
    }

    fn read_ident(&mut self, first: char) -> String {
        let mut ident = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if is_lexeme_end(c) {
                break;
            }
            ident.push(c);
            self.chars.next();
        }
        ident
    }

    // The opening quote has already been consumed.
    fn read_string(&mut self) -> Result<String, LexError> {
        let mut s = String::new();
        loop {
            let c = self.chars.next().ok_or(LexError::UnterminatedString)?;
            match c {
                '"' => return Ok(s),
                '\\' => {
                    let escaped = self.chars.next().ok_or(LexError::UnterminatedString)?;
                    if escaped == '\n' {
                        self.line += 1;
                    }
                    s.push(escaped);
                }
                '\n' => {
                    self.line += 1;
                    s.push(c);
                }
                c => s.push(c),
            }
        }
    }

    fn skip_insignificant(&mut self) {
        while let Some(&c) = self.chars.peek() {
            match c {
                '\n' => {
                    self.line += 1;
                    self.chars.next();
                }
                '#' => {
                    // Leave the newline for the next iteration to count.
                    while self.chars.next_if(|&c| c != '\n').is_some() {}
                }
                ';' => {
                    self.chars.next();
                }
                c if c.is_whitespace() => {
                    self.chars.next();
                }
                _ => break,
            }
        }
    }
}

fn is_lexeme_end(c: char) -> bool {
    c.is_whitespace() || matches!(c, ';' | ',' | '#')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Token {
        Token::Ident(s.to_string())
    }

    fn string(s: &str) -> Token {
        Token::Str(s.to_string())
    }

    /// Reads every token twice (once directly, once after `unread`) and
    /// checks the stream is exhausted afterwards.
    fn assert_tokens(input: &str, expected: &[Token]) {
        let mut t = Tokenizer::new(input);
        for exp in expected {
            assert!(t.has_next(), "ran out of tokens before {exp:?}");
            assert_eq!(&t.next_token().unwrap(), exp);
            t.unread();
            assert!(t.has_next());
            assert_eq!(&t.next_token().unwrap(), exp);
        }
        assert!(!t.has_next(), "unexpected trailing tokens in {input:?}");
    }

    #[test]
    fn test_strings() {
        assert_tokens(r#""""#, &[string("")]);
        assert_tokens(r#"" ""#, &[string(" ")]);
        assert_tokens(r#""foo bar""#, &[string("foo bar")]);
        assert_tokens(r#""foo\"bar""#, &[string("foo\"bar")]);
        assert_tokens(r#""\"\'\\""#, &[string("\"'\\")]);
    }

    #[test]
    fn test_escape_makes_any_char_literal() {
        assert_tokens(r#""a\nb""#, &[string("anb")]);
    }

    #[test]
    fn test_identifiers() {
        assert_tokens("foo bar baz", &[ident("foo"), ident("bar"), ident("baz")]);
        assert_tokens(
            "foo = 123xxx123",
            &[ident("foo"), Token::Equals, ident("123xxx123")],
        );
    }

    #[test]
    fn test_commas_are_tokens() {
        assert_tokens(
            "foo = 1, bar, \"baz\"",
            &[
                ident("foo"),
                Token::Equals,
                ident("1"),
                Token::Comma,
                ident("bar"),
                Token::Comma,
                string("baz"),
            ],
        );
    }

    #[test]
    fn test_block_with_separators() {
        assert_tokens(
            "block {foo = 1; bar = 2;}",
            &[
                ident("block"),
                Token::BlockStart,
                ident("foo"),
                Token::Equals,
                ident("1"),
                ident("bar"),
                Token::Equals,
                ident("2"),
                Token::BlockEnd,
            ],
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_tokens(
            "heartbeat-ttl = 3s\n\n# block {\n#}\n",
            &[ident("heartbeat-ttl"), Token::Equals, ident("3s")],
        );
        assert_tokens("a = 1# trailing\n", &[ident("a"), Token::Equals, ident("1")]);
    }

    #[test]
    fn test_multiline_document() {
        let input = "# Comment line.\n\
                     param-a = 1\n\
                     \n\
                     param-b = 2;\n\
                     block-a {\n\
                     \x20   param-c = 3\n\
                     }\n\
                     block-b {\n\
                     \x20   param-d = \"value-d\"\n\
                     \x20   param-e = value-e;\n\
                     }";
        assert_tokens(
            input,
            &[
                ident("param-a"),
                Token::Equals,
                ident("1"),
                ident("param-b"),
                Token::Equals,
                ident("2"),
                ident("block-a"),
                Token::BlockStart,
                ident("param-c"),
                Token::Equals,
                ident("3"),
                Token::BlockEnd,
                ident("block-b"),
                Token::BlockStart,
                ident("param-d"),
                Token::Equals,
                string("value-d"),
                ident("param-e"),
                Token::Equals,
                ident("value-e"),
                Token::BlockEnd,
            ],
        );
    }

    #[test]
    fn test_line_tracking() {
        let mut t = Tokenizer::new("a\n\n# c\nb");
        assert_eq!(t.line(), 1);
        assert_eq!(t.next_token().unwrap(), ident("a"));
        assert!(t.has_next());
        assert_eq!(t.line(), 4);
        assert_eq!(t.next_token().unwrap(), ident("b"));
    }

    #[test]
    fn test_newlines_inside_strings_are_counted() {
        let mut t = Tokenizer::new("\"a\nb\" x");
        assert_eq!(t.next_token().unwrap(), string("a\nb"));
        assert_eq!(t.line(), 2);
    }

    #[test]
    fn test_unterminated_string() {
        let mut t = Tokenizer::new("\"abc");
        assert_eq!(t.next_token(), Err(LexError::UnterminatedString));

        let mut t = Tokenizer::new("\"abc\\");
        assert_eq!(t.next_token(), Err(LexError::UnterminatedString));
    }

    #[test]
    fn test_unexpected_character() {
        let mut t = Tokenizer::new("@foo");
        assert_eq!(t.next_token(), Err(LexError::UnexpectedChar('@')));
    }

    #[test]
    fn test_empty_input() {
        let mut t = Tokenizer::new("  ;; # only a comment");
        assert!(!t.has_next());
        assert_eq!(t.next_token(), Err(LexError::UnexpectedEof));
    }

    #[test]
    #[should_panic(expected = "one token of pushback")]
    fn test_double_unread_panics() {
        let mut t = Tokenizer::new("a b");
        t.next_token().unwrap();
        t.unread();
        t.unread();
    }
}
