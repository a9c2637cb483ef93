//! Type-directed decoding of property values.
//!
//! `10` is an integer only when the property is declared as one; declared
//! as a duration it is rejected for lacking a unit.

use super::duration::parse_duration;
use super::{ParseError, Parser};
use crate::lexer::Token;
use crate::spec::ValueType;
use crate::tree::Value;

impl Parser<'_, '_> {
    /// Reads the value tokens of an assignment according to `ty`.
    pub(super) fn decode(&mut self, ty: ValueType) -> Result<Value, ParseError> {
        let tok = self.next()?;
        match ty {
            ValueType::Bool => match tok {
                Token::Ident(s) if s == "true" => Ok(Value::Bool(true)),
                Token::Ident(s) if s == "false" => Ok(Value::Bool(false)),
                _ => Err(self.value_error("invalid boolean value")),
            },
            ValueType::Duration => match tok {
                Token::Ident(s) => parse_duration(&s)
                    .map(Value::Duration)
                    .ok_or_else(|| self.value_error("invalid duration value")),
                _ => Err(self.value_error("invalid duration value")),
            },
            ValueType::Int => match tok {
                Token::Ident(s) => parse_int(&s)
                    .map(Value::Int)
                    .ok_or_else(|| self.value_error("invalid integer value")),
                _ => Err(self.value_error("invalid integer value")),
            },
            ValueType::String => match tok {
                Token::Str(s) => Ok(Value::String(s)),
                _ => Err(self.value_error("string value expected")),
            },
            ValueType::StringList => match tok {
                Token::Str(first) => self.string_list(first).map(Value::StringList),
                _ => Err(self.value_error("strings list expected")),
            },
        }
    }

    /// Collects `, "..."` continuations after the first list element. The
    /// first token that is not a comma is pushed back.
    fn string_list(&mut self, first: String) -> Result<Vec<String>, ParseError> {
        let mut list = vec![first];
        while self.tokens.has_next() {
            if self.next()? != Token::Comma {
                self.tokens.unread();
                break;
            }
            if !self.tokens.has_next() {
                return Err(self.syntax_error("unexpected end of input"));
            }
            match self.next()? {
                Token::Str(s) => list.push(s),
                _ => return Err(self.value_error("strings list expected")),
            }
        }
        Ok(list)
    }

    /// Consumes the value of an assignment nobody asked for: one token, plus
    /// `, "..."` continuations when that token starts a string list.
    ///
    /// A comma followed by anything but a string is a statement separator.
    /// The token after it is pushed back so the next statement still parses.
    pub(super) fn skip_value(&mut self) -> Result<(), ParseError> {
        if !matches!(self.next()?, Token::Str(_)) {
            return Ok(());
        }
        while self.tokens.has_next() {
            if self.next()? != Token::Comma {
                self.tokens.unread();
                break;
            }
            if !self.tokens.has_next() {
                break;
            }
            if !matches!(self.next()?, Token::Str(_)) {
                self.tokens.unread();
                break;
            }
        }
        Ok(())
    }
}

/// Base-10, digits only. Signs are not accepted.
fn parse_int(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
