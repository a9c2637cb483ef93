//! Schema-driven recursive-descent parser.
//!
//! The grammar is tiny:
//!
//! ```text
//! config    := statement*
//! statement := IDENT '=' value (',' value)*
//!            | IDENT '{' statement* '}'
//! value     := IDENT | STRING
//! ```
//!
//! The spec decides everything else: which names are allowed, how each
//! literal is decoded, and how often an entry may or must appear. Parsing
//! stops at the first error; no partial tree is returned.

mod duration;
mod error;
mod options;
mod value;

use tracing::{debug, trace};

use crate::lexer::{LexError, Token, Tokenizer};
use crate::spec::{pattern, BlockSpec, PropertySpec, Spec};
use crate::tree::{Block, Config, Property};

pub use error::{ParseError, ParseErrorKind};
pub use options::ParseOptions;

/// Parses `text` against `spec` with default [`ParseOptions`].
///
/// ## Example
///
/// ```
/// use schemaconf::{parse, PropertySpec, Section, Spec, ValueType};
///
/// let spec = Spec::new()
///     .strict()
///     .property(PropertySpec::new("workers", ValueType::Int).require());
///
/// let config = parse(&spec, "workers = 4")?;
/// assert_eq!(config.get::<u64>("workers").unwrap(), 4);
///
/// let err = parse(&spec, "threads = 4").unwrap_err();
/// assert_eq!(err.to_string(), "1: unsupported property: threads");
/// # Ok::<(), schemaconf::ParseError>(())
/// ```
pub fn parse(spec: &Spec, text: &str) -> Result<Config, ParseError> {
    parse_with_options(spec, text, &ParseOptions::default())
}

/// Parses `text` against `spec`.
pub fn parse_with_options(
    spec: &Spec,
    text: &str,
    options: &ParseOptions,
) -> Result<Config, ParseError> {
    debug!(bytes = text.len(), strict = spec.strict, "parsing configuration");

    let mut parser = Parser {
        tokens: Tokenizer::new(text),
        options,
    };
    let root = parser.parse_block("", Scope::from(spec), 0)?;

    debug!(
        properties = root.properties.len(),
        blocks = root.blocks.len(),
        "configuration parsed"
    );
    Ok(root.into())
}

/// The part of a spec that governs one nesting level.
#[derive(Clone, Copy)]
struct Scope<'s> {
    properties: &'s [PropertySpec],
    blocks: &'s [BlockSpec],
    strict: bool,
}

impl<'s> From<&'s Spec> for Scope<'s> {
    fn from(spec: &'s Spec) -> Self {
        Self {
            properties: &spec.properties,
            blocks: &spec.blocks,
            strict: spec.strict,
        }
    }
}

impl<'s> From<&'s BlockSpec> for Scope<'s> {
    fn from(spec: &'s BlockSpec) -> Self {
        Self {
            properties: &spec.properties,
            blocks: &spec.blocks,
            strict: spec.strict,
        }
    }
}

struct Parser<'a, 'o> {
    tokens: Tokenizer<'a>,
    options: &'o ParseOptions,
}

impl Parser<'_, '_> {
    fn next(&mut self) -> Result<Token, ParseError> {
        self.tokens.next_token().map_err(|e| self.lex_error(e))
    }

    fn lex_error(&self, err: LexError) -> ParseError {
        ParseError::lexical(err, self.tokens.line())
    }

    fn syntax_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(message, self.tokens.line())
    }

    fn schema_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::schema(message, self.tokens.line())
    }

    fn value_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::value(message, self.tokens.line())
    }

    /// Parses statements until the matching `}` (or end of input for the
    /// root, at depth 0) and checks required entries afterwards.
    fn parse_block(
        &mut self,
        name: &str,
        scope: Scope<'_>,
        depth: usize,
    ) -> Result<Block, ParseError> {
        trace!(block = name, depth, "entering block");

        let mut properties: Vec<Property> = Vec::new();
        let mut blocks: Vec<Block> = Vec::new();
        let mut closed = depth == 0;

        while self.tokens.has_next() {
            let entry = match self.next()? {
                Token::BlockEnd if depth > 0 => {
                    closed = true;
                    break;
                }
                // Statement separator.
                Token::Comma => continue,
                Token::Ident(entry) => entry,
                _ => return Err(self.syntax_error("identifier token expected")),
            };

            let op = if self.tokens.has_next() {
                Some(self.next()?)
            } else {
                None
            };
            match op {
                Some(Token::Equals) => {
                    if let Some(prop) = self.parse_assignment(entry, scope, &properties)? {
                        properties.push(prop);
                    }
                }
                Some(Token::BlockStart) => {
                    let spec = pattern::find(scope.blocks, &entry)
                        .ok_or_else(|| self.schema_error(format!("unsupported block: {entry}")))?;
                    if !spec.repeat && blocks.iter().any(|b| b.name == entry) {
                        return Err(self.schema_error(format!("block '{entry}' already defined")));
                    }
                    if depth >= self.options.max_depth {
                        return Err(ParseError::new(
                            ParseErrorKind::Limit,
                            format!(
                                "block nesting exceeds maximum depth of {}",
                                self.options.max_depth
                            ),
                            self.tokens.line(),
                        ));
                    }
                    blocks.push(self.parse_block(&entry, Scope::from(spec), depth + 1)?);
                }
                _ => return Err(self.operator_expected(&entry, scope)),
            }
        }

        if !closed {
            return Err(self.syntax_error("`}` expected"));
        }

        for spec in scope.properties.iter().filter(|s| s.require) {
            if !properties.iter().any(|p| pattern::matches(&spec.name, &p.name)) {
                return Err(self.schema_error(format!("missing required property '{}'", spec.name)));
            }
        }
        for spec in scope.blocks.iter().filter(|s| s.require) {
            if !blocks.iter().any(|b| pattern::matches(&spec.name, &b.name)) {
                return Err(self.schema_error(format!("missing required block '{}'", spec.name)));
            }
        }

        trace!(
            block = name,
            depth,
            properties = properties.len(),
            blocks = blocks.len(),
            "leaving block"
        );
        Ok(Block {
            name: name.to_string(),
            properties,
            blocks,
        })
    }

    /// Handles `name = value` after the `=` has been read. Returns `None`
    /// when the property is unknown and the scope is not strict.
    fn parse_assignment(
        &mut self,
        name: String,
        scope: Scope<'_>,
        seen: &[Property],
    ) -> Result<Option<Property>, ParseError> {
        let Some(spec) = pattern::find(scope.properties, &name) else {
            if scope.strict {
                return Err(self.schema_error(format!("unsupported property: {name}")));
            }
            if !self.tokens.has_next() {
                return Err(self.syntax_error("value expected"));
            }
            self.skip_value()?;
            debug!(property = %name, line = self.tokens.line(), "dropping unknown property");
            return Ok(None);
        };

        if !spec.repeat && seen.iter().any(|p| p.name == name) {
            return Err(self.schema_error(format!("property '{name}' already defined")));
        }
        if !self.tokens.has_next() {
            return Err(self.syntax_error("value expected"));
        }

        let mut value = self.decode(spec.ty)?;
        if let Some(validator) = &spec.validator {
            value = validator.validate(value).map_err(|e| {
                ParseError::new(ParseErrorKind::Validation, e.to_string(), self.tokens.line())
            })?;
        }

        Ok(Some(Property {
            ty: spec.ty,
            name,
            value,
        }))
    }

    fn operator_expected(&self, entry: &str, scope: Scope<'_>) -> ParseError {
        if pattern::find(scope.properties, entry).is_some() {
            self.syntax_error("`=` expected")
        } else if pattern::find(scope.blocks, entry).is_some() {
            self.syntax_error("`{` expected")
        } else {
            self.syntax_error("`=` or `{` expected")
        }
    }
}
