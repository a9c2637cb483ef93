//! Schema-driven parser for a small block-structured configuration language.
//!
//! Documents are nested named blocks holding `name = value` properties:
//!
//! ```text
//! # global settings
//! listen = "0.0.0.0:8080"
//! heartbeat-ttl = 3s
//!
//! sda {
//!     dev = "/dev/sda"
//!     tags = "fast", "ssd"
//! }
//! ```
//!
//! A caller-supplied [`Spec`] says which names may appear, their types, and
//! how often they may or must occur. [`parse`] checks the document against
//! it and returns a typed [`Config`] tree or the first [`ParseError`].

mod error;
mod file;
pub mod lexer;
pub mod parser;
pub mod spec;
pub mod tree;

pub use error::Error;
pub use file::{parse_file, parse_file_with_options};
pub use parser::{parse, parse_with_options, ParseError, ParseErrorKind, ParseOptions};
pub use spec::{BlockSpec, PropertySpec, Spec, SpecError, ValidationError, Validator, ValueType};
pub use tree::{AccessError, Block, Config, FromValue, Property, Section, Value};
