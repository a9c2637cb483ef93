//! Schema ("spec") describing the expected shape of a configuration document.
//!
//! A spec is a tree of [`PropertySpec`]s and [`BlockSpec`]s. Names may be
//! wildcard patterns: `*` matches any run of characters, so `foo.*` matches
//! `foo.bar`. A block named `*` accepts blocks of any name, which is how a
//! series of uniform blocks is described:
//!
//! ```text
//! sda {
//!     dev = "/dev/sda"
//! }
//! sdb {
//!     dev = "/dev/sdb"
//! }
//! ```
//!
//! Specs are never mutated by parsing and can be shared between parses.

mod error;
mod file;
pub(crate) mod pattern;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tree::Value;

pub use error::SpecError;

/// Declared type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    /// `true` or `false`.
    #[serde(alias = "boolean")]
    Bool,
    /// `<number><unit>` sequence such as `1h30m` or `1.5s`.
    Duration,
    /// Non-negative base-10 integer.
    #[serde(alias = "integer")]
    Int,
    /// Double-quoted string.
    String,
    /// One or more comma-separated double-quoted strings.
    StringList,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Bool => "bool",
            ValueType::Duration => "duration",
            ValueType::Int => "int",
            ValueType::String => "string",
            ValueType::StringList => "string-list",
        })
    }
}

/// Error returned by a [`Validator`]. Its message becomes the parse error
/// message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Custom post-decoding hook for a property value.
///
/// It may reject the value or replace it with another one, including a
/// value of a different variant. Closures of the right shape implement it.
pub trait Validator: Send + Sync {
    fn validate(&self, value: Value) -> Result<Value, ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(Value) -> Result<Value, ValidationError> + Send + Sync,
{
    fn validate(&self, value: Value) -> Result<Value, ValidationError> {
        self(value)
    }
}

/// Describes one expected `name = value` property.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ValueType,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default)]
    pub require: bool,
    #[serde(skip)]
    pub validator: Option<Arc<dyn Validator>>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            repeat: false,
            require: false,
            validator: None,
        }
    }

    /// Allows the property to appear more than once in its block.
    #[must_use]
    pub fn repeat(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Requires at least one occurrence of the property in its block.
    #[must_use]
    pub fn require(mut self) -> Self {
        self.require = true;
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }
}

impl fmt::Debug for PropertySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertySpec")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("repeat", &self.repeat)
            .field("require", &self.require)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}

/// Describes one expected `name { ... }` block.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockSpec {
    pub name: String,
    #[serde(default)]
    pub repeat: bool,
    #[serde(default)]
    pub require: bool,
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
    #[serde(default)]
    pub blocks: Vec<BlockSpec>,
    /// Reject unknown properties inside this block instead of dropping them.
    #[serde(default)]
    pub strict: bool,
}

impl BlockSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repeat: false,
            require: false,
            properties: Vec::new(),
            blocks: Vec::new(),
            strict: false,
        }
    }

    #[must_use]
    pub fn repeat(mut self) -> Self {
        self.repeat = true;
        self
    }

    #[must_use]
    pub fn require(mut self) -> Self {
        self.require = true;
        self
    }

    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    #[must_use]
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn block(mut self, block: BlockSpec) -> Self {
        self.blocks.push(block);
        self
    }
}

/// Root of a schema: a nameless block.
///
/// ## Example
///
/// ```
/// use schemaconf::{BlockSpec, PropertySpec, Spec, ValueType};
///
/// let spec = Spec::new()
///     .strict()
///     .property(PropertySpec::new("listen", ValueType::String).require())
///     .block(
///         BlockSpec::new("*")
///             .repeat()
///             .property(PropertySpec::new("dev", ValueType::String)),
///     );
/// assert_eq!(spec.blocks.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Spec {
    #[serde(default)]
    pub properties: Vec<PropertySpec>,
    #[serde(default)]
    pub blocks: Vec<BlockSpec>,
    #[serde(default)]
    pub strict: bool,
}

impl Spec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    #[must_use]
    pub fn property(mut self, property: PropertySpec) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn block(mut self, block: BlockSpec) -> Self {
        self.blocks.push(block);
        self
    }

    /// Attaches a validator to an existing property spec.
    ///
    /// `path` lists block patterns separated by `/` and ends with the
    /// property pattern, e.g. `"*/dev"`. Patterns are compared literally,
    /// not matched. Returns `false` if no such property spec exists.
    pub fn set_validator(&mut self, path: &str, validator: impl Validator + 'static) -> bool {
        let segments: Vec<&str> = path.split('/').collect();
        match find_property_mut(&mut self.properties, &mut self.blocks, &segments) {
            Some(prop) => {
                prop.validator = Some(Arc::new(validator));
                true
            }
            None => false,
        }
    }
}

fn find_property_mut<'s>(
    properties: &'s mut [PropertySpec],
    blocks: &'s mut [BlockSpec],
    path: &[&str],
) -> Option<&'s mut PropertySpec> {
    match path {
        [] => None,
        [name] => properties.iter_mut().find(|p| p.name == *name),
        [block_name, rest @ ..] => {
            let block = blocks.iter_mut().find(|b| b.name == *block_name)?;
            find_property_mut(&mut block.properties, &mut block.blocks, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accept(v: Value) -> Result<Value, ValidationError> {
        Ok(v)
    }

    #[test]
    fn test_builders_set_flags() {
        let p = PropertySpec::new("foo", ValueType::Int).repeat().require();
        assert!(p.repeat);
        assert!(p.require);
        assert!(p.validator.is_none());

        let b = BlockSpec::new("bar").strict().property(p);
        assert!(b.strict);
        assert!(!b.repeat);
        assert_eq!(b.properties.len(), 1);
    }

    #[test]
    fn test_closure_validator() {
        let p = PropertySpec::new("port", ValueType::Int).validator(|v: Value| match v {
            Value::Int(n) if n > 0 => Ok(v),
            _ => Err(ValidationError::new("port must be positive")),
        });
        let validator = p.validator.unwrap();
        assert_eq!(validator.validate(Value::Int(80)), Ok(Value::Int(80)));
        assert_eq!(
            validator.validate(Value::Int(0)).unwrap_err().to_string(),
            "port must be positive"
        );
    }

    #[test]
    fn test_set_validator_by_path() {
        let mut spec = Spec::new()
            .property(PropertySpec::new("top", ValueType::String))
            .block(BlockSpec::new("*").property(PropertySpec::new("dev", ValueType::String)));

        assert!(spec.set_validator("top", accept));
        assert!(spec.set_validator("*/dev", accept));
        assert!(!spec.set_validator("*/missing", accept));
        assert!(!spec.set_validator("nope/dev", accept));

        assert!(spec.properties[0].validator.is_some());
        assert!(spec.blocks[0].properties[0].validator.is_some());
    }

    #[test]
    fn test_debug_hides_validator_body() {
        let p = PropertySpec::new("x", ValueType::Bool).validator(accept);
        let debug = format!("{p:?}");
        assert!(debug.contains("validator: true"));
    }

    #[test]
    fn test_value_type_display() {
        assert_eq!(ValueType::StringList.to_string(), "string-list");
        assert_eq!(ValueType::Duration.to_string(), "duration");
    }
}
