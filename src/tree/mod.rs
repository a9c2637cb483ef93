//! Parsed configuration tree.
//!
//! The tree keeps every property and block in source order, including
//! repeated names. Read values out of it through the [`Section`] trait.

mod access;

use std::time::Duration;

use serde::Serialize;

use crate::spec::ValueType;

pub use access::{AccessError, FromValue, Section};

/// A decoded property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Duration(Duration),
    Int(u64),
    String(String),
    StringList(Vec<String>),
}

impl Value {
    /// The type this value's variant corresponds to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Duration(_) => ValueType::Duration,
            Value::Int(_) => ValueType::Int,
            Value::String(_) => ValueType::String,
            Value::StringList(_) => ValueType::StringList,
        }
    }
}

/// A `name = value` entry.
///
/// `ty` is the type declared by the spec that matched `name`. A validator
/// may have replaced the decoded value, so `value` can hold another variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub ty: ValueType,
    pub name: String,
    pub value: Value,
}

/// A named `name { ... }` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub name: String,
    pub properties: Vec<Property>,
    pub blocks: Vec<Block>,
}

/// Result of a successful parse: the unnamed root block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub properties: Vec<Property>,
    pub blocks: Vec<Block>,
}

impl From<Block> for Config {
    fn from(root: Block) -> Self {
        Self {
            properties: root.properties,
            blocks: root.blocks,
        }
    }
}

impl Section for Block {
    fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl Section for Config {
    fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}
