//! Typed lookups over a parsed [`Block`] or [`Config`](super::Config).
//!
//! The parser already guarantees each property's type, so these helpers
//! only look things up by name. A type mismatch can still happen when the
//! caller asks for the wrong type or a validator changed the value's variant.

use std::time::Duration;

use thiserror::Error;

use super::{Block, Property, Value};
use crate::spec::ValueType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AccessError {
    #[error("`{0}` property is not defined")]
    Missing(String),

    #[error("`{name}` property is {found}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: ValueType,
        found: ValueType,
    },
}

/// Rust types a [`Value`] can be read as.
pub trait FromValue: Sized {
    const TYPE: ValueType;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    const TYPE: ValueType = ValueType::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for Duration {
    const TYPE: ValueType = ValueType::Duration;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }
}

impl FromValue for u64 {
    const TYPE: ValueType = ValueType::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for String {
    const TYPE: ValueType = ValueType::String;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for Vec<String> {
    const TYPE: ValueType = ValueType::StringList;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::StringList(l) => Some(l.clone()),
            _ => None,
        }
    }
}

fn convert<T: FromValue>(prop: &Property) -> Result<T, AccessError> {
    T::from_value(&prop.value).ok_or_else(|| AccessError::TypeMismatch {
        name: prop.name.clone(),
        expected: T::TYPE,
        found: prop.value.value_type(),
    })
}

/// Read access shared by blocks and the root config.
///
/// Lookups by name return the first entry in source order unless the
/// method says otherwise.
pub trait Section {
    fn properties(&self) -> &[Property];

    fn blocks(&self) -> &[Block];

    /// Whether a property or a block named `name` exists.
    fn has(&self, name: &str) -> bool {
        self.property(name).is_some() || self.block(name).is_some()
    }

    fn property(&self, name: &str) -> Option<&Property> {
        self.properties().iter().find(|p| p.name == name)
    }

    fn value(&self, name: &str) -> Option<&Value> {
        self.property(name).map(|p| &p.value)
    }

    /// All values assigned to `name`, in source order.
    fn values(&self, name: &str) -> Vec<&Value> {
        self.properties()
            .iter()
            .filter(|p| p.name == name)
            .map(|p| &p.value)
            .collect()
    }

    fn get<T: FromValue>(&self, name: &str) -> Result<T, AccessError> {
        let prop = self
            .property(name)
            .ok_or_else(|| AccessError::Missing(name.to_string()))?;
        convert(prop)
    }

    /// Like [`get`](Self::get) but returns `default` when `name` is absent.
    /// A value of the wrong type is still an error.
    fn get_or<T: FromValue>(&self, name: &str, default: T) -> Result<T, AccessError> {
        match self.property(name) {
            Some(prop) => convert(prop),
            None => Ok(default),
        }
    }

    fn get_all<T: FromValue>(&self, name: &str) -> Result<Vec<T>, AccessError> {
        self.properties()
            .iter()
            .filter(|p| p.name == name)
            .map(convert::<T>)
            .collect()
    }

    /// First direct child block named `name`.
    fn block(&self, name: &str) -> Option<&Block> {
        self.blocks().iter().find(|b| b.name == name)
    }

    /// All direct child blocks named `name`, in source order.
    fn blocks_named(&self, name: &str) -> Vec<&Block> {
        self.blocks().iter().filter(|b| b.name == name).collect()
    }
}
