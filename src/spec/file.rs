//! Loading specs from TOML schema definitions.
//!
//! ```toml
//! strict = true
//!
//! [[properties]]
//! name = "listen"
//! type = "string"
//! require = true
//!
//! [[blocks]]
//! name = "*"
//! repeat = true
//!
//! [[blocks.properties]]
//! name = "dev"
//! type = "string"
//! ```
//!
//! Validators cannot be expressed in TOML; attach them afterwards with
//! [`Spec::set_validator`].

use std::path::Path;

use super::{BlockSpec, PropertySpec, Spec, SpecError};

impl Spec {
    /// Parses a spec from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, SpecError> {
        let spec: Spec = toml::from_str(s)?;
        spec.check_names()?;
        Ok(spec)
    }

    /// Loads a spec from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpecError::NotFound(path.to_path_buf())
            } else {
                SpecError::Unreadable {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let spec: Spec = toml::from_str(&contents).map_err(|e| SpecError::InvalidFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        spec.check_names()?;
        Ok(spec)
    }

    fn check_names(&self) -> Result<(), SpecError> {
        check_level(&self.properties, &self.blocks, "")
    }
}

fn check_level(
    properties: &[PropertySpec],
    blocks: &[BlockSpec],
    parent: &str,
) -> Result<(), SpecError> {
    let location = |name: &str| {
        if parent.is_empty() {
            name.to_string()
        } else {
            format!("{parent}/{name}")
        }
    };

    if properties.iter().any(|p| p.name.is_empty()) {
        return Err(SpecError::EmptyName(location("<property>")));
    }
    for block in blocks {
        if block.name.is_empty() {
            return Err(SpecError::EmptyName(location("<block>")));
        }
        check_level(&block.properties, &block.blocks, &location(&block.name))?;
    }
    Ok(())
}
