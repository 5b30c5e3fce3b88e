//! Serializable host document.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::attrs::Attributes;
use crate::foundation::error::{FacadeError, FacadeResult};
use crate::scene::position::Position;

/// One element of the host document.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    /// Registered component tag, e.g. `wall-surface`.
    pub tag: String,
    /// String attributes consumed by the component.
    #[serde(default)]
    pub attrs: Attributes,
    /// Placement inside the parent container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Nested elements, rendered through a container's content slot.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementDef>,
}

impl ElementDef {
    /// Element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute insert.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Builder-style placement.
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder-style child append.
    pub fn child(mut self, child: ElementDef) -> Self {
        self.children.push(child);
        self
    }
}

/// JSON-facing host document: a single root element tree.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentDef {
    /// Top-level element.
    pub root: ElementDef,
}

impl DocumentDef {
    /// Wrap a root element.
    pub fn new(root: ElementDef) -> Self {
        Self { root }
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FacadeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FacadeError::serde(format!("parse facade document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json(s: &str) -> FacadeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FacadeError::serde(format!("parse facade document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FacadeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FacadeError::validation(format!("open facade document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> FacadeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FacadeError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
