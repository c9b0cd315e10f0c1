//! Declarative diagram documents
//!
//! The collaborators that normally feed this engine (a fact parser and a
//! topic registry) are reduced here to a small TOML document: named, colored,
//! pre-positioned elements plus connection requests. Connectors are routed in
//! declaration order, which makes anchor contention deterministic.
//!
//! ```toml
//! [[element]]
//! name = "Order"
//! color = "box-1"
//! x = 0
//! y = 0
//!
//! [[element]]
//! name = "Invoice"
//! x = 300
//! y = 200
//!
//! [[connector]]
//! from = "Order"
//! to = "Invoice"
//! label = "billed as"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::diagram::Diagram;
use crate::geometry::Point;
use crate::layout::{ConnectorStyle, ElementKind, LayoutConfig, LayoutError};

/// Errors from reading or parsing a diagram document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read diagram document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse diagram document: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A parsed diagram document, not yet routed
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramDoc {
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementDecl>,
    #[serde(default, rename = "connector")]
    pub connectors: Vec<ConnectorDecl>,
}

/// One declared element with its assigned origin
#[derive(Debug, Clone, Deserialize)]
pub struct ElementDecl {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub kind: ElementKind,
    pub x: i32,
    pub y: i32,
}

/// One connection request between two declared elements
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorDecl {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_heads")]
    pub heads: i32,
    #[serde(default)]
    pub filled: bool,
}

fn default_color() -> String {
    "box-1".to_string()
}

fn default_heads() -> i32 {
    1
}

impl DiagramDoc {
    /// Parse a document from TOML text
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a document from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Place every element and route every connector, in declaration order
    pub fn build(&self, config: LayoutConfig) -> Result<Diagram, LayoutError> {
        let mut diagram = Diagram::with_config(config);
        for decl in &self.elements {
            diagram.add_element(
                &decl.name,
                &decl.color,
                decl.kind,
                Point::new(decl.x, decl.y),
            )?;
        }
        for decl in &self.connectors {
            diagram.connect(
                &decl.from,
                &decl.to,
                ConnectorStyle {
                    label: decl.label.clone(),
                    heads: decl.heads,
                    filled: decl.filled,
                },
            )?;
        }
        Ok(diagram)
    }
}

// serde needs the kind names in lowercase document form
impl<'de> Deserialize<'de> for ElementKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        match value.as_str() {
            "model" => Ok(ElementKind::Model),
            "text" => Ok(ElementKind::Text),
            other => Err(serde::de::Error::unknown_variant(other, &["model", "text"])),
        }
    }
}
