//! Color palettes for diagram rendering
//!
//! Elements name their color symbolically (`box-1`, `line-1`, ...) and a
//! stylesheet maps the tokens to concrete values. Swapping the stylesheet
//! restyles every diagram without touching the documents.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Debug, Error)]
pub enum StylesheetError {
    #[error("failed to read stylesheet file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stylesheet TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional palette name
    pub name: Option<String>,
    /// Color mappings: token -> CSS color
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette: muted box fills with a dark ink for lines and text
const DEFAULT_PALETTE: &str = r##"
[colors]
# Element box fills
box-1 = "#dbe9f6"
box-2 = "#e3f2dd"
box-3 = "#fdeecd"
box-4 = "#f6dbe4"
box-5 = "#e8e0f4"
box-6 = "#f0f0f0"

# Connector strokes and arrowheads
line-1 = "#333333"
line-2 = "#777777"

# Text
text-1 = "#1a1a1a"
text-2 = "#555555"

# Canvas and label-box background
canvas = "#ffffff"
"##;

impl Stylesheet {
    /// Load a stylesheet from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a stylesheet from TOML text
    pub fn parse(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;
        Ok(Stylesheet {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Resolve a token to a concrete value, if defined here
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    /// Resolve a token, falling back to the default palette and finally to a
    /// per-category default so rendering never lacks a color
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }
        if let Some(color) = Stylesheet::default().resolve(token) {
            return color.to_string();
        }
        let fallback = match token.split('-').next() {
            Some("box") => "#f0f0f0",
            Some("line") => "#333333",
            Some("text") => "#1a1a1a",
            Some("canvas") => "#ffffff",
            _ => "#333333",
        };
        fallback.to_string()
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::parse(DEFAULT_PALETTE).expect("default palette is valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_tokens() {
        let stylesheet = Stylesheet::default();
        assert!(stylesheet.colors.contains_key("box-1"));
        assert!(stylesheet.colors.contains_key("line-1"));
        assert!(stylesheet.colors.contains_key("text-1"));
        assert!(stylesheet.colors.contains_key("canvas"));
    }

    #[test]
    fn test_resolve_hit_and_miss() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.resolve("line-1"), Some("#333333"));
        assert_eq!(stylesheet.resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_falls_back_to_palette() {
        let empty = Stylesheet {
            name: None,
            colors: HashMap::new(),
        };
        assert_eq!(empty.resolve_or_default("box-1"), "#dbe9f6");
    }

    #[test]
    fn test_resolve_or_default_category_fallback() {
        let empty = Stylesheet {
            name: None,
            colors: HashMap::new(),
        };
        assert_eq!(empty.resolve_or_default("box-99"), "#f0f0f0");
        assert_eq!(empty.resolve_or_default("line-99"), "#333333");
        assert_eq!(empty.resolve_or_default("mystery"), "#333333");
    }

    #[test]
    fn test_parse_with_metadata() {
        let stylesheet = Stylesheet::parse(
            r##"
[metadata]
name = "Night"

[colors]
box-1 = "#223344"
"##,
        )
        .unwrap();
        assert_eq!(stylesheet.name, Some("Night".to_string()));
        assert_eq!(stylesheet.resolve("box-1"), Some("#223344"));
    }

    #[test]
    fn test_invalid_toml_error() {
        assert!(Stylesheet::parse("not toml {{").is_err());
    }
}
