//! Error types for diagram construction and routing

use thiserror::Error;

use crate::geometry::{PathError, Point};

/// Errors that can occur while building a diagram
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Every candidate anchor for the connector's octant is occupied.
    ///
    /// Routing failure is an ordinary outcome at the [`Border`] level; it
    /// becomes an error only here, where the diagram driver has to decide
    /// what to do with a connector it cannot place.
    ///
    /// [`Border`]: crate::layout::Border
    #[error("no free anchor for connector '{from}' -> '{to}'")]
    AnchorsExhausted { from: String, to: String },

    /// A connection request names an element that was never declared
    #[error("unknown element '{name}'{}", format_suggestions(.suggestions))]
    UnknownElement {
        name: String,
        suggestions: Vec<String>,
    },

    /// Two elements were declared under the same name
    #[error("duplicate element '{name}'")]
    DuplicateElement { name: String },

    /// A connector's source and target are the same element
    #[error("element '{name}' cannot connect to itself")]
    SelfConnection { name: String },

    /// A connector was requested with fewer than one arrowhead; zero heads
    /// would draw nothing and a negative count would push the retracted
    /// polyline past its own tip
    #[error("connector '{from}' -> '{to}' needs at least 1 arrowhead, got {heads}")]
    InvalidHeadCount { from: String, to: String, heads: i32 },

    /// A resolved endpoint no longer matches any anchor on its element,
    /// which happens when an element moves after routing
    #[error("point {point} is not an anchor of element '{element}'")]
    DetachedEndpoint { element: String, point: Point },

    /// Path construction failure
    #[error(transparent)]
    Path(#[from] PathError),
}

impl LayoutError {
    pub fn anchors_exhausted(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::AnchorsExhausted {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn unknown(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownElement {
            name: name.into(),
            suggestions,
        }
    }

    /// Suggested element names, if this error carries any
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownElement { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}
