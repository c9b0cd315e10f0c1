//! Model Sketch - a layout engine for model diagrams
//!
//! Takes a declarative TOML document of named, positioned model elements and
//! connection requests, routes every connector orthogonally around the
//! element boxes, and renders the result as SVG.
//!
//! # Example
//!
//! ```rust
//! use model_sketch::render;
//!
//! let svg = render(r#"
//!     [[element]]
//!     name = "Order"
//!     x = 0
//!     y = 0
//! "#).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod diagram;
pub mod document;
pub mod geometry;
pub mod layout;
pub mod renderer;
pub mod stylesheet;

pub use diagram::Diagram;
pub use document::{DiagramDoc, DocumentError};
pub use geometry::{Direction, Path, Point};
pub use layout::{ConnectorStyle, ElementKind, LayoutConfig, LayoutError};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use stylesheet::Stylesheet;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading or parsing the diagram document
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Error placing elements or routing connectors
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for color resolution
    pub stylesheet: Stylesheet,
    /// Debug mode: dump placement and routing, overlay the anchor grid
    pub debug: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
            stylesheet: Stylesheet::default(),
            debug: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for color resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Render a TOML diagram document to SVG with default configuration
///
/// This is the main entry point for the library. It parses the document,
/// places the elements, routes every connector, and generates SVG output.
///
/// # Example
///
/// ```rust
/// use model_sketch::render;
///
/// let svg = render(r#"
///     [[element]]
///     name = "Order"
///     x = 0
///     y = 0
///
///     [[element]]
///     name = "Invoice"
///     x = 300
///     y = 200
///
///     [[connector]]
///     from = "Order"
///     to = "Invoice"
/// "#).unwrap();
///
/// assert!(svg.contains("Order"));
/// assert!(svg.contains("Invoice"));
/// assert!(svg.contains("<polyline"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a TOML diagram document to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use model_sketch::{render_with_config, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_svg(SvgConfig::default().with_viewbox_padding(50));
///
/// let svg = render_with_config(r#"
///     [[element]]
///     name = "Order"
///     x = 0
///     y = 0
/// "#, config).unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let doc = DiagramDoc::parse(source)?;
    let diagram = doc.build(config.layout)?;

    let mut svg_config = config.svg;
    if config.debug {
        svg_config.show_anchors = true;
        eprintln!("=== Diagram Debug ===");
        for element in diagram.elements() {
            eprintln!(
                "[{}] at {} extent {} pole {}",
                element.name(),
                element.location(),
                element.extent(),
                element.pole()
            );
        }
        for connector in diagram.connectors() {
            eprintln!("route {} ({:?})", connector.path(), connector.direction());
        }
        eprintln!("=====================");
    }

    Ok(render_svg_with_stylesheet(
        &diagram,
        &svg_config,
        &config.stylesheet,
    ))
}
