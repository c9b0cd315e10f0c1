//! SVG renderer for routed diagrams
//!
//! This module maps the engine's geometric output (rectangles, polylines,
//! arrow triangles, label boxes) one-to-one onto SVG shapes. It is the only
//! place that knows any markup syntax.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_stylesheet};
