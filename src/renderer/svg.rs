//! SVG generation from routed diagrams

use crate::diagram::Diagram;
use crate::geometry::{Path, Point};
use crate::layout::{Connector, Element};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Build SVG markup incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    connections: Vec<String>,
}

impl SvgBuilder {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            connections: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Emit the palette as CSS custom properties so symbolic element colors
    /// resolve in the output document. Tokens are sorted for stable output.
    pub fn add_stylesheet(&mut self, stylesheet: &Stylesheet) {
        let mut tokens: Vec<(&String, &String)> = stylesheet.colors.iter().collect();
        tokens.sort();
        let mut css = String::from(":root {");
        for (token, value) in tokens {
            if self.config.pretty_print {
                css.push_str(&format!("\n      --{}: {};", token, value));
            } else {
                css.push_str(&format!(" --{}: {};", token, value));
            }
        }
        if self.config.pretty_print {
            css.push_str("\n    }");
        } else {
            css.push_str(" }");
        }
        self.styles.push(css);
    }

    /// Add a rectangle
    pub fn add_rect(&mut self, origin: Point, extent: Point, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent(),
            prefix,
            class,
            origin.x,
            origin.y,
            extent.x,
            extent.y,
            styles
        ));
    }

    /// Add a small circle (used for debug anchor markers)
    pub fn add_circle(&mut self, center: Point, radius: i32, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}{}" cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent(),
            prefix,
            class,
            center.x,
            center.y,
            radius,
            styles
        ));
    }

    /// Add a centered text element
    pub fn add_text(&mut self, text: &str, at: Point, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}{}" x="{}" y="{}" text-anchor="middle"{}>{}</text>"#,
            self.indent(),
            prefix,
            class,
            at.x,
            at.y,
            styles,
            escape_xml(text)
        ));
    }

    /// Add a connector polyline
    pub fn add_polyline(&mut self, path: &Path, styles: &str) {
        let prefix = self.prefix();
        self.connections.push(format!(
            r#"{}<polyline class="{}connector" points="{}" fill="none"{}/>"#,
            self.indent(),
            prefix,
            format_points(path),
            styles
        ));
    }

    /// Add a closed polygon (arrowhead triangles)
    pub fn add_polygon(&mut self, path: &Path, class: &str, styles: &str) {
        let prefix = self.prefix();
        self.connections.push(format!(
            r#"{}<polygon class="{}{}" points="{}"{}/>"#,
            self.indent(),
            prefix,
            class,
            format_points(path),
            styles
        ));
    }

    /// Add a connector label: background box plus centered text
    pub fn add_label(&mut self, origin: Point, extent: Point, text_at: Point, text: &str) {
        let prefix = self.prefix();
        self.connections.push(format!(
            r#"{}<rect class="{}label-box" x="{}" y="{}" width="{}" height="{}" fill="var(--canvas)"/>"#,
            self.indent(),
            prefix,
            origin.x,
            origin.y,
            extent.x,
            extent.y
        ));
        self.connections.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" text-anchor="middle" fill="var(--text-2)">{}</text>"#,
            self.indent(),
            prefix,
            text_at.x,
            text_at.y,
            escape_xml(text)
        ));
    }

    /// Assemble the final SVG string
    pub fn build(self, origin: Point, extent: Point) -> String {
        let pad = self.config.viewbox_padding;
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            origin.x - pad,
            origin.y - pad,
            extent.x + 2 * pad,
            extent.y + 2 * pad
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str(self.indent());
            svg.push_str("<style>");
            svg.push_str(nl);
            for style in &self.styles {
                if self.config.pretty_print {
                    svg.push_str("    ");
                }
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str(self.indent());
            svg.push_str("</style>");
            svg.push_str(nl);
        }

        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(nl);
        }
        // Connectors draw on top of element boxes
        for connection in &self.connections {
            svg.push_str(connection);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a diagram to SVG with the default stylesheet
pub fn render_svg(diagram: &Diagram, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(diagram, config, &Stylesheet::default())
}

/// Render a diagram to SVG with a custom stylesheet
pub fn render_svg_with_stylesheet(
    diagram: &Diagram,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    // Merge custom tokens over the default palette so every category token
    // referenced by an element resolves to something.
    let mut merged = Stylesheet::default();
    merged
        .colors
        .extend(stylesheet.colors.iter().map(|(k, v)| (k.clone(), v.clone())));
    builder.add_stylesheet(&merged);

    for element in diagram.elements() {
        render_element(element, diagram, &mut builder);
        if config.show_anchors {
            render_anchors(element, &mut builder);
        }
    }
    for connector in diagram.connectors() {
        render_connector(connector, &mut builder);
    }

    let (origin, extent) = diagram.bounds();
    builder.build(origin, extent)
}

fn render_element(element: &Element, diagram: &Diagram, builder: &mut SvgBuilder) {
    let fill = format!(r#" fill="{}" stroke="none""#, color_attr(element.color()));
    builder.add_rect(element.location(), element.extent(), "element", &fill);
    builder.add_rect(
        element.location(),
        element.extent(),
        "element-outline",
        r#" fill="none" stroke="var(--line-1)""#,
    );
    for (at, line) in element.text_lines(diagram.config()) {
        builder.add_text(&line, at, "name", r#" fill="var(--text-1)""#);
    }
}

fn render_anchors(element: &Element, builder: &mut SvgBuilder) {
    use crate::layout::EdgeIndex;
    for index in [
        EdgeIndex::Left,
        EdgeIndex::Right,
        EdgeIndex::Top,
        EdgeIndex::Bottom,
    ] {
        for anchor in element.border().edge(index).anchors() {
            let (class, style) = if anchor.is_empty() {
                ("anchor", r#" fill="none" stroke="var(--line-2)""#)
            } else {
                ("anchor-occupied", r#" fill="var(--line-1)""#)
            };
            builder.add_circle(anchor.location(), 3, class, style);
        }
    }
}

fn render_connector(connector: &Connector, builder: &mut SvgBuilder) {
    builder.add_polyline(&connector.polyline(), r#" stroke="var(--line-1)""#);
    let arrow_fill = if connector.filled() {
        r#" fill="var(--line-1)" stroke="var(--line-1)""#
    } else {
        r#" fill="var(--canvas)" stroke="var(--line-1)""#
    };
    for arrow in connector.arrows() {
        builder.add_polygon(&arrow, "arrow", arrow_fill);
    }
    if let Some(label) = connector.label_box() {
        builder.add_label(label.origin, label.extent, label.text_at, &label.text);
    }
}

/// Concrete colors pass through; symbolic tokens become CSS variable
/// references backed by the emitted palette
fn color_attr(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("var(--{})", color)
    }
}

fn format_points(path: &Path) -> String {
    path.points()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ConnectorStyle, ElementKind};

    fn sample_diagram() -> Diagram {
        let mut diagram = Diagram::new();
        diagram
            .add_element("Order", "box-1", ElementKind::Model, Point::new(0, 0))
            .unwrap();
        diagram
            .add_element("Invoice", "#ff8800", ElementKind::Model, Point::new(300, 200))
            .unwrap();
        diagram
            .connect(
                "Order",
                "Invoice",
                ConnectorStyle {
                    label: Some("billed as".to_string()),
                    ..ConnectorStyle::default()
                },
            )
            .unwrap();
        diagram
    }

    #[test]
    fn test_render_structure() {
        let svg = render_svg(&sample_diagram(), &SvgConfig::default());
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(svg.contains("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("ms-element"));
        assert!(svg.contains("ms-connector"));
        assert!(svg.contains("ms-arrow"));
        assert!(svg.contains("Order"));
        assert!(svg.contains("Invoice"));
        assert!(svg.contains("billed as"));
    }

    #[test]
    fn test_symbolic_and_literal_colors() {
        let svg = render_svg(&sample_diagram(), &SvgConfig::default());
        assert!(svg.contains(r#"fill="var(--box-1)""#));
        assert!(svg.contains(r##"fill="#ff8800""##));
        assert!(svg.contains("--box-1: #dbe9f6;"));
    }

    #[test]
    fn test_not_standalone_omits_declaration() {
        let config = SvgConfig::default().with_standalone(false);
        let svg = render_svg(&sample_diagram(), &config);
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_compact_output_has_no_newlines() {
        let config = SvgConfig::default().with_pretty_print(false);
        let svg = render_svg(&sample_diagram(), &config);
        assert!(!svg.contains('\n'));
    }

    #[test]
    fn test_anchor_overlay_follows_config() {
        let diagram = sample_diagram();
        let plain = render_svg(&diagram, &SvgConfig::default());
        let overlay = render_svg(&diagram, &SvgConfig::default().with_show_anchors(true));
        assert!(!plain.contains("ms-anchor"));
        assert!(overlay.contains("ms-anchor"));
        assert!(overlay.contains("ms-anchor-occupied"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & c > d"), "a &lt; b &amp; c &gt; d");
    }

    #[test]
    fn test_class_prefix_override() {
        let config = SvgConfig::default().with_class_prefix("uml-");
        let svg = render_svg(&sample_diagram(), &config);
        assert!(svg.contains("uml-element"));
        assert!(!svg.contains("ms-element"));
    }
}
