//! Element geometry: named boxes with a border of connection anchors

use crate::geometry::Point;

use super::border::Border;
use super::config::{LayoutConfig, BASELINE_HEIGHT, LINE_GROWTH};

/// Kind of diagram element, deciding its minimum box width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    /// A plain model box (narrower minimum)
    #[default]
    Model,
    /// A text box sized generously for prose-like names
    Text,
}

/// A named, colored, rectangular diagram element.
///
/// The extent derives from the name: words are paired two-per-line, the box
/// grows vertically per extra line and horizontally to fit the longest line.
/// Elements must be positioned before connectors are routed; moving one
/// afterwards invalidates the anchor points its connectors resolved to.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    color: String,
    kind: ElementKind,
    location: Point,
    extent: Point,
    border: Border,
}

impl Element {
    pub fn new(name: impl Into<String>, color: impl Into<String>, kind: ElementKind) -> Self {
        Self::with_config(name, color, kind, &LayoutConfig::default())
    }

    pub fn with_config(
        name: impl Into<String>,
        color: impl Into<String>,
        kind: ElementKind,
        config: &LayoutConfig,
    ) -> Self {
        let name = name.into();
        let extent = measure(&name, kind, config);
        let mut element = Self {
            name,
            color: color.into(),
            kind,
            location: Point::new(0, 0),
            extent,
            border: Border::new(),
        };
        element.border.locate(element.location, element.extent);
        element
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn extent(&self) -> Point {
        self.extent
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn border_mut(&mut self) -> &mut Border {
        &mut self.border
    }

    /// Center of the element box, the nominal routing target
    pub fn pole(&self) -> Point {
        self.location + self.extent.reduced(2)
    }

    /// Move the element and re-derive its border from scratch
    pub fn move_to(&mut self, location: Point) {
        self.location = location;
        self.border.locate(self.location, self.extent);
    }

    /// Resolve the anchor a connector should leave from when heading toward
    /// the far element's pole
    pub fn assign_head(&self, toward: Point) -> Option<Point> {
        self.border.assign_head(self.pole(), toward)
    }

    /// Resolve the anchor a connector arriving from the far element's pole
    /// should attach to
    pub fn assign_tail(&self, from: Point) -> Option<Point> {
        self.border.assign_tail(from, self.pole())
    }

    /// Display lines of the name: consecutive word pairs
    pub fn lines(&self) -> Vec<String> {
        wrap_name(&self.name)
    }

    /// Centered text line positions inside the box
    pub fn text_lines(&self, config: &LayoutConfig) -> Vec<(Point, String)> {
        let lines = self.lines();
        let count = lines.len() as i32;
        let center = self.pole();
        // Baseline of the first line, shifted up so the block stays centered
        let first = center.y + 5 - (count - 1) * (config.line_spacing / 2);
        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                (
                    Point::new(center.x, first + i as i32 * config.line_spacing),
                    line,
                )
            })
            .collect()
    }
}

/// Pair words two-per-line: each even-indexed word starts a line, the
/// following word (if any) joins it.
fn wrap_name(name: &str) -> Vec<String> {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.is_empty() {
        return vec![String::new()];
    }
    words.chunks(2).map(|pair| pair.join(" ")).collect()
}

fn measure(name: &str, kind: ElementKind, config: &LayoutConfig) -> Point {
    let lines = wrap_name(name);
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let min_width = match kind {
        ElementKind::Model => config.model_width,
        ElementKind::Text => config.text_width,
    };
    let width = min_width.max(longest * config.char_width);
    let height = BASELINE_HEIGHT + (lines.len() as i32 - 1) * LINE_GROWTH;
    Point::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::anchor::EdgeIndex;

    #[test]
    fn test_wrap_pairs_words() {
        assert_eq!(wrap_name("Order"), vec!["Order"]);
        assert_eq!(wrap_name("Order Item"), vec!["Order Item"]);
        assert_eq!(wrap_name("Order Item List"), vec!["Order Item", "List"]);
        assert_eq!(
            wrap_name("A B C D E"),
            vec!["A B", "C D", "E"]
        );
    }

    #[test]
    fn test_wrap_empty_name() {
        assert_eq!(wrap_name("  "), vec![String::new()]);
    }

    #[test]
    fn test_model_box_minimum_extent() {
        let element = Element::new("A", "box-1", ElementKind::Model);
        assert_eq!(element.extent(), Point::new(140, 44));
    }

    #[test]
    fn test_text_box_minimum_extent() {
        let element = Element::new("A", "box-1", ElementKind::Text);
        assert_eq!(element.extent(), Point::new(200, 44));
    }

    #[test]
    fn test_height_grows_per_line() {
        // Four words wrap into two lines
        let element = Element::new("Customer Billing Address Book", "box-1", ElementKind::Model);
        assert_eq!(element.extent().y, 52);
    }

    #[test]
    fn test_width_fits_longest_line() {
        // "Autonomous Replication" is 22 chars: 22 * 8 = 176 > 140
        let element = Element::new("Autonomous Replication Agent", "box-1", ElementKind::Model);
        assert_eq!(element.extent().x, 176);
    }

    #[test]
    fn test_pole_is_box_center() {
        let mut element = Element::new("A", "box-1", ElementKind::Model);
        element.move_to(Point::new(300, 200));
        assert_eq!(element.pole(), Point::new(370, 222));
    }

    #[test]
    fn test_move_rederives_border() {
        let mut element = Element::new("A", "box-1", ElementKind::Model);
        element.move_to(Point::new(300, 200));
        let border = element.border();
        assert_eq!(
            border.edge(EdgeIndex::Top).anchors()[1].location(),
            Point::new(370, 200)
        );
        assert_eq!(border.edge_of(Point::new(70, 0)), None);
    }

    #[test]
    fn test_text_lines_centered() {
        let element = Element::new("Order", "box-1", ElementKind::Model);
        let lines = element.text_lines(&LayoutConfig::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Point::new(70, 27));
        assert_eq!(lines[0].1, "Order");
    }
}
