//! Connector path synthesis and arrowhead placement

use crate::geometry::{Direction, Path, Point};

use super::anchor::EdgeIndex;
use super::element::Element;
use super::error::LayoutError;

/// Width reserved per character of a connector label
const LABEL_CHAR_WIDTH: i32 = 7;

/// Height of a connector label box
const LABEL_HEIGHT: i32 = 16;

/// Presentation options for a connector
#[derive(Debug, Clone)]
pub struct ConnectorStyle {
    /// Optional text drawn in a box along the path
    pub label: Option<String>,
    /// Number of stacked arrowhead triangles at the target end
    pub heads: i32,
    /// Filled arrowheads; unfilled ones get the line retracted behind them
    pub filled: bool,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            label: None,
            heads: 1,
            filled: false,
        }
    }
}

/// Geometry of a connector label: a background box and a centered text point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBox {
    pub origin: Point,
    pub extent: Point,
    pub text_at: Point,
    pub text: String,
}

/// The routed connection between two elements.
///
/// Immutable after construction. The stored path runs from the *target*
/// anchor back to the source anchor, so the head segment (and with it every
/// arrowhead) sits at the element being pointed at.
#[derive(Debug, Clone)]
pub struct Connector {
    path: Path,
    heads: i32,
    filled: bool,
    label: Option<String>,
}

impl Connector {
    /// Resolve anchors on both elements and synthesize the orthogonal path.
    ///
    /// This only reads anchor occupancy; committing the two endpoints is the
    /// diagram driver's second phase, after which the anchors refuse further
    /// routing requests.
    pub fn between(
        source: &Element,
        target: &Element,
        style: ConnectorStyle,
    ) -> Result<Connector, LayoutError> {
        let tip = source
            .assign_head(target.pole())
            .ok_or_else(|| LayoutError::anchors_exhausted(source.name(), target.name()))?;
        let end = target
            .assign_tail(source.pole())
            .ok_or_else(|| LayoutError::anchors_exhausted(source.name(), target.name()))?;
        let tip_edge = source
            .border()
            .edge_of(tip)
            .ok_or(LayoutError::DetachedEndpoint {
                element: source.name().to_string(),
                point: tip,
            })?;
        let end_edge = target
            .border()
            .edge_of(end)
            .ok_or(LayoutError::DetachedEndpoint {
                element: target.name().to_string(),
                point: end,
            })?;

        let path = Path::new(route(tip, end, tip_edge, end_edge))?.reverse();
        Ok(Connector {
            path,
            heads: style.heads,
            filled: style.filled,
            label: style.label,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn heads(&self) -> i32 {
        self.heads
    }

    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Arrowhead orientation, derived from the head segment
    pub fn direction(&self) -> Direction {
        self.path.direction()
    }

    /// The polyline to stroke. Unfilled arrowheads get the head point
    /// retracted by the tip offset so the line does not cross the open
    /// triangles.
    pub fn polyline(&self) -> Path {
        if self.filled {
            self.path.clone()
        } else {
            let nudged = self.path.tip() + self.direction().tip_offset(self.heads);
            self.path.with_head(nudged)
        }
    }

    /// One triangle path per arrowhead, stacked back along the head segment
    pub fn arrows(&self) -> Vec<Path> {
        let direction = self.direction();
        (0..self.heads)
            .map(|index| direction.build_arrow(self.path.head(), index))
            .collect()
    }

    /// Centered label geometry. Short paths carry the label on the tail
    /// segment, next to the source element; bent 4-point paths carry it on
    /// the head segment, near the destination.
    pub fn label_box(&self) -> Option<LabelBox> {
        let text = self.label.clone()?;
        let segment = if self.path.len() < 4 {
            self.path.tail()
        } else {
            self.path.head()
        };
        let mid = (segment.0 + segment.1).reduced(2);
        let width = text.chars().count() as i32 * LABEL_CHAR_WIDTH;
        Some(LabelBox {
            origin: mid - Point::new(width / 2, LABEL_HEIGHT / 2),
            extent: Point::new(width, LABEL_HEIGHT),
            text_at: mid + Point::new(0, 4),
            text,
        })
    }
}

/// Orthogonal route from the source anchor to the target anchor: straight
/// when axis-aligned, an L-bend across orientation classes, a Z-bend within
/// one.
fn route(tip: Point, end: Point, tip_edge: EdgeIndex, end_edge: EdgeIndex) -> Vec<Point> {
    let delta = end - tip;
    if delta.x == 0 || delta.y == 0 {
        return vec![tip, end];
    }
    if tip_edge.is_horizontal() != end_edge.is_horizontal() {
        return vec![tip, Point::new(tip.x, end.y), end];
    }
    let first = Point::new(tip.x, tip.y + delta.y / 3);
    let second = Point::new(end.x, first.y);
    vec![tip, first, second, end]
}
