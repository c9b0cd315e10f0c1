//! The four-edged border of an element and its routing heuristic
//!
//! Routing classifies the relative position of two poles into one of nine
//! compass octants (3x3 sign combinations) and picks candidate edges from two
//! fixed tables. Head and tail routing deliberately disagree about which
//! table to consult first: long vertical separations then settle on a side
//! edge at one end instead of forcing both ends onto top/bottom edges.

use crate::geometry::Point;

use super::anchor::{Anchor, ConnectorId, Edge, EdgeIndex};
use super::config::OPTIMAL_ROUTE_DY;

/// Primary edge choice per octant
const BEST_EDGE: [EdgeIndex; 9] = [
    EdgeIndex::Top,
    EdgeIndex::Top,
    EdgeIndex::Top,
    EdgeIndex::Left,
    EdgeIndex::Top,
    EdgeIndex::Right,
    EdgeIndex::Bottom,
    EdgeIndex::Bottom,
    EdgeIndex::Bottom,
];

/// Fallback edge choice per octant
const NEXT_EDGE: [EdgeIndex; 9] = [
    EdgeIndex::Left,
    EdgeIndex::Top,
    EdgeIndex::Right,
    EdgeIndex::Left,
    EdgeIndex::Top,
    EdgeIndex::Right,
    EdgeIndex::Left,
    EdgeIndex::Bottom,
    EdgeIndex::Right,
];

/// Octant of `end` relative to `tip`: the sign pair of the delta, shifted
/// into {0,1,2} per axis and flattened row-major to 0..8.
fn octant(tip: Point, end: Point) -> usize {
    ((end - tip).signs() + Point::new(1, 1)).combine(3) as usize
}

/// The four edges of one element's bounding box.
///
/// Strict ownership: a border owns its edges, each edge its three anchors.
/// `locate` recomputes everything from the element's origin and extent.
#[derive(Debug, Clone)]
pub struct Border {
    edges: [Edge; 4],
}

impl Default for Border {
    fn default() -> Self {
        Self::new()
    }
}

impl Border {
    pub fn new() -> Self {
        Self {
            edges: [
                Edge::new(EdgeIndex::Left),
                Edge::new(EdgeIndex::Right),
                Edge::new(EdgeIndex::Top),
                Edge::new(EdgeIndex::Bottom),
            ],
        }
    }

    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[Self::slot(index)]
    }

    fn edge_mut(&mut self, index: EdgeIndex) -> &mut Edge {
        &mut self.edges[Self::slot(index)]
    }

    fn slot(index: EdgeIndex) -> usize {
        match index {
            EdgeIndex::Left => 0,
            EdgeIndex::Right => 1,
            EdgeIndex::Top => 2,
            EdgeIndex::Bottom => 3,
        }
    }

    /// Recompute all edge centers from the element's top-left origin and
    /// `(width, height)` extent. Anchor occupancy is preserved; locations
    /// and lookup tables are rebuilt.
    pub fn locate(&mut self, origin: Point, extent: Point) {
        let (w, h) = (extent.x, extent.y);
        self.edge_mut(EdgeIndex::Top)
            .set_center(origin + Point::new(w / 2, 0), w);
        self.edge_mut(EdgeIndex::Bottom)
            .set_center(origin + Point::new(w / 2, h), w);
        self.edge_mut(EdgeIndex::Left)
            .set_center(origin + Point::new(0, h / 2), h);
        self.edge_mut(EdgeIndex::Right)
            .set_center(origin + Point::new(w, h / 2), h);
    }

    /// Primary edge for a route from `tip` toward `end`
    pub fn best_edge(&self, tip: Point, end: Point) -> &Edge {
        self.edge(BEST_EDGE[octant(tip, end)])
    }

    /// Fallback edge for a route from `tip` toward `end`
    pub fn next_edge(&self, tip: Point, end: Point) -> &Edge {
        self.edge(NEXT_EDGE[octant(tip, end)])
    }

    /// Resolve the head-side anchor for a connector leaving this element's
    /// pole (`tip`) toward the far pole (`end`).
    ///
    /// Short vertical separations try the primary edge first; anything at or
    /// beyond [`OPTIMAL_ROUTE_DY`] goes straight to the fallback edge. `None`
    /// means every eligible anchor is already occupied.
    pub fn assign_head(&self, tip: Point, end: Point) -> Option<Point> {
        if (end.y - tip.y).abs() < OPTIMAL_ROUTE_DY {
            if let Some(location) = self.best_edge(tip, end).assign(tip, end) {
                return Some(location);
            }
        }
        self.next_edge(tip, end).assign(tip, end)
    }

    /// Resolve the tail-side anchor for a connector arriving at this
    /// element's pole (`end`) from the far pole (`tip`).
    ///
    /// Mirror image of [`assign_head`](Self::assign_head): the table
    /// preference is swapped and the direction of travel reversed.
    pub fn assign_tail(&self, tip: Point, end: Point) -> Option<Point> {
        if (end.y - tip.y).abs() < OPTIMAL_ROUTE_DY {
            if let Some(location) = self.next_edge(end, tip).assign(end, tip) {
                return Some(location);
            }
        }
        self.best_edge(end, tip).assign(end, tip)
    }

    /// Which edge carries an anchor at exactly this point, if any
    pub fn edge_of(&self, location: Point) -> Option<EdgeIndex> {
        self.edges
            .iter()
            .find(|edge| edge.anchor_at(location).is_some())
            .map(Edge::index)
    }

    /// The anchor at exactly this point, scanning all four edges
    pub fn anchor_at(&self, location: Point) -> Option<&Anchor> {
        self.edges.iter().find_map(|edge| edge.anchor_at(location))
    }

    /// Register connectors against the anchor their shared head resolves to,
    /// marking it occupied for all future routing requests.
    pub fn add_heads(&mut self, tip: Point, connectors: &[ConnectorId]) {
        self.add_at(tip, connectors);
    }

    /// Register connectors against the anchor their shared end resolves to
    pub fn add_tails(&mut self, end: Point, connectors: &[ConnectorId]) {
        self.add_at(end, connectors);
    }

    fn add_at(&mut self, location: Point, connectors: &[ConnectorId]) {
        if let Some(anchor) = self
            .edges
            .iter_mut()
            .find_map(|edge| edge.anchor_at_mut(location))
        {
            anchor.add(connectors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border_at(x: i32, y: i32) -> Border {
        let mut border = Border::new();
        border.locate(Point::new(x, y), Point::new(140, 44));
        border
    }

    #[test]
    fn test_octant_tables_are_total() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let tip = Point::new(0, 0);
                let end = Point::new(dx * 100, dy * 100);
                let border = border_at(0, 0);
                // Indexing must be in range for every sign combination.
                let _ = border.best_edge(tip, end).index();
                let _ = border.next_edge(tip, end).index();
            }
        }
    }

    #[test]
    fn test_edge_centers_from_origin_and_extent() {
        let border = border_at(0, 0);
        assert_eq!(
            border.edge(EdgeIndex::Top).anchors()[1].location(),
            Point::new(70, 0)
        );
        assert_eq!(
            border.edge(EdgeIndex::Bottom).anchors()[1].location(),
            Point::new(70, 44)
        );
        assert_eq!(
            border.edge(EdgeIndex::Left).anchors()[1].location(),
            Point::new(0, 22)
        );
        assert_eq!(
            border.edge(EdgeIndex::Right).anchors()[1].location(),
            Point::new(140, 22)
        );
    }

    #[test]
    fn test_locate_is_idempotent() {
        let mut border = Border::new();
        border.locate(Point::new(30, 50), Point::new(140, 44));
        let first: Vec<Point> = [
            EdgeIndex::Left,
            EdgeIndex::Right,
            EdgeIndex::Top,
            EdgeIndex::Bottom,
        ]
        .iter()
        .flat_map(|&i| border.edge(i).anchors().iter().map(Anchor::location))
        .collect();
        border.locate(Point::new(30, 50), Point::new(140, 44));
        let second: Vec<Point> = [
            EdgeIndex::Left,
            EdgeIndex::Right,
            EdgeIndex::Top,
            EdgeIndex::Bottom,
        ]
        .iter()
        .flat_map(|&i| border.edge(i).anchors().iter().map(Anchor::location))
        .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_assign_head_short_hop_uses_best_edge() {
        // Far pole down-right but within the vertical threshold: the primary
        // table picks the bottom edge, positive slot.
        let border = border_at(0, 0);
        let tip = Point::new(70, 22);
        let end = Point::new(370, 82);
        assert_eq!(border.assign_head(tip, end), Some(Point::new(116, 44)));
    }

    #[test]
    fn test_assign_head_long_drop_prefers_side_edge() {
        // Same octant but far beyond the threshold: the fallback table sends
        // the route out the right edge instead.
        let border = border_at(0, 0);
        let tip = Point::new(70, 22);
        let end = Point::new(370, 222);
        assert_eq!(border.assign_head(tip, end), Some(Point::new(140, 36)));
    }

    #[test]
    fn test_assign_tail_long_drop_lands_on_top_edge() {
        let border = border_at(300, 200);
        let tip = Point::new(70, 22);
        let end = Point::new(370, 222);
        assert_eq!(border.assign_tail(tip, end), Some(Point::new(324, 200)));
    }

    #[test]
    fn test_assign_head_falls_through_to_next_edge_when_occupied() {
        let mut border = border_at(0, 0);
        let tip = Point::new(70, 22);
        let end = Point::new(370, 82);
        let first = border.assign_head(tip, end).unwrap();
        border.add_heads(first, &[0]);
        // Bottom edge slot is taken, so the same request must fall through to
        // the fallback (right) edge rather than reuse the anchor.
        let second = border.assign_head(tip, end).unwrap();
        assert_ne!(second, first);
        assert_eq!(border.edge_of(second), Some(EdgeIndex::Right));
    }

    #[test]
    fn test_assign_head_exhausted_returns_none() {
        let mut border = border_at(0, 0);
        let tip = Point::new(70, 22);
        let end = Point::new(370, 82);
        let first = border.assign_head(tip, end).unwrap();
        border.add_heads(first, &[0]);
        let second = border.assign_head(tip, end).unwrap();
        border.add_heads(second, &[1]);
        assert_eq!(border.assign_head(tip, end), None);
    }

    #[test]
    fn test_edge_of_resolved_point() {
        let border = border_at(0, 0);
        assert_eq!(border.edge_of(Point::new(140, 36)), Some(EdgeIndex::Right));
        assert_eq!(border.edge_of(Point::new(70, 0)), Some(EdgeIndex::Top));
        assert_eq!(border.edge_of(Point::new(71, 0)), None);
    }

    #[test]
    fn test_add_heads_marks_anchor_occupied() {
        let mut border = border_at(0, 0);
        let location = Point::new(70, 0);
        assert!(border.anchor_at(location).unwrap().is_empty());
        border.add_heads(location, &[5]);
        let anchor = border.anchor_at(location).unwrap();
        assert!(!anchor.is_empty());
        assert_eq!(anchor.connectors(), &[5]);
    }
}
