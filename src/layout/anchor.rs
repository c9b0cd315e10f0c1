//! Connection anchors and the element edges that own them
//!
//! Every edge of an element's bounding box carries three anchor slots. An
//! anchor becomes occupied the moment a connector registers against it, and
//! routing never grants an occupied anchor again.

use std::collections::HashMap;

use crate::geometry::Point;

/// Handle into the diagram's connector arena.
///
/// Anchors hold these instead of references, so the element tree and the
/// connector list stay free of ownership cycles.
pub type ConnectorId = usize;

/// One connection slot on an edge
#[derive(Debug, Clone, Default)]
pub struct Anchor {
    location: Point,
    connectors: Vec<ConnectorId>,
}

impl Anchor {
    pub fn location(&self) -> Point {
        self.location
    }

    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// True while no connector has registered against this anchor
    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn count(&self) -> usize {
        self.connectors.len()
    }

    /// Append connectors. Anchors are append-only for the lifetime of a
    /// diagram; there is no removal.
    pub fn add(&mut self, connectors: &[ConnectorId]) {
        self.connectors.extend_from_slice(connectors);
    }

    pub fn connectors(&self) -> &[ConnectorId] {
        &self.connectors
    }
}

/// Identity of one side of an element's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeIndex {
    Left,
    Right,
    Top,
    Bottom,
}

impl EdgeIndex {
    /// Top and Bottom edges run horizontally; Left and Right vertically.
    /// Two endpoints on the same orientation class need a Z-shaped route.
    pub fn is_horizontal(self) -> bool {
        matches!(self, EdgeIndex::Top | EdgeIndex::Bottom)
    }
}

/// One side of an element, owning three anchors at the 1/3 offsets of its
/// length (negative / center / positive, centered on the side midpoint).
#[derive(Debug, Clone)]
pub struct Edge {
    index: EdgeIndex,
    anchors: [Anchor; 3],
    lookup: HashMap<Point, usize>,
}

impl Edge {
    pub fn new(index: EdgeIndex) -> Self {
        Self {
            index,
            anchors: Default::default(),
            lookup: HashMap::new(),
        }
    }

    pub fn index(&self) -> EdgeIndex {
        self.index
    }

    pub fn anchors(&self) -> &[Anchor; 3] {
        &self.anchors
    }

    /// Recompute anchor locations from the edge midpoint and side length.
    ///
    /// The exact-point lookup table is rebuilt on every call; stale entries
    /// from a previous location never survive.
    pub fn set_center(&mut self, midpoint: Point, length: i32) {
        let delta = length / 3;
        let step = if self.index.is_horizontal() {
            Point::new(delta, 0)
        } else {
            Point::new(0, delta)
        };
        self.lookup.clear();
        for (slot, anchor) in self.anchors.iter_mut().enumerate() {
            anchor.set_location(midpoint + step * (slot as i32 - 1));
            self.lookup.insert(anchor.location(), slot);
        }
    }

    /// Exact-point anchor lookup. A point that matches no computed anchor
    /// location is a valid negative result, not an error.
    pub fn anchor_at(&self, location: Point) -> Option<&Anchor> {
        self.lookup.get(&location).map(|&slot| &self.anchors[slot])
    }

    pub fn anchor_at_mut(&mut self, location: Point) -> Option<&mut Anchor> {
        self.lookup
            .get(&location)
            .map(|&slot| &mut self.anchors[slot])
    }

    /// The directionally-preferred anchor for a route from `tip` toward
    /// `end`, only while it is still unoccupied.
    ///
    /// Horizontal edges pick their slot from the x sign of `end - tip`,
    /// vertical edges from the y sign. There is no fallback within an edge:
    /// if the preferred slot is taken the whole edge refuses.
    pub fn best_anchor(&self, tip: Point, end: Point) -> Option<&Anchor> {
        let pole = (end - tip).signs();
        let slot = if self.index.is_horizontal() {
            pole.x + 1
        } else {
            pole.y + 1
        };
        let anchor = &self.anchors[slot as usize];
        anchor.is_empty().then_some(anchor)
    }

    /// Whether a best-anchor lookup for `(tip, end)` would succeed
    pub fn accepts(&self, tip: Point, end: Point) -> bool {
        self.best_anchor(tip, end).is_some()
    }

    /// Location of the best anchor for `(tip, end)`, if one is free
    pub fn assign(&self, tip: Point, end: Point) -> Option<Point> {
        self.best_anchor(tip, end).map(Anchor::location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_edge() -> Edge {
        let mut edge = Edge::new(EdgeIndex::Top);
        edge.set_center(Point::new(70, 0), 140);
        edge
    }

    #[test]
    fn test_anchor_occupancy() {
        let mut anchor = Anchor::default();
        assert!(anchor.is_empty());
        assert_eq!(anchor.count(), 0);
        anchor.add(&[3]);
        anchor.add(&[7, 9]);
        assert!(!anchor.is_empty());
        assert_eq!(anchor.count(), 3);
        assert_eq!(anchor.connectors(), &[3, 7, 9]);
    }

    #[test]
    fn test_horizontal_anchor_placement() {
        let edge = top_edge();
        let locations: Vec<Point> = edge.anchors().iter().map(Anchor::location).collect();
        assert_eq!(
            locations,
            vec![Point::new(24, 0), Point::new(70, 0), Point::new(116, 0)]
        );
    }

    #[test]
    fn test_vertical_anchor_placement() {
        let mut edge = Edge::new(EdgeIndex::Right);
        edge.set_center(Point::new(140, 22), 44);
        let locations: Vec<Point> = edge.anchors().iter().map(Anchor::location).collect();
        assert_eq!(
            locations,
            vec![
                Point::new(140, 8),
                Point::new(140, 22),
                Point::new(140, 36)
            ]
        );
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let edge = top_edge();
        assert!(edge.anchor_at(Point::new(24, 0)).is_some());
        assert!(edge.anchor_at(Point::new(25, 0)).is_none());
    }

    #[test]
    fn test_relocation_rebuilds_lookup() {
        let mut edge = top_edge();
        edge.set_center(Point::new(170, 50), 140);
        assert!(edge.anchor_at(Point::new(24, 0)).is_none());
        assert!(edge.anchor_at(Point::new(124, 50)).is_some());
    }

    #[test]
    fn test_best_anchor_follows_sign() {
        let edge = top_edge();
        // Target to the right: positive slot
        let a = edge
            .best_anchor(Point::new(70, 22), Point::new(400, 22))
            .unwrap();
        assert_eq!(a.location(), Point::new(116, 0));
        // Target to the left: negative slot
        let a = edge
            .best_anchor(Point::new(70, 22), Point::new(-400, 22))
            .unwrap();
        assert_eq!(a.location(), Point::new(24, 0));
        // Aligned: center slot
        let a = edge
            .best_anchor(Point::new(70, 22), Point::new(70, 400))
            .unwrap();
        assert_eq!(a.location(), Point::new(70, 0));
    }

    #[test]
    fn test_occupied_anchor_refuses_without_fallback() {
        let mut edge = top_edge();
        let tip = Point::new(70, 22);
        let end = Point::new(400, 22);
        let location = edge.assign(tip, end).unwrap();
        edge.anchor_at_mut(location).unwrap().add(&[0]);
        // Same octant again: the preferred slot is taken, the edge refuses
        // even though two other anchors are still free.
        assert!(!edge.accepts(tip, end));
        assert_eq!(edge.assign(tip, end), None);
        // A route with a different sign still succeeds.
        assert!(edge.accepts(tip, Point::new(-400, 22)));
    }
}
