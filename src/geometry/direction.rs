//! Arrowhead direction classification and triangle geometry

use super::path::Path;
use super::point::Point;

/// Lateral half-width of an arrowhead triangle
pub const ARROW_LEG: i32 = 10;

/// Depth of an arrowhead triangle along the path axis
pub const ARROW_BAR: i32 = 15;

/// Classification of a two-point path segment.
///
/// A direction is named after where the segment's second point lies relative
/// to its first (the tip): `Right` means the neighbor is at greater x, `Down`
/// at greater y, and so on. The arrowhead drawn at the tip therefore points
/// *away* from the named direction, back along the incoming line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Classify a head segment `(tip, neighbor)`.
    ///
    /// The x axis is tested before y, so a segment that differs on both axes
    /// classifies horizontally. A zero-length segment defaults to `Down` so
    /// arrowhead construction always has a determinate orientation.
    pub fn of(head: (Point, Point)) -> Direction {
        let (tip, next) = head;
        if next.x > tip.x {
            Direction::Right
        } else if next.x < tip.x {
            Direction::Left
        } else if next.y < tip.y {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Stable index for table lookups
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Geometric opposite
    pub fn flip(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector pointing from the tip toward its neighbor
    fn axis(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }

    /// Offset applied to the tip when stacking `count` arrowheads.
    ///
    /// Each additional head sits one leg-length further back along the path;
    /// the same offset retracts an unfilled connector line so it stops behind
    /// the rearmost head instead of crossing the triangles.
    pub fn tip_offset(self, count: i32) -> Point {
        self.axis() * (ARROW_LEG * count)
    }

    /// Build the triangle for arrowhead number `index` on the given head
    /// segment. The returned path holds the tip first, then the two base
    /// corners, displaced from the tip back toward the segment's neighbor.
    pub fn build_arrow(self, head: (Point, Point), index: i32) -> Path {
        let tip = head.0 + self.tip_offset(index);
        let (near, far) = self.corner_offsets();
        Path::new(vec![tip, tip + near, tip + far]).expect("arrow triangle has 3 points")
    }

    /// Base-corner offsets relative to the tip. Up/Down mirror the
    /// `(leg, bar)` template vertically; Left/Right mirror `(bar, leg)`
    /// horizontally.
    fn corner_offsets(self) -> (Point, Point) {
        let vertical = Point::new(ARROW_LEG, ARROW_BAR);
        let horizontal = Point::new(ARROW_BAR, ARROW_LEG);
        match self {
            Direction::Down => (vertical.invert_x(), vertical),
            Direction::Up => (vertical.invert_x().invert_y(), vertical.invert_y()),
            Direction::Right => (horizontal.invert_y(), horizontal),
            Direction::Left => (horizontal.invert_x().invert_y(), horizontal.invert_x()),
        }
    }
}
