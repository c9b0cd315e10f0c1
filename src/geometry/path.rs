//! Ordered point sequences with head/tail derivation

use std::fmt;

use thiserror::Error;

use super::direction::Direction;
use super::point::Point;

/// Errors from constructing a [`Path`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A path needs at least two points to have a head and a tail
    #[error("a path requires at least 2 points, got {0}")]
    TooShort(usize),
}

/// An ordered sequence of at least two points.
///
/// The first point is the `tip`, the last the `end`. The `head` and `tail`
/// segments (first two / last two points) drive arrowhead orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Construct a path, rejecting fewer than two points
    pub fn new(points: Vec<Point>) -> Result<Self, PathError> {
        if points.len() < 2 {
            return Err(PathError::TooShort(points.len()));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// First point of the path
    pub fn tip(&self) -> Point {
        self.points[0]
    }

    /// Last point of the path
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// First two points, in path order
    pub fn head(&self) -> (Point, Point) {
        (self.points[0], self.points[1])
    }

    /// Last two points, in reverse path order (the end point first)
    pub fn tail(&self) -> (Point, Point) {
        let n = self.points.len();
        (self.points[n - 1], self.points[n - 2])
    }

    /// Classification of the head segment
    pub fn direction(&self) -> Direction {
        Direction::of(self.head())
    }

    /// Copy of this path with the first point replaced
    pub fn with_head(&self, tip: Point) -> Path {
        let mut points = self.points.clone();
        points[0] = tip;
        Path { points }
    }

    /// Copy of this path with the point order reversed
    pub fn reverse(&self) -> Path {
        let mut points = self.points.clone();
        points.reverse();
        Path { points }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}
