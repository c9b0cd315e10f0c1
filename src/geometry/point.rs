//! 2D integer vector type

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point (or vector) in the diagram coordinate system.
///
/// Immutable value type: every operation returns a new `Point`. The `Display`
/// form `"x,y"` is canonical and is also what anchor lookup tables key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the x and y components
    pub fn flip(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Negate only the x component
    pub fn invert_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    /// Negate only the y component
    pub fn invert_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Componentwise sign, each component in {-1, 0, 1}
    pub fn signs(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Flatten into a single index: `y * factor + x`.
    ///
    /// With `factor = 3` and components in {0, 1, 2} this maps a sign pair to
    /// one of the nine compass octants used by the routing tables.
    pub fn combine(self, factor: i32) -> i32 {
        self.y * factor + self.x
    }

    /// Componentwise integer division (truncating toward zero)
    pub fn reduced(self, factor: i32) -> Self {
        Self::new(self.x / factor, self.y / factor)
    }

    /// Componentwise product with another point
    pub fn times(self, other: Point) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
