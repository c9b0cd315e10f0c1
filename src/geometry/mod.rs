//! Integer geometry primitives for the layout engine
//!
//! All diagram coordinates are integers; the layout math never leaves this
//! coordinate space, so rendering can emit exact values.

pub mod direction;
pub mod path;
pub mod point;

pub use direction::Direction;
pub use path::{Path, PathError};
pub use point::Point;
