//! Axis-aligned rectangles described by a center point and half-extents.
//!
//! A [`Rect`] does not own its center: it holds a [`Center`] handle that may
//! be shared with other code, and moving either one moves the other.

pub mod center;
pub mod debug;
pub mod error;
pub mod point;
pub mod rect;

pub use center::Center;
pub use error::RectErr;
pub use point::{Point, Position};
pub use rect::Rect;
