use std::fmt;

use tracing::{debug, trace, warn};

use crate::center::Center;
use crate::error::RectErr;
use crate::point::{Point, Position};

/// An axis-aligned rectangle given by a center and two half-extents.
///
/// `width` and `height` are distances from the center to the vertical and
/// horizontal edges, so the full rectangle spans `2 * width` by
/// `2 * height`.
///
/// The center is a shared [`Center`] handle: moving the rectangle through
/// [`Rect::set_x`]/[`Rect::set_y`] moves the point for every other holder of
/// that handle, and vice versa. [`Clone`] keeps that aliasing; use
/// [`Rect::detached`] for an independent copy.
#[derive(Clone)]
pub struct Rect {
    center: Center,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds a rectangle around `center` without validating the extents.
    ///
    /// Negative extents are stored as given; they are logged at `warn` level
    /// because `contains` and `intersects` give meaningless answers for them.
    pub fn new(center: Center, width: f64, height: f64) -> Self {
        if width < 0.0 || height < 0.0 {
            warn!(
                "rect at {:?} built with negative half-extent (width: {}, height: {})",
                center.get(),
                width,
                height
            );
        }
        Self {
            center,
            width,
            height,
        }
    }

    /// Like [`Rect::new`], but rejects extents that are negative, NaN or
    /// infinite.
    pub fn try_new(
        center: Center,
        width: f64,
        height: f64,
    ) -> Result<Self, RectErr> {
        let err = if !width.is_finite() || !height.is_finite() {
            Some(RectErr::NonFiniteExtent)
        } else if width < 0.0 {
            Some(RectErr::NegativeWidth)
        } else if height < 0.0 {
            Some(RectErr::NegativeHeight)
        } else {
            None
        };
        match err {
            Some(err) => {
                debug!(
                    "rejecting rect (width: {}, height: {}): {}",
                    width, height, err
                );
                Err(err)
            }
            None => Ok(Self {
                center,
                width,
                height,
            }),
        }
    }

    /// A rectangle with its own, unshared center at `(x, y)`.
    #[inline]
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Center::new(Point::new(x, y)), width, height)
    }

    #[inline]
    pub fn center(&self) -> &Center {
        &self.center
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.center.x()
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.center.y()
    }

    /// Moves the shared center horizontally.
    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.center.set_x(x);
    }

    /// Moves the shared center vertically.
    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.center.set_y(y);
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x() - self.width
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x() + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y() - self.height
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y() + self.height
    }

    /// Copy of `self` whose center is no longer shared with anyone.
    pub fn detached(&self) -> Self {
        Self {
            center: self.center.detached(),
            width: self.width,
            height: self.height,
        }
    }

    /// Whether `other` lies strictly inside `self`.
    ///
    /// Points on an edge are not contained.
    #[inline]
    pub fn contains<P: Position>(&self, other: &P) -> bool {
        (other.x() > self.left())
            && (other.x() < self.right())
            && (other.y() > self.top())
            && (other.y() < self.bottom())
    }

    /// Whether the two rectangles overlap.
    ///
    /// They are disjoint only if `other` lies strictly beyond one of `self`'s
    /// edges, so rectangles whose edges touch exactly do intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let beyond_right = other.left() > self.right();
        let beyond_left = other.right() < self.left();
        let beyond_bottom = other.top() > self.bottom();
        let beyond_top = other.bottom() < self.top();
        let separated = beyond_right || beyond_left || beyond_bottom || beyond_top;
        trace!(
            "{:?} vs {:?}: separated (right: {}, left: {}, bottom: {}, top: {})",
            self,
            other,
            beyond_right,
            beyond_left,
            beyond_bottom,
            beyond_top
        );
        !separated
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.center.get() == other.center.get()
            && self.width == other.width
            && self.height == other.height
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect[{:?}, w: {}, h: {}]",
            self.center.get(),
            self.width,
            self.height
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
