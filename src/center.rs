use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use crate::point::{Point, Position};

/// A shared, mutable handle to a [`Point`].
///
/// Cloning a `Center` does not copy the point: both handles refer to the same
/// cell, so a write through one is observed by every other. This is what lets
/// a [`Rect`](crate::rect::Rect) follow a point that is also owned elsewhere.
#[derive(Clone, Default)]
pub struct Center {
    cell: Rc<Cell<Point>>,
}

impl Center {
    #[inline]
    pub fn new(point: Point) -> Self {
        Self {
            cell: Rc::new(Cell::new(point)),
        }
    }

    #[inline]
    pub fn get(&self) -> Point {
        self.cell.get()
    }

    #[inline]
    pub fn set(&self, point: Point) {
        self.cell.set(point);
    }

    #[inline]
    pub fn set_x(&self, x: f64) {
        self.replacing_map(|p| Point { x, ..p });
    }

    #[inline]
    pub fn set_y(&self, y: f64) {
        self.replacing_map(|p| Point { y, ..p });
    }

    /// Whether `a` and `b` are handles to the same point.
    #[inline]
    pub fn ptr_eq(a: &Center, b: &Center) -> bool {
        Rc::ptr_eq(&a.cell, &b.cell)
    }

    /// A new handle holding a copy of the current point, not aliased with
    /// `self`.
    #[inline]
    pub fn detached(&self) -> Self {
        Self::new(self.get())
    }

    #[inline]
    fn replacing_map<F: Fn(Point) -> Point>(&self, f: F) {
        self.cell.set(f(self.cell.get()));
    }
}

impl From<Point> for Center {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}

impl Position for Center {
    #[inline]
    fn x(&self) -> f64 {
        self.get().x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.get().y
    }
}

impl Debug for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Center{:?}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_alias_the_same_point() {
        let a = Center::new(Point::new(0.0, 0.0));
        let b = a.clone();
        b.set_x(5.0);
        assert_eq!(a.x(), 5.0);
        assert_eq!(a.y(), 0.0);
        a.set_y(-1.0);
        assert_eq!(b.get(), Point::new(5.0, -1.0));
        assert!(Center::ptr_eq(&a, &b));
    }

    #[test]
    fn detached_copy_does_not_alias() {
        let a = Center::from(Point::new(1.0, 2.0));
        let b = a.detached();
        assert!(!Center::ptr_eq(&a, &b));
        b.set(Point::new(9.0, 9.0));
        assert_eq!(a.get(), Point::new(1.0, 2.0));
    }

    #[test]
    fn debug_shows_current_point() {
        let c = Center::new(Point::new(3.0, 4.0));
        assert_eq!(format!("{:?}", c), "Center@(3,4)");
    }
}
