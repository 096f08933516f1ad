use std::fmt;

/// Anything that exposes numeric `x` and `y` coordinates.
///
/// [`Rect::contains`](crate::rect::Rect::contains) accepts any `Position`,
/// so plain [`Point`]s and shared [`Center`](crate::center::Center) handles
/// can both be tested.
pub trait Position {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

#[derive(Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Position for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl<P: Position + ?Sized> Position for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("@({},{})", self.x, self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let origin = Point::new(0.0, 0.0);
        let p = Point::from((3.0, 4.0));
        assert_eq!(origin.distance(&p), 5.0);
        assert_eq!(p.distance(&origin), 5.0);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn equality_compares_coordinates() {
        assert_eq!(Point::new(1.5, -2.0), Point::from((1.5, -2.0)));
        assert_ne!(Point::new(1.5, -2.0), Point::new(-2.0, 1.5));
    }

    #[test]
    fn position_through_reference() {
        fn sum<P: Position>(p: P) -> f64 {
            p.x() + p.y()
        }
        let p = Point::new(2.0, 0.25);
        assert_eq!(sum(&p), 2.25);
        assert_eq!(sum(&&p), 2.25);
    }

    #[test]
    fn formats_as_at_pair() {
        let p = Point::new(1.0, 0.5);
        assert_eq!(format!("{:?}", p), "@(1,0.5)");
        assert_eq!(p.to_string(), "@(1,0.5)");
    }
}
