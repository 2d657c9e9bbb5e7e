//! Core geometry types for pitchline.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` + `Copy` = small stack values get copied implicitly
//! - `PartialEq` = can compare with `==`

use std::fmt;

/// A 2D point with x,y coordinates.
///
/// Coordinates are stored verbatim. NaN and infinities are accepted and
/// propagate through every computation that touches them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A straight line segment between two points.
///
/// The length is measured once in [`Segment::new`]. Fields are private so the
/// endpoints can't drift away from the stored length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    length: f64,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Point is `Copy`, so `other` is taken by value without moving anything
    /// the caller still needs.
    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Segment {
    /// Create a segment, copying both endpoints and measuring its length.
    ///
    /// A degenerate segment (`start == end`) is valid and has length 0.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(end),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Length measured at construction time.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Total change in x and y from start to end.
    #[inline]
    pub fn delta(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// True when both endpoints coincide.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance_to(p2), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(-7.25, 12.5);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let a = Point::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));
            let b = Point::new(rng.random_range(-1e6..1e6), rng.random_range(-1e6..1e6));
            let ab = a.distance_to(b);
            let ba = b.distance_to(a);
            assert!(ab >= 0.0, "distance should be non-negative, got {}", ab);
            assert!(
                (ab - ba).abs() <= 1e-9 * ab.max(1.0),
                "distance should be symmetric: {} vs {}",
                ab,
                ba
            );
        }
    }

    #[test]
    fn nan_coordinate_propagates() {
        let a = Point::new(f64::NAN, 0.0);
        let b = Point::new(1.0, 1.0);
        assert!(a.distance_to(b).is_nan());
        assert!(b.distance_to(a).is_nan());
    }

    #[test]
    fn segment_length() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(seg.length(), 5.0);
        assert_eq!(seg.delta(), (3.0, 4.0));
        assert!(!seg.is_degenerate());
    }

    #[test]
    fn segment_copies_endpoints() {
        let mut start = Point::new(1.0, 2.0);
        let end = Point::new(4.0, 6.0);
        let seg = Segment::new(start, end);

        // Mutating the caller's copy leaves the segment untouched
        start.x = 100.0;
        assert_eq!(seg.start(), Point::new(1.0, 2.0));
        assert_eq!(seg.length(), 5.0);
        assert_eq!(start.x, 100.0);
    }

    #[test]
    fn degenerate_segment_has_zero_length() {
        let p = Point::new(5.0, 5.0);
        let seg = Segment::new(p, p);
        assert_eq!(seg.length(), 0.0);
        assert!(seg.is_degenerate());
    }

    #[test]
    fn diagonal_segment_length() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!((seg.length() - 200f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(2.75, -1.0).to_string(), "(2.75, -1)");
        assert_eq!(Point::from((0.5, 3.0)), Point::new(0.5, 3.0));
    }
}
