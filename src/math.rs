//! Mathematical structs and functions.

use cgmath::{MetricSpace, Point2};

/// A 2D point
pub type Point2d = Point2<f64>;

/// The straight-line distance between two points.
pub fn distance(a: Point2d, b: Point2d) -> f64 {
    a.distance(b)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn pythagoras() {
        assert_approx_eq!(
            distance(Point2d::new(0.0, 0.0), Point2d::new(3.0, 4.0)),
            5.0
        );
        assert_approx_eq!(distance(Point2d::new(-1.0, 2.0), Point2d::new(-1.0, 2.0)), 0.0);
    }
}
