//! Geometric primitives for element placement.
//!
//! This module provides the small set of geometric types Sketchwright needs to
//! place elements and compute arrow endpoints.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned bounding box
//!
//! # Coordinate System
//!
//! Sketchwright uses the Excalidraw scene coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Element positions are the **top-left** corner of their bounding box, which
//! matches how the file format stores `x` and `y`.

/// A 2D point in scene coordinates.
///
/// # Examples
///
/// ```
/// # use sketchwright_core::geometry::Point;
/// let router = Point::new(50.0, 150.0);
/// let destination = Point::new(275.0, 150.0);
///
/// assert_eq!(router.distance(destination), 225.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Subtracts another point from this point, returning a new point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sketchwright_core::geometry::Point;
    /// let end = Point::new(320.0, 80.0);
    /// let start = Point::new(170.0, 80.0);
    ///
    /// let delta = end.sub_point(start);
    /// assert_eq!(delta.x(), 150.0);
    /// assert_eq!(delta.y(), 0.0);
    /// ```
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Calculates the Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        self.sub_point(other).hypot()
    }

    /// Returns a new point with absolute values of both coordinates
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns the point at `radius` from this point in direction `angle`.
    ///
    /// The angle is in radians, measured from the positive x-axis using the
    /// standard `cos`/`sin` convention. Because the y-axis points down, a
    /// growing angle moves clockwise on screen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sketchwright_core::geometry::Point;
    /// let center = Point::new(50.0, 150.0);
    /// let east = center.polar_offset(225.0, 0.0);
    /// assert_eq!(east, Point::new(275.0, 150.0));
    /// ```
    pub fn polar_offset(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    /// Returns the coordinates as a `[x, y]` pair
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }
}

/// Represents an axis-aligned bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the midpoint of the right edge.
    ///
    /// This is where an outgoing arrow attaches by default.
    pub fn right_middle(self) -> Point {
        Point::new(self.max_x, self.min_y + self.height() / 2.0)
    }

    /// Returns the midpoint of the left edge.
    ///
    /// This is where an incoming arrow attaches by default.
    pub fn left_middle(self) -> Point {
        Point::new(self.min_x, self.min_y + self.height() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_default() {
        let point = Point::default();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_point_with_x_keeps_y() {
        let point = Point::new(1.0, 2.0).with_x(7.0);
        assert_eq!(point, Point::new(7.0, 2.0));
    }

    #[test]
    fn test_point_sub() {
        let p1 = Point::new(5.0, 8.0);
        let p2 = Point::new(2.0, 3.0);
        let result = p1.sub_point(p2);
        assert_eq!(result.x(), 3.0);
        assert_eq!(result.y(), 5.0);
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(1.0, 1.0);
        let p2 = Point::new(4.0, 5.0);
        assert_eq!(p1.distance(p2), 5.0);
        assert_eq!(p2.distance(p1), 5.0);
    }

    #[test]
    fn test_point_abs() {
        let point = Point::new(-2.5, 3.0);
        let abs_point = point.abs();
        assert_eq!(abs_point.x(), 2.5);
        assert_eq!(abs_point.y(), 3.0);
    }

    #[test]
    fn test_point_polar_offset_quarter_turn_points_down() {
        let center = Point::new(10.0, 10.0);
        let offset = center.polar_offset(2.0, PI / 2.0);

        assert_approx_eq!(f64, offset.x(), 10.0, epsilon = 1e-9);
        assert_approx_eq!(f64, offset.y(), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_point_polar_offset_keeps_radius() {
        let center = Point::new(-30.0, 45.0);
        for step in 0..12 {
            let angle = f64::from(step) * PI / 6.0;
            let offset = center.polar_offset(225.0, angle);
            assert_approx_eq!(f64, center.distance(offset), 225.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bounds_new_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(120.0, 60.0));

        assert_eq!(bounds.min_x(), 50.0);
        assert_eq!(bounds.min_y(), 50.0);
        assert_eq!(bounds.max_x(), 170.0);
        assert_eq!(bounds.max_y(), 110.0);
        assert_eq!(bounds.width(), 120.0);
        assert_eq!(bounds.height(), 60.0);
    }

    #[test]
    fn test_bounds_edge_midpoints() {
        let bounds = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(120.0, 60.0));

        assert_eq!(bounds.right_middle(), Point::new(170.0, 80.0));
        assert_eq!(bounds.left_middle(), Point::new(50.0, 80.0));
    }
}
