//! Rotated bounding boxes.
//!
//! When the media is rotated around its centre, its corners extend beyond the
//! original bounds. Crop sizing and position restriction both work against
//! the axis-aligned box that contains the rotated media.

use crate::{Point, Size};

/// Rotate `point` around `mid` by `angle_degrees`.
///
/// Uses the screen convention (y grows downwards), so a positive angle turns
/// clockwise on screen.
pub fn rotate_around_midpoint(point: Point, mid: Point, angle_degrees: f64) -> Point {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let dx = point.x - mid.x;
    let dy = point.y - mid.y;

    Point {
        x: dx * cos - dy * sin + mid.x,
        y: dx * sin + dy * cos + mid.y,
    }
}

/// Compute the bounding box of a `width` x `height` rectangle rotated by
/// `angle_degrees` around its centre.
///
/// The four corners are rotated and the min/max extents taken. Right-angle
/// rotations take a fast path so that 0/90/180/270 degrees return exact
/// dimensions rather than values carrying trigonometric noise.
///
/// # Example
///
/// ```ignore
/// use easycrop_core::geometry::translate_size;
///
/// let size = translate_size(100.0, 50.0, 90.0);
/// assert_eq!((size.width, size.height), (50.0, 100.0));
/// ```
pub fn translate_size(width: f64, height: f64, angle_degrees: f64) -> Size {
    // Normalize angle to handle 360, 720, etc.
    let abs_angle = (angle_degrees % 360.0).abs();

    if abs_angle < 1e-9 || (360.0 - abs_angle).abs() < 1e-9 || (abs_angle - 180.0).abs() < 1e-9 {
        return Size::new(width, height);
    }
    if (abs_angle - 90.0).abs() < 1e-9 || (abs_angle - 270.0).abs() < 1e-9 {
        return Size::new(height, width);
    }

    let mid = Point::new(width / 2.0, height / 2.0);
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ]
    .map(|corner| rotate_around_midpoint(corner, mid, angle_degrees));

    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for corner in corners {
        min_x = min_x.min(corner.x);
        max_x = max_x.max(corner.x);
        min_y = min_y.min(corner.y);
        max_y = max_y.max(corner.y);
    }

    Size::new(max_x - min_x, max_y - min_y)
}
