//! Two-point helpers for pinch gestures and screen/container/media transforms.

use crate::{ContainerRect, Point};

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Angle of the line from `a` to `b`, in degrees.
pub fn rotation_between(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x).to_degrees()
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
    }
}

/// Convert a screen point into container-centred coordinates.
///
/// The result is the offset from the point to the container centre, which is
/// the sign convention the crop position uses.
pub fn point_on_container(point: Point, container: &ContainerRect) -> Point {
    Point {
        x: container.width / 2.0 - (point.x - container.left),
        y: container.height / 2.0 - (point.y - container.top),
    }
}

/// Convert a container-centred point into unzoomed media coordinates.
pub fn point_on_media(container_point: Point, crop: Point, zoom: f64) -> Point {
    Point {
        x: (container_point.x + crop.x) / zoom,
        y: (container_point.y + crop.y) / zoom,
    }
}
