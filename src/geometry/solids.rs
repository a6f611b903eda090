//! Wireframe projections of cubes, cuboids, cones and cylinders.

use super::primitives::dashed_segments;
use super::{GeometryOptions, PathElement, ShapePath};
use crate::util::{Bounds, Point};

/// Fraction of the front face used as the receding depth.
const DEPTH_RATIO: f64 = 0.3;

/// Cube with a square front face anchored at the bottom-left of the drag box.
pub(crate) fn cube(start: Point, end: Point, options: &GeometryOptions) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }
    let size = bounds.width().min(bounds.height());
    let origin = Point::new(bounds.min.x, bounds.max.y - size);
    box_wireframe(origin, size, size, size * DEPTH_RATIO, options)
}

/// Cuboid whose front face fills the drag box.
pub(crate) fn cuboid(start: Point, end: Point, options: &GeometryOptions) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }
    let depth = bounds.width().min(bounds.height()) * DEPTH_RATIO;
    box_wireframe(bounds.min, bounds.width(), bounds.height(), depth, options)
}

/// Front face at `origin` (top-left) and a back face shifted up-right by `depth`.
///
/// The three edges meeting at the back-bottom-left corner are hidden behind the
/// front face and drawn dashed.
fn box_wireframe(
    origin: Point,
    width: f64,
    height: f64,
    depth: f64,
    options: &GeometryOptions,
) -> ShapePath {
    let front_top_left = origin;
    let front_top_right = origin.offset(width, 0.0);
    let front_bottom_left = origin.offset(0.0, height);
    let front_bottom_right = origin.offset(width, height);

    let back = |p: Point| p.offset(depth, -depth);
    let (back_top_left, back_top_right) = (back(front_top_left), back(front_top_right));
    let (back_bottom_left, back_bottom_right) = (back(front_bottom_left), back(front_bottom_right));

    let mut path = ShapePath::new();
    path.push(PathElement::Rect {
        origin,
        width,
        height,
    });
    path.push(PathElement::line(back_top_left, back_top_right));
    path.push(PathElement::line(back_top_right, back_bottom_right));
    path.push(PathElement::line(front_top_left, back_top_left));
    path.push(PathElement::line(front_top_right, back_top_right));
    path.push(PathElement::line(front_bottom_right, back_bottom_right));

    let dashed = |from: Point, to: Point| {
        dashed_segments(from, to, options.dash_on, options.dash_off)
    };
    path.extend(dashed(back_bottom_left, back_top_left));
    path.extend(dashed(back_bottom_left, back_bottom_right));
    path.extend(dashed(front_bottom_left, back_bottom_left));
    path
}

/// Cone with its apex at the top center and an elliptical base at the bottom.
pub(crate) fn cone(start: Point, end: Point) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }
    let rx = bounds.width() / 2.0;
    let ry = bounds.width() / 4.0;
    let center_x = bounds.center().x;
    let apex = Point::new(center_x, bounds.min.y);

    ShapePath::from_iter([
        PathElement::Ellipse {
            center: Point::new(center_x, bounds.max.y - ry),
            rx,
            ry,
        },
        PathElement::line(apex, Point::new(bounds.min.x, bounds.max.y)),
        PathElement::line(apex, Point::new(bounds.max.x, bounds.max.y)),
    ])
}

/// Cylinder: top and bottom ellipses joined by two vertical sides.
pub(crate) fn cylinder(start: Point, end: Point) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }
    let rx = bounds.width() / 2.0;
    let ry = bounds.width() / 4.0;
    let center_x = bounds.center().x;
    let top_y = bounds.min.y + ry;
    let bottom_y = bounds.max.y - ry;

    ShapePath::from_iter([
        PathElement::Ellipse {
            center: Point::new(center_x, top_y),
            rx,
            ry,
        },
        PathElement::Ellipse {
            center: Point::new(center_x, bottom_y),
            rx,
            ry,
        },
        PathElement::line(
            Point::new(bounds.min.x, top_y),
            Point::new(bounds.min.x, bottom_y),
        ),
        PathElement::line(
            Point::new(bounds.max.x, top_y),
            Point::new(bounds.max.x, bottom_y),
        ),
    ])
}
