//! Straight-edged primitives: lines, dashes, arrowheads, rectangles and axes.

use super::{GeometryOptions, PathElement, ShapePath};
use crate::util::{Bounds, Point};
use std::f64::consts::FRAC_PI_2;

/// Two arrowhead segments pointing back from `tip`.
///
/// `angle` is the direction the arrow travels (0 rad = +X); each segment leaves
/// `tip` at `angle ± half_angle` backwards with the given `length`.
pub fn arrowhead(tip: Point, angle: f64, length: f64, half_angle: f64) -> [PathElement; 2] {
    let barb = |theta: f64| tip.offset(-length * theta.cos(), -length * theta.sin());
    [
        PathElement::line(tip, barb(angle + half_angle)),
        PathElement::line(tip, barb(angle - half_angle)),
    ]
}

/// Most dashes a single segment is split into; longer spans are drawn solid.
const MAX_DASHES: f64 = 10_000.0;

/// Splits `from -> to` into drawn pieces of length `on` separated by gaps of `off`.
///
/// The final dash is shortened to end exactly at `to`. A non-positive or
/// non-finite `on` or `off` yields one solid segment, as does a span that would
/// need more than 10 000 dashes.
pub fn dashed_segments(from: Point, to: Point, on: f64, off: f64) -> Vec<PathElement> {
    let length = from.distance(to);
    if length == 0.0 || !length.is_finite() {
        return Vec::new();
    }
    let period = on + off;
    let count = (length / period).ceil();
    if !(on > 0.0 && off > 0.0 && period.is_finite()) || count > MAX_DASHES {
        return vec![PathElement::line(from, to)];
    }

    let (ux, uy) = ((to.x - from.x) / length, (to.y - from.y) / length);
    let at = |t: f64| from.offset(ux * t, uy * t);

    (0..count as usize)
        .map(|k| k as f64 * period)
        .take_while(|&t| t < length)
        .map(|t| {
            let end = t + on;
            PathElement::line(at(t), if end >= length { to } else { at(end) })
        })
        .collect()
}

pub(crate) fn line(start: Point, end: Point) -> ShapePath {
    ShapePath::from_iter([PathElement::line(start, end)])
}

pub(crate) fn dashed_line(start: Point, end: Point, options: &GeometryOptions) -> ShapePath {
    dashed_segments(start, end, options.dash_on, options.dash_off)
        .into_iter()
        .collect()
}

pub(crate) fn arrow(start: Point, end: Point, options: &GeometryOptions) -> ShapePath {
    let angle = (end.y - start.y).atan2(end.x - start.x);
    let mut path = line(start, end);
    path.extend(arrowhead(end, angle, options.arrow_length, options.half_angle()));
    path
}

pub(crate) fn rectangle(start: Point, end: Point) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }
    ShapePath::from_iter([PathElement::Rect {
        origin: bounds.min,
        width: bounds.width(),
        height: bounds.height(),
    }])
}

/// Horizontal and vertical axes through the box center, arrowed at their
/// positive ends (right for X, up for Y in math orientation).
pub(crate) fn coordinate_axis(start: Point, end: Point, options: &GeometryOptions) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    let center = bounds.center();
    let half_angle = options.half_angle();
    let length = options.axis_arrow_length;
    let mut path = ShapePath::new();

    if bounds.width() > 0.0 {
        let tip = Point::new(bounds.max.x, center.y);
        path.push(PathElement::line(Point::new(bounds.min.x, center.y), tip));
        path.extend(arrowhead(tip, 0.0, length, half_angle));
    }
    if bounds.height() > 0.0 {
        let tip = Point::new(center.x, bounds.min.y);
        path.push(PathElement::line(Point::new(center.x, bounds.max.y), tip));
        path.extend(arrowhead(tip, -FRAC_PI_2, length, half_angle));
    }
    path
}
