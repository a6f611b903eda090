//! Conic sections: circles, ellipses, hyperbolas and parabolas.

use super::primitives::dashed_segments;
use super::{GeometryOptions, PathElement, ShapePath};
use crate::input::tool::{HyperbolaAxis, ParabolaDirection};
use crate::util::{Bounds, Point};

/// Samples per hyperbola extent; the step is `extent / HYPERBOLA_RESOLUTION`.
const HYPERBOLA_RESOLUTION: f64 = 200.0;
/// Number of steps across a parabola's extent.
const PARABOLA_STEPS: usize = 100;

/// Circle through the midpoint of the drag with half its length as radius.
pub(crate) fn circle(start: Point, end: Point) -> ShapePath {
    let radius = start.distance(end) / 2.0;
    if radius <= 0.0 {
        return ShapePath::new();
    }
    ShapePath::from_iter([PathElement::Ellipse {
        center: start.midpoint(end),
        rx: radius,
        ry: radius,
    }])
}

/// Ellipse inscribed in the drag box.
pub(crate) fn ellipse(start: Point, end: Point) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }
    ShapePath::from_iter([PathElement::Ellipse {
        center: bounds.center(),
        rx: bounds.width() / 2.0,
        ry: bounds.height() / 2.0,
    }])
}

/// Hyperbola centred in the drag box with its axes and dashed asymptotes.
///
/// The transverse half-axis `a` is a quarter of the extent along `axis`, the
/// conjugate half-axis `b` a quarter of the other extent, so the asymptotes run
/// exactly through the box corners.
pub(crate) fn hyperbola(
    start: Point,
    end: Point,
    axis: HyperbolaAxis,
    options: &GeometryOptions,
) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }

    let c = bounds.center();
    let (min, max) = (bounds.min, bounds.max);
    let mut path = ShapePath::new();

    path.push(PathElement::line(Point::new(min.x, c.y), Point::new(max.x, c.y)));
    path.push(PathElement::line(Point::new(c.x, min.y), Point::new(c.x, max.y)));

    // Slope dy/dx of the asymptotes; (w/4, h/4) ratios cancel to the box diagonal.
    let slope = bounds.height() / bounds.width();
    for sign in [1.0, -1.0] {
        let y_at = |x: f64| c.y + sign * slope * (x - c.x);
        path.extend(dashed_segments(
            Point::new(min.x, y_at(min.x)),
            Point::new(max.x, y_at(max.x)),
            options.dash_on,
            options.dash_off,
        ));
    }

    let (extent, conjugate_extent) = match axis {
        HyperbolaAxis::X => (bounds.width(), bounds.height()),
        HyperbolaAxis::Y => (bounds.height(), bounds.width()),
    };
    let a = extent / 4.0;
    let b = conjugate_extent / 4.0;
    let samples = branch_samples(a, b, extent / 2.0, extent / HYPERBOLA_RESOLUTION);

    for (u_sign, v_sign) in [(1.0, -1.0), (1.0, 1.0), (-1.0, -1.0), (-1.0, 1.0)] {
        let branch = samples
            .iter()
            .map(|&(u, v)| match axis {
                HyperbolaAxis::X => Point::new(c.x + u_sign * u, c.y + v_sign * v),
                HyperbolaAxis::Y => Point::new(c.x + v_sign * v, c.y + u_sign * u),
            })
            .collect();
        path.push(PathElement::Polyline(branch));
    }
    path
}

/// Samples `(u, v)` with `v = b * sqrt(u²/a² - 1)`, stepping `u` from the vertex
/// `a` out to `edge`.
fn branch_samples(a: f64, b: f64, edge: f64, step: f64) -> Vec<(f64, f64)> {
    let count = ((edge - a) / step).round().max(0.0) as usize;
    (0..=count)
        .map(|k| {
            let u = (a + k as f64 * step).min(edge);
            let v = b * ((u * u) / (a * a) - 1.0).max(0.0).sqrt();
            (u, v)
        })
        .collect()
}

/// Parabola with its vertex at the box center, opening towards `direction`.
pub(crate) fn parabola(start: Point, end: Point, direction: ParabolaDirection) -> ShapePath {
    let bounds = Bounds::from_corners(start, end);
    if bounds.is_degenerate() {
        return ShapePath::new();
    }

    let c = bounds.center();
    let (w, h) = (bounds.width(), bounds.height());

    let samples: Vec<Point> = (0..=PARABOLA_STEPS)
        .map(|i| {
            let t = i as f64 / PARABOLA_STEPS as f64;
            match direction {
                ParabolaDirection::Up | ParabolaDirection::Down => {
                    let a = 4.0 * h / (w * w);
                    let x = bounds.min.x + w * t;
                    let rise = a * (x - c.x).powi(2);
                    let y = if direction == ParabolaDirection::Up {
                        c.y - rise
                    } else {
                        c.y + rise
                    };
                    Point::new(x, y)
                }
                ParabolaDirection::Left | ParabolaDirection::Right => {
                    let a = 4.0 * w / (h * h);
                    let y = bounds.min.y + h * t;
                    let run = a * (y - c.y).powi(2);
                    let x = if direction == ParabolaDirection::Left {
                        c.x - run
                    } else {
                        c.x + run
                    };
                    Point::new(x, y)
                }
            }
        })
        .collect();

    if samples.len() < 2 {
        return ShapePath::new();
    }
    ShapePath::from_iter([PathElement::Polyline(samples)])
}
