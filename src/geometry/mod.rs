//! Procedural shape geometry.
//!
//! Every shape tool is described by the pair of points that started and ended
//! the gesture. The functions in this module turn that pair into a
//! backend-independent [`ShapePath`]; the Cairo renderer then strokes (or fills)
//! the elements. Nothing here holds state, so the same pair always yields the
//! same path.
//!
//! Degenerate input (a gesture that collapses to a point, or a zero-width or
//! zero-height box for shapes that need an area) yields an empty path rather
//! than an error.

pub mod conics;
pub mod primitives;
pub mod solids;

use crate::config::{ArrowConfig, DashConfig};
use crate::input::tool::ShapeKind;
use crate::util::Point;

pub use primitives::{arrowhead, dashed_segments};

/// One drawable element of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    /// Straight segment
    Line { from: Point, to: Point },
    /// Axis-aligned rectangle with its top-left corner at `origin`
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    /// Axis-aligned ellipse (a circle when `rx == ry`)
    Ellipse { center: Point, rx: f64, ry: f64 },
    /// Sampled curve, consecutive samples joined by straight segments
    Polyline(Vec<Point>),
}

impl PathElement {
    pub fn line(from: Point, to: Point) -> Self {
        PathElement::Line { from, to }
    }

    /// True for elements that enclose an area and can be filled.
    pub fn is_closed(&self) -> bool {
        matches!(self, PathElement::Rect { .. } | PathElement::Ellipse { .. })
    }
}

/// Ordered list of elements making up one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapePath {
    elements: Vec<PathElement>,
}

impl ShapePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl Extend<PathElement> for ShapePath {
    fn extend<T: IntoIterator<Item = PathElement>>(&mut self, iter: T) {
        self.elements.extend(iter);
    }
}

impl FromIterator<PathElement> for ShapePath {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Tunables shared by the shape builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryOptions {
    /// Arrowhead length for the arrow shape
    pub arrow_length: f64,
    /// Arrowhead half-angle for every arrowhead, in degrees
    pub arrow_angle_degrees: f64,
    /// Arrowhead length on coordinate axes
    pub axis_arrow_length: f64,
    /// Drawn length of each dash
    pub dash_on: f64,
    /// Gap between dashes
    pub dash_off: f64,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            arrow_length: 20.0,
            arrow_angle_degrees: 30.0,
            axis_arrow_length: 10.0,
            dash_on: 10.0,
            dash_off: 5.0,
        }
    }
}

impl GeometryOptions {
    /// Builds options from the `[arrow]` and `[dash]` config sections.
    pub fn from_config(arrow: &ArrowConfig, dash: &DashConfig) -> Self {
        Self {
            arrow_length: arrow.length,
            arrow_angle_degrees: arrow.angle_degrees,
            dash_on: dash.on,
            dash_off: dash.off,
            ..Self::default()
        }
    }

    pub(crate) fn half_angle(&self) -> f64 {
        self.arrow_angle_degrees.to_radians()
    }
}

/// Builds the path for `kind` spanned by `start` and `end`.
pub fn build_shape(kind: ShapeKind, start: Point, end: Point, options: &GeometryOptions) -> ShapePath {
    if start == end || !start.is_finite() || !end.is_finite() {
        return ShapePath::new();
    }

    match kind {
        ShapeKind::Line => primitives::line(start, end),
        ShapeKind::DashedLine => primitives::dashed_line(start, end, options),
        ShapeKind::Arrow => primitives::arrow(start, end, options),
        ShapeKind::Rectangle => primitives::rectangle(start, end),
        ShapeKind::CoordinateAxis => primitives::coordinate_axis(start, end, options),
        ShapeKind::Circle => conics::circle(start, end),
        ShapeKind::Ellipse => conics::ellipse(start, end),
        ShapeKind::Hyperbola(axis) => conics::hyperbola(start, end, axis, options),
        ShapeKind::Parabola(direction) => conics::parabola(start, end, direction),
        ShapeKind::Cube => solids::cube(start, end, options),
        ShapeKind::Cuboid => solids::cuboid(start, end, options),
        ShapeKind::Cone => solids::cone(start, end),
        ShapeKind::Cylinder => solids::cylinder(start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::tool::{HyperbolaAxis, ParabolaDirection};

    #[test]
    fn collapsed_gesture_draws_nothing_for_every_shape() {
        let p = Point::new(12.0, 34.0);
        for kind in ShapeKind::ALL {
            assert!(
                build_shape(kind, p, p, &GeometryOptions::default()).is_empty(),
                "{kind} produced output for a single point"
            );
        }
    }

    #[test]
    fn conics_on_flat_boxes_are_empty() {
        let options = GeometryOptions::default();
        let flat = (Point::new(0.0, 50.0), Point::new(100.0, 50.0));
        let thin = (Point::new(50.0, 0.0), Point::new(50.0, 100.0));
        for kind in [
            ShapeKind::Hyperbola(HyperbolaAxis::X),
            ShapeKind::Hyperbola(HyperbolaAxis::Y),
            ShapeKind::Parabola(ParabolaDirection::Up),
            ShapeKind::Parabola(ParabolaDirection::Right),
        ] {
            assert!(build_shape(kind, flat.0, flat.1, &options).is_empty());
            assert!(build_shape(kind, thin.0, thin.1, &options).is_empty());
        }
    }

    #[test]
    fn options_follow_config_sections() {
        let arrow = ArrowConfig {
            length: 35.0,
            angle_degrees: 45.0,
        };
        let dash = DashConfig { on: 4.0, off: 2.0 };
        let options = GeometryOptions::from_config(&arrow, &dash);
        assert_eq!(options.arrow_length, 35.0);
        assert_eq!(options.arrow_angle_degrees, 45.0);
        assert_eq!(options.axis_arrow_length, 10.0);
        assert_eq!((options.dash_on, options.dash_off), (4.0, 2.0));
    }
}
