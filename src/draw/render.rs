//! Cairo-based rendering of strokes and canvas snapshots.

use super::color::Color;
use super::snapshot::Snapshot;
use super::stroke::Stroke;
use crate::geometry::{self, GeometryOptions, PathElement, ShapePath};
use crate::input::tool::ToolKind;
use crate::util::Point;
use std::f64::consts::PI;

/// Share of the base width a stroke keeps at the lowest pressure.
const MIN_WIDTH_RATIO: f64 = 0.3;

/// Curve type of one [`WidthSegment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentCurve {
    /// Quadratic Bézier through `control`
    Quadratic { control: Point },
    /// Straight closing segment
    Straight,
}

/// One piece of a smoothed freehand path with its own line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthSegment {
    pub from: Point,
    pub curve: SegmentCurve,
    pub to: Point,
    pub width: f64,
}

/// Splits a freehand gesture into smoothed segments whose width follows pressure.
///
/// Each point `p[i]` becomes the control point of a quadratic segment ending at
/// the midpoint of `p[i]` and `p[i + 1]`; a straight segment then closes the path
/// at the true last point. Width is `min + pressure[i] * (base - min)` with
/// `min = 0.3 * base`.
pub fn pressure_segments(points: &[Point], pressures: &[f64], base_width: f64) -> Vec<WidthSegment> {
    let min_width = base_width * MIN_WIDTH_RATIO;
    smoothed_segments(points, |i| {
        let pressure = pressures.get(i).copied().unwrap_or(0.0);
        min_width + pressure * (base_width - min_width)
    })
}

fn smoothed_segments(points: &[Point], width_at: impl Fn(usize) -> f64) -> Vec<WidthSegment> {
    let Some((&last, _)) = points.split_last() else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(points.len());
    let mut cursor = points[0];
    for (i, pair) in points.windows(2).enumerate() {
        let mid = pair[0].midpoint(pair[1]);
        segments.push(WidthSegment {
            from: cursor,
            curve: SegmentCurve::Quadratic { control: pair[0] },
            to: mid,
            width: width_at(i),
        });
        cursor = mid;
    }
    segments.push(WidthSegment {
        from: cursor,
        curve: SegmentCurve::Straight,
        to: last,
        width: width_at(points.len() - 1),
    });
    segments
}

/// Fills the whole surface with the board background.
///
/// Should be called after clearing the canvas but before rendering strokes.
pub fn render_board_background(ctx: &cairo::Context, background: Color) {
    if background.a <= 0.0 {
        return;
    }
    let _ = ctx.save();
    background.apply(ctx);
    ctx.set_operator(cairo::Operator::Source);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders the visible canvas: committed strokes, then the gesture in progress.
///
/// Strokes are composed on their own layer so the eraser clears ink without
/// punching through whatever the context already holds (background, document).
pub fn render_canvas(
    ctx: &cairo::Context,
    snapshot: &Snapshot,
    in_progress: Option<&Stroke>,
    options: &GeometryOptions,
) {
    ctx.push_group();
    render_strokes(ctx, snapshot, options);
    if let Some(stroke) = in_progress {
        render_stroke(ctx, stroke, options);
    }
    if ctx.pop_group_to_source().is_ok() {
        let _ = ctx.paint();
    }
}

/// Renders every stroke of a snapshot in draw order.
pub fn render_strokes(ctx: &cairo::Context, snapshot: &Snapshot, options: &GeometryOptions) {
    for stroke in snapshot.strokes() {
        render_stroke(ctx, stroke, options);
    }
}

/// Renders a single stroke, dispatching on its tool.
///
/// Width comes from the stroke's recorded `line_width`, so strokes keep the look
/// they were drawn with after the tool settings change.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke, options: &GeometryOptions) {
    if stroke.is_empty() {
        return;
    }

    match stroke.tool {
        ToolKind::Eraser => render_eraser(ctx, stroke),
        ToolKind::Shape(kind) => {
            let Some((start, end)) = stroke.endpoints() else {
                return;
            };
            let path = geometry::build_shape(kind, start, end, options);
            if path.is_empty() {
                return;
            }
            with_opacity(ctx, stroke, |ctx| {
                render_shape_path(ctx, &path, stroke.line_width, stroke.filled);
            });
        }
        tool if tool.is_pressure_sensitive() => with_opacity(ctx, stroke, |ctx| {
            let segments =
                pressure_segments(stroke.points(), stroke.pressures(), stroke.line_width);
            stroke_segments(ctx, &segments);
        }),
        _ => with_opacity(ctx, stroke, |ctx| {
            render_polyline(ctx, stroke.points(), stroke.line_width);
        }),
    }
}

/// Draws `body` into a group with the stroke color at full strength, then
/// composites the group once with the stroke's alpha so overlapping segments
/// do not darken.
fn with_opacity(ctx: &cairo::Context, stroke: &Stroke, body: impl FnOnce(&cairo::Context)) {
    let alpha = stroke.color.with_opacity(stroke.opacity).a;
    if alpha <= 0.0 {
        return;
    }

    let _ = ctx.save();
    ctx.push_group();
    Color { a: 1.0, ..stroke.color }.apply(ctx);
    body(ctx);
    if ctx.pop_group_to_source().is_ok() {
        let _ = ctx.paint_with_alpha(alpha);
    }
    let _ = ctx.restore();
}

/// Eraser strokes follow the smoothed freehand path at a fixed width and clear
/// everything beneath them.
fn render_eraser(ctx: &cairo::Context, stroke: &Stroke) {
    let width = stroke.line_width;
    let segments = smoothed_segments(stroke.points(), |_| width);

    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    stroke_segments(ctx, &segments);
    let _ = ctx.restore();
}

fn stroke_segments(ctx: &cairo::Context, segments: &[WidthSegment]) {
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    for segment in segments {
        ctx.new_path();
        ctx.move_to(segment.from.x, segment.from.y);
        match segment.curve {
            SegmentCurve::Quadratic { control } => {
                // Cairo only knows cubics; elevate the quadratic.
                let c1 = lerp(segment.from, control, 2.0 / 3.0);
                let c2 = lerp(segment.to, control, 2.0 / 3.0);
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, segment.to.x, segment.to.y);
            }
            SegmentCurve::Straight => ctx.line_to(segment.to.x, segment.to.y),
        }
        ctx.set_line_width(segment.width);
        let _ = ctx.stroke();
    }
}

/// Plain polyline at constant width.
fn render_polyline(ctx: &cairo::Context, points: &[Point], width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        // Zero-length segment so the round cap leaves a dot.
        ctx.line_to(first.x, first.y);
    }
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    let _ = ctx.stroke();
}

/// Strokes a kernel path; closed elements are filled first when `filled` is set.
pub fn render_shape_path(ctx: &cairo::Context, path: &ShapePath, width: f64, filled: bool) {
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Butt);
    ctx.set_line_join(cairo::LineJoin::Miter);

    if filled {
        ctx.new_path();
        for element in path.elements().iter().filter(|e| e.is_closed()) {
            append_element(ctx, element);
        }
        let _ = ctx.fill();
    }

    ctx.new_path();
    for element in path.elements() {
        append_element(ctx, element);
    }
    let _ = ctx.stroke();
}

fn append_element(ctx: &cairo::Context, element: &PathElement) {
    match element {
        PathElement::Line { from, to } => {
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
        }
        PathElement::Rect {
            origin,
            width,
            height,
        } => ctx.rectangle(origin.x, origin.y, *width, *height),
        PathElement::Ellipse { center, rx, ry } => {
            // Scale a unit circle; the path keeps device coordinates after restore.
            let _ = ctx.save();
            ctx.translate(center.x, center.y);
            ctx.scale(*rx, *ry);
            ctx.new_sub_path();
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
            ctx.close_path();
            let _ = ctx.restore();
        }
        PathElement::Polyline(points) => {
            if let Some((first, rest)) = points.split_first() {
                ctx.move_to(first.x, first.y);
                for point in rest {
                    ctx.line_to(point.x, point.y);
                }
            }
        }
    }
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_pressure_gives_constant_width() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ];
        let segments = pressure_segments(&points, &[0.5, 0.5, 0.5], 2.0);

        assert_eq!(segments.len(), 3);
        for segment in &segments {
            assert!((segment.width - 1.3).abs() < 1e-12, "width {}", segment.width);
        }
    }

    #[test]
    fn segments_curve_through_midpoints_and_close_at_last_point() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(20.0, 0.0),
        ];
        let segments = pressure_segments(&points, &[1.0, 1.0, 1.0], 4.0);

        assert_eq!(segments[0].from, points[0]);
        assert_eq!(
            segments[0].curve,
            SegmentCurve::Quadratic { control: points[0] }
        );
        assert_eq!(segments[0].to, Point::new(5.0, 5.0));
        assert_eq!(segments[1].from, Point::new(5.0, 5.0));
        assert_eq!(
            segments[1].curve,
            SegmentCurve::Quadratic { control: points[1] }
        );
        assert_eq!(segments[1].to, Point::new(15.0, 5.0));

        let closing = segments.last().unwrap();
        assert_eq!(closing.curve, SegmentCurve::Straight);
        assert_eq!(closing.to, points[2]);
    }

    #[test]
    fn width_spans_thirty_to_hundred_percent_of_base() {
        let points = [Point::new(0.0, 0.0), Point::new(5.0, 0.0)];
        let light = pressure_segments(&points, &[0.0, 0.0], 10.0);
        let heavy = pressure_segments(&points, &[1.0, 1.0], 10.0);
        assert!((light[0].width - 3.0).abs() < 1e-12);
        assert!((heavy[0].width - 10.0).abs() < 1e-12);
    }

    #[test]
    fn single_point_is_one_straight_dot() {
        let segments = pressure_segments(&[Point::new(3.0, 3.0)], &[0.5], 2.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].curve, SegmentCurve::Straight);
        assert_eq!(segments[0].from, segments[0].to);
    }

    #[test]
    fn no_points_no_segments() {
        assert!(pressure_segments(&[], &[], 2.0).is_empty());
    }
}
