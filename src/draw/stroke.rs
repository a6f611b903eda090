//! Stroke records and the in-progress gesture builder.
//!
//! A [`Stroke`] is the frozen result of one pointer gesture. While the gesture is
//! running, points are collected by a [`StrokeBuilder`]; the builder only exposes
//! an append that takes a point and its pressure together, so the two sequences
//! can never drift apart.

use super::color::Color;
use super::pressure::{MAX_PRESSURE, MIN_PRESSURE};
use crate::input::tool::{ShapeKind, ToolKind};
use crate::input::style::ToolStyle;
use crate::util::Point;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// Unique stroke identifier.
pub type StrokeId = Uuid;

/// One committed gesture: ordered points with aligned pressure samples and the
/// style it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    pressures: Vec<f64>,
    /// Stroke color (alpha multiplies with `opacity`)
    pub color: Color,
    /// Base line width in pixels
    pub line_width: f64,
    /// Tool that produced the stroke; carries the shape kind for shape tools
    pub tool: ToolKind,
    /// Uniform opacity applied over the whole stroke
    pub opacity: f64,
    /// Fill closed shapes instead of outlining them
    pub filled: bool,
}

impl Stroke {
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Points in temporal order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Pressure samples, one per point.
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.tool.shape_kind()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last point, the control pair for shape tools.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((*self.points.first()?, *self.points.last()?))
    }
}

/// Accumulates points for the gesture currently in progress.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    stroke: Stroke,
}

impl StrokeBuilder {
    /// Starts a stroke for `tool` using the style values captured at gesture start.
    pub fn new(tool: ToolKind, style: &ToolStyle, filled: bool) -> Self {
        Self {
            stroke: Stroke {
                id: Uuid::new_v4(),
                points: Vec::new(),
                pressures: Vec::new(),
                color: style.color,
                line_width: style.line_width,
                tool,
                opacity: style.opacity,
                filled: filled && tool.shape_kind().is_some_and(|kind| kind.is_closed()),
            },
        }
    }

    /// Appends a point together with its pressure (clamped to the 0.3-1.0 domain).
    pub fn push(&mut self, point: Point, pressure: f64) {
        let pressure = if pressure.is_finite() {
            pressure.clamp(MIN_PRESSURE, MAX_PRESSURE)
        } else {
            MIN_PRESSURE
        };
        self.stroke.points.push(point);
        self.stroke.pressures.push(pressure);
    }

    pub fn tool(&self) -> ToolKind {
        self.stroke.tool
    }

    pub fn last_point(&self) -> Option<Point> {
        self.stroke.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.stroke.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stroke.points.is_empty()
    }

    /// Copy of the stroke as it stands, for rendering the live preview.
    pub fn preview(&self) -> Stroke {
        self.stroke.clone()
    }

    /// Freezes the gesture. Returns `None` when no point was ever recorded.
    pub fn finish(self) -> Option<Stroke> {
        (!self.stroke.points.is_empty()).then_some(self.stroke)
    }
}

/// Shared handle to the in-progress gesture.
///
/// The input side appends under a write lock while the render side takes
/// [`snapshot`](Self::snapshot) copies under a read lock, so a reader always sees
/// points and pressures of equal length.
#[derive(Debug, Clone, Default)]
pub struct ActiveStroke {
    inner: Arc<RwLock<Option<StrokeBuilder>>>,
}

impl ActiveStroke {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a new builder, returning the superseded one if a gesture was still open.
    pub fn begin(&self, builder: StrokeBuilder) -> Option<StrokeBuilder> {
        self.inner.write().replace(builder)
    }

    /// Appends to the open gesture. Returns `false` when no gesture is open.
    pub fn push(&self, point: Point, pressure: f64) -> bool {
        match self.inner.write().as_mut() {
            Some(builder) => {
                builder.push(point, pressure);
                true
            }
            None => false,
        }
    }

    /// Closes the gesture and hands back its builder.
    pub fn take(&self) -> Option<StrokeBuilder> {
        self.inner.write().take()
    }

    pub fn is_active(&self) -> bool {
        self.inner.read().is_some()
    }

    /// Tool of the open gesture, if any.
    pub fn tool(&self) -> Option<ToolKind> {
        self.inner.read().as_ref().map(StrokeBuilder::tool)
    }

    /// Consistent copy of the open gesture for rendering.
    pub fn snapshot(&self) -> Option<Stroke> {
        self.inner.read().as_ref().map(StrokeBuilder::preview)
    }
}
