//! Drawing tool and shape selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines how a gesture is recorded and rendered. Shape
/// tools carry the concrete [`ShapeKind`] so it is present exactly when the
/// tool is a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Pressure-sensitive freehand pen
    Pen,
    /// Pressure-sensitive freehand pencil
    Pencil,
    /// Translucent highlighter, constant width
    Marker,
    /// Clears whatever lies beneath the stroke
    Eraser,
    /// Presenter pointer trail
    Laser,
    /// Procedural shape spanned by the gesture's first and last point
    Shape(ShapeKind),
    Image,
    Keyboard,
    Text,
    /// Spotlight-style highlight
    Light,
}

/// Catalogue of procedurally generated shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    DashedLine,
    Arrow,
    Rectangle,
    Circle,
    Ellipse,
    CoordinateAxis,
    Hyperbola(HyperbolaAxis),
    Parabola(ParabolaDirection),
    Cube,
    Cuboid,
    Cone,
    Cylinder,
}

/// Transverse axis of a hyperbola.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HyperbolaAxis {
    X,
    Y,
}

/// Opening direction of a parabola, in screen terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParabolaDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Style-registry key a tool resolves to.
///
/// Every shape shares a single bucket; the remaining tools each own one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleBucket(ToolKind);

impl StyleBucket {
    /// The tool kind representing this bucket (shapes are keyed by [`ShapeKind::Line`]).
    pub fn representative(&self) -> ToolKind {
        self.0
    }
}

impl ToolKind {
    /// All shapes collapse onto one canonical shape entry.
    pub fn style_bucket(&self) -> StyleBucket {
        match self {
            ToolKind::Shape(_) => StyleBucket(ToolKind::Shape(ShapeKind::Line)),
            other => StyleBucket(*other),
        }
    }

    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Shape(kind) => Some(*kind),
            _ => None,
        }
    }

    /// True for tools whose width follows stylus pressure.
    pub fn is_pressure_sensitive(&self) -> bool {
        matches!(self, ToolKind::Pen | ToolKind::Pencil)
    }
}

impl ShapeKind {
    /// Every shape variant, in toolbar order.
    pub const ALL: [ShapeKind; 17] = [
        ShapeKind::Line,
        ShapeKind::DashedLine,
        ShapeKind::Arrow,
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::CoordinateAxis,
        ShapeKind::Hyperbola(HyperbolaAxis::X),
        ShapeKind::Hyperbola(HyperbolaAxis::Y),
        ShapeKind::Parabola(ParabolaDirection::Up),
        ShapeKind::Parabola(ParabolaDirection::Down),
        ShapeKind::Parabola(ParabolaDirection::Left),
        ShapeKind::Parabola(ParabolaDirection::Right),
        ShapeKind::Cube,
        ShapeKind::Cuboid,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
    ];

    /// True for shapes drawn with a closed outline that can be filled.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            ShapeKind::Rectangle | ShapeKind::Circle | ShapeKind::Ellipse
        )
    }

    fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::DashedLine => "dashed-line",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::CoordinateAxis => "coordinate-axis",
            ShapeKind::Hyperbola(HyperbolaAxis::X) => "hyperbola-x",
            ShapeKind::Hyperbola(HyperbolaAxis::Y) => "hyperbola-y",
            ShapeKind::Parabola(ParabolaDirection::Up) => "parabola-up",
            ShapeKind::Parabola(ParabolaDirection::Down) => "parabola-down",
            ShapeKind::Parabola(ParabolaDirection::Left) => "parabola-left",
            ShapeKind::Parabola(ParabolaDirection::Right) => "parabola-right",
            ShapeKind::Cube => "cube",
            ShapeKind::Cuboid => "cuboid",
            ShapeKind::Cone => "cone",
            ShapeKind::Cylinder => "cylinder",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToolKind::Pen => "pen",
            ToolKind::Pencil => "pencil",
            ToolKind::Marker => "marker",
            ToolKind::Eraser => "eraser",
            ToolKind::Laser => "laser",
            ToolKind::Shape(kind) => return write!(f, "shape:{kind}"),
            ToolKind::Image => "image",
            ToolKind::Keyboard => "keyboard",
            ToolKind::Text => "text",
            ToolKind::Light => "light",
        };
        f.write_str(name)
    }
}

/// Error returned when a tool or shape name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseToolError {
    #[error("unknown tool '{0}'")]
    UnknownTool(String),

    #[error("unknown shape '{0}'")]
    UnknownShape(String),
}

impl FromStr for ShapeKind {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        ShapeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ParseToolError::UnknownShape(s.to_string()))
    }
}

impl FromStr for ToolKind {
    type Err = ParseToolError;

    /// Accepts plain tool names, `shape:<name>`, or a bare shape name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if let Some(shape) = lowered.strip_prefix("shape:") {
            return shape.parse().map(ToolKind::Shape);
        }
        match lowered.as_str() {
            "pen" => Ok(ToolKind::Pen),
            "pencil" => Ok(ToolKind::Pencil),
            "marker" => Ok(ToolKind::Marker),
            "eraser" => Ok(ToolKind::Eraser),
            "laser" => Ok(ToolKind::Laser),
            "image" => Ok(ToolKind::Image),
            "keyboard" => Ok(ToolKind::Keyboard),
            "text" => Ok(ToolKind::Text),
            "light" => Ok(ToolKind::Light),
            other => other
                .parse()
                .map(ToolKind::Shape)
                .map_err(|_| ParseToolError::UnknownTool(s.to_string())),
        }
    }
}
