//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::style::ToolStyle;
use crate::input::tool::{ShapeKind, ToolKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas-wide drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Background painted under the strokes when exporting a PNG.
    /// "transparent" keeps the alpha channel empty.
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Whether closed shapes (rectangle, circle, ellipse) start out filled
    #[serde(default)]
    pub fill_shapes: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            fill_shapes: false,
        }
    }
}

/// Initial style of one tool bucket.
///
/// A table that sets only some keys gets 3 px, full opacity and black for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolStyleConfig {
    /// Base line width in pixels (valid range: 0.5 - 100.0)
    #[serde(default = "default_width")]
    pub width: f64,

    /// Stroke opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Stroke color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_tool_color")]
    pub color: ColorSpec,
}

impl ToolStyleConfig {
    fn new(width: f64, opacity: f64, color: &str) -> Self {
        Self {
            width,
            opacity,
            color: ColorSpec::named(color),
        }
    }

    pub fn to_style(&self) -> ToolStyle {
        ToolStyle {
            line_width: self.width,
            opacity: self.opacity,
            color: self.color.to_color(),
        }
    }
}

/// Per-tool starting styles, one table per style bucket.
///
/// Every shape tool reads the `shape` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ToolsConfig {
    pub pen: ToolStyleConfig,
    pub pencil: ToolStyleConfig,
    pub marker: ToolStyleConfig,
    pub eraser: ToolStyleConfig,
    pub laser: ToolStyleConfig,
    pub light: ToolStyleConfig,
    pub shape: ToolStyleConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            pen: ToolStyleConfig::new(3.0, 1.0, "red"),
            pencil: ToolStyleConfig::new(2.0, 0.85, "gray"),
            marker: ToolStyleConfig::new(14.0, 0.35, "yellow"),
            eraser: ToolStyleConfig::new(20.0, 1.0, "white"),
            laser: ToolStyleConfig::new(4.0, 0.8, "red"),
            light: ToolStyleConfig::new(30.0, 0.25, "yellow"),
            shape: ToolStyleConfig::new(3.0, 1.0, "red"),
        }
    }
}

impl ToolsConfig {
    /// Each table paired with the tool it seeds.
    pub fn entries(&self) -> Vec<(ToolKind, &ToolStyleConfig)> {
        vec![
            (ToolKind::Pen, &self.pen),
            (ToolKind::Pencil, &self.pencil),
            (ToolKind::Marker, &self.marker),
            (ToolKind::Eraser, &self.eraser),
            (ToolKind::Laser, &self.laser),
            (ToolKind::Light, &self.light),
            (ToolKind::Shape(ShapeKind::Line), &self.shape),
        ]
    }

    pub(crate) fn entries_mut(&mut self) -> [(&'static str, &mut ToolStyleConfig); 7] {
        [
            ("pen", &mut self.pen),
            ("pencil", &mut self.pencil),
            ("marker", &mut self.marker),
            ("eraser", &mut self.eraser),
            ("laser", &mut self.laser),
            ("light", &mut self.light),
            ("shape", &mut self.shape),
        ]
    }
}

/// Arrowhead settings.
///
/// Used by the arrow shape; the angle also applies to coordinate-axis arrowheads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead half-angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

/// Dash pattern for dashed lines, hidden solid edges and asymptotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DashConfig {
    /// Drawn length of each dash in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_dash_on")]
    pub on: f64,

    /// Gap between dashes in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_dash_off")]
    pub off: f64,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            on: default_dash_on(),
            off: default_dash_off(),
        }
    }
}

/// Stylus pressure filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PressureConfig {
    /// Number of recent samples averaged (valid range: 1 - 32)
    #[serde(default = "default_pressure_window")]
    pub window: usize,

    /// Weight of the new average against the previous output (valid range: 0.01 - 1.0)
    /// Lower values react more slowly
    #[serde(default = "default_pressure_smoothing")]
    pub smoothing: f64,

    /// Floor applied to every smoothed value (valid range: 0.3 - 1.0)
    #[serde(default = "default_pressure_min")]
    pub min: f64,
}

impl Default for PressureConfig {
    fn default() -> Self {
        Self {
            window: default_pressure_window(),
            smoothing: default_pressure_smoothing(),
            min: default_pressure_min(),
        }
    }
}

fn default_background() -> ColorSpec {
    ColorSpec::named("transparent")
}

fn default_width() -> f64 {
    3.0
}

fn default_tool_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_opacity() -> f64 {
    1.0
}

fn default_arrow_length() -> f64 {
    20.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

fn default_dash_on() -> f64 {
    10.0
}

fn default_dash_off() -> f64 {
    5.0
}

fn default_pressure_window() -> usize {
    5
}

fn default_pressure_smoothing() -> f64 {
    0.2
}

fn default_pressure_min() -> f64 {
    0.3
}
