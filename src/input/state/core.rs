//! Input state: the tool selection, style registry and history of one canvas.

use crate::config::Config;
use crate::draw::{ActiveStroke, Color, PressureSmoother, Snapshot, Stroke, render};
use crate::geometry::GeometryOptions;
use crate::history::SharedHistory;
use crate::input::style::{ToolStyle, ToolStyleRegistry};
use crate::input::tool::ToolKind;
use crate::util;
use log::debug;

/// Thinnest and thickest base width reachable through [`InputState::adjust_thickness`].
const MIN_THICKNESS: f64 = 0.5;
const MAX_THICKNESS: f64 = 100.0;

/// Main input state for one canvas.
///
/// Owns the style registry and the pressure smoother, and holds handles to the
/// shared history and the in-progress gesture. Pointer events (see the
/// `on_pointer_*` methods) build a stroke; releasing the pointer commits exactly
/// one snapshot.
pub struct InputState {
    /// Tool used by the next gesture
    pub(super) tool: ToolKind,
    /// Whether new closed-shape strokes are filled
    pub(super) fill_shapes: bool,
    pub(super) styles: ToolStyleRegistry,
    pub(super) smoother: PressureSmoother,
    pub(super) active: ActiveStroke,
    pub(super) history: SharedHistory,
    pub(super) geometry: GeometryOptions,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Input state with the built-in defaults and the pen selected.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Seeds styles, smoothing and geometry from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_history(config, SharedHistory::new())
    }

    /// Like [`from_config`](Self::from_config), attached to an existing history.
    pub fn with_history(config: &Config, history: SharedHistory) -> Self {
        Self {
            tool: ToolKind::Pen,
            fill_shapes: config.drawing.fill_shapes,
            styles: config.style_registry(),
            smoother: config.pressure_smoother(),
            active: ActiveStroke::new(),
            history,
            geometry: config.geometry_options(),
            needs_redraw: true,
        }
    }

    /// Selects the tool for the next gesture. A gesture already in progress keeps its tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            debug!("Tool changed: {} -> {}", self.tool, tool);
            self.tool = tool;
            self.needs_redraw = true;
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Style the next gesture with the current tool will use.
    pub fn current_style(&self) -> ToolStyle {
        self.styles.style(self.tool)
    }

    /// Changes the current tool's base width by `delta`, clamped to 0.5-100.
    pub fn adjust_thickness(&mut self, delta: f64) {
        let width = (self.current_style().line_width + delta).clamp(MIN_THICKNESS, MAX_THICKNESS);
        self.styles.update_style(self.tool, Some(width), None, None);
        self.needs_redraw = true;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("Color for {} set to {}", self.tool, util::color_to_name(&color));
        self.styles.update_style(self.tool, None, None, Some(color));
        self.needs_redraw = true;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.styles.update_style(self.tool, None, Some(opacity), None);
        self.needs_redraw = true;
    }

    /// Fill flag recorded on new rectangle, circle and ellipse strokes.
    pub fn set_filled(&mut self, filled: bool) {
        self.fill_shapes = filled;
    }

    pub fn filled(&self) -> bool {
        self.fill_shapes
    }

    pub fn styles(&self) -> &ToolStyleRegistry {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut ToolStyleRegistry {
        &mut self.styles
    }

    pub fn geometry(&self) -> &GeometryOptions {
        &self.geometry
    }

    /// Handle to the history this state commits to.
    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Handle to the in-progress gesture, for a render thread.
    pub fn active_stroke(&self) -> &ActiveStroke {
        &self.active
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo().is_some();
        self.needs_redraw |= moved;
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo().is_some();
        self.needs_redraw |= moved;
        moved
    }

    /// Commits an empty canvas; undo brings the strokes back.
    pub fn clear(&mut self) {
        self.history.clear();
        self.needs_redraw = true;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The committed strokes currently visible.
    pub fn visible_snapshot(&self) -> Snapshot {
        self.history.current()
    }

    /// Copy of the gesture in progress, drawn on top of the visible snapshot.
    pub fn provisional_stroke(&self) -> Option<Stroke> {
        self.active.snapshot()
    }

    /// Draws the visible snapshot and the gesture in progress onto `ctx`.
    pub fn render(&self, ctx: &cairo::Context) {
        let provisional = self.provisional_stroke();
        render::render_canvas(
            ctx,
            &self.visible_snapshot(),
            provisional.as_ref(),
            &self.geometry,
        );
    }
}
