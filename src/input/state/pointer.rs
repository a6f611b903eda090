use crate::draw::{StrokeBuilder, StrokeId, pressure};
use crate::input::events::PointerEvent;
use crate::util::Point;
use log::{debug, warn};

use super::InputState;

impl InputState {
    /// Dispatches a generic pointer event. Returns the id of the stroke committed by
    /// an `Up` event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<StrokeId> {
        match event {
            PointerEvent::Down { point, pressure } => {
                self.on_pointer_down(point, pressure);
                None
            }
            PointerEvent::Move { point, pressure } => {
                self.on_pointer_move(point, pressure);
                None
            }
            PointerEvent::Up { point, pressure } => self.on_pointer_up(point, pressure),
        }
    }

    /// Starts a gesture with the current tool at `point`.
    ///
    /// The style is captured now; later registry changes do not affect this stroke.
    /// A gesture that never saw its `Up` is discarded.
    pub fn on_pointer_down(&mut self, point: Point, raw_pressure: Option<f64>) {
        if !point.is_finite() {
            warn!("Ignoring pointer down at non-finite position {point:?}");
            return;
        }

        self.smoother.reset();
        let style = self.styles.style(self.tool);
        let mut builder = StrokeBuilder::new(self.tool, &style, self.fill_shapes);
        builder.push(point, self.smoother.sample(pressure::normalize_raw(raw_pressure)));

        if let Some(stale) = self.active.begin(builder) {
            debug!(
                "Discarding unfinished {} gesture with {} points",
                stale.tool(),
                stale.len()
            );
        }
        debug!("Gesture started: {} at {}", self.tool, point);
        self.needs_redraw = true;
    }

    /// Extends the open gesture. Ignored when no gesture is open.
    pub fn on_pointer_move(&mut self, point: Point, raw_pressure: Option<f64>) {
        if !point.is_finite() || !self.active.is_active() {
            return;
        }
        let smoothed = self.smoother.sample(pressure::normalize_raw(raw_pressure));
        if self.active.push(point, smoothed) {
            self.needs_redraw = true;
        }
    }

    /// Ends the open gesture at `point` and commits it as a new snapshot.
    ///
    /// Returns the committed stroke's id, or `None` when no gesture was open.
    pub fn on_pointer_up(&mut self, point: Point, raw_pressure: Option<f64>) -> Option<StrokeId> {
        let mut builder = self.active.take()?;

        if point.is_finite() && builder.last_point() != Some(point) {
            builder.push(point, self.smoother.sample(pressure::normalize_raw(raw_pressure)));
        }

        let stroke = builder.finish()?;
        let id = stroke.id();
        debug!(
            "Gesture committed: {} with {} points",
            stroke.tool,
            stroke.len()
        );
        self.history.commit_stroke(stroke);
        self.needs_redraw = true;
        Some(id)
    }

}
