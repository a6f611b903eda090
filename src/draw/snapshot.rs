//! Immutable canvas snapshots.

use super::stroke::Stroke;
use std::sync::Arc;

/// All strokes visible at one point in history.
///
/// Strokes are kept in draw order (first = bottom layer, last = top layer).
/// Snapshots are never mutated once built; adding a stroke produces a new
/// snapshot that shares the existing strokes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    strokes: Vec<Arc<Stroke>>,
}

impl Snapshot {
    /// Creates an empty canvas.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new snapshot with `stroke` drawn on top of the current strokes.
    pub fn with_stroke(&self, stroke: Stroke) -> Self {
        let mut strokes = Vec::with_capacity(self.strokes.len() + 1);
        strokes.extend(self.strokes.iter().cloned());
        strokes.push(Arc::new(stroke));
        Self { strokes }
    }

    /// Strokes in draw order.
    pub fn strokes(&self) -> impl DoubleEndedIterator<Item = &Stroke> + ExactSizeIterator {
        self.strokes.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl FromIterator<Stroke> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self {
            strokes: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;
    use crate::draw::stroke::StrokeBuilder;
    use crate::input::{ToolKind, style::ToolStyle};
    use crate::util::Point;

    fn stroke(x: f64) -> Stroke {
        let style = ToolStyle {
            line_width: 3.0,
            opacity: 1.0,
            color: RED,
        };
        let mut builder = StrokeBuilder::new(ToolKind::Pen, &style, false);
        builder.push(Point::new(x, 0.0), 0.5);
        builder.finish().unwrap()
    }

    #[test]
    fn with_stroke_leaves_original_untouched() {
        let empty = Snapshot::empty();
        let one = empty.with_stroke(stroke(1.0));
        let two = one.with_stroke(stroke(2.0));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn strokes_iterate_in_draw_order() {
        let snapshot = Snapshot::empty()
            .with_stroke(stroke(1.0))
            .with_stroke(stroke(2.0))
            .with_stroke(stroke(3.0));
        let xs: Vec<f64> = snapshot.strokes().map(|s| s.points()[0].x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}
