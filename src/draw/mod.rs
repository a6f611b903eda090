//! Stroke data and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: one committed gesture, built incrementally by a [`StrokeBuilder`]
//! - [`Snapshot`]: the ordered strokes visible at one point in history
//! - [`PressureSmoother`]: turns raw stylus pressure into a stable width signal
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod pressure;
pub mod render;
pub mod snapshot;
pub mod stroke;

pub use color::Color;
pub use pressure::PressureSmoother;
pub use render::{pressure_segments, render_canvas, render_stroke, render_strokes};
pub use snapshot::Snapshot;
pub use stroke::{ActiveStroke, Stroke, StrokeBuilder, StrokeId};

pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
