//! Input handling and tool state.
//!
//! This module turns generic pointer events into strokes. It tracks the selected
//! tool and its style, smooths stylus pressure, and commits each finished gesture
//! to the canvas history.

pub mod events;
pub mod state;
pub mod style;
pub mod tool;

pub use events::PointerEvent;
pub use state::InputState;
pub use style::{ToolStyle, ToolStyleRegistry};
pub use tool::{HyperbolaAxis, ParabolaDirection, ParseToolError, ShapeKind, ToolKind};
