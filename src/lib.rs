//! On-canvas annotation engine.
//!
//! Captures pointer and stylus input as strokes, renders them with Cairo
//! (pressure-varying freehand ink and a catalogue of procedural shapes) and keeps a
//! linear undo/redo history of whole-canvas snapshots.
//!
//! The usual entry point is [`InputState`]: feed it pointer events, call
//! [`InputState::render`] on every refresh, and use its undo/redo methods from the
//! host's toolbar.

pub mod config;
pub mod draw;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod util;

pub use config::Config;
pub use history::{History, SharedHistory};
pub use input::{InputState, PointerEvent, ShapeKind, ToolKind};
