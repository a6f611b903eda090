//! Raster output of a rendered canvas.
//!
//! Renders a snapshot (plus an optional in-progress stroke) into an ARGB32
//! [`cairo::ImageSurface`] and writes it as PNG. This is a one-way rendering of
//! what the canvas shows; strokes cannot be read back from the image.

use crate::draw::{Color, Snapshot, Stroke, render};
use crate::geometry::GeometryOptions;
use std::fmt;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Largest edge accepted for an exported canvas.
const MAX_EDGE: u32 = 16_384;

/// Errors that can occur while exporting a canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid canvas size {width}x{height} (each edge must be 1-16384)")]
    InvalidSize { width: u32, height: u32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned when a `WIDTHxHEIGHT` string cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected WIDTHxHEIGHT (e.g. 800x600), got '{0}'")]
pub struct ParseSizeError(String);

/// Pixel dimensions of an exported canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn validate(self) -> Result<(i32, i32), ExportError> {
        let valid = |edge: u32| (1..=MAX_EDGE).contains(&edge);
        if !valid(self.width) || !valid(self.height) {
            return Err(ExportError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        // Both edges fit in i32 after the range check.
        Ok((self.width as i32, self.height as i32))
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for CanvasSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSizeError(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(err)?;
        let width = w.trim().parse().map_err(|_| err())?;
        let height = h.trim().parse().map_err(|_| err())?;
        Ok(Self { width, height })
    }
}

/// Renders `snapshot` and the optional in-progress stroke over `background`.
pub fn render_to_surface(
    snapshot: &Snapshot,
    in_progress: Option<&Stroke>,
    size: CanvasSize,
    background: Color,
    options: &GeometryOptions,
) -> Result<cairo::ImageSurface, ExportError> {
    let (width, height) = size.validate()?;
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        render::render_board_background(&ctx, background);
        render::render_canvas(&ctx, snapshot, in_progress, options);
    }
    surface.flush();
    Ok(surface)
}

/// Writes `surface` as PNG to `path`, creating the parent directory if needed.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            log::info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = BufWriter::new(File::create(path)?);
    surface.write_to_png(&mut writer)?;
    log::info!(
        "Wrote {}x{} canvas to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}

/// Renders and writes in one step.
pub fn export_png(
    snapshot: &Snapshot,
    size: CanvasSize,
    background: Color,
    options: &GeometryOptions,
    path: &Path,
) -> Result<(), ExportError> {
    let surface = render_to_surface(snapshot, None, size, background, options)?;
    write_png(&surface, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sizes() {
        assert_eq!("640x480".parse(), Ok(CanvasSize::new(640, 480)));
        assert_eq!(" 32 X 16 ".parse(), Ok(CanvasSize::new(32, 16)));
        assert!("640".parse::<CanvasSize>().is_err());
        assert!("ax4".parse::<CanvasSize>().is_err());
        assert!("-3x4".parse::<CanvasSize>().is_err());
        assert_eq!(CanvasSize::new(7, 9).to_string(), "7x9");
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let result = render_to_surface(
            &Snapshot::empty(),
            None,
            CanvasSize::new(0, 10),
            Color::default(),
            &GeometryOptions::default(),
        );
        assert!(matches!(
            result,
            Err(ExportError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn empty_canvas_writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("blank.png");

        export_png(
            &Snapshot::empty(),
            CanvasSize::new(4, 3),
            crate::draw::WHITE,
            &GeometryOptions::default(),
            &path,
        )
        .unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
