//! Per-tool visual configuration.

use super::tool::{StyleBucket, ToolKind};
use crate::config::ToolsConfig;
use crate::draw::{Color, color::BLACK};
use log::{debug, warn};
use std::collections::HashMap;

/// Width, opacity and color a tool draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStyle {
    /// Base line width in pixels
    pub line_width: f64,
    /// Uniform opacity (0.0-1.0)
    pub opacity: f64,
    pub color: Color,
}

impl Default for ToolStyle {
    /// Style returned for tools the registry has never seen.
    fn default() -> Self {
        Self {
            line_width: 1.0,
            opacity: 1.0,
            color: BLACK,
        }
    }
}

/// Maps tool identity to its current style.
///
/// Lookups and updates go through [`ToolKind::style_bucket`], so every shape
/// tool reads and writes the same entry.
#[derive(Debug, Clone)]
pub struct ToolStyleRegistry {
    styles: HashMap<StyleBucket, ToolStyle>,
}

impl Default for ToolStyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolStyleRegistry {
    /// Registry seeded with the built-in defaults for every tool bucket.
    pub fn new() -> Self {
        Self::from_config(&ToolsConfig::default())
    }

    /// Registry with no entries; every lookup yields [`ToolStyle::default`].
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Registry seeded from the `[tools]` section of the config file.
    pub fn from_config(config: &ToolsConfig) -> Self {
        let styles = config
            .entries()
            .into_iter()
            .map(|(tool, entry)| (tool.style_bucket(), entry.to_style()))
            .collect();
        Self { styles }
    }

    /// Current style for `tool`, or the hardcoded default if its bucket is unset.
    pub fn style(&self, tool: ToolKind) -> ToolStyle {
        self.styles
            .get(&tool.style_bucket())
            .copied()
            .unwrap_or_default()
    }

    /// Partially updates the bucket `tool` resolves to; `None` fields are left alone.
    ///
    /// Non-positive or non-finite widths are ignored and opacity is clamped to 0.0-1.0.
    pub fn update_style(
        &mut self,
        tool: ToolKind,
        line_width: Option<f64>,
        opacity: Option<f64>,
        color: Option<Color>,
    ) {
        let entry = self.styles.entry(tool.style_bucket()).or_default();

        if let Some(width) = line_width {
            if width.is_finite() && width > 0.0 {
                entry.line_width = width;
            } else {
                warn!("Ignoring invalid line width {width} for {tool}");
            }
        }
        if let Some(opacity) = opacity {
            entry.opacity = if opacity.is_finite() {
                opacity.clamp(0.0, 1.0)
            } else {
                1.0
            };
        }
        if let Some(color) = color {
            entry.color = color;
        }

        debug!("Style for {} is now {:?}", tool.style_bucket().representative(), entry);
    }

    /// Number of buckets with an explicit entry.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
