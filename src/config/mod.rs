//! Configuration file support for inkmark.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkmark/config.toml`. Settings include per-tool starting styles,
//! arrowhead and dash geometry, and stylus pressure filtering.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{
    ArrowConfig, DashConfig, DrawingConfig, PressureConfig, ToolStyleConfig, ToolsConfig,
};

use crate::draw::PressureSmoother;
use crate::geometry::GeometryOptions;
use crate::input::style::ToolStyleRegistry;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and fall back to them when missing from the file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// background = "white"
/// fill_shapes = false
///
/// [tools.pen]
/// width = 3.0
/// color = "red"
///
/// [tools.marker]
/// width = 14.0
/// opacity = 0.35
/// color = [255, 230, 0]
///
/// [arrow]
/// length = 20.0
/// angle_degrees = 30.0
///
/// [dash]
/// on = 10.0
/// off = 5.0
///
/// [pressure]
/// window = 5
/// smoothing = 0.2
/// min = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas-wide settings (export background, fill flag)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Starting width, opacity and color for each tool
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Arrowhead appearance
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Dash pattern for dashed shapes
    #[serde(default)]
    pub dash: DashConfig,

    /// Stylus pressure filtering
    #[serde(default)]
    pub pressure: PressureConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `tools.*.width`: 0.5 - 100.0
    /// - `tools.*.opacity`: 0.0 - 1.0
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    /// - `dash.on`, `dash.off`: 1.0 - 100.0
    /// - `pressure.window`: 1 - 32
    /// - `pressure.smoothing`: 0.01 - 1.0
    /// - `pressure.min`: 0.3 - 1.0
    pub fn validate_and_clamp(&mut self) {
        for (name, entry) in self.tools.entries_mut() {
            entry.width = clamp_logged(&format!("tools.{name}.width"), entry.width, 0.5, 100.0);
            entry.opacity =
                clamp_logged(&format!("tools.{name}.opacity"), entry.opacity, 0.0, 1.0);
        }

        self.arrow.length = clamp_logged("arrow length", self.arrow.length, 5.0, 50.0);
        self.arrow.angle_degrees =
            clamp_logged("arrow angle", self.arrow.angle_degrees, 15.0, 60.0);

        self.dash.on = clamp_logged("dash on", self.dash.on, 1.0, 100.0);
        self.dash.off = clamp_logged("dash off", self.dash.off, 1.0, 100.0);

        if !(1..=32).contains(&self.pressure.window) {
            warn!(
                "Invalid pressure window {}, clamping to 1-32 range",
                self.pressure.window
            );
            self.pressure.window = self.pressure.window.clamp(1, 32);
        }
        self.pressure.smoothing =
            clamp_logged("pressure smoothing", self.pressure.smoothing, 0.01, 1.0);
        self.pressure.min = clamp_logged("pressure min", self.pressure.min, 0.3, 1.0);
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkmark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkmark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, or the config cannot
    /// be serialized or written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the configuration to TOML at `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the bundled `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path, or the
    /// directory or file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    pub fn geometry_options(&self) -> GeometryOptions {
        GeometryOptions::from_config(&self.arrow, &self.dash)
    }

    pub fn style_registry(&self) -> ToolStyleRegistry {
        ToolStyleRegistry::from_config(&self.tools)
    }

    pub fn pressure_smoother(&self) -> PressureSmoother {
        PressureSmoother::with_params(
            self.pressure.window,
            self.pressure.smoothing,
            self.pressure.min,
        )
    }
}

/// Documented example config shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

fn clamp_logged(name: &str, value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        warn!("Invalid {name} NaN, using {min:.2}");
        return min;
    }
    if !(min..=max).contains(&value) {
        warn!("Invalid {name} {value:.2}, clamping to {min}-{max} range");
        return value.clamp(min, max);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, YELLOW};
    use crate::input::tool::{ShapeKind, ToolKind};
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.arrow.length, 20.0);
        assert_eq!((config.dash.on, config.dash.off), (10.0, 5.0));
        assert_eq!(config.pressure.window, 5);
    }

    #[test]
    fn partial_tool_table_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tools.marker]
            width = 20.0
            color = [255, 255, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.tools.marker.width, 20.0);
        assert_eq!(config.tools.marker.opacity, 1.0);
        assert_eq!(config.tools.marker.color.to_color(), YELLOW);
        assert_eq!(config.tools.pen, ToolsConfig::default().pen);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [arrow]
            length = 500.0
            angle_degrees = 5.0

            [dash]
            on = 0.0

            [pressure]
            window = 0
            smoothing = 3.0

            [tools.pen]
            width = 250.0
            opacity = -1.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.arrow.length, 50.0);
        assert_eq!(config.arrow.angle_degrees, 15.0);
        assert_eq!(config.dash.on, 1.0);
        assert_eq!(config.dash.off, 5.0);
        assert_eq!(config.pressure.window, 1);
        assert_eq!(config.pressure.smoothing, 1.0);
        assert_eq!(config.tools.pen.width, 100.0);
        assert_eq!(config.tools.pen.opacity, 0.0);
    }

    #[test]
    fn load_from_reads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[arrow]\nlength = 1.0\n[tools.shape]\ncolor = \"red\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.arrow.length, 5.0);

        let registry = config.style_registry();
        assert_eq!(registry.style(ToolKind::Shape(ShapeKind::Cone)).color, RED);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[arrow\nlength = ").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.dash.on = 7.0;
        config.drawing.fill_shapes = true;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn bundled_example_parses_to_defaults() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn schema_lists_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["drawing", "tools", "arrow", "dash", "pressure"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
