use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser};
use inkmark::config::Config;
use inkmark::draw::Color;
use inkmark::export::{self, CanvasSize};
use inkmark::util::{self, Point};
use inkmark::{InputState, PointerEvent, ToolKind};
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("INKMARK_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "inkmark")]
#[command(version = VERSION, about = "Render an annotation gesture to a PNG")]
struct Cli {
    /// Tool for the gesture: pen, pencil, marker, eraser, laser, light, or a shape
    /// such as arrow, circle, hyperbola-x, parabola-up, cube (optionally "shape:<name>")
    #[arg(long, short = 't', default_value = "pen", value_parser = parse_tool)]
    tool: ToolKind,

    /// Gesture sample as "x,y" or "x,y@pressure"; repeat in drawing order
    #[arg(long = "point", short = 'p', value_name = "X,Y[@P]", value_parser = parse_sample)]
    points: Vec<(Point, Option<f64>)>,

    /// Canvas size in pixels
    #[arg(long, short = 's', default_value = "800x600", value_name = "WxH")]
    size: CanvasSize,

    /// Background color name (defaults to [drawing].background from the config)
    #[arg(long, short = 'b', value_name = "COLOR")]
    background: Option<String>,

    /// Override the tool's color
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,

    /// Override the tool's base line width in pixels
    #[arg(long, value_name = "PX")]
    width: Option<f64>,

    /// Fill closed shapes (rectangle, circle, ellipse)
    #[arg(long, action = ArgAction::SetTrue)]
    filled: bool,

    /// PNG file to write
    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        required_unless_present_any = ["print_config", "init_config"]
    )]
    output: Option<PathBuf>,

    /// Read settings from this file instead of ~/.config/inkmark/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,

    /// Write the documented default config to ~/.config/inkmark/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "print_config")]
    init_config: bool,
}

fn parse_tool(s: &str) -> Result<ToolKind, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_sample(s: &str) -> Result<(Point, Option<f64>), String> {
    let (coords, pressure) = match s.split_once('@') {
        Some((coords, pressure)) => {
            let value: f64 = pressure
                .trim()
                .parse()
                .map_err(|_| format!("invalid pressure '{pressure}'"))?;
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("pressure {value} is outside 0.0-1.0"));
            }
            (coords, Some(value))
        }
        None => (s, None),
    };
    let point = coords.parse::<Point>().map_err(|e| format!("{e}"))?;
    Ok((point, pressure))
}

fn parse_color(name: &str) -> Result<Color> {
    util::name_to_color(name).ok_or_else(|| anyhow!("Unknown color '{name}'"))
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let config = load_config(cli.config.as_ref())?;

    if cli.print_config {
        print!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to serialize config")?
        );
        return Ok(());
    }

    let output = cli
        .output
        .context("--output is required when rendering")?;
    if cli.points.is_empty() {
        return Err(anyhow!("No gesture given; pass at least one --point X,Y"));
    }

    let background = match cli.background.as_deref() {
        Some(name) => parse_color(name)?,
        None => config.drawing.background.to_color(),
    };

    let mut state = InputState::from_config(&config);
    state.set_tool(cli.tool);
    if cli.filled {
        state.set_filled(true);
    }
    if let Some(name) = cli.color.as_deref() {
        state.set_color(parse_color(name)?);
    }
    if let Some(width) = cli.width {
        if !(width.is_finite() && width > 0.0) {
            return Err(anyhow!("Line width must be positive, got {width}"));
        }
        state.styles_mut().update_style(cli.tool, Some(width), None, None);
    }

    log::info!(
        "Replaying {} sample(s) with {} on a {} canvas",
        cli.points.len(),
        cli.tool,
        cli.size
    );
    for event in PointerEvent::gesture(&cli.points) {
        state.handle_pointer(event);
    }

    export::export_png(
        &state.visible_snapshot(),
        cli.size,
        background,
        state.geometry(),
        &output,
    )
    .with_context(|| format!("Failed to export {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
