use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use spiderweb::attributes::Dimension;

mod config;
mod display;

use config::Config;
use display::DisplayMode;

#[derive(Parser, Debug)]
#[command(name = "spiderweb")]
#[command(author, version, about = "Radar score chart with labels placed around the circle")]
pub struct Args {
    /// Display mode: terminal or image
    #[arg(short, long)]
    mode: Option<DisplayMode>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scores, comma separated (e.g. 7,8,5,5,8); their count sets the angle count
    #[arg(short, long, value_delimiter = ',')]
    scores: Option<Vec<f32>>,

    /// Score that reaches the outer ring
    #[arg(long)]
    max_score: Option<f32>,

    /// Number of corners when no scores are given
    #[arg(long)]
    angles: Option<usize>,

    /// Number of grid rings
    #[arg(long)]
    hierarchy: Option<usize>,

    /// Gap between chart and labels: 8dp, 12px or a bare pixel count
    #[arg(long)]
    spacing: Option<Dimension>,

    /// Pixels per dp
    #[arg(long)]
    density: Option<f32>,

    /// Do not outline the score shape
    #[arg(long)]
    disable_score_stroke: bool,

    /// Image width in pixels (image mode)
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels (image mode)
    #[arg(long)]
    height: Option<u32>,

    /// Output PPM path (image mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write a commented default config to the XDG config path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of image output and the terminal UI
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spiderweb=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        info!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    info!("Starting spiderweb in {:?} mode", config.display.mode);

    match config.display.mode {
        DisplayMode::Terminal => display::terminal::run(&config)?,
        DisplayMode::Image => display::image::run(&config)?,
    }

    Ok(())
}
