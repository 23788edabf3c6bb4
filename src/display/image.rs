use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

use spiderweb::renderer::text::{draw_label, label_size};
use spiderweb::renderer::{Canvas, Translate};

use super::Scene;
use crate::config::Config;

/// Render the chart and its labels to a PPM file.
pub fn run(config: &Config) -> Result<()> {
    let canvas = render(config)?;

    let path = &config.display.output;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    canvas.write_ppm(&mut out, config.display.background_color)?;
    out.flush()?;

    info!("Wrote {}x{} chart to {}", canvas.width, canvas.height, path.display());
    Ok(())
}

pub fn render(config: &Config) -> Result<Canvas> {
    let display = &config.display;
    let scale = display.label_scale;

    let mut scene = Scene::from_config(config)?;
    scene.resize(display.width, display.height, |text| label_size(text, scale))?;

    let mut canvas = Canvas::new(display.width as usize, display.height as usize);
    canvas.fill(display.background_color);

    let margin = scene.margin as f32;
    scene.web.draw(&mut Translate { inner: &mut canvas, dx: margin, dy: margin });

    for (text, rect) in scene.texts.iter().zip(scene.label_rects()?) {
        draw_label(&mut canvas, rect.left, rect.top, text, display.label_color, scale);
    }
    Ok(canvas)
}
