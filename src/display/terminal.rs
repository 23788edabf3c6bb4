use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tracing::debug;

use spiderweb::geometry::Rect as LabelRect;
use spiderweb::renderer::{BrailleCanvas, Translate};

use super::Scene;
use crate::config::Config;

/// Braille dots per terminal cell, horizontally and vertically.
const DOTS_X: i32 = 2;
const DOTS_Y: i32 = 4;

pub fn run(config: &Config) -> Result<()> {
    // Build before touching the terminal so config errors print normally
    let scene = Scene::from_config(config)?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, scene);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut scene: Scene) -> Result<()> {
    let mut last_size = None;
    let tick = Duration::from_millis(250);

    loop {
        let size = terminal.size()?;
        if last_size != Some(size) {
            // One status row, the rest is chart
            let chart_rows = size.height.saturating_sub(1) as u32;
            scene.resize(size.width as u32 * 2, chart_rows * 4, |text| {
                spiderweb::geometry::Size::new(text.chars().count() as i32 * DOTS_X, DOTS_Y)
            })?;
            debug!(cols = size.width, rows = size.height, "terminal resized");
            last_size = Some(size);
        }

        let labels = scene.label_rects()?;
        let needs_draw = scene.web.take_redraw_request() | scene.labels.take_layout_request();

        if needs_draw {
            terminal.draw(|frame| {
                let area = frame.area();
                let chart_area = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));

                let mut canvas = BrailleCanvas::new(chart_area.width as usize, chart_area.height as usize);
                let margin = scene.margin as f32;
                scene.web.draw(&mut Translate { inner: &mut canvas, dx: margin, dy: margin });
                canvas.render(frame, chart_area);

                render_labels(frame, chart_area, &scene, &labels);
                render_status(frame, area, &scene);
            })?;
        }

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(KeyEvent { code: KeyCode::Char('q'), .. })
                | Event::Key(KeyEvent { code: KeyCode::Esc, .. }) => break,
                Event::Key(KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                }) => break,
                Event::Resize(..) => last_size = None,
                _ => {}
            }
        }
    }

    Ok(())
}

/// Write each label at its placed cell. Placements are in braille dots.
fn render_labels(frame: &mut Frame, area: Rect, scene: &Scene, labels: &[LabelRect]) {
    let (r, g, b) = scene.web.style().score_stroke_color.rgb();
    for (text, rect) in scene.texts.iter().zip(labels) {
        let cx = rect.left.div_euclid(DOTS_X);
        let cy = rect.top.div_euclid(DOTS_Y);
        for (i, ch) in text.chars().enumerate() {
            let x = cx + i as i32;
            if x < 0 || cy < 0 || x >= area.width as i32 || cy >= area.height as i32 {
                continue;
            }
            let cell = frame.buffer_mut().cell_mut((area.x + x as u16, area.y + cy as u16));
            if let Some(cell) = cell {
                cell.set_char(ch);
                cell.set_fg(Color::Rgb(r, g, b));
            }
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, scene: &Scene) {
    let config = scene.web.config();
    let status = format!(
        " spiderweb | angles: {} | rings: {} | max: {} | [q]uit ",
        config.angle_count(),
        config.hierarchy_count(),
        config.max_score()
    );

    for (i, ch) in status.chars().enumerate() {
        if i < area.width as usize {
            let cell = frame.buffer_mut().cell_mut((area.x + i as u16, area.y));
            if let Some(cell) = cell {
                cell.set_char(ch);
                cell.set_fg(Color::DarkGray);
            }
        }
    }
}
