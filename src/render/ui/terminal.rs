//! Terminal surface implementation using ratatui
//!
//! Maps the logical surface (origin top-left, y down) onto a braille canvas that
//! fills the terminal, with an optional status line underneath.

use crate::actor::ActorState;
use crate::config::Config;
use crate::error::Result;
use crate::render::ui::renderer::DrawSurface;
use crate::render::ui::shapes::FilledCircle;
use crate::render::ui::theme::Palette;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    symbols::Marker,
    widgets::{canvas::Canvas, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

/// Logical size of the surface and the actor drawn on it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Geometry {
    width: f64,
    height: f64,
    radius: f64,
}

/// Draw surface rendering onto a ratatui terminal
///
/// Calls between `clear` and `present` only buffer work; the terminal is written
/// once per frame, in `present`.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    palette: Palette,
    geometry: Geometry,
    show_status: bool,
    key_releases: bool,
    pending: Vec<ActorState>,
}

impl TerminalSurface<CrosstermBackend<Stdout>> {
    /// Surface writing to stdout; pair it with a `TerminalSession`
    pub fn stdout(config: &Config) -> Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()), config)
    }
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(backend: B, config: &Config) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            palette: Palette::from_config(config),
            geometry: Geometry {
                width: f64::from(config.surface.width),
                height: f64::from(config.surface.height),
                radius: f64::from(config.actor.radius),
            },
            show_status: config.show_status,
            key_releases: true,
            pending: Vec::new(),
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether the terminal reports key releases. Without them a moving actor
    /// never stops, so the status line says so.
    pub fn set_key_releases(&mut self, key_releases: bool) {
        self.key_releases = key_releases;
    }

    fn render_canvas(
        frame: &mut Frame,
        area: Rect,
        actors: &[ActorState],
        geometry: Geometry,
        palette: &Palette,
    ) {
        let x_bounds = [0.0, geometry.width];
        let y_bounds = [0.0, geometry.height];
        let resolution = (usize::from(area.width) * 2, usize::from(area.height) * 4);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette.background)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for actor in actors {
                    ctx.draw(&FilledCircle {
                        x: f64::from(actor.x),
                        // canvas y grows upwards; logical row 0 is the top row
                        y: geometry.height - 1.0 - f64::from(actor.y),
                        radius: geometry.radius,
                        color: palette.actor,
                        x_bounds,
                        y_bounds,
                        resolution,
                    });
                }
            });
        frame.render_widget(canvas, area);
    }

    fn render_status(
        frame: &mut Frame,
        area: Rect,
        actor: Option<&ActorState>,
        key_releases: bool,
        palette: &Palette,
    ) {
        let position = actor
            .map(|actor| format!("x: {}  y: {}", actor.x, actor.y))
            .unwrap_or_default();
        let mut status_text = format!("{} | arrows move | q quits", position);
        if !key_releases {
            status_text.push_str(" | key releases unsupported");
        }

        let status = Paragraph::new(status_text).style(palette.status_style());
        frame.render_widget(status, area);
    }
}

impl<B: Backend> DrawSurface for TerminalSurface<B> {
    fn clear(&mut self) -> Result<()> {
        self.pending.clear();
        Ok(())
    }

    fn draw_actor(&mut self, actor: &ActorState) -> Result<()> {
        self.pending.push(*actor);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let actors = std::mem::take(&mut self.pending);
        let palette = &self.palette;
        let geometry = self.geometry;
        let show_status = self.show_status;
        let key_releases = self.key_releases;

        self.terminal.draw(|frame| {
            let size = frame.size();

            if show_status && size.height > 1 {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)])
                    .split(size);
                Self::render_canvas(frame, chunks[0], &actors, geometry, palette);
                Self::render_status(frame, chunks[1], actors.last(), key_releases, palette);
            } else {
                Self::render_canvas(frame, size, &actors, geometry, palette);
            }
        })?;
        Ok(())
    }
}
