//! Rendering subsystem.
//!
//! The render loop only sees the [`DrawSurface`](ui::DrawSurface) trait; the terminal
//! canvas, its palette and the raw-mode session live under [`ui`].

pub mod ui;

pub use ui::{DrawSurface, Palette, RecordingSurface, SurfaceOp, TerminalSession, TerminalSurface};
