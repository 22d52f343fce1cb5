//! Terminal rendering components.
//!
//! This module hosts the concrete terminal surface implementation along with the
//! recording surface used for headless runs and the styling utilities.

pub mod renderer;
pub mod session;
pub mod shapes;
pub mod terminal;
pub mod theme;

pub use renderer::{DrawSurface, RecordingSurface, SurfaceOp};
pub use session::TerminalSession;
pub use shapes::FilledCircle;
pub use terminal::TerminalSurface;
pub use theme::Palette;
