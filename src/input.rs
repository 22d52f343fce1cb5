//! Input subsystem.
//!
//! `raw` talks to crossterm and translates terminal events; `service` defines the
//! domain-level input model and the sources the render loop drains once per frame.

pub mod raw;
pub mod service;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use raw::translate_event;
pub use service::{InputEvent, InputSource, Key, ScriptedInput, TerminalInput};
