//! # playloop - Keyboard-Driven Terminal Render Loop
//!
//! A small real-time loop: an actor sits on a logical 800x600 surface, the arrow
//! keys set its velocity, and every frame the loop clears the surface, drains
//! input, integrates position, draws the actor and presents the frame.
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - TOML configuration with built-in defaults
//! - [`actor`] - Actor position/velocity and the input-to-velocity mapping
//! - [`input`] - Input events, crossterm translation and input sources
//! - [`render`] - Draw surface trait and the ratatui terminal surface
//! - [`app`] - The render loop, the pure per-frame step and frame pacing

// Core modules
pub mod error;
pub mod config;

// Loop state and subsystems
pub mod actor;
pub mod input;
pub mod render;

// Render loop
pub mod app;

// Re-export commonly used types for convenience
pub use error::{PlayloopError, Result};

// Public API surface for external usage
pub use actor::ActorState;
pub use app::{step, FrameOutcome, LoopReport, LoopState, RenderLoop};
pub use config::Config;
pub use input::{InputEvent, InputSource, Key};
pub use render::DrawSurface;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
