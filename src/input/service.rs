//! High-level input service.
//!
//! Defines the render loop's input vocabulary and the sources that hand the loop
//! every event pending at the start of a frame.

use crate::error::Result;
use crate::input::raw::{drain_pending, translate_event, MAX_EVENTS_PER_FRAME};
use std::collections::VecDeque;

/// Directional keys the actor responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

/// Discrete input events consumed by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Anything that can supply the events for one frame.
pub trait InputSource {
    /// Return every event pending right now, in arrival order. Must not block.
    fn poll_frame(&mut self) -> Result<Vec<InputEvent>>;
}

/// Live terminal input backed by crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput {
    events_seen: u64,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of translated events delivered so far.
    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }
}

impl InputSource for TerminalInput {
    fn poll_frame(&mut self) -> Result<Vec<InputEvent>> {
        let events: Vec<InputEvent> = drain_pending(MAX_EVENTS_PER_FRAME)?
            .iter()
            .filter_map(translate_event)
            .collect();
        self.events_seen += events.len() as u64;
        if !events.is_empty() {
            log::trace!("input: {:?}", events);
        }
        Ok(events)
    }
}

/// Replays a fixed script, one entry per frame.
///
/// Once the script runs out every further frame sees no input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new<I, F>(frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: IntoIterator<Item = InputEvent>,
    {
        Self {
            frames: frames
                .into_iter()
                .map(|frame| frame.into_iter().collect())
                .collect(),
        }
    }

    /// Script with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Append one more frame of events.
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.frames.push_back(events.into_iter().collect());
    }

    /// Frames still queued.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_frame(&mut self) -> Result<Vec<InputEvent>> {
        Ok(self.frames.pop_front().unwrap_or_default())
    }
}
