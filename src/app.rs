//! Render loop orchestration
//!
//! A frame is: clear the surface, drain the frame's input, fold the events into the
//! actor's velocity, integrate position, draw the actor, present. The per-frame
//! update is the pure [`step`] function so it can be tested without any surface.

pub mod runtime;

use crate::actor::ActorState;
use crate::config::Config;
use crate::error::{PlayloopError, Result};
use crate::input::{InputEvent, InputSource};
use crate::render::DrawSurface;
use self::runtime::FramePacer;

/// Lifecycle of the render loop. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Result of folding one frame of input into the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    pub actor: ActorState,
    pub state: LoopState,
}

/// Advance the actor by one frame.
///
/// Every event is applied in order, including those that arrive after a quit in
/// the same frame; position is then integrated exactly once.
pub fn step(actor: ActorState, events: &[InputEvent]) -> FrameOutcome {
    let mut actor = actor;
    let mut state = LoopState::Running;

    for event in events {
        if *event == InputEvent::Quit {
            state = LoopState::Stopped;
        }
        actor.apply(event);
    }
    actor.integrate();

    FrameOutcome { actor, state }
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    /// Frames presented, including the frame that saw the quit.
    pub frames: u64,
    pub actor: ActorState,
    pub state: LoopState,
}

/// Render loop owning the actor, its input source and its draw surface
pub struct RenderLoop<I, S> {
    input: I,
    surface: S,
    actor: ActorState,
    state: LoopState,
    frames: u64,
}

impl<I: InputSource, S: DrawSurface> RenderLoop<I, S> {
    pub fn new(input: I, surface: S, actor: ActorState) -> Self {
        Self {
            input,
            surface,
            actor,
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Loop with the actor placed at the configured start position.
    pub fn from_config(input: I, surface: S, config: &Config) -> Self {
        let [x, y] = config.actor.start;
        Self::new(input, surface, ActorState::new(x, y))
    }

    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_parts(self) -> (I, S) {
        (self.input, self.surface)
    }

    /// Run one complete frame and return the loop state afterwards.
    ///
    /// A frame that sees a quit is still drawn and presented.
    pub fn run_frame(&mut self) -> Result<LoopState> {
        if self.state == LoopState::Stopped {
            return Err(PlayloopError::LoopStopped {
                frames: self.frames,
            });
        }

        self.surface.clear()?;
        let events = self.input.poll_frame()?;
        let outcome = step(self.actor, &events);
        self.actor = outcome.actor;

        self.surface.draw_actor(&self.actor)?;
        self.surface.present()?;
        self.frames += 1;

        log::trace!(
            "frame {}: {} events, actor at ({}, {})",
            self.frames,
            events.len(),
            self.actor.x,
            self.actor.y
        );

        if outcome.state == LoopState::Stopped {
            log::debug!("quit received in frame {}", self.frames);
            self.state = LoopState::Stopped;
        }
        Ok(self.state)
    }

    /// Run frames until a quit is seen or `frame_limit` frames have been presented.
    pub async fn run(
        &mut self,
        pacer: &mut FramePacer,
        frame_limit: Option<u64>,
    ) -> Result<LoopReport> {
        log::info!(
            "render loop started with actor at ({}, {})",
            self.actor.x,
            self.actor.y
        );

        while self.should_continue(frame_limit) {
            self.run_frame()?;
            if self.should_continue(frame_limit) {
                pacer.wait().await;
            }
        }

        let report = LoopReport {
            frames: self.frames,
            actor: self.actor,
            state: self.state,
        };
        log::info!(
            "render loop finished after {} frames ({:?})",
            report.frames,
            report.state
        );
        Ok(report)
    }

    fn should_continue(&self, frame_limit: Option<u64>) -> bool {
        self.state == LoopState::Running && frame_limit.map_or(true, |limit| self.frames < limit)
    }
}
