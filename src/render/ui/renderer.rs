//! Draw surface trait and a recording implementation
//!
//! This module defines the `DrawSurface` trait the render loop draws through. A
//! frame is always `clear`, any number of `draw_actor` calls, then `present`.

use crate::actor::ActorState;
use crate::error::Result;

/// Core trait for the surface the render loop draws onto
pub trait DrawSurface {
    /// Start a new frame by wiping the surface to its background color
    fn clear(&mut self) -> Result<()>;

    /// Draw the actor as a filled circle at its current position
    fn draw_actor(&mut self, actor: &ActorState) -> Result<()>;

    /// Make the frame drawn since the last `clear` visible
    fn present(&mut self) -> Result<()>;
}

impl<S: DrawSurface + ?Sized> DrawSurface for Box<S> {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn draw_actor(&mut self, actor: &ActorState) -> Result<()> {
        (**self).draw_actor(actor)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }
}

/// One call made against a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Clear,
    DrawActor(ActorState),
    Present,
}

/// Surface that records every call instead of drawing.
///
/// Used for headless runs and to verify frame ordering without a terminal.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    pub fn present_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Present))
            .count()
    }

    /// Actors drawn in each presented frame.
    pub fn presented_frames(&self) -> Vec<Vec<ActorState>> {
        let mut frames = Vec::new();
        let mut current = Vec::new();
        for op in &self.ops {
            match op {
                SurfaceOp::Clear => current.clear(),
                SurfaceOp::DrawActor(actor) => current.push(*actor),
                SurfaceOp::Present => frames.push(std::mem::take(&mut current)),
            }
        }
        frames
    }

    /// Actor drawn in the most recently presented frame.
    pub fn last_presented_actor(&self) -> Option<ActorState> {
        self.presented_frames()
            .last()
            .and_then(|frame| frame.last().copied())
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Clear);
        Ok(())
    }

    fn draw_actor(&mut self, actor: &ActorState) -> Result<()> {
        self.ops.push(SurfaceOp::DrawActor(*actor));
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.ops.push(SurfaceOp::Present);
        Ok(())
    }
}
