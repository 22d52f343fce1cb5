//! Actor state: the position/velocity record the render loop mutates every frame.

use crate::input::{InputEvent, Key};

/// Axis a directional key acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Position and velocity of the single actor on the logical surface.
///
/// Coordinates are surface units with the origin in the top-left corner and y
/// growing downwards. Velocity components are always one of -1, 0 or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorState {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl ActorState {
    /// Actor at rest at the given position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, vx: 0, vy: 0 }
    }

    /// Apply one input event to the velocity.
    ///
    /// A press overwrites whatever the axis held before. A release zeroes the
    /// axis no matter which of its two keys set the current velocity.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                let (axis, delta) = key.direction();
                self.set_axis(axis, delta);
            }
            InputEvent::KeyUp(key) => {
                let (axis, _) = key.direction();
                self.set_axis(axis, 0);
            }
            InputEvent::Quit => {}
        }
    }

    /// Advance the position by one frame of velocity.
    pub fn integrate(&mut self) {
        self.x = self.x.wrapping_add(self.vx);
        self.y = self.y.wrapping_add(self.vy);
    }

    pub fn velocity(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.vx,
            Axis::Vertical => self.vy,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.vx != 0 || self.vy != 0
    }

    fn set_axis(&mut self, axis: Axis, value: i32) {
        match axis {
            Axis::Horizontal => self.vx = value,
            Axis::Vertical => self.vy = value,
        }
    }
}

impl Key {
    /// Axis and signed unit step for this key (screen coordinates, y down).
    pub fn direction(self) -> (Axis, i32) {
        match self {
            Key::Left => (Axis::Horizontal, -1),
            Key::Right => (Axis::Horizontal, 1),
            Key::Up => (Axis::Vertical, -1),
            Key::Down => (Axis::Vertical, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_actor_is_at_rest() {
        let actor = ActorState::new(370, 480);
        assert_eq!((actor.x, actor.y), (370, 480));
        assert!(!actor.is_moving());
    }

    #[test]
    fn key_down_sets_axis_velocity() {
        let mut actor = ActorState::new(0, 0);
        actor.apply(&InputEvent::KeyDown(Key::Left));
        assert_eq!(actor.vx, -1);
        actor.apply(&InputEvent::KeyDown(Key::Down));
        assert_eq!(actor.vy, 1);
        actor.apply(&InputEvent::KeyDown(Key::Right));
        assert_eq!(actor.vx, 1);
        actor.apply(&InputEvent::KeyDown(Key::Up));
        assert_eq!(actor.vy, -1);
    }

    #[test]
    fn release_of_either_key_clears_axis() {
        let mut actor = ActorState::new(0, 0);
        actor.apply(&InputEvent::KeyDown(Key::Left));
        actor.apply(&InputEvent::KeyUp(Key::Right));
        assert_eq!(actor.vx, 0);

        actor.apply(&InputEvent::KeyDown(Key::Up));
        actor.apply(&InputEvent::KeyUp(Key::Down));
        assert_eq!(actor.vy, 0);
    }

    #[test]
    fn release_leaves_other_axis_alone() {
        let mut actor = ActorState::new(0, 0);
        actor.apply(&InputEvent::KeyDown(Key::Left));
        actor.apply(&InputEvent::KeyDown(Key::Down));
        actor.apply(&InputEvent::KeyUp(Key::Left));
        assert_eq!((actor.vx, actor.vy), (0, 1));
    }

    #[test]
    fn quit_does_not_touch_velocity() {
        let mut actor = ActorState::new(0, 0);
        actor.apply(&InputEvent::KeyDown(Key::Right));
        actor.apply(&InputEvent::Quit);
        assert_eq!(actor.velocity(Axis::Horizontal), 1);
    }

    #[test]
    fn integrate_adds_velocity_once() {
        let mut actor = ActorState {
            x: 10,
            y: 10,
            vx: -1,
            vy: 1,
        };
        actor.integrate();
        assert_eq!((actor.x, actor.y), (9, 11));
    }

    #[test]
    fn position_is_not_clamped_to_surface() {
        let mut actor = ActorState {
            x: 0,
            y: 0,
            vx: -1,
            vy: -1,
        };
        actor.integrate();
        assert_eq!((actor.x, actor.y), (-1, -1));
    }
}
