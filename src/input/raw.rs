//! Low-level input collection: non-blocking crossterm draining and translation of
//! terminal events into the render loop's `InputEvent`s.

use crate::error::Result;
use crate::input::service::{InputEvent, Key};
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Upper bound on events pulled in one drain so a flood cannot starve the frame.
pub const MAX_EVENTS_PER_FRAME: usize = 256;

/// Pull every terminal event that is already queued, without blocking.
pub fn drain_pending(limit: usize) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    while events.len() < limit && event::poll(Duration::ZERO)? {
        events.push(event::read()?);
    }
    Ok(events)
}

/// Translate a crossterm event into a render loop event.
///
/// Arrow keys map to key-down on press or auto-repeat and to key-up on release.
/// `q`, `Esc` and `Ctrl+C` request quit when pressed. Everything else is ignored.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<InputEvent> {
    if let Some(key) = arrow_key(key_event.code) {
        return match key_event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::KeyDown(key)),
            KeyEventKind::Release => Some(InputEvent::KeyUp(key)),
        };
    }

    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match (key_event.code, key_event.modifiers) {
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        (KeyCode::Char('q') | KeyCode::Char('Q'), modifiers)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(InputEvent::Quit)
        }
        (KeyCode::Esc, _) => Some(InputEvent::Quit),
        _ => None,
    }
}

fn arrow_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}
