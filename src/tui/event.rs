use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Key;
use crate::core::grid::Direction;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A keystroke for the core (converted to an `Action`)
    Key(Key),
    /// Terminal resized; only needs a redraw
    Resize,
}

/// Block until the next terminal event.
///
/// Returns `Ok(None)` for events the grid doesn't care about (mouse, focus,
/// paste, key releases).
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    Ok(translate(event::read()?))
}

pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?} ({:?})",
                key_event.code,
                key_event.modifiers,
                key_event.kind
            );
            translate_key(key_event).map(TuiEvent::Key)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    // Terminals with keyboard enhancement report releases too; act on press only
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(Key::Text(c.to_string())),
        (_, KeyCode::Up) => Some(Key::Arrow(Direction::Up)),
        (_, KeyCode::Down) => Some(Key::Arrow(Direction::Down)),
        (_, KeyCode::Left) => Some(Key::Arrow(Direction::Left)),
        (_, KeyCode::Right) => Some(Key::Arrow(Direction::Right)),
        _ => None,
    }
}
