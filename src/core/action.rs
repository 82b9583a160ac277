//! # Actions
//!
//! Everything that can happen to the grid becomes an `Action`.
//! User presses an arrow? That's `Action::Move(direction)`.
//! User types `5`? That's `Action::Input("5")`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state in place and returns an `Effect` telling the event loop what to do
//! next. No I/O happens here.
//!
//! ```text
//! Key  →  Action  →  update(state)  →  Effect
//! ```
//!
//! Quit keys are resolved while turning a `Key` into an `Action`, so they win
//! over navigation and digit dispatch.

use log::debug;

use crate::core::grid::Direction;
use crate::core::state::GridState;

/// The literal key that quits, alongside the interrupt key.
pub const QUIT_KEY: &str = "q";

/// A keystroke as delivered by the front end, before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Arrow(Direction),
    /// Ctrl+C
    Interrupt,
    /// Typed or pasted text.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Move(Direction),
    Input(String),
}

impl From<Key> for Action {
    fn from(key: Key) -> Self {
        match key {
            Key::Interrupt => Action::Quit,
            Key::Text(text) if text == QUIT_KEY => Action::Quit,
            Key::Arrow(direction) => Action::Move(direction),
            Key::Text(text) => Action::Input(text),
        }
    }
}

/// What the event loop should do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// The cursor moved or a cell value changed.
    Redraw,
    Quit,
}

pub fn update(state: &mut GridState, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,
        Action::Move(direction) => {
            let before = state.cursor();
            state.move_cursor(direction);
            if state.cursor() == before {
                return Effect::None;
            }
            debug!("Cursor moved {:?} to {}", direction, state.cursor());
            Effect::Redraw
        }
        Action::Input(key) => {
            let before = state.focused_cell().value();
            if !state.input(&key) || state.focused_cell().value() == before {
                return Effect::None;
            }
            debug!(
                "Cell {} now {:?}",
                state.cursor(),
                state.focused_cell().value()
            );
            Effect::Redraw
        }
    }
}
