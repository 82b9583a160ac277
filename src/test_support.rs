//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::text::Line;
use std::path::PathBuf;

use crate::core::action::{Action, Effect, Key, update};
use crate::core::grid::{Coordinate, Digit};
use crate::core::state::GridState;

pub fn coord(column: u8, row: u8) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

pub fn digit(value: u8) -> Digit {
    Digit::new(value).unwrap()
}

pub fn text(s: &str) -> Key {
    Key::Text(s.to_string())
}

/// Feed keys through `update` until one of them quits.
pub fn apply_keys(state: &mut GridState, keys: impl IntoIterator<Item = Key>) -> Effect {
    for key in keys {
        if update(state, Action::from(key)) == Effect::Quit {
            return Effect::Quit;
        }
    }
    Effect::None
}

/// Strip styling, one `String` per line.
pub fn plain_lines(lines: &[Line<'_>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect())
        .collect()
}

/// Fresh empty directory under the system temp dir, unique per test process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sudogrid-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
