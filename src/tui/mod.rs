//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the grid,
//! and translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One blocking read per iteration, one `update`, at most one redraw:
//!
//! ```text
//! draw → read_event → Key → Action → update(state) → Effect
//!   ▲                                                  │
//!   └───────────────── Effect::Redraw ─────────────────┘
//! ```
//!
//! Only `Effect::Redraw` and resize draw a new frame. Ignored keys, clamped
//! moves and events the grid drops (mouse, focus) leave the frame as it is.

mod component;
mod components;
pub mod event;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::GridState;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Focus is shown by cell style, not the terminal cursor
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (cursor hidden)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let theme = Theme::from_config(config);
    let mut state = GridState::new();

    let mut terminal = init_or_restore(ratatui::try_init, ratatui::restore)?;
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut state, event::read_event, |state| {
            terminal.draw(|f| ui::draw_ui(f, state, &theme)).map(drop)
        })
    });

    ratatui::restore();
    info!("Grid closed with {} filled cells", state.filled_count());
    result
}

/// Attach the terminal, undoing whatever `init` managed to change if it fails
/// partway (raw mode on, alternate screen not entered).
fn init_or_restore<T>(
    init: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce(),
) -> std::io::Result<T> {
    init().inspect_err(|e| {
        warn!("Terminal init failed: {}", e);
        restore();
    })
}

/// Drive `state` until a quit key arrives or I/O fails.
///
/// `next_event` blocks for the next event; `draw` renders one frame. Both are
/// injected so the loop can run against scripted events in tests.
pub fn event_loop(
    state: &mut GridState,
    mut next_event: impl FnMut() -> std::io::Result<Option<TuiEvent>>,
    mut draw: impl FnMut(&GridState) -> std::io::Result<()>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            draw(state)?;
        }

        let key = match next_event()? {
            None => {
                needs_redraw = false;
                continue;
            }
            Some(TuiEvent::Resize) => {
                needs_redraw = true;
                continue;
            }
            Some(TuiEvent::Key(key)) => key,
        };

        let action = Action::from(key);
        debug!("Applying {:?}", action);
        match update(state, action) {
            Effect::Quit => {
                info!("Quit requested");
                return Ok(());
            }
            Effect::Redraw => needs_redraw = true,
            Effect::None => needs_redraw = false,
        }
    }
}
