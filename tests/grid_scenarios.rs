use std::collections::VecDeque;

use sudogrid::core::action::{Action, Effect, Key, update};
use sudogrid::core::grid::{Coordinate, Digit, Direction};
use sudogrid::core::state::GridState;
use sudogrid::tui::event::TuiEvent;
use sudogrid::tui::event_loop;
use sudogrid::tui::theme::Theme;
use sudogrid::tui::ui::render;

// ============================================================================
// Helper Functions
// ============================================================================

fn coord(column: u8, row: u8) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

fn press(state: &mut GridState, key: Key) -> Effect {
    update(state, Action::from(key))
}

fn arrow(direction: Direction) -> Key {
    Key::Arrow(direction)
}

fn text(s: &str) -> Key {
    Key::Text(s.to_string())
}

/// Coordinates of every non-empty cell.
fn filled(state: &GridState) -> Vec<Coordinate> {
    Coordinate::all()
        .filter(|&c| !state.cell(c).is_empty())
        .collect()
}

fn focused(state: &GridState) -> Vec<Coordinate> {
    Coordinate::all().filter(|&c| state.is_focused(c)).collect()
}

// ============================================================================
// End-to-End Scenarios
// ============================================================================

#[test]
fn test_move_enter_move_clear_quit() {
    let mut state = GridState::new();
    assert_eq!(state.cursor(), coord(0, 0));

    for _ in 0..3 {
        assert_eq!(press(&mut state, arrow(Direction::Right)), Effect::Redraw);
    }
    assert_eq!(state.cursor(), coord(3, 0));

    press(&mut state, text("5"));
    assert_eq!(state.cell(coord(3, 0)).value(), Digit::new(5));
    assert_eq!(filled(&state), vec![coord(3, 0)]);

    press(&mut state, arrow(Direction::Left));
    assert_eq!(state.cursor(), coord(2, 0));
    assert_eq!(state.cell(coord(3, 0)).value(), Digit::new(5));
    assert!(!state.is_focused(coord(3, 0)));
    assert_eq!(focused(&state), vec![coord(2, 0)]);

    let before = state.clone();
    press(&mut state, text("0"));
    assert!(state.cell(coord(2, 0)).is_empty());
    assert_eq!(state, before);

    assert_eq!(press(&mut state, text("q")), Effect::Quit);
}

#[test]
fn test_up_at_top_edge_clamps() {
    let mut state = GridState::new();
    press(&mut state, arrow(Direction::Up));
    assert_eq!(state.cursor(), coord(0, 0));
}

#[test]
fn test_walk_to_far_corner_and_beyond() {
    let mut state = GridState::new();
    for _ in 0..20 {
        press(&mut state, arrow(Direction::Right));
        press(&mut state, arrow(Direction::Down));
    }
    assert_eq!(state.cursor(), coord(8, 8));
    assert_eq!(focused(&state), vec![coord(8, 8)]);
}

#[test]
fn test_selection_stays_empty() {
    let mut state = GridState::new();
    for key in [arrow(Direction::Down), text("3"), text("x"), arrow(Direction::Right)] {
        press(&mut state, key);
        assert!(state.selection().is_empty());
    }
}

#[test]
fn test_event_loop_scenario_renders_final_state() {
    let mut state = GridState::new();
    let mut events: VecDeque<_> = [
        arrow(Direction::Right),
        arrow(Direction::Right),
        arrow(Direction::Right),
        text("5"),
        arrow(Direction::Left),
        text("0"),
        Key::Interrupt,
    ]
    .into_iter()
    .map(|key| Some(TuiEvent::Key(key)))
    .collect();

    let theme = Theme::default();
    let mut last_frame = None;
    event_loop(
        &mut state,
        || Ok(events.pop_front().flatten()),
        |state| {
            last_frame = Some(render(state, &theme));
            Ok(())
        },
    )
    .unwrap();

    assert!(events.is_empty());
    let frame: Vec<String> = last_frame
        .unwrap()
        .lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_eq!(frame[2], " .  .  .   5  .  .   .  .  . ");
    assert_eq!(frame[14], "x: 2 / y: 0");
    assert_eq!(frame[15], "Value: -");
}
