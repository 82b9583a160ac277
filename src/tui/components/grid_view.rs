//! # GridView Component
//!
//! The 9×9 board. A transient component: created fresh each frame with a
//! borrowed `GridState` and `Theme`, holds nothing afterwards.
//!
//! ## Layout
//!
//! Every cell is three columns wide with its glyph centered. A one-column gap
//! follows the 3rd and 6th column, and a blank line follows the 3rd and 6th
//! row, so the board reads as nine 3×3 boxes:
//!
//! ```text
//!  5  .  .   .  .  .   .  .  .
//!  .  .  .   .  .  .   .  .  .
//!  .  .  .   .  .  .   .  .  .
//!
//!  .  .  .   .  .  .   .  .  .
//! ```
//!
//! Focus is derived from the cursor; the focused cell takes `theme.focused`.

use ratatui::text::{Line, Span};

use crate::core::grid::{BOX_SIZE, Coordinate, GRID_SIZE};
use crate::core::state::GridState;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Inserted after every third cell in a row.
const COLUMN_GAP: &str = " ";

pub struct GridView<'a> {
    pub state: &'a GridState,
    pub theme: &'a Theme,
}

impl<'a> GridView<'a> {
    pub fn new(state: &'a GridState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn cell_span(&self, coord: Coordinate) -> Span<'static> {
        let value = self.state.cell(coord).value();
        let glyph = match value {
            Some(digit) => format!(" {digit} "),
            None => format!(" {} ", self.theme.placeholder_glyph),
        };
        let style = if self.state.is_focused(coord) {
            self.theme.focused
        } else if value.is_some() {
            self.theme.cell
        } else {
            self.theme.placeholder
        };
        Span::styled(glyph, style)
    }

    fn row_line(&self, row: u8) -> Line<'static> {
        let mut spans = Vec::with_capacity(GRID_SIZE + 2);
        for column in 0..GRID_SIZE as u8 {
            if let Some(coord) = Coordinate::new(column, row) {
                spans.push(self.cell_span(coord));
            }
            if is_box_boundary(column) {
                spans.push(Span::raw(COLUMN_GAP));
            }
        }
        Line::from(spans)
    }
}

/// True after the 3rd and 6th index, not after the last.
fn is_box_boundary(index: u8) -> bool {
    let index = index as usize;
    (index + 1) % BOX_SIZE == 0 && index + 1 < GRID_SIZE
}

impl Component for GridView<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(GRID_SIZE + 2);
        for row in 0..GRID_SIZE as u8 {
            lines.push(self.row_line(row));
            if is_box_boundary(row) {
                lines.push(Line::default());
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Key;
    use crate::core::grid::Direction;
    use crate::test_support::{apply_keys, coord, plain_lines, text};

    #[test]
    fn test_empty_grid_layout() {
        let state = GridState::new();
        let theme = Theme::default();
        let lines = plain_lines(&GridView::new(&state, &theme).lines());

        // 9 rows + 2 box gaps
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], "");
        assert_eq!(lines[7], "");
        let row = " .  .  .   .  .  .   .  .  . ";
        for index in [0, 1, 2, 4, 5, 6, 8, 9, 10] {
            assert_eq!(lines[index], row);
        }
    }

    #[test]
    fn test_digit_rendered_in_place() {
        let mut state = GridState::new();
        apply_keys(
            &mut state,
            [
                Key::Arrow(Direction::Right),
                Key::Arrow(Direction::Right),
                Key::Arrow(Direction::Right),
                Key::Arrow(Direction::Down),
                text("5"),
            ],
        );
        let theme = Theme::default();
        let lines = plain_lines(&GridView::new(&state, &theme).lines());

        assert_eq!(lines[1], " .  .  .   5  .  .   .  .  . ");
        assert_eq!(lines[0], " .  .  .   .  .  .   .  .  . ");
    }

    #[test]
    fn test_only_cursor_cell_uses_focused_style() {
        let mut state = GridState::new();
        apply_keys(&mut state, [Key::Arrow(Direction::Down), text("2")]);
        let theme = Theme::default();
        let view = GridView::new(&state, &theme);

        let focused: Vec<_> = Coordinate::all()
            .filter(|&c| view.cell_span(c).style == theme.focused)
            .collect();
        assert_eq!(focused, vec![coord(0, 1)]);
        assert_eq!(view.cell_span(coord(0, 0)).style, theme.placeholder);
    }

    #[test]
    fn test_blurred_digit_uses_cell_style() {
        let mut state = GridState::new();
        apply_keys(&mut state, [text("9"), Key::Arrow(Direction::Right)]);
        let theme = Theme::new(205, Some(15), 240, '.');
        let view = GridView::new(&state, &theme);

        assert_eq!(view.cell_span(coord(0, 0)).style, theme.cell);
        assert_eq!(view.cell_span(coord(1, 0)).style, theme.focused);
    }

    #[test]
    fn test_custom_placeholder() {
        let state = GridState::new();
        let theme = Theme::new(205, None, 240, ' ');
        let lines = plain_lines(&GridView::new(&state, &theme).lines());
        assert_eq!(lines[0].trim(), "");
        assert_eq!(lines[0].chars().count(), 29);
    }

    #[test]
    fn test_box_boundaries() {
        let boundaries: Vec<u8> = (0..9).filter(|&i| is_box_boundary(i)).collect();
        assert_eq!(boundaries, vec![2, 5]);
    }
}
