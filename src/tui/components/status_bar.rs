//! # StatusBar Component
//!
//! Footer under the grid: cursor position, the focused cell's value and the
//! quit hint. All lines use the help style.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::core::grid::{Coordinate, Digit};
use crate::tui::component::Component;

pub const QUIT_HINT: &str = "Press q to quit.";

pub struct StatusBar {
    pub cursor: Coordinate,
    pub value: Option<Digit>,
    pub style: Style,
}

impl StatusBar {
    pub fn new(cursor: Coordinate, value: Option<Digit>, style: Style) -> Self {
        Self {
            cursor,
            value,
            style,
        }
    }
}

impl Component for StatusBar {
    fn lines(&self) -> Vec<Line<'static>> {
        let value = self
            .value
            .map_or_else(|| "-".to_string(), |digit| digit.to_string());
        [
            String::new(),
            format!("x: {} / y: {}", self.cursor.column(), self.cursor.row()),
            format!("Value: {value}"),
            QUIT_HINT.to_string(),
        ]
        .into_iter()
        .map(|text| Line::from(Span::styled(text, self.style)))
        .collect()
    }
}
