//! # TitleBar Component
//!
//! Fixed header at the top of the frame.
//!
//! Purely presentational: the title and style are props, there is no
//! internal state.
//!
//! ```rust,ignore
//! let title_bar = TitleBar::new(APP_TITLE, theme.header);
//! let lines = title_bar.lines(); // ["Sudogrid"]
//! ```

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub const APP_TITLE: &str = "Sudogrid";

pub struct TitleBar {
    pub title: &'static str,
    pub style: Style,
}

impl TitleBar {
    pub fn new(title: &'static str, style: Style) -> Self {
        Self { title, style }
    }
}

impl Component for TitleBar {
    /// The title followed by one blank spacer line.
    fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(self.title, self.style)),
            Line::default(),
        ]
    }
}
