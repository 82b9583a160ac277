//! Render styling, built once from the resolved config and passed by
//! reference to the renderer. Nothing here is global.

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{
    DEFAULT_FOCUSED_COLOR, DEFAULT_HELP_COLOR, DEFAULT_PLACEHOLDER, ResolvedConfig,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The cell under the cursor.
    pub focused: Style,
    /// Every other cell holding a digit.
    pub cell: Style,
    /// Every other empty cell.
    pub placeholder: Style,
    pub header: Style,
    /// Footer text.
    pub help: Style,
    /// Glyph drawn in empty cells.
    pub placeholder_glyph: char,
}

impl Theme {
    pub fn new(
        focused_color: u8,
        cell_color: Option<u8>,
        help_color: u8,
        placeholder_glyph: char,
    ) -> Self {
        let help = Style::default().fg(Color::Indexed(help_color));
        let cell = match cell_color {
            Some(color) => Style::default().fg(Color::Indexed(color)),
            None => Style::default(),
        };
        Self {
            focused: Style::default()
                .fg(Color::Indexed(focused_color))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            cell,
            placeholder: help.add_modifier(Modifier::DIM),
            header: Style::default().add_modifier(Modifier::BOLD),
            help,
            placeholder_glyph,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.focused_color,
            config.cell_color,
            config.help_color,
            config.placeholder,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUSED_COLOR, None, DEFAULT_HELP_COLOR, DEFAULT_PLACEHOLDER)
    }
}
