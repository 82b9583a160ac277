use crate::core::state::GridState;
use crate::tui::component::Component;
use crate::tui::components::{APP_TITLE, GridView, StatusBar, TitleBar};
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

/// Build the full frame text: header, grid, footer.
///
/// Pure. The same state and theme always give the same `Text`.
pub fn render(state: &GridState, theme: &Theme) -> Text<'static> {
    let title_bar = TitleBar::new(APP_TITLE, theme.header);
    let grid = GridView::new(state, theme);
    let status = StatusBar::new(state.cursor(), state.focused_cell().value(), theme.help);

    let components: [&dyn Component; 3] = [&title_bar, &grid, &status];
    Text::from(
        components
            .iter()
            .flat_map(|component| component.lines())
            .collect::<Vec<_>>(),
    )
}

pub fn draw_ui(frame: &mut Frame, state: &GridState, theme: &Theme) {
    frame.render_widget(Paragraph::new(render(state, theme)), frame.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Key;
    use crate::core::grid::Direction;
    use crate::test_support::{apply_keys, plain_lines, text};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_frame_structure() {
        let state = GridState::new();
        let lines = plain_lines(&render(&state, &Theme::default()).lines);

        // header + spacer + 11 grid lines + 4 footer lines
        assert_eq!(lines.len(), 17);
        assert_eq!(lines[0], "Sudogrid");
        assert_eq!(lines[1], "");
        assert_eq!(lines[14], "x: 0 / y: 0");
        assert_eq!(lines[15], "Value: -");
        assert_eq!(lines[16], "Press q to quit.");
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut state = GridState::new();
        apply_keys(
            &mut state,
            [Key::Arrow(Direction::Down), text("4"), Key::Arrow(Direction::Right)],
        );
        let theme = Theme::default();
        assert_eq!(render(&state, &theme), render(&state, &theme));
    }

    #[test]
    fn test_draw_ui() {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = GridState::new();
        apply_keys(&mut state, [text("7")]);
        let theme = Theme::default();

        terminal
            .draw(|f| {
                draw_ui(f, &state, &theme);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Sudogrid"));
        assert!(text.contains(" 7 "));
        assert!(text.contains("Value: 7"));
        assert!(text.contains("Press q to quit."));
    }

    #[test]
    fn test_draw_twice_is_byte_identical() {
        let state = GridState::new();
        let theme = Theme::default();
        let mut frames = Vec::new();
        for _ in 0..2 {
            let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
            terminal.draw(|f| draw_ui(f, &state, &theme)).unwrap();
            frames.push(terminal.backend().buffer().clone());
        }
        assert_eq!(frames[0], frames[1]);
    }
}
