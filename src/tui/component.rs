use ratatui::text::Line;

/// A piece of the frame.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They hold no state between frames.
/// - They produce styled lines; the renderer stacks them top to bottom.
pub trait Component {
    /// The lines this component contributes to the frame, top to bottom.
    fn lines(&self) -> Vec<Line<'static>>;
}
