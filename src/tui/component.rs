use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), usually borrowed from
/// `App` and the `Theme` for a single frame, and render into a given `Rect`.
///
/// Components that keep presentation state across frames (e.g. the list
/// scroll offset) borrow it from `TuiState` instead of owning it.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component can update borrowed presentation
    /// state during the render pass.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
