//! # HelpBar Component
//!
//! Bottom line listing the keys that do something in the current view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::ViewState;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct HelpBar<'a> {
    pub view: ViewState,
    pub filtering: bool,
    pub theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(view: ViewState, filtering: bool, theme: &'a Theme) -> Self {
        Self {
            view,
            filtering,
            theme,
        }
    }

    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.view {
            ViewState::NoEvents => &[("+", "add"), ("q", "quit")],
            ViewState::ShowingEvents if self.filtering => {
                &[("enter", "apply filter"), ("esc", "clear filter"), ("↑/↓", "move")]
            }
            ViewState::ShowingEvents => &[
                ("+", "add"),
                ("-", "remove"),
                ("/", "filter"),
                ("↑/k ↓/j", "move"),
                ("q", "quit"),
            ],
            ViewState::AddingEvent => &[
                ("tab", "next"),
                ("shift+tab", "prev"),
                ("enter", "select"),
                ("esc", "cancel"),
            ],
        }
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(self.theme.dimmed_title);
        let desc_style = Style::default().fg(self.theme.dimmed_desc);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in self.bindings().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", desc_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {desc}"), desc_style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
