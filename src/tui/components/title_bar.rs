//! # TitleBar Component
//!
//! Top bar showing the app name, how many events exist and the last status
//! message (e.g. a failed save).
//!
//! The text changes based on state:
//!
//! 1. **Status message**: `" Countdown | 3 events | Save failed: ..."`
//! 2. **Default**: `" Countdown | 3 events"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar<'a> {
    pub event_count: usize,
    pub status_message: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(event_count: usize, status_message: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            event_count,
            status_message,
            theme,
        }
    }

    fn count_label(&self) -> String {
        match self.event_count {
            1 => "1 event".to_string(),
            n => format!("{n} events"),
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" Countdown ", self.theme.header(self.theme.title)),
            Span::styled(
                format!(" {}", self.count_label()),
                Style::default().fg(self.theme.dimmed_desc),
            ),
        ];
        if let Some(status) = self.status_message {
            spans.push(Span::styled(" | ", Style::default().fg(self.theme.dimmed_desc)));
            spans.push(Span::styled(status, Style::default().fg(self.theme.error)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
