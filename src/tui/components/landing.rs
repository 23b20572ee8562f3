//! # Landing Page Component
//!
//! Shown instead of the list while there are no events.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::components::centered_rect;
use crate::tui::theme::Theme;

pub const NO_EVENTS_PROMPT: &str = "No events, add one with '+'";

pub struct LandingPage<'a> {
    theme: &'a Theme,
}

impl<'a> LandingPage<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for LandingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Prompt text + 2 padding columns + 2 border columns on each side
        let width = NO_EVENTS_PROMPT.len() as u16 + 6;
        let prompt_area = centered_rect(width, 3, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.prompt_border))
            .padding(Padding::horizontal(2));
        let prompt = Paragraph::new(NO_EVENTS_PROMPT)
            .style(Style::default().fg(self.theme.text))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(prompt, prompt_area);
    }
}
