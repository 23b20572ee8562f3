//! # Add Form Component
//!
//! The "New Event" modal, drawn over the list.
//!
//! ```text
//! ╭────────────────────────────────────────╮
//! │               New Event                │
//! │ > Event Name                           │
//! │ > YYYY-MM-DD hh:mm:ss                  │
//! │                                        │
//! │ [ Cancel ]  [ Submit ]                 │
//! │                                        │
//! │ Error: event time is in the past       │
//! ╰────────────────────────────────────────╯
//! ```
//!
//! The focused part is drawn in the prompt color. The terminal cursor is placed
//! after the text of the focused input.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::state::{self, FormField};
use crate::tui::component::Component;
use crate::tui::components::centered_rect;
use crate::tui::theme::Theme;

const NAME_PLACEHOLDER: &str = "Event Name";
const TIME_PLACEHOLDER: &str = "YYYY-MM-DD hh:mm:ss";
const PROMPT: &str = "> ";
const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 10;
const BLURRED: Color = Color::Indexed(240);

pub struct AddForm<'a> {
    pub form: &'a state::AddForm,
    pub theme: &'a Theme,
}

impl<'a> AddForm<'a> {
    pub fn new(form: &'a state::AddForm, theme: &'a Theme) -> Self {
        Self { form, theme }
    }

    fn style_for(&self, field: FormField) -> Style {
        if self.form.focus == field {
            Style::default().fg(self.theme.prompt_border)
        } else {
            Style::default()
        }
    }

    fn input_line(&self, field: FormField, value: &str, placeholder: &'static str) -> Line<'static> {
        let style = self.style_for(field);
        let text = if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(BLURRED))
        } else {
            Span::styled(value.to_string(), style)
        };
        Line::from(vec![Span::styled(PROMPT, style), text])
    }

    fn button(&self, field: FormField, label: &'static str) -> Span<'static> {
        let style = if self.form.focus == field {
            Style::default().fg(self.theme.prompt_border)
        } else {
            Style::default().fg(BLURRED)
        };
        Span::styled(label, style)
    }
}

impl Component for AddForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.prompt_border))
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [title_area, name_area, time_area, _, buttons_area, _, error_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(inner);

        let title = Line::from(Span::styled(
            " New Event ",
            self.theme.header(self.theme.detail_title),
        ))
        .centered();
        frame.render_widget(Paragraph::new(title), title_area);

        frame.render_widget(
            Paragraph::new(self.input_line(FormField::Name, &self.form.name, NAME_PLACEHOLDER)),
            name_area,
        );
        frame.render_widget(
            Paragraph::new(self.input_line(FormField::Time, &self.form.time, TIME_PLACEHOLDER)),
            time_area,
        );

        let buttons = Line::from(vec![
            self.button(FormField::Cancel, "[ Cancel ]"),
            Span::raw("  "),
            self.button(FormField::Submit, "[ Submit ]"),
        ]);
        frame.render_widget(Paragraph::new(buttons), buttons_area);

        if let Some(error) = &self.form.error {
            let error = Paragraph::new(error.as_str())
                .style(Style::default().fg(self.theme.error))
                .wrap(Wrap { trim: true });
            frame.render_widget(error, error_area);
        }

        let cursor_target = match self.form.focus {
            FormField::Name => Some((name_area, self.form.name.as_str())),
            FormField::Time => Some((time_area, self.form.time.as_str())),
            FormField::Cancel | FormField::Submit => None,
        };
        if let Some((input_area, text)) = cursor_target {
            let offset = (PROMPT.width() + text.width()) as u16;
            let x = (input_area.x + offset).min(input_area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, input_area.y));
        }
    }
}
