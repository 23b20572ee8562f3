//! # Event Detail Component
//!
//! Right-hand pane for the selected event:
//!
//! ```text
//! ┃ Launch
//! ┃ When (RFC1123): Wed, 01 Jan 2030 00:00:00 +01:00
//! ┃     When (ISO): 2030-01-01 00:00:00 +0100
//! ┃
//! ┃ Countdown
//! ┃      4y 200d 3h 2m 1s
//! ┃
//! ┃   142563721 seconds
//! ┃ 2376062.017 minutes
//! ┃      ...
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::core::countdown::{Totals, countdown};
use crate::core::event::Event;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct EventDetail<'a> {
    pub event: Option<&'a Event>,
    pub now: i64,
    pub theme: &'a Theme,
}

impl<'a> EventDetail<'a> {
    pub fn new(event: Option<&'a Event>, now: i64, theme: &'a Theme) -> Self {
        Self { event, now, theme }
    }

    fn label(&self, text: &'static str) -> Span<'static> {
        Span::styled(text, Style::default().fg(self.theme.dimmed_desc))
    }

    fn value(&self, text: String) -> Span<'static> {
        Span::styled(text, Style::default().fg(self.theme.dimmed_title))
    }

    fn header(&self, text: String) -> Line<'static> {
        Line::from(Span::styled(
            format!(" {text} "),
            self.theme.header(self.theme.detail_title),
        ))
    }
}

impl Component for EventDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(self.theme.item_title))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(event) = self.event else {
            let empty = Paragraph::new("Nothing selected.")
                .style(Style::default().fg(self.theme.dimmed_desc));
            frame.render_widget(empty, inner);
            return;
        };

        let remaining = countdown(event.time, self.now);
        let countdown_style = if remaining.is_expired() {
            Style::default().fg(self.theme.error)
        } else {
            Style::default()
                .fg(self.theme.item_title)
                .add_modifier(Modifier::BOLD)
        };

        let summary = vec![
            self.header(event.name.clone()),
            Line::from(vec![self.label("When (RFC1123): "), self.value(event.rfc1123())]),
            Line::from(vec![self.label("    When (ISO): "), self.value(event.basic_string())]),
            Line::default(),
            self.header("Countdown".to_string()),
            Line::from(Span::styled(remaining.to_string(), countdown_style)).centered(),
            Line::default(),
        ];
        let summary_height = summary.len() as u16;

        // Totals: values right-aligned against their unit names
        let rows = Totals::from_diff(event.time.saturating_sub(self.now)).rows();
        let value_width = rows.iter().map(|(v, _)| v.len()).max().unwrap_or(0) as u16;
        let (values, units): (Vec<Line>, Vec<Line>) = rows
            .into_iter()
            .map(|(value, unit)| {
                (
                    Line::from(self.value(value)),
                    Line::from(Span::styled(
                        format!(" {unit}"),
                        Style::default().fg(self.theme.dimmed_desc),
                    )),
                )
            })
            .unzip();

        let [summary_area, totals_area] =
            Layout::vertical([Constraint::Length(summary_height), Constraint::Min(0)])
                .areas(inner);
        let [values_area, units_area] =
            Layout::horizontal([Constraint::Length(value_width), Constraint::Min(0)])
                .areas(totals_area);

        frame.render_widget(Paragraph::new(summary), summary_area);
        frame.render_widget(
            Paragraph::new(values).alignment(Alignment::Right),
            values_area,
        );
        frame.render_widget(Paragraph::new(units), units_area);
    }
}
