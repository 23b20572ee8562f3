//! # Event List Component
//!
//! Scrollable list of the events that pass the filter. Each item shows the
//! event name and its live countdown on a second line.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EventListState` lives in `TuiState` and keeps the scroll offset
//! - `EventList` is created each frame with borrowed props

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::core::countdown::countdown;
use crate::core::event::Event;
use crate::core::state::ListFilter;
use crate::tui::components::truncate_str;
use crate::tui::theme::Theme;

/// Persistent state for the event list.
#[derive(Debug, Default)]
pub struct EventListState {
    pub list_state: ListState,
}

pub struct EventList<'a> {
    state: &'a mut EventListState,
    /// Events that pass the filter, in display order.
    pub events: Vec<&'a Event>,
    pub selected: usize,
    pub filter: &'a ListFilter,
    pub now: i64,
    pub theme: &'a Theme,
}

impl<'a> EventList<'a> {
    pub fn new(
        state: &'a mut EventListState,
        events: Vec<&'a Event>,
        selected: usize,
        filter: &'a ListFilter,
        now: i64,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            events,
            selected,
            filter,
            now,
            theme,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, filter_area, list_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(if self.filter.is_active() { 1 } else { 0 }),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Paragraph::new(Line::from(Span::styled(
            " Events ",
            self.theme.header(self.theme.title),
        )));
        frame.render_widget(header, header_area);

        if self.filter.is_active() {
            let cursor = if self.filter.editing { "▏" } else { "" };
            let line = Line::from(vec![
                Span::styled("Filter: ", Style::default().fg(self.theme.dimmed_desc)),
                Span::styled(
                    format!("{}{cursor}", self.filter.query),
                    Style::default().fg(self.theme.item_title),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), filter_area);
        }

        if self.events.is_empty() {
            let empty = Paragraph::new("No matching events.")
                .style(Style::default().fg(self.theme.dimmed_desc));
            frame.render_widget(empty, list_area);
            self.state.list_state.select(None);
            return;
        }

        // Selected items carry a left bar, so leave room for it
        let width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .events
            .iter()
            .enumerate()
            .map(|(i, event)| self.item(event, i == self.selected, width))
            .collect();

        let list = List::new(items);
        self.state.list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }

    fn item(&self, event: &Event, selected: bool, width: usize) -> ListItem<'static> {
        let expired = countdown(event.time, self.now).is_expired();
        let (title_style, desc_style, bar) = if selected {
            (
                Style::default()
                    .fg(self.theme.item_title)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(self.theme.item_desc),
                "│ ",
            )
        } else {
            (
                Style::default().fg(self.theme.dimmed_title),
                Style::default().fg(self.theme.dimmed_desc),
                "  ",
            )
        };
        let desc_style = if expired {
            desc_style.fg(self.theme.error)
        } else {
            desc_style
        };
        let description = event.description(self.now);

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(bar, title_style),
                Span::styled(truncate_str(event.title(), width), title_style),
            ]),
            Line::from(vec![
                Span::styled(bar, title_style),
                Span::styled(truncate_str(&description, width), desc_style),
            ]),
            Line::default(),
        ])
    }
}
