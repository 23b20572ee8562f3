//! # Application State
//!
//! Everything the running session knows, in one place. No terminal types here;
//! presentation lives in the `tui` module.
//!
//! ```text
//! App
//! ├── events: EventCollection     // sorted, persisted
//! ├── view: ViewState             // NoEvents | ShowingEvents | AddingEvent
//! ├── form: AddForm               // add-form buffers, focus, last error
//! ├── filter: ListFilter          // list filter prompt
//! ├── selected: usize             // position among the visible events
//! ├── now: i64                    // refreshed on every tick
//! ├── status_message: Option<..>  // e.g. a save failure
//! └── clock: Arc<dyn Clock>       // source of "now"
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::event::Event;
use crate::core::store::EventCollection;
use crate::core::validate::LONG_TIME_LEN;

/// Maximum characters accepted in the name field.
pub const NAME_CHAR_LIMIT: usize = 30;
/// Maximum characters accepted in the time field.
pub const TIME_CHAR_LIMIT: usize = LONG_TIME_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    NoEvents,
    ShowingEvents,
    AddingEvent,
}

/// Focusable parts of the add form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Time,
    Cancel,
    Submit,
}

impl FormField {
    /// Next field in tab order (wraps around)
    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Time,
            FormField::Time => FormField::Cancel,
            FormField::Cancel => FormField::Submit,
            FormField::Submit => FormField::Name,
        }
    }

    /// Previous field in tab order (wraps around)
    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Submit,
            FormField::Time => FormField::Name,
            FormField::Cancel => FormField::Time,
            FormField::Submit => FormField::Cancel,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddForm {
    pub name: String,
    pub time: String,
    pub focus: FormField,
    /// Last validation error, already prefixed for display.
    pub error: Option<String>,
}

impl AddForm {
    /// Back to a blank form with the name field focused.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clear both inputs and refocus the name field, keeping the error.
    pub fn clear_inputs(&mut self) {
        self.name.clear();
        self.time.clear();
        self.focus = FormField::Name;
    }

    fn focused_input(&mut self) -> Option<(&mut String, usize)> {
        match self.focus {
            FormField::Name => Some((&mut self.name, NAME_CHAR_LIMIT)),
            FormField::Time => Some((&mut self.time, TIME_CHAR_LIMIT)),
            FormField::Cancel | FormField::Submit => None,
        }
    }

    /// Append to the focused input. Returns false on a button or at the limit.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.focused_input() {
            Some((buffer, limit)) if buffer.chars().count() < limit => {
                buffer.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn pop_char(&mut self) -> bool {
        self.focused_input()
            .is_some_and(|(buffer, _)| buffer.pop().is_some())
    }
}

/// Filter prompt over the event list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub query: String,
    /// True while the prompt is taking keystrokes.
    pub editing: bool,
}

impl ListFilter {
    pub fn is_active(&self) -> bool {
        self.editing || !self.query.is_empty()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.editing = false;
    }

    /// Case-insensitive substring match on the event's filter key.
    pub fn matches(&self, event: &Event) -> bool {
        self.query.is_empty()
            || event
                .filter_key()
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }
}

pub struct App {
    pub events: EventCollection,
    pub view: ViewState,
    pub form: AddForm,
    pub filter: ListFilter,
    /// Position of the selection among `visible_indices()`.
    pub selected: usize,
    /// Epoch seconds used for every countdown on screen.
    pub now: i64,
    pub status_message: Option<String>,
    pub clock: Arc<dyn Clock>,
}

impl App {
    pub fn new(events: EventCollection, clock: Arc<dyn Clock>) -> Self {
        let view = if events.is_empty() {
            ViewState::NoEvents
        } else {
            ViewState::ShowingEvents
        };
        let now = clock.now().timestamp();
        Self {
            events,
            view,
            form: AddForm::default(),
            filter: ListFilter::default(),
            selected: 0,
            now,
            status_message: None,
            clock,
        }
    }

    /// Collection indices of the events that pass the filter, in order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, event)| self.filter.matches(event))
            .map(|(i, _)| i)
            .collect()
    }

    /// Collection index of the selected event, if any is visible.
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_indices().get(self.selected).copied()
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_index().and_then(|i| self.events.get(i))
    }

    /// Keep the selection inside the visible events.
    pub fn clamp_selection(&mut self) {
        let visible = self.visible_indices().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    /// Pick the list view that matches the collection: empty means `NoEvents`.
    pub fn settle_view(&mut self) {
        if self.events.is_empty() {
            self.view = ViewState::NoEvents;
            self.filter.clear();
            self.selected = 0;
        } else {
            self.view = ViewState::ShowingEvents;
            self.clamp_selection();
        }
    }
}
