//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses `+`? That's `Action::Add`. A second passes? That's `Action::Tick`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` describing the I/O the caller must perform.
//! No file access happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## View transitions
//!
//! ```text
//!               Add                      Add
//!   NoEvents ─────────► AddingEvent ◄───────── ShowingEvents
//!      ▲                 │      │                  ▲   │
//!      │  Back (empty)   │      │ Submit ok / Back │   │ Remove
//!      └─────────────────┘      └──────────────────┘   │
//!      ▲                                               │
//!      └────────────── Remove of the last event ───────┘
//! ```

use log::{debug, error, info};

use crate::core::state::{App, FormField, ViewState};
use crate::core::validate::validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    FilterStart,
    NextField,
    PrevField,
    /// Enter.
    Confirm,
    /// Esc: cancel the form or clear the filter.
    Back,
    Quit,
    SelectPrev,
    SelectNext,
    InputChar(char),
    Backspace,
    /// One second passed.
    Tick,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist the whole event collection.
    SaveEvents,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Tick => {
            app.now = app.clock.now().timestamp();
            Effect::None
        }
        Action::Quit => Effect::Quit,
        action => match app.view {
            ViewState::NoEvents => update_no_events(app, action),
            ViewState::ShowingEvents => update_showing_events(app, action),
            ViewState::AddingEvent => update_adding_event(app, action),
        },
    }
}

fn update_no_events(app: &mut App, action: Action) -> Effect {
    if action == Action::Add {
        open_form(app);
    }
    Effect::None
}

fn update_showing_events(app: &mut App, action: Action) -> Effect {
    if app.filter.editing {
        match action {
            Action::InputChar(c) => {
                app.filter.query.push(c);
                app.selected = 0;
                return Effect::None;
            }
            Action::Backspace => {
                app.filter.query.pop();
                app.clamp_selection();
                return Effect::None;
            }
            Action::Confirm => {
                app.filter.editing = false;
                return Effect::None;
            }
            _ => {}
        }
    }

    match action {
        Action::Add => open_form(app),
        Action::Remove => return remove_selected(app),
        Action::FilterStart => app.filter.editing = true,
        Action::Back => {
            app.filter.clear();
            app.clamp_selection();
        }
        Action::SelectPrev => app.selected = app.selected.saturating_sub(1),
        Action::SelectNext => {
            app.selected += 1;
            app.clamp_selection();
        }
        _ => {}
    }
    Effect::None
}

fn update_adding_event(app: &mut App, action: Action) -> Effect {
    match action {
        Action::NextField => app.form.focus = app.form.focus.next(),
        Action::PrevField => app.form.focus = app.form.focus.prev(),
        Action::Back => close_form(app),
        Action::Confirm => match app.form.focus {
            FormField::Name | FormField::Time => app.form.focus = app.form.focus.next(),
            FormField::Cancel => close_form(app),
            FormField::Submit => return submit_form(app),
        },
        Action::InputChar(c) => {
            app.form.push_char(c);
        }
        Action::Backspace => {
            app.form.pop_char();
        }
        _ => {}
    }
    Effect::None
}

fn open_form(app: &mut App) {
    app.form.reset();
    app.view = ViewState::AddingEvent;
}

fn close_form(app: &mut App) {
    app.form.reset();
    app.settle_view();
}

fn submit_form(app: &mut App) -> Effect {
    let now = app.clock.now();
    let event = match validate(&app.form.name, &app.form.time, now) {
        Ok(event) => event,
        Err(e) => {
            debug!("Rejected new event: {e}");
            app.form.clear_inputs();
            app.form.error = Some(format!("Error: {e}"));
            return Effect::None;
        }
    };

    info!("Adding \"{}\" at {}", event.name, event.time);
    let was_empty = app.events.is_empty();
    let index = app.events.insert(event);

    app.filter.clear();
    app.selected = index;
    app.now = now.timestamp();
    close_form(app);

    // The first event added to an empty list is only saved with the next change.
    if was_empty {
        Effect::None
    } else {
        Effect::SaveEvents
    }
}

fn remove_selected(app: &mut App) -> Effect {
    let Some(index) = app.selected_index() else {
        return Effect::None;
    };
    match app.events.remove_at(index) {
        Ok(event) => {
            info!("Removed \"{}\"", event.name);
            app.settle_view();
            Effect::SaveEvents
        }
        Err(e) => {
            error!("Remove of selected event failed: {e}");
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::AddForm;
    use crate::test_support::{FixedClock, TEST_NOW, test_app, test_app_with, test_app_with_clock};
    use std::sync::Arc;

    fn names(app: &App) -> Vec<String> {
        app.events.iter().map(|e| e.name.clone()).collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, Action::InputChar(c));
        }
    }

    /// Fill both fields and press Enter on the submit button.
    fn submit(app: &mut App, name: &str, time: &str) -> Effect {
        app.form.focus = FormField::Name;
        type_text(app, name);
        app.form.focus = FormField::Time;
        type_text(app, time);
        app.form.focus = FormField::Submit;
        update(app, Action::Confirm)
    }

    #[test]
    fn test_add_from_no_events() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Add), Effect::None);
        assert_eq!(app.view, ViewState::AddingEvent);
        assert_eq!(app.form.focus, FormField::Name);
    }

    #[test]
    fn test_add_from_list() {
        let mut app = test_app_with(&[("a", TEST_NOW + 10)]);
        update(&mut app, Action::Add);
        assert_eq!(app.view, ViewState::AddingEvent);
    }

    #[test]
    fn test_remove_is_ignored_without_events() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Remove), Effect::None);
        assert_eq!(app.view, ViewState::NoEvents);
    }

    #[test]
    fn test_quit_from_every_view() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        let mut app = test_app_with(&[("a", TEST_NOW)]);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        update(&mut app, Action::Add);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_tick_refreshes_now_without_changing_view() {
        let clock = Arc::new(FixedClock::at(TEST_NOW));
        let mut app = test_app_with_clock(&[("a", TEST_NOW + 100)], clock.clone());
        clock.advance(5);
        for view in [ViewState::ShowingEvents, ViewState::AddingEvent] {
            app.view = view;
            assert_eq!(update(&mut app, Action::Tick), Effect::None);
            assert_eq!(app.view, view);
        }
        assert_eq!(app.now, TEST_NOW + 5);
    }

    #[test]
    fn test_remove_saves_and_keeps_list() {
        let mut app = test_app_with(&[("a", TEST_NOW + 1), ("b", TEST_NOW + 2)]);
        update(&mut app, Action::SelectNext);
        assert_eq!(update(&mut app, Action::Remove), Effect::SaveEvents);
        assert_eq!(names(&app), vec!["a"]);
        assert_eq!(app.view, ViewState::ShowingEvents);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_removing_last_event_goes_to_no_events() {
        let mut app = test_app_with(&[("only", TEST_NOW + 1)]);
        assert_eq!(update(&mut app, Action::Remove), Effect::SaveEvents);
        assert!(app.events.is_empty());
        assert_eq!(app.view, ViewState::NoEvents);
    }

    #[test]
    fn test_back_cancels_form_and_clears_buffers() {
        let mut app = test_app_with(&[("a", TEST_NOW + 1)]);
        update(&mut app, Action::Add);
        type_text(&mut app, "draft");
        update(&mut app, Action::NextField);
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.view, ViewState::ShowingEvents);
        assert_eq!(app.form, AddForm::default());
        assert_eq!(app.events.len(), 1);
    }

    #[test]
    fn test_cancel_with_no_events_returns_to_no_events() {
        let mut app = test_app();
        update(&mut app, Action::Add);
        update(&mut app, Action::Back);
        assert_eq!(app.view, ViewState::NoEvents);
    }

    #[test]
    fn test_confirm_on_cancel_button_closes_form() {
        let mut app = test_app_with(&[("a", TEST_NOW + 1)]);
        update(&mut app, Action::Add);
        update(&mut app, Action::PrevField);
        update(&mut app, Action::PrevField);
        assert_eq!(app.form.focus, FormField::Cancel);
        update(&mut app, Action::Confirm);
        assert_eq!(app.view, ViewState::ShowingEvents);
    }

    #[test]
    fn test_confirm_on_text_fields_moves_focus() {
        let mut app = test_app();
        update(&mut app, Action::Add);
        update(&mut app, Action::Confirm);
        assert_eq!(app.form.focus, FormField::Time);
        update(&mut app, Action::Confirm);
        assert_eq!(app.form.focus, FormField::Cancel);
        assert_eq!(app.view, ViewState::AddingEvent);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = test_app();
        update(&mut app, Action::Add);
        update(&mut app, Action::PrevField);
        assert_eq!(app.form.focus, FormField::Submit);
        update(&mut app, Action::NextField);
        assert_eq!(app.form.focus, FormField::Name);
    }

    #[test]
    fn test_typing_and_backspace_edit_focused_field() {
        let mut app = test_app();
        update(&mut app, Action::Add);
        type_text(&mut app, "Launchx");
        update(&mut app, Action::Backspace);
        update(&mut app, Action::NextField);
        type_text(&mut app, "2030-01-01");
        assert_eq!(app.form.name, "Launch");
        assert_eq!(app.form.time, "2030-01-01");
    }

    #[test]
    fn test_submit_valid_event_inserts_sorted_and_saves() {
        let mut app = test_app_with(&[("early", TEST_NOW + 10), ("late", i64::MAX / 2)]);
        update(&mut app, Action::Add);
        let effect = submit(&mut app, "Launch", "2030-01-01 00:00:00");
        assert_eq!(effect, Effect::SaveEvents);
        assert_eq!(app.view, ViewState::ShowingEvents);
        assert_eq!(names(&app), vec!["early", "Launch", "late"]);
        assert_eq!(app.selected_event().map(|e| e.name.as_str()), Some("Launch"));
        assert_eq!(app.form, AddForm::default());
    }

    // Possibly unintended: the first event added to an empty list is not written
    // until something else changes. Kept as the observed behavior.
    #[test]
    fn test_first_insert_into_empty_collection_is_not_persisted() {
        let mut app = test_app();
        update(&mut app, Action::Add);
        let effect = submit(&mut app, "Launch", "2030-01-01");
        assert_eq!(effect, Effect::None);
        assert_eq!(app.events.len(), 1);
        assert_eq!(app.view, ViewState::ShowingEvents);
    }

    #[test]
    fn test_submit_empty_fields_keeps_form_with_error() {
        let mut app = test_app();
        update(&mut app, Action::Add);
        let effect = submit(&mut app, "", "");
        assert_eq!(effect, Effect::None);
        assert_eq!(app.view, ViewState::AddingEvent);
        assert_eq!(app.form.error.as_deref(), Some("Error: empty fields"));
        assert_eq!(app.form.focus, FormField::Name);
    }

    #[test]
    fn test_submit_past_event_clears_buffers() {
        let mut app = test_app_with(&[("a", TEST_NOW + 1)]);
        update(&mut app, Action::Add);
        let effect = submit(&mut app, "Old", "2001-01-01");
        assert_eq!(effect, Effect::None);
        assert_eq!(app.view, ViewState::AddingEvent);
        assert!(app.form.name.is_empty());
        assert!(app.form.time.is_empty());
        assert_eq!(app.form.focus, FormField::Name);
        assert_eq!(
            app.form.error.as_deref(),
            Some("Error: event time is in the past")
        );
        assert_eq!(app.events.len(), 1);
    }

    #[test]
    fn test_submit_bad_format_then_retry() {
        let mut app = test_app_with(&[("a", TEST_NOW + 1)]);
        update(&mut app, Action::Add);
        submit(&mut app, "X", "not-a-date");
        assert!(app.form.error.as_deref().unwrap().starts_with("Error: "));
        let effect = submit(&mut app, "X", "2030-01-01");
        assert_eq!(effect, Effect::SaveEvents);
        assert_eq!(app.form.error, None);
    }

    #[test]
    fn test_list_selection_is_clamped() {
        let mut app = test_app_with(&[("a", 1), ("b", 2)]);
        update(&mut app, Action::SelectPrev);
        assert_eq!(app.selected, 0);
        update(&mut app, Action::SelectNext);
        update(&mut app, Action::SelectNext);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_filter_prompt_narrows_and_removes_visible_selection() {
        let mut app = test_app_with(&[("alpha", 1), ("beta", 2), ("gamma", 3)]);
        update(&mut app, Action::FilterStart);
        type_text(&mut app, "ma");
        assert_eq!(app.visible_indices(), vec![2]);
        update(&mut app, Action::Confirm);
        assert!(!app.filter.editing);
        assert_eq!(update(&mut app, Action::Remove), Effect::SaveEvents);
        assert_eq!(names(&app), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_filter_prompt_swallows_command_keys() {
        let mut app = test_app_with(&[("a+b", 1)]);
        update(&mut app, Action::FilterStart);
        update(&mut app, Action::InputChar('+'));
        assert_eq!(app.view, ViewState::ShowingEvents);
        assert_eq!(app.filter.query, "+");
    }

    #[test]
    fn test_back_clears_filter() {
        let mut app = test_app_with(&[("alpha", 1), ("beta", 2)]);
        update(&mut app, Action::FilterStart);
        type_text(&mut app, "zzz");
        assert!(app.visible_indices().is_empty());
        assert_eq!(update(&mut app, Action::Remove), Effect::None);
        update(&mut app, Action::Back);
        assert!(!app.filter.is_active());
        assert_eq!(app.visible_indices().len(), 2);
    }

    #[test]
    fn test_successful_add_clears_filter() {
        let mut app = test_app_with(&[("alpha", 1)]);
        update(&mut app, Action::FilterStart);
        type_text(&mut app, "alp");
        update(&mut app, Action::Confirm);
        update(&mut app, Action::Add);
        submit(&mut app, "zeta", "2030-01-01");
        assert!(!app.filter.is_active());
        assert_eq!(app.selected_event().map(|e| e.name.as_str()), Some("zeta"));
    }
}
