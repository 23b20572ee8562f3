//! # Terminal Events
//!
//! Raw crossterm events are narrowed to `TuiEvent`, then mapped to a core
//! `Action` depending on what the app is showing.
//!
//! ```text
//! crossterm::Event ──translate()──► TuiEvent ──action_for(&App)──► Action
//!                    tick task ───► TuiEvent::Tick
//! ```

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::state::{App, ViewState};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from every view
    ForceQuit,
    InputChar(char),
    Backspace,
    Submit,
    Escape,
    NextField,
    PrevField,
    CursorUp,
    CursorDown,
    Resize,
    /// One second passed
    Tick,
    /// The terminal input stream ended or failed
    InputClosed(String),
}

/// Translate a crossterm event. Key releases and unbound keys give `None`.
pub fn translate(event: &Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: &KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::trace!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (KeyModifiers::SHIFT, KeyCode::Tab) | (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
        (_, KeyCode::Tab) => Some(TuiEvent::NextField),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        _ => None,
    }
}

/// Map an event to the action it means in the app's current view.
pub fn action_for(event: &TuiEvent, app: &App) -> Option<Action> {
    // View-independent events first
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Tick => return Some(Action::Tick),
        TuiEvent::Resize | TuiEvent::InputClosed(_) => return None,
        _ => {}
    }

    match app.view {
        ViewState::NoEvents => match event {
            TuiEvent::InputChar('+') => Some(Action::Add),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
        ViewState::AddingEvent => match event {
            TuiEvent::InputChar(c) => Some(Action::InputChar(*c)),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::Submit => Some(Action::Confirm),
            TuiEvent::Escape => Some(Action::Back),
            TuiEvent::NextField | TuiEvent::CursorDown => Some(Action::NextField),
            TuiEvent::PrevField | TuiEvent::CursorUp => Some(Action::PrevField),
            _ => None,
        },
        // Typing into the filter prompt: every character is text
        ViewState::ShowingEvents if app.filter.editing => match event {
            TuiEvent::InputChar(c) => Some(Action::InputChar(*c)),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::Submit => Some(Action::Confirm),
            TuiEvent::Escape => Some(Action::Back),
            TuiEvent::CursorUp => Some(Action::SelectPrev),
            TuiEvent::CursorDown => Some(Action::SelectNext),
            _ => None,
        },
        ViewState::ShowingEvents => match event {
            TuiEvent::InputChar('+') => Some(Action::Add),
            TuiEvent::InputChar('-') => Some(Action::Remove),
            TuiEvent::InputChar('/') => Some(Action::FilterStart),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            TuiEvent::InputChar('k') | TuiEvent::CursorUp => Some(Action::SelectPrev),
            TuiEvent::InputChar('j') | TuiEvent::CursorDown => Some(Action::SelectNext),
            TuiEvent::Escape => Some(Action::Back),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_with};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_translate_ctrl_c_is_force_quit() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_translate_plain_and_shifted_chars() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('c'))
        );
        assert_eq!(
            translate(&key(KeyCode::Char('+'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('+'))
        );
        assert_eq!(translate(&key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn test_translate_tab_directions() {
        assert_eq!(
            translate(&key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(TuiEvent::NextField)
        );
        assert_eq!(
            translate(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(TuiEvent::PrevField)
        );
    }

    #[test]
    fn test_translate_ignores_key_release() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(&Event::Key(release)), None);
    }

    #[test]
    fn test_translate_resize() {
        assert_eq!(translate(&Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }

    #[test]
    fn test_ctrl_c_and_tick_in_every_view() {
        let mut app = test_app_with(&[("a", 1)]);
        for view in [ViewState::NoEvents, ViewState::ShowingEvents, ViewState::AddingEvent] {
            app.view = view;
            assert_eq!(action_for(&TuiEvent::ForceQuit, &app), Some(Action::Quit));
            assert_eq!(action_for(&TuiEvent::Tick, &app), Some(Action::Tick));
        }
    }

    #[test]
    fn test_no_events_keys() {
        let app = test_app();
        assert_eq!(action_for(&TuiEvent::InputChar('+'), &app), Some(Action::Add));
        assert_eq!(action_for(&TuiEvent::InputChar('q'), &app), Some(Action::Quit));
        assert_eq!(action_for(&TuiEvent::InputChar('-'), &app), None);
    }

    #[test]
    fn test_list_keys() {
        let app = test_app_with(&[("a", 1)]);
        let cases = [
            (TuiEvent::InputChar('+'), Action::Add),
            (TuiEvent::InputChar('-'), Action::Remove),
            (TuiEvent::InputChar('/'), Action::FilterStart),
            (TuiEvent::InputChar('q'), Action::Quit),
            (TuiEvent::InputChar('k'), Action::SelectPrev),
            (TuiEvent::CursorDown, Action::SelectNext),
            (TuiEvent::Escape, Action::Back),
        ];
        for (event, action) in cases {
            assert_eq!(action_for(&event, &app), Some(action));
        }
    }

    #[test]
    fn test_q_is_text_in_form_and_filter() {
        let mut app = test_app_with(&[("a", 1)]);
        app.view = ViewState::AddingEvent;
        assert_eq!(
            action_for(&TuiEvent::InputChar('q'), &app),
            Some(Action::InputChar('q'))
        );

        app.view = ViewState::ShowingEvents;
        app.filter.editing = true;
        assert_eq!(
            action_for(&TuiEvent::InputChar('-'), &app),
            Some(Action::InputChar('-'))
        );
        assert_eq!(action_for(&TuiEvent::Submit, &app), Some(Action::Confirm));
    }

    #[test]
    fn test_form_navigation_keys() {
        let mut app = test_app();
        app.view = ViewState::AddingEvent;
        assert_eq!(action_for(&TuiEvent::NextField, &app), Some(Action::NextField));
        assert_eq!(action_for(&TuiEvent::PrevField, &app), Some(Action::PrevField));
        assert_eq!(action_for(&TuiEvent::Escape, &app), Some(Action::Back));
        assert_eq!(action_for(&TuiEvent::Backspace, &app), Some(Action::Backspace));
    }
}
