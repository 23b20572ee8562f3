use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, ViewState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AddForm, EventDetail, EventList, HelpBar, LandingPage, TitleBar,
};
use crate::tui::theme::Theme;

/// Width of the list column next to the detail pane.
const LIST_WIDTH: u16 = 34;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, theme: &Theme) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(app.events.len(), app.status_message.as_deref(), theme)
        .render(frame, title_area);

    if app.events.is_empty() {
        LandingPage::new(theme).render(frame, main_area);
    } else {
        draw_events(frame, main_area, app, tui, theme);
    }

    if app.view == ViewState::AddingEvent {
        AddForm::new(&app.form, theme).render(frame, main_area);
    }

    HelpBar::new(app.view, app.filter.editing, theme).render(frame, help_area);
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, theme: &Theme) {
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Length(LIST_WIDTH), Constraint::Min(0)])
            .margin(1)
            .areas(area);

    let visible = app
        .visible_indices()
        .into_iter()
        .filter_map(|i| app.events.get(i))
        .collect();
    EventList::new(
        &mut tui.event_list,
        visible,
        app.selected,
        &app.filter,
        app.now,
        theme,
    )
    .render(frame, list_area);

    EventDetail::new(app.selected_event(), app.now, theme).render(frame, detail_area);
}
