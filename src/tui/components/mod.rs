//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: Top bar with the app name, event count and status
//! - `HelpBar`: Bottom line listing the keys of the current view
//! - `LandingPage`: Shown when there are no events
//! - `EventDetail`: Dates, countdown and totals for the selected event
//! - `AddForm`: The "New Event" modal
//!
//! ### Stateful Components
//!
//! - `EventList`: Scrollable list of events, keeps a `ListState` across frames
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. The theme is passed by reference to every component.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! EventDetail::new(event, app.now, theme).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file, shared layout helpers)
//! ├── title_bar.rs
//! ├── help_bar.rs
//! ├── landing.rs       (no-events prompt)
//! ├── event_list.rs
//! ├── event_detail.rs
//! └── add_form.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

pub mod add_form;
pub mod event_detail;
pub mod event_list;
mod help_bar;
pub mod landing;
mod title_bar;

pub use add_form::AddForm;
pub use event_detail::EventDetail;
pub use event_list::{EventList, EventListState};
pub use help_bar::HelpBar;
pub use landing::LandingPage;
pub use title_bar::TitleBar;

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}

/// Compute a rect of fixed size centered in `outer`, clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(outer.width)),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
