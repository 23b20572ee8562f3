//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and performs the
//! effects `update()` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! ┌──────────────────┐
//! │ EventStream task │──► TuiEvent ──┐
//! └──────────────────┘               │  mpsc
//! ┌──────────────────┐               ├───────► loop: action_for → update → effect → draw
//! │  1s ticker task  │──► Tick ──────┘
//! └──────────────────┘
//! ```
//!
//! All state mutation happens in the loop. Ticks only refresh `App::now`, so
//! they never touch the filesystem. Saves run inline when the reducer returns
//! `Effect::SaveEvents`.

mod component;
mod components;
mod event;
pub mod theme;
mod ui;

use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, bail};
use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    EventStream, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use futures::StreamExt;
use log::{debug, error, info, warn};
use tokio::sync::mpsc;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::store::{Storage, StoreError};
use crate::tui::components::EventListState;
use crate::tui::event::{TuiEvent, action_for, translate};
use crate::tui::theme::Theme;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub event_list: EventListState,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Lets Esc arrive without the escape-sequence delay. Terminals that
        // don't support the protocol ignore it.
        execute!(
            stdout(),
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the interactive session until the user quits.
///
/// The terminal is restored before returning, also on error.
pub async fn run(app: &mut App, storage: &dyn Storage, config: &ResolvedConfig) -> anyhow::Result<()> {
    let theme = Theme::from_colors(&config.theme);
    let mut tui = TuiState::default();

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new();
    if let Err(e) = &guard {
        warn!("Failed to enable terminal modes: {e}");
    }

    let (tx, rx) = mpsc::unbounded_channel::<TuiEvent>();
    spawn_input_reader(tx.clone());
    spawn_ticker(tx);

    let result = event_loop(&mut terminal, rx, app, &mut tui, storage, config, &theme).await;

    drop(guard);
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    mut rx: mpsc::UnboundedReceiver<TuiEvent>,
    app: &mut App,
    tui: &mut TuiState,
    storage: &dyn Storage,
    config: &ResolvedConfig,
    theme: &Theme,
) -> anyhow::Result<()> {
    terminal
        .draw(|f| ui::draw_ui(f, app, tui, theme))
        .context("failed to draw")?;

    while let Some(event) = rx.recv().await {
        if let TuiEvent::InputClosed(reason) = &event {
            bail!("terminal input closed: {reason}");
        }

        let should_quit = dispatch(app, &event, storage, config.abort_on_save_error)?;
        if should_quit {
            info!("Quit requested");
            break;
        }

        terminal
            .draw(|f| ui::draw_ui(f, app, tui, theme))
            .context("failed to draw")?;
    }
    Ok(())
}

/// Feed one event through the reducer and perform the effect it returns.
///
/// Returns `true` when the session should end. A failed save is an error only
/// when `abort_on_save_error` is set.
pub(crate) fn dispatch(
    app: &mut App,
    event: &TuiEvent,
    storage: &dyn Storage,
    abort_on_save_error: bool,
) -> Result<bool, StoreError> {
    let Some(action) = action_for(event, app) else {
        return Ok(false);
    };
    if !matches!(event, TuiEvent::Tick) {
        debug!("{event:?} → {action:?}");
    }

    match update(app, action) {
        Effect::None => Ok(false),
        Effect::Quit => Ok(true),
        Effect::SaveEvents => {
            save_events(app, storage, abort_on_save_error)?;
            Ok(false)
        }
    }
}

fn save_events(
    app: &mut App,
    storage: &dyn Storage,
    abort_on_save_error: bool,
) -> Result<(), StoreError> {
    match storage.save(app.events.as_slice()) {
        Ok(()) => {
            app.status_message = None;
            Ok(())
        }
        Err(e) if abort_on_save_error => {
            error!("Save failed: {e}");
            Err(e)
        }
        Err(e) => {
            warn!("Save failed, continuing: {e}");
            app.status_message = Some(format!("Save failed: {e}"));
            Ok(())
        }
    }
}

fn spawn_input_reader(tx: mpsc::UnboundedSender<TuiEvent>) {
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            let event = match reader.next().await {
                Some(Ok(raw)) => match translate(&raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => TuiEvent::InputClosed(e.to_string()),
                None => TuiEvent::InputClosed("end of stream".to_string()),
            };
            let closed = matches!(event, TuiEvent::InputClosed(_));
            if tx.send(event).is_err() || closed {
                break;
            }
        }
    });
}

fn spawn_ticker(tx: mpsc::UnboundedSender<TuiEvent>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if tx.send(TuiEvent::Tick).is_err() {
                break;
            }
        }
    });
}
