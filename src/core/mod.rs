//! # Core Application Logic
//!
//! This module contains Countdown's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  I/O only behind the    │
//!                    │  Storage + Clock traits │
//!                    └───────────┬─────────────┘
//!                                │ Effect::SaveEvents
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`countdown`]: target + now → `"2y 15d 3h 4m 5s"`
//! - [`event`]: The `Event` type and the seed event
//! - [`store`]: Sorted `EventCollection` and the `Storage` trait
//! - [`validate`]: Add-form input → `Event`
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`clock`]: Where "now" comes from
//! - [`config`]: `config.toml`, env overrides, resolved paths

pub mod action;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod event;
pub mod state;
pub mod store;
pub mod validate;
