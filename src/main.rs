use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use countdown::core::clock::{Clock, SystemClock};
use countdown::core::config::{self, DEFAULT_LOG_LEVEL};
use countdown::core::state::App;
use countdown::core::store::{JsonFileStorage, load_or_seed};
use countdown::tui;

#[derive(Parser)]
#[command(
    name = "countdown",
    version,
    about = "Count down to the events that matter, live in your terminal"
)]
struct Args {}

#[tokio::main]
async fn main() {
    let _args = Args::parse();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let app_dir = config::app_dir()?;
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("cannot create {}", app_dir.display()))?;

    // Started before the config is read so its own messages reach the log
    init_logging(&config::log_path(&app_dir));
    let config = config::resolve(&config::load_config(&app_dir)?, &app_dir);
    log::set_max_level(config.log_level);
    log::info!(
        "Countdown {} starting, events file {}",
        env!("CARGO_PKG_VERSION"),
        config.events_path.display()
    );

    let storage = JsonFileStorage::new(&config.events_path);
    let clock = Arc::new(SystemClock);
    let events = load_or_seed(&storage, clock.now())?;
    let mut app = App::new(events, clock);

    tui::run(&mut app, &storage, &config).await?;
    log::info!("Countdown exiting");
    Ok(())
}

/// File logger: the terminal belongs to the UI while it runs.
///
/// The logger accepts every level and `log::set_max_level` does the
/// filtering, so the level can be changed once the config is resolved.
fn init_logging(log_path: &Path) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(log_path) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
        log::set_max_level(DEFAULT_LOG_LEVEL);
    }
}
