//! Parliamentary Member Directory
//!
//! An interactive console application maintaining a roster of parliamentary
//! members: a schema-validated entry form plus a create/edit/delete list,
//! all state held in memory for the lifetime of one session.

mod config;
mod errors;
mod form;
mod models;
mod photo;
mod store;
mod ui;

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use form::FormController;
use photo::PhotoBinder;
use store::RosterStore;

/// Application state owned by the single UI event loop.
pub struct AppState {
    pub store: RosterStore,
    pub photos: PhotoBinder,
    pub form: FormController,
}

impl AppState {
    /// Fresh, empty state for one session.
    pub fn new() -> Self {
        Self {
            store: RosterStore::new(),
            photos: PhotoBinder::new(),
            form: FormController::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Parliamentary Member Directory");
    tracing::info!("Log level: {}", config.log_level);

    let mut state = AppState::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    ui::run(&mut state, &mut stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        "Session ended with {} member(s) on the roster and {} live photo binding(s)",
        state.store.len(),
        state.photos.live_count()
    );

    Ok(())
}
