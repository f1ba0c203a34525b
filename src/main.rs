// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Song geography quiz TUI.
//!
//! Shows the places a song mentions on a map and asks which song it is.
//! An atlas view browses the catalog without a score.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns all state, manages the terminal lifecycle and
//!   renders the UI.
//! * An **Input Thread** forwards key presses.
//! * **Tick Threads** drive screen refreshes and the scoring clock.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal is restored even when the event loop fails. Every thread talks
//! to the main thread through one `std::sync::mpsc` channel of
//! [`AppEvent`]s, so game state is only ever touched from the main thread.

mod atlas;
mod cli;
mod components;
mod config;
mod events;
mod game;
mod logging;
mod map;
mod model;
mod render;
mod theme;
mod ticker;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;

use crate::{
    atlas::AtlasView,
    cli::{Args, Mode},
    components::GamePanel,
    config::AppConfig,
    events::{AppEvent, process_events},
    game::{
        Game,
        shuffle::{RandomShuffler, Shuffler},
    },
    map::MapView,
    model::catalog::Catalog,
    theme::Theme,
    ticker::ThreadTicker,
};

/// Redraw interval, the minimum "frame rate" of the UI.
const UI_TICK: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Game,
    Atlas,
}

impl From<Mode> for MainView {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Game => MainView::Game,
            Mode::Atlas => MainView::Atlas,
        }
    }
}

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub game: Game,
    pub game_map: MapView,
    pub game_panel: GamePanel,

    pub atlas: AtlasView,
    pub atlas_map: MapView,

    pub status: Option<String>,
}

impl App {
    /// Loads the catalog and creates the application state.
    pub fn new(config: AppConfig, args: &Args) -> Result<Self> {
        let songs_path = config.songs_path();
        let places_path = config.places_path();

        let catalog = Catalog::load(&songs_path, &places_path).with_context(|| {
            format!(
                "Failed to load catalog from {} and {}",
                songs_path.display(),
                places_path.display()
            )
        })?;

        info!(
            songs = catalog.all_songs().len(),
            playable = catalog.playable_songs().len(),
            places = catalog.places().len(),
            "Catalog loaded"
        );

        let catalog = Arc::new(catalog);
        let (event_tx, event_rx) = mpsc::channel();

        let shuffler: Box<dyn Shuffler> = match args.seed {
            Some(seed) => {
                info!(seed, "Using fixed shuffle seed");
                Box::new(RandomShuffler::seeded(seed))
            }
            None => Box::new(RandomShuffler::new()),
        };
        let ticker = ThreadTicker::new(
            event_tx.clone(),
            Duration::from_millis(config.tick_interval_ms),
        );

        Ok(Self {
            config,
            theme: Theme::default(),
            main_view: args.mode.into(),
            event_tx,
            event_rx,
            game: Game::new(Arc::clone(&catalog), shuffler, Box::new(ticker)),
            game_map: MapView::new(Arc::clone(&catalog)),
            game_panel: GamePanel::new(),
            atlas: AtlasView::new(Arc::clone(&catalog)),
            atlas_map: MapView::new(catalog),
            status: None,
        })
    }
}

/// The entry point of the application.
///
/// Reads the command line and configuration, starts logging, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load_config().with_args(&args);

    logging::init_logging(&config.log_file, &config.log_level)?;
    info!(version = env!("CARGO_PKG_VERSION"), mode = ?args.mode, "Starting");

    let mut app = App::new(config, &args).context("Failed to initialise application")?;

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("Exiting");
    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// Enables raw mode to capture all keyboard input and switches the terminal
/// to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. It is best-effort and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and redraw threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(UI_TICK);
        }
    });

    // Initial trigger to put the start-up view on screen
    app.event_tx.send(AppEvent::SetMainView(app.main_view))?;

    process_events(terminal, app)
}
