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

//! Application events and the main event loop.
//!
//! Every state change of the application goes through the [`AppEvent`]
//! channel: key presses from the input thread, redraw ticks, scoring clock
//! ticks from the [`ThreadTicker`](crate::ticker::ThreadTicker), and the
//! notifications the game sends through its [`GameDelegate`].

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    game::{GameDelegate, GameError, TickToken, round::Round, summary::GameSummary},
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,
    ScoreTick(TickToken),

    SetMainView(MainView),

    RoundChanged {
        round: Round,
        index: usize,
        total: usize,
    },
    ScoreChanged(u32),
    GameFinished(GameSummary),

    Warning(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Tick => {}
            AppEvent::ScoreTick(token) => handle_score_tick(app, token),
            AppEvent::SetMainView(view) => handle_set_main_view(app, view),
            AppEvent::RoundChanged {
                round,
                index,
                total,
            } => handle_round_changed(app, round, index, total),
            AppEvent::ScoreChanged(value) => handle_score_changed(app, value),
            AppEvent::GameFinished(summary) => handle_game_finished(app, summary),
            AppEvent::Warning(message) => handle_warning(app, message),
        }

        terminal.draw(|f| draw(f, app))?;
    }
    Ok(())
}

impl GameDelegate for Sender<AppEvent> {
    fn on_round_changed(&self, round: &Round, round_index: usize, total_rounds: usize) {
        let _ = self.send(AppEvent::RoundChanged {
            round: round.clone(),
            index: round_index,
            total: total_rounds,
        });
    }

    fn on_score_tick(&self, value: u32) {
        let _ = self.send(AppEvent::ScoreChanged(value));
    }

    fn on_game_summary(&self, summary: &GameSummary) {
        let _ = self.send(AppEvent::GameFinished(summary.clone()));
    }

    fn on_warning(&self, warning: &GameError) {
        let _ = self.send(AppEvent::Warning(warning.to_string()));
    }
}
