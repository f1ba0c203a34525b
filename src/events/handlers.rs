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

use tracing::{debug, warn};

use crate::{
    App, MainView,
    components::GamePanelAction,
    game::{GameContext, MapSurface, TickToken, round::Round, summary::GameSummary},
};

pub(super) fn handle_score_tick(app: &mut App, token: TickToken) {
    let mut ctx = GameContext {
        surface: &mut app.game_map,
        delegate: &app.event_tx,
    };
    app.game.tick(token, &mut ctx);
}

pub(super) fn handle_set_main_view(app: &mut App, main_view: MainView) {
    debug!(?main_view, "Main view changed");
    if main_view == MainView::Atlas {
        show_atlas_selection(app);
    }
    app.main_view = main_view;
}

pub(super) fn handle_round_changed(app: &mut App, round: Round, index: usize, total: usize) {
    app.game_panel.set_round(round, index, total);
}

pub(super) fn handle_score_changed(app: &mut App, value: u32) {
    app.game_panel.set_clock_value(value);
}

pub(super) fn handle_game_finished(app: &mut App, summary: GameSummary) {
    app.game_panel.set_summary(summary);
}

pub(super) fn handle_warning(app: &mut App, message: String) {
    app.status = Some(message);
}

/// Runs a quiz panel action against the game. A rejected action is shown in
/// the status bar, the game itself is left as it was.
pub(super) fn handle_game_action(app: &mut App, action: GamePanelAction) {
    let mut ctx = GameContext {
        surface: &mut app.game_map,
        delegate: &app.event_tx,
    };

    let result = match action {
        GamePanelAction::Start => app.game.start_game(&mut ctx),
        GamePanelAction::Answer(song_id) => app.game.submit_answer(song_id, &mut ctx).map(|_| ()),
        GamePanelAction::Hint => app.game.use_hint(&mut ctx).map(|_| ()),
        GamePanelAction::Next => app.game.advance_round(&mut ctx),
    };

    match result {
        Ok(()) => debug!(
            ?action,
            game = app.game.game_number(),
            phase = ?app.game.phase(),
            round = app.game.round_index(),
            rounds = app.game.round_count(),
            clock = app.game.clock_value(),
            total_score = app.game.total_score(),
            "Game action applied"
        ),
        Err(e) => {
            warn!(?action, error = %e, "Game action rejected");
            app.status = Some(e.to_string());
        }
    }
}

/// Puts the atlas selection on the atlas map, or clears the map if the
/// selected song has no places.
pub(super) fn show_atlas_selection(app: &mut App) {
    match app.atlas.selected_song().filter(|song| song.is_playable()) {
        Some(song) => {
            let song_id = song.id;
            app.atlas_map.show_song(song_id);
        }
        None => app.atlas_map.remove_highlighting(),
    }
}
