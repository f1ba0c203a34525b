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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into `ratatui` widgets. The
//! primary entry point is [`draw`], called after every processed event.

mod atlas;
mod map;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    widgets::Paragraph,
};

use crate::{
    App, MainView,
    game::GamePhase,
    render::{atlas::draw_atlas, map::draw_map},
};

/// Width of the quiz panel beside the map.
const PANEL_WIDTH: u16 = 48;

/// Renders the user interface to the terminal frame.
///
/// The screen is the active view above a one line status bar. The game view
/// puts the map next to the quiz panel, the atlas view has its own layout.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    match app.main_view {
        MainView::Game => {
            let main = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)])
                .split(outer[0]);

            draw_map(f, main[0], &app.game_map, " Map ", &app.theme);
            let total_score = app.game.total_score();
            app.game_panel
                .draw(f, main[1], &app.config.share_url, total_score, &app.theme);
        }
        MainView::Atlas => draw_atlas(f, outer[0], &mut app.atlas, &app.atlas_map, &app.theme),
    }

    draw_status(f, outer[1], app);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(message) => Paragraph::new(message.as_str()).fg(app.theme.status_colour),
        None => {
            let help = match (app.main_view, app.game.phase()) {
                (MainView::Game, GamePhase::InProgress) => " Tab: atlas   q: quit",
                (MainView::Game, _) => " s: start   Tab: atlas   q: quit",
                (MainView::Atlas, _) => " j/k: browse   h/l: places   /: filter   Tab: quiz   q: quit",
            };
            Paragraph::new(help).fg(app.theme.border_colour)
        }
    };

    f.render_widget(line.bg(app.theme.gauge_track_colour), area);
}
