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

//! Keyboard routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App, MainView,
    events::{
        AppEvent,
        handlers::{handle_game_action, show_atlas_selection},
    },
};

/// Maps keyboard input to application actions.
///
/// While the atlas filter has focus every key goes to the filter box. Other
/// keys are tried as global keys first (quit, view switching), then handed
/// to the active view.
///
/// # Errors
///
/// Returns an error if an event cannot be posted to the event channel.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }
    app.status = None;

    if app.main_view == MainView::Atlas && app.atlas.is_filtering() {
        process_filter_key(app, key);
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Tab => {
            let view = match app.main_view {
                MainView::Game => MainView::Atlas,
                MainView::Atlas => MainView::Game,
            };
            app.event_tx.send(AppEvent::SetMainView(view))?;
        }

        _ => match app.main_view {
            MainView::Game => {
                if let Some(action) = app.game_panel.process_event(&Event::Key(key)) {
                    handle_game_action(app, action);
                }
            }
            MainView::Atlas => process_atlas_key(app, key),
        },
    }

    Ok(())
}

fn process_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.atlas.end_filter(),
        _ => {
            if app.atlas.handle_filter_event(&Event::Key(key)) {
                show_atlas_selection(app);
            }
        }
    }
}

fn process_atlas_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.atlas.next();
            show_atlas_selection(app);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.atlas.previous();
            show_atlas_selection(app);
        }
        KeyCode::Char('l') | KeyCode::Right => app.atlas.next_place(),
        KeyCode::Char('h') | KeyCode::Left => app.atlas.previous_place(),
        KeyCode::Char('/') => app.atlas.begin_filter(),
        _ => {}
    }
}
