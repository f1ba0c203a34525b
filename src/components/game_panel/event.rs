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

//! Input handling for the quiz panel.
//!
//! Navigation keys move the candidate cursor; every other recognised key
//! becomes a [`GamePanelAction`]. The panel does not judge whether an action
//! is legal right now, the game does.

use crossterm::event::{Event, KeyCode};

use crate::components::{GamePanel, GamePanelAction};

impl GamePanel {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<GamePanelAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous();
                None
            }

            KeyCode::Enter => self.selected_candidate().map(GamePanelAction::Answer),

            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                let song_id = self.candidate_at(index)?;
                self.candidates_state.select(Some(index));
                Some(GamePanelAction::Answer(song_id))
            }

            KeyCode::Char('s') => Some(GamePanelAction::Start),
            KeyCode::Char('h') => Some(GamePanelAction::Hint),
            KeyCode::Char('n') => Some(GamePanelAction::Next),

            _ => None,
        }
    }
}
