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

//! Quiz panel state.
//!
//! The panel is a projection of the game built only from the notifications
//! the game sends: the current round, the live clock value and, once the game
//! is over, its summary. Scores are never added up here, the running total is
//! read from the game when drawing. Key presses are turned into [`GamePanelAction`]s for
//! the application to run against the game.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::{
    game::{
        round::{Round, RoundStatus},
        summary::GameSummary,
    },
    model::SongId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GamePanelAction {
    Start,
    Answer(SongId),
    Hint,
    Next,
}

#[derive(Default)]
pub(crate) struct GamePanel {
    pub(crate) round: Option<Round>,
    pub(crate) round_index: usize,
    pub(crate) total_rounds: usize,
    pub(crate) clock_value: u32,
    pub(crate) summary: Option<GameSummary>,
    pub(crate) candidates_state: ListState,
}

impl GamePanel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_round(&mut self, round: Round, round_index: usize, total_rounds: usize) {
        let fresh = round.status == RoundStatus::Pending
            && self.round.as_ref().is_none_or(|r| r.index != round.index || self.summary.is_some());

        if fresh {
            if round_index == 0 {
                self.summary = None;
            }
            self.candidates_state
                .select((!round.candidates.is_empty()).then_some(0));
        }

        self.round = Some(round);
        self.round_index = round_index;
        self.total_rounds = total_rounds;
    }

    pub(crate) fn set_clock_value(&mut self, value: u32) {
        self.clock_value = value;
    }

    pub(crate) fn set_summary(&mut self, summary: GameSummary) {
        self.summary = Some(summary);
    }

    pub(crate) fn is_open(&self) -> bool {
        self.summary.is_none()
            && self
                .round
                .as_ref()
                .is_some_and(|r| r.status == RoundStatus::Pending)
    }

    pub(crate) fn selected_candidate(&self) -> Option<SongId> {
        let index = self.candidates_state.selected()?;
        self.candidate_at(index)
    }

    pub(crate) fn candidate_at(&self, index: usize) -> Option<SongId> {
        self.round.as_ref()?.candidates.get(index).map(|s| s.id)
    }

    fn candidate_count(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.candidates.len())
    }

    fn goto_next(&mut self) {
        let len = self.candidate_count();
        if len == 0 {
            return;
        }
        let i = match self.candidates_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.candidates_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.candidate_count();
        if len == 0 {
            return;
        }
        let i = match self.candidates_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.candidates_state.select(Some(i));
    }
}
