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

//! Lifecycle of a single quiz round.
//!
//! A round starts [`RoundStatus::Pending`] and moves exactly once to
//! [`RoundStatus::Correct`] or [`RoundStatus::Wrong`]. Both are terminal.

use crate::{
    game::{GameError, selector::RoundSelection},
    model::{Song, SongId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoundStatus {
    Pending,
    Correct,
    Wrong,
}

impl RoundStatus {
    pub(crate) fn is_terminal(self) -> bool {
        self != RoundStatus::Pending
    }

    pub(crate) fn glyph(self) -> &'static str {
        match self {
            RoundStatus::Correct => "✅",
            RoundStatus::Wrong | RoundStatus::Pending => "❌",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Round {
    pub(crate) index: usize,
    pub(crate) correct_song: Song,
    pub(crate) candidates: Vec<Song>,
    pub(crate) answered_song: Option<Song>,
    pub(crate) status: RoundStatus,
    pub(crate) score: u32,
    pub(crate) hints_used: u32,
}

impl Round {
    pub(crate) fn new(index: usize, selection: RoundSelection) -> Self {
        Self {
            index,
            correct_song: selection.correct_song,
            candidates: selection.candidates,
            answered_song: None,
            status: RoundStatus::Pending,
            score: 0,
            hints_used: 0,
        }
    }

    /// Records the player's answer.
    ///
    /// A correct answer is worth `clock_value` points, a wrong one nothing.
    ///
    /// # Errors
    ///
    /// * [`GameError::InvalidTransition`] if the round was already answered.
    /// * [`GameError::UnknownSongId`] if `song_id` is not a candidate.
    ///
    /// The round is unchanged on error.
    pub(crate) fn submit_answer(&mut self, song_id: SongId, clock_value: u32) -> Result<RoundStatus, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::invalid("answer", "the round is already answered"));
        }

        let answered = self
            .candidates
            .iter()
            .find(|song| song.id == song_id)
            .cloned()
            .ok_or(GameError::UnknownSongId(song_id))?;

        if answered.id == self.correct_song.id {
            self.status = RoundStatus::Correct;
            self.score = clock_value;
        } else {
            self.status = RoundStatus::Wrong;
            self.score = 0;
        }
        self.answered_song = Some(answered);

        Ok(self.status)
    }

    /// Marks the round's single hint as used.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] if the round is answered or
    /// the hint was already taken.
    pub(crate) fn use_hint(&mut self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::invalid("use a hint", "the round is already answered"));
        }
        if self.hints_used > 0 {
            return Err(GameError::invalid("use a hint", "a hint was already used"));
        }

        self.hints_used += 1;
        Ok(())
    }

    pub(crate) fn hint_available(&self) -> bool {
        self.status == RoundStatus::Pending && self.hints_used == 0
    }
}
