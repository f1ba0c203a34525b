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

//! End-of-game results.

use crate::game::round::{Round, RoundStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoundOutcome {
    pub(crate) title: String,
    pub(crate) status: RoundStatus,
    pub(crate) score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GameSummary {
    pub(crate) total_score: u32,
    pub(crate) outcomes: Vec<RoundOutcome>,
}

impl GameSummary {
    pub(crate) fn from_rounds(rounds: &[Round]) -> Self {
        let outcomes: Vec<RoundOutcome> = rounds
            .iter()
            .map(|round| RoundOutcome {
                title: round.correct_song.title.clone(),
                status: round.status,
                score: round.score,
            })
            .collect();

        Self {
            total_score: outcomes.iter().map(|o| o.score).sum(),
            outcomes,
        }
    }

    pub(crate) fn correct_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == RoundStatus::Correct)
            .count()
    }

    /// Formats the result for sharing, for example
    /// `✅❌✅✅✅ I got 4 right and 3500 points in song geography at <url>`.
    pub(crate) fn share_text(&self, share_url: &str) -> String {
        let glyphs: String = self.outcomes.iter().map(|o| o.status.glyph()).collect();
        format!(
            "{} I got {} right and {} points in song geography at {}",
            glyphs,
            self.correct_count(),
            self.total_score,
            share_url
        )
    }
}
