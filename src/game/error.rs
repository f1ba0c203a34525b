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

use thiserror::Error;

use crate::model::SongId;

/// Rejected or degraded game operations.
///
/// None of these are fatal: a rejected operation leaves the game in its last
/// valid state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum GameError {
    #[error("song {0} is not one of this round's candidates")]
    UnknownSongId(SongId),

    #[error("only {available} answer candidates could be built")]
    DegenerateCatalog { available: usize },

    #[error("cannot {operation} while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("the catalog has no songs with map locations")]
    NoPlayableSongs,
}

impl GameError {
    pub(crate) fn invalid(operation: &'static str, phase: &'static str) -> Self {
        Self::InvalidTransition { operation, phase }
    }
}
