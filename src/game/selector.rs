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

//! Round selection.
//!
//! Picks the answer of a round from the play order and draws the decoys
//! shown next to it. A song whose places are all among the answer's places
//! would light up the same markers on the map, so such songs are never used
//! as decoys.

use std::collections::HashSet;

use crate::{
    game::{GameError, shuffle::Shuffler},
    model::{Song, SongId},
};

/// Number of answer candidates shown in a round, the answer included.
pub(crate) const CANDIDATE_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub(crate) struct RoundSelection {
    pub(crate) correct_song: Song,
    pub(crate) candidates: Vec<Song>,
}

impl RoundSelection {
    /// The catalog had too few eligible decoys to fill every candidate slot.
    pub(crate) fn is_degenerate(&self) -> bool {
        self.candidates.len() < CANDIDATE_COUNT
    }
}

/// Selects the answer and candidates for round `round_index`.
///
/// # Arguments
///
/// * `all_songs` - The full catalog, decoys are sampled from it.
/// * `play_order` - The shuffled playable songs of the current game.
/// * `round_index` - Position in `play_order` of this round's answer.
/// * `shuffler` - Source of the decoy and candidate permutations.
///
/// # Errors
///
/// Returns [`GameError::InvalidTransition`] if `round_index` is outside the
/// play order.
pub(crate) fn select_round(
    all_songs: &[Song],
    play_order: &[Song],
    round_index: usize,
    shuffler: &mut dyn Shuffler,
) -> Result<RoundSelection, GameError> {
    let correct_song = play_order
        .get(round_index)
        .cloned()
        .ok_or_else(|| GameError::invalid("select a round", "past the end of the play order"))?;

    // Includes the answer itself.
    let excluded: HashSet<SongId> = play_order
        .iter()
        .filter(|song| song.places_subset_of(&correct_song))
        .map(|song| song.id)
        .collect();

    let mut pool = all_songs.to_vec();
    shuffler.shuffle(&mut pool);

    let mut seen = HashSet::new();
    let mut candidates: Vec<Song> = pool
        .into_iter()
        .filter(|song| !excluded.contains(&song.id) && seen.insert(song.id))
        .take(CANDIDATE_COUNT - 1)
        .collect();

    candidates.push(correct_song.clone());
    shuffler.shuffle(&mut candidates);

    Ok(RoundSelection {
        correct_song,
        candidates,
    })
}
