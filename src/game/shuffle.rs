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

//! Pluggable song permutation.
//!
//! Every source of randomness in the game goes through a [`Shuffler`], so a
//! game can be replayed from a seed and tests can pin the order.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::model::Song;

pub(crate) trait Shuffler {
    /// Permutes `songs` in place.
    fn shuffle(&mut self, songs: &mut [Song]);
}

/// Uniform shuffling backed by [`StdRng`].
pub(crate) struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    /// A shuffler with a random seed. The seed is logged so that a game can
    /// be replayed with `--seed`.
    pub(crate) fn new() -> Self {
        let seed: u64 = rand::random();
        tracing::info!(seed, "Shuffler seeded");
        Self::seeded(seed)
    }

    /// A reproducible shuffler.
    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, songs: &mut [Song]) {
        songs.shuffle(&mut self.rng);
    }
}
