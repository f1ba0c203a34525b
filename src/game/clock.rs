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

//! Per-round scoring clock.
//!
//! The clock holds the points a correct answer is currently worth. It decays
//! on every tick while the round is open and drops by a flat penalty when a
//! hint is taken.

use crate::game::GameError;

pub(crate) const START_VALUE: u32 = 1000;
pub(crate) const DECAY_PER_TICK: u32 = 25;
pub(crate) const DECAY_FLOOR: u32 = 500;
pub(crate) const HINT_PENALTY: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoringClock {
    value: u32,
    hint_used: bool,
    running: bool,
}

impl Default for ScoringClock {
    fn default() -> Self {
        Self {
            value: START_VALUE,
            hint_used: false,
            running: false,
        }
    }
}

impl ScoringClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn value(&self) -> u32 {
        self.value
    }

    /// Restarts the clock for a new round.
    pub(crate) fn reset(&mut self) {
        self.value = START_VALUE;
        self.hint_used = false;
        self.running = true;
    }

    /// Freezes the value. Further ticks have no effect until the next reset.
    pub(crate) fn stop(&mut self) {
        self.running = false;
    }

    /// Applies one decay step and returns `true` if the value changed.
    ///
    /// Decay never takes the value below [`DECAY_FLOOR`]; a value already at
    /// or below the floor (after a hint) is left alone.
    pub(crate) fn tick(&mut self) -> bool {
        if !self.running || self.value <= DECAY_FLOOR {
            return false;
        }

        self.value = self.value.saturating_sub(DECAY_PER_TICK).max(DECAY_FLOOR);
        true
    }

    /// Deducts the hint penalty. The penalty ignores the decay floor.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] if the clock is stopped or a
    /// hint was already taken this round.
    pub(crate) fn apply_hint(&mut self) -> Result<u32, GameError> {
        if !self.running {
            return Err(GameError::invalid("use a hint", "the round is closed"));
        }
        if self.hint_used {
            return Err(GameError::invalid("use a hint", "a hint was already used"));
        }

        self.hint_used = true;
        self.value = self.value.saturating_sub(HINT_PENALTY);
        Ok(self.value)
    }
}
