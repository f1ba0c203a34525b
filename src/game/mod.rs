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

//! Quiz game engine.
//!
//! The [`Game`] sequences the rounds of a quiz, keeps the score and is the
//! only component that tells the map what to show. It holds no references to
//! the user interface: everything it needs from the outside is passed in on
//! each call through a [`GameContext`].
//!
//! # Lifecycle
//!
//! ```text
//! Welcome --start_game--> InProgress --advance_round (last)--> Summary
//!                          ^                                     |
//!                          +------------start_game---------------+
//! ```
//!
//! Within a round the [`ScoringClock`] decays once per tick delivered by a
//! [`TickScheduler`]. The schedule is cancelled as soon as the round is
//! answered and whenever a new game is started.

pub(crate) mod clock;
mod error;
pub(crate) mod round;
pub(crate) mod selector;
pub(crate) mod shuffle;
pub(crate) mod summary;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests_game;

use std::sync::Arc;

use tracing::{debug, info, warn};

pub(crate) use error::GameError;

use crate::{
    game::{
        clock::ScoringClock,
        round::{Round, RoundStatus},
        selector::{RoundSelection, select_round},
        shuffle::Shuffler,
        summary::GameSummary,
    },
    model::{Song, SongId, catalog::Catalog},
};

/// Number of rounds in a game.
pub(crate) const ROUND_COUNT: usize = 5;

/// Commands the game issues to the map. Implementations own all rendering
/// state and must tolerate repeated calls.
pub(crate) trait MapSurface {
    /// Frames every place of the song in the viewport and highlights them.
    fn zoom_to_song(&mut self, song_id: SongId);

    /// Shows the place name labels of the song.
    fn show_song_tooltips(&mut self, song_id: SongId);

    /// Clears all highlighting and labels.
    fn remove_highlighting(&mut self);
}

/// Notifications for the presentation layer.
pub(crate) trait GameDelegate {
    fn on_round_changed(&self, round: &Round, round_index: usize, total_rounds: usize);
    fn on_score_tick(&self, value: u32);
    fn on_game_summary(&self, summary: &GameSummary);
    fn on_warning(&self, warning: &GameError);
}

/// Identifies one tick schedule, ticks from a cancelled schedule can then be
/// told apart from current ones.
pub(crate) type TickToken = u64;

/// Periodic scoring clock ticks.
pub(crate) trait TickScheduler {
    /// Starts delivering `token` once per period, cancelling any schedule
    /// already running.
    fn start(&mut self, token: TickToken);

    /// Stops the current schedule, if any.
    fn cancel(&mut self);
}

/// The collaborators a game operation may call.
pub(crate) struct GameContext<'a> {
    pub(crate) surface: &'a mut dyn MapSurface,
    pub(crate) delegate: &'a dyn GameDelegate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GamePhase {
    Welcome,
    InProgress,
    Summary,
}

impl GamePhase {
    fn describe(self) -> &'static str {
        match self {
            GamePhase::Welcome => "no game has started",
            GamePhase::InProgress => "a game is in progress",
            GamePhase::Summary => "the game is over",
        }
    }
}

#[derive(Debug)]
struct GameSession {
    game_number: u32,
    play_order: Vec<Song>,
    rounds: Vec<Round>,
    round_index: usize,
    round_count: usize,
}

impl GameSession {
    fn current_round(&self) -> Option<&Round> {
        self.rounds.get(self.round_index)
    }

    fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.get_mut(self.round_index)
    }

    fn total_score(&self) -> u32 {
        self.rounds.iter().map(|r| r.score).sum()
    }
}

pub(crate) struct Game {
    catalog: Arc<Catalog>,
    shuffler: Box<dyn Shuffler>,
    scheduler: Box<dyn TickScheduler>,
    phase: GamePhase,
    game_number: u32,
    session: Option<GameSession>,
    clock: ScoringClock,
    tick_token: TickToken,
}

impl Game {
    pub(crate) fn new(
        catalog: Arc<Catalog>,
        shuffler: Box<dyn Shuffler>,
        scheduler: Box<dyn TickScheduler>,
    ) -> Self {
        Self {
            catalog,
            shuffler,
            scheduler,
            phase: GamePhase::Welcome,
            game_number: 0,
            session: None,
            clock: ScoringClock::new(),
            tick_token: 0,
        }
    }

    pub(crate) fn phase(&self) -> GamePhase {
        self.phase
    }

    pub(crate) fn game_number(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.game_number)
    }

    pub(crate) fn clock_value(&self) -> u32 {
        self.clock.value()
    }

    pub(crate) fn rounds(&self) -> &[Round] {
        self.session.as_ref().map(|s| s.rounds.as_slice()).unwrap_or_default()
    }

    pub(crate) fn current_round(&self) -> Option<&Round> {
        match self.phase {
            GamePhase::InProgress => self.session.as_ref()?.current_round(),
            _ => None,
        }
    }

    pub(crate) fn round_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.round_index)
    }

    pub(crate) fn round_count(&self) -> usize {
        self.session.as_ref().map_or(ROUND_COUNT, |s| s.round_count)
    }

    pub(crate) fn total_score(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::total_score)
    }

    /// The results of the finished game.
    pub(crate) fn summary(&self) -> Option<GameSummary> {
        match self.phase {
            GamePhase::Summary => Some(GameSummary::from_rounds(self.rounds())),
            _ => None,
        }
    }

    /// Starts a new game with a freshly shuffled play order and presents its
    /// first round.
    ///
    /// # Errors
    ///
    /// * [`GameError::InvalidTransition`] while a game is in progress.
    /// * [`GameError::NoPlayableSongs`] if no song can be shown on the map.
    pub(crate) fn start_game(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        if self.phase == GamePhase::InProgress {
            return Err(self.reject("start a game"));
        }

        let mut play_order = self.catalog.playable_songs();
        if play_order.is_empty() {
            warn!("Cannot start a game without playable songs");
            return Err(GameError::NoPlayableSongs);
        }

        self.scheduler.cancel();
        self.clock.stop();

        self.shuffler.shuffle(&mut play_order);

        let round_count = ROUND_COUNT.min(play_order.len());
        if round_count < ROUND_COUNT {
            warn!(round_count, "Fewer playable songs than rounds");
        }

        let selection = select_round(self.catalog.all_songs(), &play_order, 0, self.shuffler.as_mut())?;

        self.game_number += 1;
        self.session = Some(GameSession {
            game_number: self.game_number,
            play_order,
            rounds: Vec::with_capacity(round_count),
            round_index: 0,
            round_count,
        });
        self.phase = GamePhase::InProgress;

        info!(game = self.game_number, round_count, "Game started");

        self.enter_round(selection, ctx);
        Ok(())
    }

    /// Answers the current round with `song_id`.
    ///
    /// Stops the clock and reveals the correct song's place names whether the
    /// answer was right or not.
    ///
    /// # Errors
    ///
    /// * [`GameError::InvalidTransition`] if there is no open round.
    /// * [`GameError::UnknownSongId`] if `song_id` is not a candidate.
    pub(crate) fn submit_answer(&mut self, song_id: SongId, ctx: &mut GameContext) -> Result<RoundStatus, GameError> {
        let rejection = self.reject("answer");
        let value = self.clock.value();

        let (game_number, round_count) = match &self.session {
            Some(s) if self.phase == GamePhase::InProgress => (s.game_number, s.round_count),
            _ => return Err(rejection),
        };
        let round = self
            .session
            .as_mut()
            .and_then(GameSession::current_round_mut)
            .ok_or(rejection)?;

        let status = round.submit_answer(song_id, value)?;

        self.clock.stop();
        self.scheduler.cancel();

        info!(
            game = game_number,
            round = round.index,
            answer = song_id,
            correct = round.correct_song.id,
            score = round.score,
            "Round answered"
        );

        ctx.surface.show_song_tooltips(round.correct_song.id);
        ctx.delegate.on_round_changed(round, round.index, round_count);

        Ok(status)
    }

    /// Takes the round's hint: the clock loses the hint penalty and the
    /// correct song's place names are shown.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] if there is no open round or
    /// the hint was already used.
    pub(crate) fn use_hint(&mut self, ctx: &mut GameContext) -> Result<u32, GameError> {
        let rejection = self.reject("use a hint");

        if self.phase != GamePhase::InProgress {
            return Err(rejection);
        }
        let Some(session) = self.session.as_mut() else {
            return Err(rejection);
        };
        let round_count = session.round_count;
        let round = session.current_round_mut().ok_or(rejection)?;

        round.use_hint()?;
        let value = self.clock.apply_hint()?;

        debug!(round = round.index, value, "Hint used");

        ctx.surface.show_song_tooltips(round.correct_song.id);
        ctx.delegate.on_score_tick(value);
        ctx.delegate.on_round_changed(round, round.index, round_count);

        Ok(value)
    }

    /// Applies a clock tick from the schedule identified by `token`.
    ///
    /// Ticks from an earlier schedule, or arriving while no round is open,
    /// are ignored. Returns `true` if the clock value changed.
    pub(crate) fn tick(&mut self, token: TickToken, ctx: &mut GameContext) -> bool {
        if token != self.tick_token {
            debug!(token, current = self.tick_token, "Stale tick ignored");
            return false;
        }

        let open = self
            .current_round()
            .is_some_and(|r| r.status == RoundStatus::Pending);

        if !open || !self.clock.tick() {
            return false;
        }

        ctx.delegate.on_score_tick(self.clock.value());
        true
    }

    /// Leaves the result of the current round and moves on to the next round,
    /// or to the summary after the last one.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTransition`] outside a game or while the
    /// current round is still open.
    pub(crate) fn advance_round(&mut self, ctx: &mut GameContext) -> Result<(), GameError> {
        if self.phase != GamePhase::InProgress {
            return Err(self.reject("advance"));
        }

        let (next, round_count) = match &self.session {
            Some(s) if s.current_round().is_some_and(|r| r.status.is_terminal()) => {
                (s.round_index + 1, s.round_count)
            }
            _ => return Err(GameError::invalid("advance", "the round is still open")),
        };

        if next >= round_count {
            ctx.surface.remove_highlighting();
            self.finish(ctx);
            return Ok(());
        }

        let selection = match &self.session {
            Some(s) => select_round(self.catalog.all_songs(), &s.play_order, next, self.shuffler.as_mut())?,
            None => return Err(self.reject("advance")),
        };

        ctx.surface.remove_highlighting();

        if let Some(session) = self.session.as_mut() {
            session.round_index = next;
        }
        self.enter_round(selection, ctx);

        Ok(())
    }

    fn enter_round(&mut self, selection: RoundSelection, ctx: &mut GameContext) {
        if selection.is_degenerate() {
            let warning = GameError::DegenerateCatalog {
                available: selection.candidates.len(),
            };
            warn!(%warning, "Degenerate round");
            ctx.delegate.on_warning(&warning);
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        let round = Round::new(session.round_index, selection);
        let song_id = round.correct_song.id;

        debug!(
            game = session.game_number,
            round = round.index,
            song = song_id,
            candidates = round.candidates.len(),
            "Round presented"
        );

        session.rounds.push(round);

        self.clock.reset();
        self.tick_token += 1;
        self.scheduler.start(self.tick_token);

        ctx.surface.zoom_to_song(song_id);
        ctx.surface.show_song_tooltips(song_id);

        if let Some(round) = session.rounds.last() {
            ctx.delegate.on_round_changed(round, round.index, session.round_count);
        }
        ctx.delegate.on_score_tick(self.clock.value());
    }

    fn finish(&mut self, ctx: &mut GameContext) {
        self.scheduler.cancel();
        self.clock.stop();

        if let Some(session) = self.session.as_mut() {
            session.round_index = session.round_count;
        }
        self.phase = GamePhase::Summary;

        let Some(summary) = self.summary() else {
            return;
        };
        info!(
            game = self.game_number,
            total_score = summary.total_score,
            correct = summary.correct_count(),
            "Game finished"
        );

        ctx.delegate.on_game_summary(&summary);
    }

    fn reject(&self, operation: &'static str) -> GameError {
        GameError::invalid(operation, self.phase.describe())
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}
