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

// Test doubles for the game engine collaborators.

use std::{
    cell::RefCell,
    collections::BTreeSet,
    rc::Rc,
    sync::Arc,
};

use crate::{
    game::{
        Game, GameContext, GameDelegate, GameError, MapSurface, TickScheduler, TickToken,
        round::{Round, RoundStatus},
        shuffle::Shuffler,
        summary::GameSummary,
    },
    model::{Place, Song, SongId, catalog::Catalog},
};

pub(crate) fn song(id: SongId, places: &[&str]) -> Song {
    Song::new(id, format!("Song {id}"), places.iter().map(|p| p.to_string()).collect())
}

/// Builds a catalog whose places are exactly the names the songs mention.
pub(crate) fn catalog_of(songs: Vec<Song>) -> Arc<Catalog> {
    let names: BTreeSet<String> = songs.iter().flat_map(|s| s.places.iter().cloned()).collect();
    let places = names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| Place {
            id: idx as i32,
            name,
            lng: 10.0 + idx as f64 * 0.1,
            lat: 60.0 + idx as f64 * 0.1,
        })
        .collect();

    Arc::new(Catalog::new(songs, places).unwrap())
}

/// Six songs, each at its own place except song 2 which also covers song 1's.
pub(crate) fn six_song_catalog() -> Arc<Catalog> {
    catalog_of(vec![
        song(1, &["P1"]),
        song(2, &["P1", "P2"]),
        song(3, &["P3"]),
        song(4, &["P4"]),
        song(5, &["P5"]),
        song(6, &["P6"]),
    ])
}

pub(crate) struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, _songs: &mut [Song]) {}
}

pub(crate) struct ReverseShuffler;

impl Shuffler for ReverseShuffler {
    fn shuffle(&mut self, songs: &mut [Song]) {
        songs.reverse();
    }
}

/// Leaves the order alone but records the length of every shuffled slice.
#[derive(Clone, Default)]
pub(crate) struct CountingShuffler {
    pub(crate) lengths: Rc<RefCell<Vec<usize>>>,
}

impl Shuffler for CountingShuffler {
    fn shuffle(&mut self, songs: &mut [Song]) {
        self.lengths.borrow_mut().push(songs.len());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceCall {
    Zoom(SongId),
    Tooltips(SongId),
    Clear,
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub(crate) calls: Vec<SurfaceCall>,
}

impl MapSurface for RecordingSurface {
    fn zoom_to_song(&mut self, song_id: SongId) {
        self.calls.push(SurfaceCall::Zoom(song_id));
    }

    fn show_song_tooltips(&mut self, song_id: SongId) {
        self.calls.push(SurfaceCall::Tooltips(song_id));
    }

    fn remove_highlighting(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DelegateCall {
    RoundChanged {
        index: usize,
        total: usize,
        status: RoundStatus,
    },
    ScoreTick(u32),
    Summary(GameSummary),
    Warning(GameError),
}

#[derive(Default)]
pub(crate) struct RecordingDelegate {
    pub(crate) calls: RefCell<Vec<DelegateCall>>,
}

impl RecordingDelegate {
    pub(crate) fn score_ticks(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DelegateCall::ScoreTick(v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn summaries(&self) -> Vec<GameSummary> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DelegateCall::Summary(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn warnings(&self) -> Vec<GameError> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                DelegateCall::Warning(w) => Some(w.clone()),
                _ => None,
            })
            .collect()
    }
}

impl GameDelegate for RecordingDelegate {
    fn on_round_changed(&self, round: &Round, round_index: usize, total_rounds: usize) {
        self.calls.borrow_mut().push(DelegateCall::RoundChanged {
            index: round_index,
            total: total_rounds,
            status: round.status,
        });
    }

    fn on_score_tick(&self, value: u32) {
        self.calls.borrow_mut().push(DelegateCall::ScoreTick(value));
    }

    fn on_game_summary(&self, summary: &GameSummary) {
        self.calls.borrow_mut().push(DelegateCall::Summary(summary.clone()));
    }

    fn on_warning(&self, warning: &GameError) {
        self.calls.borrow_mut().push(DelegateCall::Warning(warning.clone()));
    }
}

#[derive(Debug, Default)]
pub(crate) struct SchedulerLog {
    pub(crate) active: Option<TickToken>,
    pub(crate) started: Vec<TickToken>,
    pub(crate) cancels: usize,
    /// Set if a schedule was started while another one was still live.
    pub(crate) overlapped: bool,
}

/// Records schedule starts and cancellations. Ticks are delivered by hand.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    pub(crate) log: Rc<RefCell<SchedulerLog>>,
}

impl TickScheduler for ManualScheduler {
    fn start(&mut self, token: TickToken) {
        let mut log = self.log.borrow_mut();
        if log.active.is_some() {
            // A real scheduler cancels first; count this as a cancel and flag it.
            log.overlapped = true;
            log.cancels += 1;
        }
        log.active = Some(token);
        log.started.push(token);
    }

    fn cancel(&mut self) {
        let mut log = self.log.borrow_mut();
        if log.active.take().is_some() {
            log.cancels += 1;
        }
    }
}

/// A game under test together with its recorded collaborators.
pub(crate) struct Harness {
    pub(crate) game: Game,
    pub(crate) surface: RecordingSurface,
    pub(crate) delegate: RecordingDelegate,
    pub(crate) scheduler: Rc<RefCell<SchedulerLog>>,
}

impl Harness {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_shuffler(catalog, Box::new(IdentityShuffler))
    }

    pub(crate) fn with_shuffler(catalog: Arc<Catalog>, shuffler: Box<dyn Shuffler>) -> Self {
        let scheduler = ManualScheduler::default();
        let log = Rc::clone(&scheduler.log);

        Self {
            game: Game::new(catalog, shuffler, Box::new(scheduler)),
            surface: RecordingSurface::default(),
            delegate: RecordingDelegate::default(),
            scheduler: log,
        }
    }

    pub(crate) fn start(&mut self) -> Result<(), GameError> {
        let mut ctx = GameContext {
            surface: &mut self.surface,
            delegate: &self.delegate,
        };
        self.game.start_game(&mut ctx)
    }

    pub(crate) fn answer(&mut self, song_id: SongId) -> Result<RoundStatus, GameError> {
        let mut ctx = GameContext {
            surface: &mut self.surface,
            delegate: &self.delegate,
        };
        self.game.submit_answer(song_id, &mut ctx)
    }

    pub(crate) fn hint(&mut self) -> Result<u32, GameError> {
        let mut ctx = GameContext {
            surface: &mut self.surface,
            delegate: &self.delegate,
        };
        self.game.use_hint(&mut ctx)
    }

    pub(crate) fn advance(&mut self) -> Result<(), GameError> {
        let mut ctx = GameContext {
            surface: &mut self.surface,
            delegate: &self.delegate,
        };
        self.game.advance_round(&mut ctx)
    }

    /// Delivers `count` ticks from the currently active schedule.
    pub(crate) fn ticks(&mut self, count: usize) {
        let token = self.scheduler.borrow().active.unwrap_or_default();
        for _ in 0..count {
            let mut ctx = GameContext {
                surface: &mut self.surface,
                delegate: &self.delegate,
            };
            self.game.tick(token, &mut ctx);
        }
    }

    pub(crate) fn correct_id(&self) -> SongId {
        self.game.current_round().map(|r| r.correct_song.id).unwrap()
    }

    pub(crate) fn wrong_id(&self) -> SongId {
        let round = self.game.current_round().unwrap();
        round
            .candidates
            .iter()
            .map(|s| s.id)
            .find(|&id| id != round.correct_song.id)
            .unwrap()
    }
}
