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

use std::{rc::Rc, sync::Arc};

use crate::{
    game::{
        Game, GameContext, GameError, GamePhase, ROUND_COUNT,
        round::RoundStatus,
        test_support::{
            CountingShuffler, DelegateCall, Harness, IdentityShuffler, ManualScheduler,
            RecordingDelegate, SurfaceCall, catalog_of, six_song_catalog, song,
        },
    },
    map::MapView,
};

#[test]
fn new_game_waits_on_welcome() {
    let harness = Harness::new(six_song_catalog());

    assert_eq!(harness.game.phase(), GamePhase::Welcome);
    assert!(harness.game.current_round().is_none());
    assert_eq!(harness.game.total_score(), 0);
    assert!(harness.scheduler.borrow().started.is_empty());
}

#[test]
fn starting_presents_first_round() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    assert_eq!(harness.game.phase(), GamePhase::InProgress);
    assert_eq!(harness.game.round_index(), 0);
    assert_eq!(harness.game.rounds().len(), 1);
    assert_eq!(harness.correct_id(), 1);

    assert_eq!(
        harness.surface.calls,
        vec![SurfaceCall::Zoom(1), SurfaceCall::Tooltips(1)]
    );
    assert_eq!(harness.scheduler.borrow().active, Some(1));
    assert_eq!(
        harness.delegate.calls.borrow().as_slice(),
        &[
            DelegateCall::RoundChanged {
                index: 0,
                total: ROUND_COUNT,
                status: RoundStatus::Pending
            },
            DelegateCall::ScoreTick(1000),
        ]
    );
}

#[test]
fn correct_answer_after_three_ticks_scores_925() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    harness.ticks(3);
    assert_eq!(harness.game.clock_value(), 925);

    let correct = harness.correct_id();
    assert_eq!(harness.answer(correct), Ok(RoundStatus::Correct));

    let round = &harness.game.rounds()[0];
    assert_eq!(round.score, 925);
    assert_eq!(harness.game.total_score(), 925);
    assert_eq!(harness.delegate.score_ticks(), vec![1000, 975, 950, 925]);
}

#[test]
fn wrong_answer_after_hint_scores_nothing() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    assert_eq!(harness.hint(), Ok(800));
    harness.ticks(2);
    assert_eq!(harness.game.clock_value(), 750);

    let wrong = harness.wrong_id();
    assert_eq!(harness.answer(wrong), Ok(RoundStatus::Wrong));

    let round = &harness.game.rounds()[0];
    assert_eq!(round.score, 0);
    assert_eq!(round.hints_used, 1);
    assert_eq!(harness.game.total_score(), 0);
}

#[test]
fn correct_answer_after_hint_keeps_penalty() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    harness.hint().unwrap();
    harness.ticks(1);

    let correct = harness.correct_id();
    harness.answer(correct).unwrap();
    assert_eq!(harness.game.rounds()[0].score, 775);
}

#[test]
fn hint_reveals_tooltips_once() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();
    harness.surface.calls.clear();

    harness.hint().unwrap();
    assert!(matches!(harness.hint(), Err(GameError::InvalidTransition { .. })));

    assert_eq!(harness.surface.calls, vec![SurfaceCall::Tooltips(1)]);
    assert_eq!(harness.game.clock_value(), 800);
    assert_eq!(harness.game.current_round().unwrap().hints_used, 1);
}

#[test]
fn answering_stops_the_clock_and_reveals_answer() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();
    harness.surface.calls.clear();

    let token = harness.scheduler.borrow().active.unwrap();
    let wrong = harness.wrong_id();
    harness.answer(wrong).unwrap();

    assert_eq!(harness.scheduler.borrow().active, None);
    assert_eq!(harness.surface.calls, vec![SurfaceCall::Tooltips(1)]);

    // A tick already in flight from the cancelled schedule.
    let mut ctx = GameContext {
        surface: &mut harness.surface,
        delegate: &harness.delegate,
    };
    assert!(!harness.game.tick(token, &mut ctx));
    assert_eq!(harness.game.clock_value(), 1000);
}

#[test]
fn unknown_answer_is_rejected_without_change() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    assert_eq!(harness.answer(99), Err(GameError::UnknownSongId(99)));

    let round = harness.game.current_round().unwrap();
    assert_eq!(round.status, RoundStatus::Pending);
    assert!(round.answered_song.is_none());
    assert!(harness.scheduler.borrow().active.is_some());
}

#[test]
fn answering_twice_is_rejected() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    let correct = harness.correct_id();
    let wrong = harness.wrong_id();
    harness.answer(correct).unwrap();

    assert!(matches!(harness.answer(wrong), Err(GameError::InvalidTransition { .. })));
    assert_eq!(harness.game.rounds()[0].status, RoundStatus::Correct);
}

#[test]
fn cannot_advance_an_open_round() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    assert!(matches!(harness.advance(), Err(GameError::InvalidTransition { .. })));
    assert_eq!(harness.game.round_index(), 0);
}

#[test]
fn advancing_clears_map_before_next_round() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    let correct = harness.correct_id();
    harness.answer(correct).unwrap();
    harness.surface.calls.clear();

    harness.advance().unwrap();

    assert_eq!(harness.game.round_index(), 1);
    assert_eq!(harness.correct_id(), 2);
    assert_eq!(
        harness.surface.calls,
        vec![SurfaceCall::Clear, SurfaceCall::Zoom(2), SurfaceCall::Tooltips(2)]
    );
    assert_eq!(harness.game.clock_value(), 1000);
    assert_eq!(harness.scheduler.borrow().active, Some(2));
}

#[test]
fn ticks_from_previous_round_are_ignored() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    let first = harness.scheduler.borrow().active.unwrap();
    let correct = harness.correct_id();
    harness.answer(correct).unwrap();
    harness.advance().unwrap();

    let mut ctx = GameContext {
        surface: &mut harness.surface,
        delegate: &harness.delegate,
    };
    assert!(!harness.game.tick(first, &mut ctx));
    assert_eq!(harness.game.clock_value(), 1000);
}

#[test]
fn full_game_reaches_summary() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    // Round 0: immediate correct answer.
    let id = harness.correct_id();
    harness.answer(id).unwrap();
    harness.advance().unwrap();

    // Round 1: wrong answer.
    let id = harness.wrong_id();
    harness.answer(id).unwrap();
    harness.advance().unwrap();

    // Round 2: correct after four ticks.
    harness.ticks(4);
    let id = harness.correct_id();
    harness.answer(id).unwrap();
    harness.advance().unwrap();

    // Round 3: correct after a hint.
    harness.hint().unwrap();
    let id = harness.correct_id();
    harness.answer(id).unwrap();
    harness.advance().unwrap();

    // Round 4: wrong answer, then on to the summary.
    let id = harness.wrong_id();
    harness.answer(id).unwrap();
    assert_eq!(harness.game.phase(), GamePhase::InProgress);
    harness.surface.calls.clear();
    harness.advance().unwrap();

    assert_eq!(harness.game.phase(), GamePhase::Summary);
    assert_eq!(harness.game.round_index(), ROUND_COUNT);
    assert_eq!(harness.game.rounds().len(), ROUND_COUNT);
    assert!(harness.game.current_round().is_none());
    assert_eq!(harness.surface.calls, vec![SurfaceCall::Clear]);

    let scores: Vec<u32> = harness.game.rounds().iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![1000, 0, 900, 800, 0]);
    assert_eq!(harness.game.total_score(), 2700);

    let summary = harness.game.summary().unwrap();
    assert_eq!(summary.total_score, 2700);
    assert_eq!(summary.correct_count(), 3);
    assert_eq!(summary.outcomes[2].title, "Song 3");
    assert_eq!(
        summary.share_text("https://example.org"),
        "✅❌✅✅❌ I got 3 right and 2700 points in song geography at https://example.org"
    );
    assert_eq!(harness.delegate.summaries(), vec![summary]);

    assert!(matches!(harness.advance(), Err(GameError::InvalidTransition { .. })));
    assert_eq!(harness.game.phase(), GamePhase::Summary);

    let log = harness.scheduler.borrow();
    assert!(log.active.is_none());
    assert!(!log.overlapped);
    assert_eq!(log.started.len(), ROUND_COUNT);
}

#[test]
fn cannot_start_while_in_progress() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    assert!(matches!(harness.start(), Err(GameError::InvalidTransition { .. })));
    assert_eq!(harness.game.game_number(), 1);
    assert_eq!(harness.game.rounds().len(), 1);
}

#[test]
fn operations_before_start_are_rejected() {
    let mut harness = Harness::new(six_song_catalog());

    assert!(harness.answer(1).is_err());
    assert!(harness.hint().is_err());
    assert!(harness.advance().is_err());
    assert_eq!(harness.game.phase(), GamePhase::Welcome);
    assert!(harness.surface.calls.is_empty());
}

#[test]
fn restart_draws_a_fresh_play_order() {
    let shuffler = CountingShuffler::default();
    let lengths = Rc::clone(&shuffler.lengths);
    let mut harness = Harness::with_shuffler(six_song_catalog(), Box::new(shuffler));

    harness.start().unwrap();
    for _ in 0..ROUND_COUNT {
        let id = harness.correct_id();
        harness.answer(id).unwrap();
        harness.advance().unwrap();
    }
    assert_eq!(harness.game.phase(), GamePhase::Summary);

    lengths.borrow_mut().clear();
    harness.start().unwrap();

    // Play order of six playable songs, then the decoy pool and candidates.
    assert_eq!(lengths.borrow().as_slice(), &[6, 6, 5]);
    assert_eq!(harness.game.game_number(), 2);
    assert_eq!(harness.game.rounds().len(), 1);
    assert_eq!(harness.game.total_score(), 0);
    assert_eq!(harness.game.phase(), GamePhase::InProgress);
}

#[test]
fn empty_catalog_cannot_start() {
    let mut harness = Harness::new(catalog_of(vec![song(1, &[]), song(2, &[])]));

    assert_eq!(harness.start(), Err(GameError::NoPlayableSongs));
    assert_eq!(harness.game.phase(), GamePhase::Welcome);
    assert!(harness.scheduler.borrow().started.is_empty());
}

#[test]
fn small_catalog_warns_and_shortens_game() {
    let catalog = catalog_of(vec![song(1, &["P1"]), song(2, &["P2"]), song(3, &["P3"])]);
    let mut harness = Harness::new(catalog);

    harness.start().unwrap();

    assert_eq!(harness.game.round_count(), 3);
    assert_eq!(harness.game.current_round().unwrap().candidates.len(), 3);
    assert_eq!(
        harness.delegate.warnings(),
        vec![GameError::DegenerateCatalog { available: 3 }]
    );

    for _ in 0..3 {
        let id = harness.correct_id();
        harness.answer(id).unwrap();
        harness.advance().unwrap();
    }
    assert_eq!(harness.game.phase(), GamePhase::Summary);
}

#[test]
fn ticks_without_a_game_are_ignored() {
    let mut harness = Harness::new(six_song_catalog());
    let mut ctx = GameContext {
        surface: &mut harness.surface,
        delegate: &harness.delegate,
    };

    assert!(!harness.game.tick(0, &mut ctx));
    assert!(harness.delegate.calls.borrow().is_empty());
}

#[test]
fn dropping_the_game_cancels_the_schedule() {
    let mut harness = Harness::new(six_song_catalog());
    harness.start().unwrap();

    let log = Rc::clone(&harness.scheduler);
    assert!(log.borrow().active.is_some());

    drop(harness);
    assert!(log.borrow().active.is_none());
}

#[test]
fn hint_keeps_round_start_labels_and_charges_the_clock() {
    let catalog = six_song_catalog();
    let mut game = Game::new(
        Arc::clone(&catalog),
        Box::new(IdentityShuffler),
        Box::new(ManualScheduler::default()),
    );
    let mut map = MapView::new(Arc::clone(&catalog));
    let delegate = RecordingDelegate::default();
    let labels = |map: &MapView| -> Vec<bool> {
        catalog.places().iter().map(|p| map.is_labelled(p.id)).collect()
    };

    let mut ctx = GameContext {
        surface: &mut map,
        delegate: &delegate,
    };
    game.start_game(&mut ctx).unwrap();
    let before = labels(&map);
    assert!(before.iter().any(|&labelled| labelled));

    delegate.calls.borrow_mut().clear();
    let mut ctx = GameContext {
        surface: &mut map,
        delegate: &delegate,
    };
    assert_eq!(game.use_hint(&mut ctx), Ok(800));

    // Place names are already shown when the round opens, the hint re-issues them.
    assert_eq!(labels(&map), before);
    assert_eq!(game.clock_value(), 800);
    assert!(game.current_round().is_some_and(|r| !r.hint_available()));
    assert_eq!(
        delegate.calls.borrow().clone(),
        vec![
            DelegateCall::ScoreTick(800),
            DelegateCall::RoundChanged {
                index: 0,
                total: ROUND_COUNT,
                status: RoundStatus::Pending,
            },
        ]
    );
}
