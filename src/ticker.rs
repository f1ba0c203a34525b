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

//! Scoring clock ticks on a background thread.
//!
//! Each schedule gets its own thread and cancel flag. Ticks are posted to the
//! application event channel as [`AppEvent::ScoreTick`] carrying the token of
//! the schedule that produced them.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

use tracing::trace;

use crate::{
    events::AppEvent,
    game::{TickScheduler, TickToken},
};

pub(crate) struct ThreadTicker {
    event_tx: Sender<AppEvent>,
    interval: Duration,
    cancelled: Option<Arc<AtomicBool>>,
}

impl ThreadTicker {
    pub(crate) fn new(event_tx: Sender<AppEvent>, interval: Duration) -> Self {
        Self {
            event_tx,
            interval,
            cancelled: None,
        }
    }
}

impl TickScheduler for ThreadTicker {
    fn start(&mut self, token: TickToken) {
        self.cancel();

        let cancelled = Arc::new(AtomicBool::new(false));
        self.cancelled = Some(Arc::clone(&cancelled));

        let tx = self.event_tx.clone();
        let interval = self.interval;

        thread::spawn(move || {
            loop {
                thread::sleep(interval);
                if cancelled.load(Ordering::Acquire) {
                    break;
                }
                if tx.send(AppEvent::ScoreTick(token)).is_err() {
                    break;
                }
            }
            trace!(token, "Tick schedule finished");
        });
    }

    fn cancel(&mut self) {
        if let Some(flag) = self.cancelled.take() {
            flag.store(true, Ordering::Release);
        }
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
