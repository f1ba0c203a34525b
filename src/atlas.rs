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

//! Atlas state management.
//!
//! The atlas lists the catalog for browsing without a score. The song list
//! can be narrowed with a title filter, and the place panel shows every song
//! that mentions one of the selected song's places. The panel starts at the
//! song's first place and can be stepped through the others.

use std::sync::Arc;

use crossterm::event::Event;
use ratatui::widgets::ListState;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::model::{Place, Song, SongId, catalog::Catalog};

pub(crate) struct AtlasView {
    catalog: Arc<Catalog>,
    filtering: bool,
    pub(crate) filter: Input,
    visible: Vec<SongId>,
    pub(crate) songs_state: ListState,
    place_index: usize,
}

impl AtlasView {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        let mut atlas = Self {
            catalog,
            filtering: false,
            filter: Input::default(),
            visible: vec![],
            songs_state: ListState::default(),
            place_index: 0,
        };
        atlas.apply_filter();
        atlas
    }

    pub(crate) fn is_filtering(&self) -> bool {
        self.filtering
    }

    pub(crate) fn begin_filter(&mut self) {
        self.filtering = true;
    }

    pub(crate) fn end_filter(&mut self) {
        self.filtering = false;
    }

    /// Feeds a key to the filter box. Returns `true` if the filter text
    /// changed.
    pub(crate) fn handle_filter_event(&mut self, event: &Event) -> bool {
        let before = self.filter.value().to_string();
        self.filter.handle_event(event);

        let changed = self.filter.value() != before;
        if changed {
            self.apply_filter();
        }
        changed
    }

    /// The songs passing the filter, in catalog order.
    pub(crate) fn visible_songs(&self) -> Vec<&Song> {
        self.visible
            .iter()
            .filter_map(|&id| self.catalog.song(id))
            .collect()
    }

    pub(crate) fn selected_song(&self) -> Option<&Song> {
        let index = self.songs_state.selected()?;
        self.visible.get(index).and_then(|&id| self.catalog.song(id))
    }

    /// The selected place of the selected song and every song mentioning it.
    pub(crate) fn selected_place(&self) -> Option<(&Place, Vec<&Song>)> {
        let place = self.song_places().into_iter().nth(self.place_index)?;
        Some((place, self.catalog.songs_at_place(place.id)))
    }

    /// One-based position of the selected place among the song's places.
    pub(crate) fn place_position(&self) -> Option<(usize, usize)> {
        let count = self.song_places().len();
        (count > 0).then_some((self.place_index + 1, count))
    }

    pub(crate) fn next_place(&mut self) {
        let count = self.song_places().len();
        if count > 0 {
            self.place_index = (self.place_index + 1) % count;
        }
    }

    pub(crate) fn previous_place(&mut self) {
        let count = self.song_places().len();
        if count > 0 {
            self.place_index = (self.place_index + count - 1) % count;
        }
    }

    fn song_places(&self) -> Vec<&Place> {
        self.selected_song()
            .map(|song| self.catalog.places_for_song(song.id))
            .unwrap_or_default()
    }

    pub(crate) fn next(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = match self.songs_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.songs_state.select(Some(i));
        self.place_index = 0;
    }

    pub(crate) fn previous(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = match self.songs_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.songs_state.select(Some(i));
        self.place_index = 0;
    }

    fn apply_filter(&mut self) {
        let needle = self.filter.value().trim().to_lowercase();

        self.visible = self
            .catalog
            .all_songs()
            .iter()
            .filter(|song| needle.is_empty() || song.title.to_lowercase().contains(&needle))
            .map(|song| song.id)
            .collect();

        self.songs_state
            .select((!self.visible.is_empty()).then_some(0));
        self.place_index = 0;
    }
}
