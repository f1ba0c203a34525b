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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, songs and
//! the places they mention, as consumed by the quiz engine and the atlas.

pub(crate) mod catalog;

pub(crate) type SongId = i32;
pub(crate) type PlaceId = i32;

/// A song from the catalog and the names of the places it mentions.
///
/// Only place names that resolved to a known map location are kept, so a
/// song with no places cannot be located on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) title: String,
    pub(crate) places: Vec<String>,
}

impl Song {
    pub(crate) fn new(id: SongId, title: impl Into<String>, places: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            places,
        }
    }

    /// A song can be used as the answer of a round only if it has at least
    /// one place to show on the map.
    pub(crate) fn is_playable(&self) -> bool {
        !self.places.is_empty()
    }

    /// Returns `true` if every place of this song is also a place of `other`.
    pub(crate) fn places_subset_of(&self, other: &Song) -> bool {
        self.places.iter().all(|place| other.places.contains(place))
    }
}

/// A named map location.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Place {
    pub(crate) id: PlaceId,
    pub(crate) name: String,
    pub(crate) lng: f64,
    pub(crate) lat: f64,
}
