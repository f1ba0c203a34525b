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

//! Map view state.
//!
//! Tracks which places are highlighted, which carry a visible name label and
//! which part of the map is in view. Both the game and the atlas drive the
//! map only through [`MapSurface`].

use std::sync::Arc;

use tracing::debug;

use crate::{
    game::MapSurface,
    model::{Place, PlaceId, SongId, catalog::Catalog},
};

/// Margin added around framed places, as a fraction of their extent.
const PADDING: f64 = 0.1;

/// Smallest extent in degrees the viewport will zoom in to.
const MIN_SPAN: f64 = 0.05;

/// A longitude/latitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) west: f64,
    pub(crate) south: f64,
    pub(crate) east: f64,
    pub(crate) north: f64,
}

impl Bounds {
    /// The whole world, used when there is nothing to frame.
    pub(crate) const WORLD: Bounds = Bounds {
        west: -180.0,
        south: -90.0,
        east: 180.0,
        north: 90.0,
    };

    /// The smallest rectangle containing every place, or `None` if there
    /// are no places.
    pub(crate) fn around<'a>(places: impl IntoIterator<Item = &'a Place>) -> Option<Self> {
        places.into_iter().fold(None, |bounds, place| {
            let b = bounds.unwrap_or(Bounds {
                west: place.lng,
                south: place.lat,
                east: place.lng,
                north: place.lat,
            });
            Some(Bounds {
                west: b.west.min(place.lng),
                south: b.south.min(place.lat),
                east: b.east.max(place.lng),
                north: b.north.max(place.lat),
            })
        })
    }

    /// Grows the rectangle by [`PADDING`] on each side, and to at least
    /// [`MIN_SPAN`] in each direction.
    pub(crate) fn padded(self) -> Self {
        let (centre_lng, centre_lat) = self.centre();
        let half_width = (self.width() * (1.0 + 2.0 * PADDING)).max(MIN_SPAN) / 2.0;
        let half_height = (self.height() * (1.0 + 2.0 * PADDING)).max(MIN_SPAN) / 2.0;

        Bounds {
            west: centre_lng - half_width,
            south: centre_lat - half_height,
            east: centre_lng + half_width,
            north: centre_lat + half_height,
        }
    }

    pub(crate) fn width(&self) -> f64 {
        self.east - self.west
    }

    pub(crate) fn height(&self) -> f64 {
        self.north - self.south
    }

    pub(crate) fn centre(&self) -> (f64, f64) {
        ((self.west + self.east) / 2.0, (self.south + self.north) / 2.0)
    }

    pub(crate) fn contains(&self, lng: f64, lat: f64) -> bool {
        (self.west..=self.east).contains(&lng) && (self.south..=self.north).contains(&lat)
    }
}

pub(crate) struct MapView {
    catalog: Arc<Catalog>,
    highlighted: Vec<PlaceId>,
    labelled: Vec<PlaceId>,
    overview: Bounds,
    viewport: Bounds,
}

impl MapView {
    pub(crate) fn new(catalog: Arc<Catalog>) -> Self {
        let overview = Bounds::around(catalog.places()).map_or(Bounds::WORLD, Bounds::padded);

        Self {
            catalog,
            highlighted: Vec::new(),
            labelled: Vec::new(),
            overview,
            viewport: overview,
        }
    }

    pub(crate) fn places(&self) -> &[Place] {
        self.catalog.places()
    }

    pub(crate) fn viewport(&self) -> Bounds {
        self.viewport
    }

    pub(crate) fn is_highlighted(&self, place_id: PlaceId) -> bool {
        self.highlighted.contains(&place_id)
    }

    pub(crate) fn is_labelled(&self, place_id: PlaceId) -> bool {
        self.labelled.contains(&place_id)
    }

    /// Highlights, labels and frames the places of a song, as picked in the
    /// atlas.
    pub(crate) fn show_song(&mut self, song_id: SongId) {
        self.zoom_to_song(song_id);
        self.show_song_tooltips(song_id);
    }

    fn song_place_ids(&self, song_id: SongId) -> Vec<PlaceId> {
        self.catalog
            .places_for_song(song_id)
            .iter()
            .map(|place| place.id)
            .collect()
    }
}

impl MapSurface for MapView {
    fn zoom_to_song(&mut self, song_id: SongId) {
        let places = self.catalog.places_for_song(song_id);

        self.highlighted = places.iter().map(|place| place.id).collect();
        if let Some(bounds) = Bounds::around(places.iter().copied()) {
            self.viewport = bounds.padded();
        }

        debug!(song = song_id, places = self.highlighted.len(), "Map framed song");
    }

    fn show_song_tooltips(&mut self, song_id: SongId) {
        self.labelled = self.song_place_ids(song_id);
    }

    fn remove_highlighting(&mut self) {
        self.highlighted.clear();
        self.labelled.clear();
        self.viewport = self.overview;
    }
}
