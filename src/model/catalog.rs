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

//! Song and place catalog.
//!
//! The catalog is built from two JSON documents: a list of songs naming the
//! places they mention, and a GeoJSON feature collection giving each place a
//! position on the map. Loading cross-references the two, keeping only the
//! place names that resolve to a feature.
//!
//! Once built the catalog is immutable and shared by the game and the atlas.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{Place, PlaceId, Song, SongId};

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate song id {0}")]
    DuplicateSongId(SongId),
}

#[derive(Debug, Deserialize)]
struct SongRecord {
    id: SongId,
    title: String,
    #[serde(default)]
    places: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    id: PlaceId,
    title: String,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: [f64; 2],
}

impl From<Feature> for Place {
    fn from(feature: Feature) -> Self {
        let [lng, lat] = feature.geometry.coordinates;
        Self {
            id: feature.properties.id,
            name: feature.properties.title,
            lng,
            lat,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Catalog {
    songs: Vec<Song>,
    places: Vec<Place>,
    song_index: HashMap<SongId, usize>,
}

impl Catalog {
    /// Builds a catalog from songs and the known places.
    ///
    /// Place names of each song are resolved against the place names; names
    /// that do not resolve are dropped and logged. Song order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateSongId`] if two songs share an id.
    pub(crate) fn new(songs: Vec<Song>, places: Vec<Place>) -> Result<Self, CatalogError> {
        let known: HashSet<&str> = places.iter().map(|p| p.name.as_str()).collect();

        let mut song_index = HashMap::with_capacity(songs.len());
        let mut resolved = Vec::with_capacity(songs.len());

        for (idx, mut song) in songs.into_iter().enumerate() {
            if song_index.insert(song.id, idx).is_some() {
                return Err(CatalogError::DuplicateSongId(song.id));
            }

            song.places.retain(|name| {
                let found = known.contains(name.as_str());
                if !found {
                    warn!(song_id = song.id, place = %name, "No map location for place");
                }
                found
            });

            resolved.push(song);
        }

        debug!(songs = resolved.len(), places = places.len(), "Catalog built");

        Ok(Self {
            songs: resolved,
            places,
            song_index,
        })
    }

    /// Reads and cross-references the song list and the place features.
    pub(crate) fn load(songs_path: &Path, places_path: &Path) -> Result<Self, CatalogError> {
        let songs_json = read(songs_path)?;
        let places_json = read(places_path)?;

        let songs: Vec<SongRecord> =
            serde_json::from_str(&songs_json).map_err(|source| CatalogError::Parse {
                path: songs_path.to_path_buf(),
                source,
            })?;

        let features: FeatureCollection =
            serde_json::from_str(&places_json).map_err(|source| CatalogError::Parse {
                path: places_path.to_path_buf(),
                source,
            })?;

        Self::from_records(songs, features)
    }

    fn from_records(songs: Vec<SongRecord>, features: FeatureCollection) -> Result<Self, CatalogError> {
        let songs = songs
            .into_iter()
            .map(|r| Song::new(r.id, r.title, r.places))
            .collect();
        let places = features.features.into_iter().map(Place::from).collect();

        Self::new(songs, places)
    }

    /// The full catalog in its original order, used for decoy sampling.
    pub(crate) fn all_songs(&self) -> &[Song] {
        &self.songs
    }

    /// Songs with at least one resolved place, in catalog order.
    pub(crate) fn playable_songs(&self) -> Vec<Song> {
        self.songs.iter().filter(|s| s.is_playable()).cloned().collect()
    }

    pub(crate) fn places(&self) -> &[Place] {
        &self.places
    }

    pub(crate) fn song(&self, id: SongId) -> Option<&Song> {
        self.song_index.get(&id).map(|&idx| &self.songs[idx])
    }

    pub(crate) fn place_by_name(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    /// The map locations of a song, in the order the song mentions them.
    pub(crate) fn places_for_song(&self, id: SongId) -> Vec<&Place> {
        self.song(id)
            .map(|song| {
                song.places
                    .iter()
                    .filter_map(|name| self.place_by_name(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every song mentioning the given place.
    pub(crate) fn songs_at_place(&self, place_id: PlaceId) -> Vec<&Song> {
        let Some(place) = self.places.iter().find(|p| p.id == place_id) else {
            return vec![];
        };

        self.songs
            .iter()
            .filter(|song| song.places.contains(&place.name))
            .collect()
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
