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

//! Application configuration.
//!
//! This module manages the application configuration file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::Args;

const CONFIG_NAME: &str = "hvor";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) data_dir: PathBuf,
    pub(crate) songs_file: String,
    pub(crate) places_file: String,
    pub(crate) log_file: PathBuf,
    pub(crate) log_level: String,
    pub(crate) tick_interval_ms: u64,
    pub(crate) share_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: PathBuf::from("data"),
            songs_file: "songs.json".to_string(),
            places_file: "geo.json".to_string(),
            log_file: PathBuf::from("hvor.log"),
            log_level: "info".to_string(),
            tick_interval_ms: 1000,
            share_url: "https://hvor.example.org".to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn songs_path(&self) -> PathBuf {
        self.data_dir.join(&self.songs_file)
    }

    pub(crate) fn places_path(&self) -> PathBuf {
        self.data_dir.join(&self.places_file)
    }

    /// Applies command-line overrides.
    pub(crate) fn with_args(mut self, args: &Args) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = dir.clone();
        }
        if args.verbose {
            self.log_level = "debug".to_string();
        }
        self
    }
}

/// Loads the stored configuration, writing the defaults on first use. An
/// unreadable file falls back to the defaults.
pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
