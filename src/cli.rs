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

//! Command-line arguments.
//!
//! Flags given here take precedence over the configuration file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "hvor")]
#[command(about = "Guess the song from the places it mentions on the map")]
pub(crate) struct Args {
    /// View to open on start-up
    #[arg(short, long, default_value = "game")]
    pub(crate) mode: Mode,

    /// Directory holding songs.json and geo.json
    #[arg(short, long)]
    pub(crate) data_dir: Option<PathBuf>,

    /// Seed for the song shuffle, for replaying a game
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
    Game,
    Atlas,
}
