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

//! Colour palette for the map, quiz and atlas.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) status_colour: Color,

    pub(crate) place_colour: Color,
    pub(crate) highlight_colour: Color,
    pub(crate) label_colour: Color,

    pub(crate) correct_colour: Color,
    pub(crate) wrong_colour: Color,
    pub(crate) dimmed_colour: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 30, 60),
            status_colour: Color::Rgb(179, 157, 219),

            place_colour: Color::Rgb(120, 144, 156),
            highlight_colour: Color::Rgb(255, 215, 0),
            label_colour: Color::Rgb(255, 255, 255),

            correct_colour: Color::Rgb(129, 199, 132),
            wrong_colour: Color::Rgb(229, 115, 115),
            dimmed_colour: Color::Rgb(110, 108, 116),
        }
    }
}
