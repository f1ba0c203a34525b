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

//! Render the map.
//!
//! Places inside the viewport are plotted as points on a braille canvas,
//! highlighted places on a layer of their own above the rest, and labelled
//! places get their name printed next to them.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders,
        canvas::{Canvas, Points},
    },
};

use crate::{map::MapView, theme::Theme};

pub(crate) fn draw_map(f: &mut Frame, area: Rect, map: &MapView, title: &str, theme: &Theme) {
    let view = map.viewport();

    let mut plain = vec![];
    let mut lit = vec![];
    let mut labels = vec![];

    for place in map.places() {
        if !view.contains(place.lng, place.lat) {
            continue;
        }
        if map.is_highlighted(place.id) {
            lit.push((place.lng, place.lat));
        } else {
            plain.push((place.lng, place.lat));
        }
        if map.is_labelled(place.id) {
            labels.push((place.lng, place.lat, place.name.clone()));
        }
    }

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .title(title),
        )
        .marker(Marker::Braille)
        .x_bounds([view.west, view.east])
        .y_bounds([view.south, view.north])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &plain,
                color: theme.place_colour,
            });
            ctx.layer();

            ctx.draw(&Points {
                coords: &lit,
                color: theme.highlight_colour,
            });
            for (lng, lat, name) in &labels {
                ctx.print(
                    *lng,
                    *lat,
                    Span::styled(format!(" {name}"), Style::default().fg(theme.label_colour)),
                );
            }
        });

    f.render_widget(canvas, area);
}
