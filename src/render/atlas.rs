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

//! Render the atlas: filter box and song list, the map, and the songs at
//! the selected place.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{atlas::AtlasView, map::MapView, render::map::draw_map, theme::Theme};

pub(crate) fn draw_atlas(f: &mut Frame, area: Rect, atlas: &mut AtlasView, map: &MapView, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(0),
            Constraint::Percentage(25),
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[0]);

    draw_filter(f, left[0], atlas, theme);
    draw_songs(f, left[1], atlas, theme);
    draw_map(f, columns[1], map, " Atlas ", theme);
    draw_place(f, columns[2], atlas, theme);
}

fn draw_filter(f: &mut Frame, area: Rect, atlas: &AtlasView, theme: &Theme) {
    let border = if atlas.is_filtering() {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let input = Paragraph::new(atlas.filter.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Filter (/) "),
    );
    f.render_widget(input, area);

    if atlas.is_filtering() {
        let cursor_x = area.x + 1 + atlas.filter.cursor() as u16;
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_songs(f: &mut Frame, area: Rect, atlas: &mut AtlasView, theme: &Theme) {
    let items: Vec<ListItem> = atlas
        .visible_songs()
        .iter()
        .map(|song| {
            let style = if song.is_playable() {
                Style::default()
            } else {
                Style::default().fg(theme.dimmed_colour)
            };
            ListItem::new(song.title.clone()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour))
                .title(" Songs "),
        )
        .highlight_style(
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut atlas.songs_state);
}

fn draw_place(f: &mut Frame, area: Rect, atlas: &AtlasView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour));

    match atlas.selected_place() {
        Some((place, songs)) => {
            let items: Vec<ListItem> = songs
                .iter()
                .map(|song| ListItem::new(song.title.clone()))
                .collect();
            let title = match atlas.place_position() {
                Some((position, count)) if count > 1 => {
                    format!(" {} ({position}/{count}, h/l) ", place.name)
                }
                _ => format!(" {} ", place.name),
            };
            f.render_widget(List::new(items).block(block.title(title)), area);
        }
        None => {
            let text = Paragraph::new("Not on the map")
                .style(Style::default().fg(theme.dimmed_colour))
                .block(block.title(" Place "));
            f.render_widget(text, area);
        }
    }
}
