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

//! Rendering of the quiz panel: welcome text, the open or answered round, and
//! the end-of-game summary.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::{
    components::GamePanel,
    game::{
        clock::{DECAY_FLOOR, START_VALUE},
        round::{Round, RoundStatus},
        summary::GameSummary,
    },
    theme::Theme,
};

impl GamePanel {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, share_url: &str, total_score: u32, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Quiz ")
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        if let Some(summary) = &self.summary {
            draw_summary(f, inner, summary, share_url, theme);
        } else if self.round.is_some() {
            self.draw_round(f, inner, total_score, theme);
        } else {
            draw_welcome(f, inner, theme);
        }
    }

    fn draw_round(&mut self, f: &mut Frame, area: Rect, total_score: u32, theme: &Theme) {
        let Some(round) = &self.round else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        let header = Line::from(vec![
            Span::styled(
                format!("Round {} of {}", self.round_index + 1, self.total_rounds),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(theme.accent_colour),
            Span::raw(format!("   {total_score} points so far")),
        ]);
        f.render_widget(Paragraph::new(header), chunks[0]);

        // The gauge spans the decay range, a hint can push the value below it.
        let ratio = (f64::from(self.clock_value.saturating_sub(DECAY_FLOOR))
            / f64::from(START_VALUE - DECAY_FLOOR))
        .clamp(0.0, 1.0);

        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.accent_colour)
                    .bg(theme.gauge_track_colour),
            )
            .ratio(ratio)
            .label(format!("{} points", self.clock_value))
            .use_unicode(true);
        f.render_widget(gauge, chunks[1]);

        f.render_widget(Paragraph::new(outcome_line(round, theme)), chunks[2]);

        let items: Vec<ListItem> = round
            .candidates
            .iter()
            .enumerate()
            .map(|(idx, song)| {
                let style = match round.status {
                    RoundStatus::Pending => Style::default(),
                    _ if song.id == round.correct_song.id => Style::default().fg(theme.correct_colour),
                    _ if round.answered_song.as_ref().is_some_and(|a| a.id == song.id) => {
                        Style::default().fg(theme.wrong_colour)
                    }
                    _ => Style::default().fg(theme.dimmed_colour),
                };
                ListItem::new(format!("{}. {}", idx + 1, song.title)).style(style)
            })
            .collect();

        let mut list = List::new(items);
        if self.is_open() {
            list = list
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol("> ");
        }
        f.render_stateful_widget(list, chunks[4], &mut self.candidates_state);

        let keys = if round.hint_available() {
            "j/k Enter or 1-5: answer   h: hint (-200)"
        } else if round.status == RoundStatus::Pending {
            "j/k Enter or 1-5: answer   hint used"
        } else {
            "n: next round"
        };
        f.render_widget(
            Paragraph::new(keys).fg(theme.dimmed_colour).wrap(Wrap { trim: true }),
            chunks[5],
        );
    }
}

fn outcome_line<'a>(round: &'a Round, theme: &Theme) -> Line<'a> {
    match round.status {
        RoundStatus::Pending => Line::from("Which song is this?"),
        RoundStatus::Correct => Line::from(vec![
            Span::raw("Correct! "),
            Span::styled(format!("+{}", round.score), Style::default().fg(theme.correct_colour)),
        ]),
        RoundStatus::Wrong => Line::from(vec![
            Span::styled("Wrong. ", Style::default().fg(theme.wrong_colour)),
            Span::raw("It was "),
            Span::styled(
                round.correct_song.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

fn draw_welcome(f: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(Span::styled(
            "Where is this song?",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .fg(theme.accent_colour),
        Line::from(""),
        Line::from("The map shows the places a song mentions. Pick the song from five candidates."),
        Line::from("Answer fast: a round starts at 1000 points and loses 25 every second down to 500."),
        Line::from("A hint costs 200 points."),
        Line::from(""),
        Line::from("Press s to start."),
    ];

    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

fn draw_summary(f: &mut Frame, area: Rect, summary: &GameSummary, share_url: &str, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} right, {} points",
                summary.correct_count(),
                summary.total_score
            ),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .fg(theme.accent_colour),
        Line::from(""),
    ];

    lines.extend(summary.outcomes.iter().map(|outcome| {
        Line::from(vec![
            Span::raw(format!("{} ", outcome.status.glyph())),
            Span::raw(outcome.title.as_str()),
            Span::styled(format!("  {}", outcome.score), Style::default().fg(theme.dimmed_colour)),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(summary.share_text(share_url)));
    lines.push(Line::from(""));
    lines.push(Line::from("Press s to play again.").fg(theme.dimmed_colour));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
