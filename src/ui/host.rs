// irc_overlay — An in-game IRC chat overlay for the terminal
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::app::App;
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HOST_PAD: u16 = 2;
const HINT: &str = "F2 or t toggles chat, Ctrl+Q quits";

/// Placeholder game screen drawn under the overlay.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + HOST_PAD.min(area.width),
        y: area.y,
        width: area.width.saturating_sub(HOST_PAD * 2),
        height: area.height,
    };
    let [title, scene, hint] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .areas(padded);

    let accent = theme::rgb(app.ui_color);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("irc-overlay", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
            Span::styled(format!("  frame {}", app.frame_count), Style::default().fg(theme::DIM)),
        ])),
        title,
    );

    // A marker sweeping across the scene so the overlay animates over something.
    if scene.width > 0 && scene.height > 0 {
        let span = u64::from(scene.width);
        let x = scene.x + u16::try_from(app.frame_count % span).unwrap_or(0);
        let y = scene.y + scene.height / 2;
        frame.render_widget(
            Paragraph::new(Span::styled("@", Style::default().fg(Color::Green))),
            Rect::new(x, y, 1, 1),
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(HINT, Style::default().fg(theme::DIM))),
        hint,
    );
}
