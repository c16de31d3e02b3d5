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

use crate::app::Overlay;
use crate::highlight::detect_highlight;
use crate::transport::Transport;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};

/// Rows `text` takes when wrapped to `width` columns.
pub fn measure_rows(text: &str, width: u16) -> u16 {
    let rows = Paragraph::new(text).wrap(Wrap { trim: false }).line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draw the scrollback page into `buf`, which covers exactly the chat panel.
pub fn render<T: Transport>(buf: &mut Buffer, overlay: &mut Overlay<T>, bg: Style) {
    let area = buf.area;
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .title(format!(" {} ", overlay.channel()))
        .style(bg);
    let view = block.inner(area);

    let laid_out = overlay.layout_scrollback(view.height, view.width, measure_rows);
    if laid_out.page > 0 {
        block = block.title_bottom(
            Line::styled(format!(" page {} ", laid_out.page), Style::default().fg(theme::DIM))
                .right_aligned(),
        );
    }
    block.render(area, buf);

    let nickname = overlay.transport().nickname();
    for placement in &laid_out.placements {
        let Ok(entry) = overlay.chat_log().get(placement.id) else {
            continue;
        };
        let fg = if detect_highlight(entry.text(), nickname) { theme::HIGHLIGHT } else { theme::TEXT };
        let row = Rect {
            x: view.x,
            y: view.y + placement.row,
            width: view.width,
            height: placement.height.min(view.height.saturating_sub(placement.row)),
        };
        Paragraph::new(entry.text())
            .style(Style::default().fg(fg))
            .wrap(Wrap { trim: false })
            .render(row, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_wrapped_rows() {
        assert_eq!(measure_rows("abcdefghij", 5), 2);
        assert_eq!(measure_rows("abc", 10), 1);
    }
}
