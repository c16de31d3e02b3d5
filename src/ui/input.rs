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

use crate::app::InputLine;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

/// The slice of the input line that fits `width` columns with the cursor in
/// view, and the cursor's column inside that slice.
pub fn visible_window(input: &InputLine, width: u16) -> (String, u16) {
    let width = usize::from(width);
    if width == 0 {
        return (String::new(), 0);
    }
    let chars: Vec<char> = input.text().chars().collect();
    let cursor = input.cursor_col().min(chars.len());
    let col_width = |c: &char| c.width().unwrap_or(0);

    // The cursor cell needs a column of its own.
    let mut start = 0;
    let mut before: usize = chars[..cursor].iter().map(col_width).sum();
    while before >= width && start < cursor {
        before -= col_width(&chars[start]);
        start += 1;
    }

    let mut used = 0;
    let visible: String = chars[start..]
        .iter()
        .take_while(|c| {
            used += col_width(*c);
            used <= width
        })
        .collect();
    (visible, u16::try_from(before).unwrap_or(u16::MAX))
}

/// Draw the input line into `buf`. Returns where the terminal cursor belongs
/// when `show_cursor` is set.
pub fn render(buf: &mut Buffer, input: &InputLine, bg: Style, show_cursor: bool) -> Option<Position> {
    let area = buf.area;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .style(bg);
    let inner = block.inner(area);
    block.render(area, buf);

    let (visible, cursor_x) = visible_window(input, inner.width);
    Paragraph::new(visible).style(Style::default().fg(theme::TEXT)).render(inner, buf);

    (show_cursor && inner.width > 0 && inner.height > 0)
        .then(|| Position::new(inner.x + cursor_x.min(inner.width - 1), inner.y))
}
