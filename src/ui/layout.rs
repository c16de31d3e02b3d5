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

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Rows at the bottom of the chat column that belong to the input line.
const INPUT_ROWS: u16 = 4;
/// Gap between the chat column and the user list, and between log and input.
const GAP: u16 = 1;
const MARGIN: u16 = 1;

/// Resting positions of the three overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub chat: Rect,
    pub input: Rect,
    pub users: Rect,
}

impl OverlayLayout {
    pub fn compute(screen: Rect) -> Self {
        let area = Rect {
            x: screen.x + MARGIN.min(screen.width),
            y: screen.y + MARGIN.min(screen.height),
            width: screen.width.saturating_sub(MARGIN * 2),
            height: screen.height.saturating_sub(MARGIN * 2),
        };

        let chat_width = u16::try_from(u32::from(area.width) * 4 / 5).unwrap_or(area.width);
        let users = Rect {
            x: area.x + chat_width + GAP.min(area.width - chat_width),
            y: area.y,
            width: (area.width - chat_width).saturating_sub(GAP),
            height: area.height,
        };

        let input_rows = INPUT_ROWS.min(area.height);
        let input_height = input_rows.saturating_sub(GAP);
        let chat = Rect {
            x: area.x,
            y: area.y,
            width: chat_width,
            height: area.height - input_rows,
        };
        let input = Rect {
            x: area.x,
            y: area.bottom() - input_height,
            width: chat_width,
            height: input_height,
        };

        Self { chat, input, users }
    }
}

/// Per-panel displacement from the resting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOffsets {
    /// Upwards, so negative.
    pub chat_dy: i32,
    pub input_dy: i32,
    pub users_dx: i32,
}

/// Each panel is displaced by the hidden fraction `1 - fly_in(progress)` of
/// its own extent: the log from the top, the input from the bottom and the
/// user list from the right.
#[allow(clippy::cast_possible_truncation)]
pub fn slide_offsets(layout: &OverlayLayout, progress: f32) -> SlideOffsets {
    let hidden = 1.0 - crate::panel::fly_in(progress);
    let shift = |extent: u16| (hidden * f32::from(extent)).round() as i32;
    SlideOffsets {
        chat_dy: -shift(layout.chat.height),
        input_dy: shift(layout.input.height),
        users_dx: shift(layout.users.width),
    }
}

/// Copy every cell of `src` into `dst`, shifted by `(dx, dy)`. Cells landing
/// outside `dst` are dropped.
pub fn blit(src: &Buffer, dst: &mut Buffer, dx: i32, dy: i32) {
    let area = src.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let (Ok(tx), Ok(ty)) =
                (u16::try_from(i32::from(x) + dx), u16::try_from(i32::from(y) + dy))
            else {
                continue;
            };
            if let (Some(cell), Some(target)) = (src.cell((x, y)), dst.cell_mut((tx, ty))) {
                *target = cell.clone();
            }
        }
    }
}
