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

mod chat;
mod host;
mod input;
mod layout;
pub mod theme;
mod users;

pub use chat::measure_rows;
pub use input::visible_window;
pub use layout::{OverlayLayout, SlideOffsets, blit, slide_offsets};

use crate::app::App;
use crate::panel::PanelState;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::style::Style;

pub fn render(frame: &mut Frame, app: &mut App) {
    let frame_area = frame.area();
    host::render(frame, frame_area, app);

    let panel = app.overlay.panel();
    if !panel.is_visible() {
        return;
    }
    let open = panel.state() == PanelState::Open;
    let layout = OverlayLayout::compute(frame_area);
    let offsets = slide_offsets(&layout, panel.progress());
    let bg = Style::default().bg(theme::panel_bg(app.ui_color));

    // Each panel is drawn at rest offscreen, then shifted into the frame.
    let mut chat_buf = Buffer::empty(layout.chat);
    chat::render(&mut chat_buf, &mut app.overlay, bg);
    blit(&chat_buf, frame.buffer_mut(), 0, offsets.chat_dy);

    let mut users_buf = Buffer::empty(layout.users);
    users::render(&mut users_buf, &mut app.overlay, bg);
    blit(&users_buf, frame.buffer_mut(), offsets.users_dx, 0);

    let mut input_buf = Buffer::empty(layout.input);
    let cursor = input::render(&mut input_buf, app.overlay.input(), bg, open);
    blit(&input_buf, frame.buffer_mut(), 0, offsets.input_dy);

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

