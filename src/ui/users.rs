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
use crate::transport::Transport;
use crate::ui::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{
    Block, BorderType, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
};

pub fn render<T: Transport>(buf: &mut Buffer, overlay: &mut Overlay<T>, bg: Style) {
    let area = buf.area;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER))
        .title(" Userlist ")
        .style(bg);

    if !overlay.transport().is_connected() {
        Paragraph::new("Not Connected")
            .style(Style::default().fg(theme::DIM))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
        return;
    }

    let users = overlay.sync_users();
    let items: Vec<ListItem> =
        users.users().iter().map(|name| ListItem::new(name.as_str())).collect();
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme::TEXT))
        .highlight_style(Style::default().fg(theme::SELECTED_USER).add_modifier(Modifier::BOLD));

    let selected = (!users.users().is_empty()).then_some(users.selected);
    let mut state = ListState::default().with_selected(selected).with_offset(users.scroll_offset);
    StatefulWidget::render(list, area, buf, &mut state);
    users.scroll_offset = state.offset();
}
