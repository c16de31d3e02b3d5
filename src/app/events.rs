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

use super::App;
use super::state::TOGGLE_COMMAND;
use crate::transport::TransportEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

fn handle_always_allowed_shortcuts(app: &mut App, key: KeyEvent) -> bool {
    if is_ctrl_char_shortcut(key, 'q') || is_ctrl_char_shortcut(key, 'c') {
        app.should_quit = true;
        return true;
    }
    if is_ctrl_char_shortcut(key, 'l') {
        app.force_redraw = true;
        return true;
    }
    false
}

/// Keys the host game binds while the overlay lets them through.
fn handle_host_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::F(2), _) | (KeyCode::Char('t'), KeyModifiers::NONE) => {
            app.run_command(TOGGLE_COMMAND);
        }
        _ => {}
    }
}

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if handle_always_allowed_shortcuts(app, key) {
                return;
            }
            if !app.overlay.handle_key(key) {
                handle_host_key(app, key);
            }
        }
        Event::Paste(text) => {
            let _ = app.overlay.paste(&text);
        }
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

pub fn handle_transport_event(app: &mut App, event: TransportEvent) {
    match event {
        TransportEvent::Line(line) => {
            app.overlay.print_line(&line);
        }
    }
}
