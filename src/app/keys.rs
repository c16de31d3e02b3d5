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

use super::Overlay;
use super::history_nav::Recall;
use super::input::InputLine;
use super::input_submit::submit_input;
use crate::transport::Transport;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key press to the overlay. Returns `false` when the overlay is not
/// capturing input and the key belongs to the host; every key is consumed
/// while it is.
pub(super) fn handle_key<T: Transport>(overlay: &mut Overlay<T>, key: KeyEvent) -> bool {
    if !overlay.panel.captures_input() {
        return false;
    }

    match key.code {
        KeyCode::Esc => overlay.toggle(),
        KeyCode::Enter => submit_input(overlay),
        KeyCode::Up if key.modifiers.contains(KeyModifiers::CONTROL) => {
            overlay.user_list.select_prev();
        }
        KeyCode::Down if key.modifiers.contains(KeyModifiers::CONTROL) => {
            overlay.user_list.select_next();
        }
        KeyCode::Up => {
            let recall = overlay.history_cursor.older(&overlay.history);
            apply_recall(&mut overlay.input, recall);
        }
        KeyCode::Down => {
            let recall = overlay.history_cursor.newer(&overlay.history);
            apply_recall(&mut overlay.input, recall);
        }
        KeyCode::PageUp => {
            overlay.page = overlay.page.saturating_add(1);
        }
        KeyCode::PageDown => {
            overlay.page = overlay.page.saturating_sub(1);
        }
        _ => {
            if !overlay.input.handle_key(key) {
                tracing::trace!(code = ?key.code, "key ignored by input line");
            }
        }
    }
    true
}

fn apply_recall(input: &mut InputLine, recall: Recall<'_>) {
    match recall {
        Recall::Entry(text) => input.set(text),
        Recall::Empty => input.clear(),
        Recall::Unchanged => {}
    }
}

impl<T: Transport> Overlay<T> {
    /// See [`handle_key`].
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        handle_key(self, key)
    }
}
