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
use crate::transport::Transport;

/// Send the input line, remember it in the history and clear it.
/// Empty input is left alone.
pub(super) fn submit_input<T: Transport>(overlay: &mut Overlay<T>) {
    if overlay.input.is_empty() {
        return;
    }

    let text = overlay.input.text().to_owned();
    if !overlay.transport.is_connected() {
        tracing::debug!("submitting while disconnected");
    }
    overlay.transport.send(&text);
    overlay.history.push(&text);
    overlay.input.clear();
    overlay.history_cursor.reset();
    tracing::debug!(len = text.len(), history = overlay.history.len(), "input submitted");
}
