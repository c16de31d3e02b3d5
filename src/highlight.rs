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

/// Whether `line` mentions `nick` and was not written by `nick`.
///
/// The sender is the text before the first `:` (leading colons skipped), as
/// echoed chat lines look like `"<sender>: <message>"`. The mention check is
/// case-insensitive, the sender check is exact.
#[must_use]
pub fn detect_highlight(line: &str, nick: &str) -> bool {
    if nick.is_empty() {
        return false;
    }
    let sender = line.trim_start_matches(':').split(':').next().unwrap_or_default();
    sender != nick && line.to_lowercase().contains(&nick.to_lowercase())
}
