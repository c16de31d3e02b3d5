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

//! Bounded, byte-budgeted stores backing the scrollback and the input history.

mod chat_log;
mod history;
mod ring;

pub use chat_log::{
    ChatLog, DEFAULT_LOG_CAPACITY, LogEntry, MAX_LINE_BYTES, truncate_to_boundary,
};
pub use history::{DEFAULT_HISTORY_CAPACITY, InputHistory};
pub use ring::{EntryId, Footprint, RingBuffer, StaleEntry};
