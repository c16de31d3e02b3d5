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

use super::ring::{EntryId, Footprint, RingBuffer, StaleEntry};

/// Default byte budget of the input history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64 * 1024;

#[derive(Debug)]
struct HistoryEntry(String);

impl Footprint for HistoryEntry {
    fn footprint(&self) -> usize {
        self.0.len() + 1
    }
}

/// Previously submitted input lines, oldest first.
#[derive(Debug)]
pub struct InputHistory {
    ring: RingBuffer<HistoryEntry>,
}

impl InputHistory {
    pub fn with_capacity(bytes: usize) -> Self {
        Self { ring: RingBuffer::with_capacity(bytes) }
    }

    pub fn push(&mut self, line: &str) -> EntryId {
        self.ring.push(HistoryEntry(line.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.ring.contains(id)
    }

    #[must_use]
    pub fn first(&self) -> Option<EntryId> {
        self.ring.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<EntryId> {
        self.ring.last()
    }

    #[must_use]
    pub fn next(&self, id: EntryId) -> Option<EntryId> {
        self.ring.next(id)
    }

    #[must_use]
    pub fn prev(&self, id: EntryId) -> Option<EntryId> {
        self.ring.prev(id)
    }

    pub fn get(&self, id: EntryId) -> Result<&str, StaleEntry> {
        self.ring.get(id).map(|entry| entry.0.as_str())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.ring.iter().map(|(_, entry)| entry.0.as_str())
    }
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
