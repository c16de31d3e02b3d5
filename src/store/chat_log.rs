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

/// Longest chat line kept, in bytes. Longer lines are cut silently.
pub const MAX_LINE_BYTES: usize = 255;

/// Default byte budget of the scrollback.
pub const DEFAULT_LOG_CAPACITY: usize = 64 * 1024;

#[derive(Debug)]
pub struct LogEntry {
    text: String,
    /// `(width, rows)` measured for the last layout width.
    height: Option<(u16, u16)>,
}

impl LogEntry {
    fn new(line: &str) -> Self {
        Self { text: truncate_to_boundary(line, MAX_LINE_BYTES).to_owned(), height: None }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cached height for `width`, if it was measured at that width.
    #[must_use]
    pub fn cached_height(&self, width: u16) -> Option<u16> {
        self.height.and_then(|(w, rows)| (w == width).then_some(rows))
    }
}

impl Footprint for LogEntry {
    fn footprint(&self) -> usize {
        // text + terminator + height cache
        self.text.len() + 1 + std::mem::size_of::<Option<(u16, u16)>>()
    }
}

/// Longest prefix of `s` that is at most `max` bytes and ends on a char boundary.
#[must_use]
pub fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Scrollback of chat lines.
#[derive(Debug)]
pub struct ChatLog {
    ring: RingBuffer<LogEntry>,
}

impl ChatLog {
    pub fn with_capacity(bytes: usize) -> Self {
        Self { ring: RingBuffer::with_capacity(bytes) }
    }

    pub fn print_line(&mut self, line: &str) -> EntryId {
        self.ring.push(LogEntry::new(line))
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

    pub fn get(&self, id: EntryId) -> Result<&LogEntry, StaleEntry> {
        self.ring.get(id)
    }

    /// Wrapped height of `id` at `width`, measuring on first use per width.
    /// Gone entries measure as zero rows.
    pub fn line_height(
        &mut self,
        id: EntryId,
        width: u16,
        measure: impl Fn(&str, u16) -> u16,
    ) -> u16 {
        let Ok(entry) = self.ring.get_mut(id) else {
            return 0;
        };
        if let Some(rows) = entry.cached_height(width) {
            return rows;
        }
        let rows = measure(&entry.text, width).max(1);
        entry.height = Some((width, rows));
        rows
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (EntryId, &LogEntry)> {
        self.ring.iter()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }
}
