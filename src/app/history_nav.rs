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

use crate::store::{EntryId, InputHistory};

/// What a history step means for the edit buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Load this entry into the input.
    Entry(&'a str),
    /// Walked past the newest entry: clear the input.
    Empty,
    /// Nothing to recall; leave the input alone.
    Unchanged,
}

/// Browsing position in the input history. `None` means not browsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCursor(Option<EntryId>);

impl HistoryCursor {
    #[must_use]
    pub fn position(self) -> Option<EntryId> {
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }

    /// Step towards older entries. Stops at the oldest entry instead of
    /// wrapping; a cursor whose entry was evicted restarts at the oldest one.
    pub fn older<'h>(&mut self, history: &'h InputHistory) -> Recall<'h> {
        self.0 = match self.0 {
            Some(id) if history.contains(id) => history.prev(id).or(Some(id)),
            Some(_) => history.first(),
            None => history.last(),
        };
        self.recall(history).unwrap_or(Recall::Unchanged)
    }

    /// Step towards newer entries; past the newest the cursor goes back to
    /// `None` and the input is cleared.
    pub fn newer<'h>(&mut self, history: &'h InputHistory) -> Recall<'h> {
        self.0 = self.0.and_then(|id| history.next(id));
        self.recall(history).unwrap_or(Recall::Empty)
    }

    fn recall<'h>(&self, history: &'h InputHistory) -> Option<Recall<'h>> {
        let id = self.0?;
        history.get(id).ok().map(Recall::Entry)
    }
}
