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

use std::collections::VecDeque;
use std::fmt;

/// Number of bytes a stored value charges against the ring's capacity.
pub trait Footprint {
    fn footprint(&self) -> usize;
}

/// Stable handle to a ring entry.
///
/// Ids grow monotonically with every append and are never reused, so a handle
/// that outlives its entry resolves to [`StaleEntry::Evicted`] instead of
/// silently pointing at whatever recycled the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StaleEntry {
    #[error("ring entry {0} was evicted")]
    Evicted(EntryId),
    #[error("ring entry {0} was never written")]
    Unwritten(EntryId),
}

/// Byte-budgeted FIFO ring. Appending past the budget evicts from the oldest
/// end until the new value fits.
#[derive(Debug)]
pub struct RingBuffer<T> {
    slots: VecDeque<(T, usize)>,
    /// Id of `slots[0]`; equals the next id to hand out when empty.
    head: u64,
    used: usize,
    capacity: usize,
}

impl<T: Footprint> RingBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: VecDeque::new(), head: 0, used: 0, capacity }
    }

    /// Store `value`, evicting the oldest entries as needed.
    /// A value larger than the whole budget ends up stored alone.
    pub fn push(&mut self, value: T) -> EntryId {
        let size = value.footprint();
        let mut evicted = 0usize;
        while !self.slots.is_empty() && self.used + size > self.capacity {
            if let Some((_, freed)) = self.slots.pop_front() {
                self.used -= freed;
                self.head += 1;
                evicted += 1;
            }
        }
        if evicted > 0 {
            tracing::trace!(evicted, used = self.used, capacity = self.capacity, "ring eviction");
        }
        self.slots.push_back((value, size));
        self.used += size;
        EntryId(self.tail_id() - 1)
    }
}

impl<T> RingBuffer<T> {
    fn tail_id(&self) -> u64 {
        self.head + self.slots.len() as u64
    }

    #[allow(clippy::cast_possible_truncation)]
    fn slot_index(&self, id: EntryId) -> Result<usize, StaleEntry> {
        if id.0 < self.head {
            Err(StaleEntry::Evicted(id))
        } else if id.0 >= self.tail_id() {
            Err(StaleEntry::Unwritten(id))
        } else {
            Ok((id.0 - self.head) as usize)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.slot_index(id).is_ok()
    }

    /// Oldest live entry.
    #[must_use]
    pub fn first(&self) -> Option<EntryId> {
        (!self.slots.is_empty()).then_some(EntryId(self.head))
    }

    /// Newest live entry.
    #[must_use]
    pub fn last(&self) -> Option<EntryId> {
        (!self.slots.is_empty()).then(|| EntryId(self.tail_id() - 1))
    }

    /// Logical successor. The successor of an evicted entry is the oldest
    /// survivor.
    #[must_use]
    pub fn next(&self, id: EntryId) -> Option<EntryId> {
        if id.0 < self.head {
            return self.first();
        }
        let next = id.0 + 1;
        (next < self.tail_id()).then_some(EntryId(next))
    }

    /// Logical predecessor; `None` at the oldest entry and for evicted ids.
    #[must_use]
    pub fn prev(&self, id: EntryId) -> Option<EntryId> {
        if id.0 <= self.head || id.0 >= self.tail_id() {
            return None;
        }
        Some(EntryId(id.0 - 1))
    }

    pub fn get(&self, id: EntryId) -> Result<&T, StaleEntry> {
        let idx = self.slot_index(id)?;
        Ok(&self.slots[idx].0)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Result<&mut T, StaleEntry> {
        let idx = self.slot_index(id)?;
        Ok(&mut self.slots[idx].0)
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (EntryId, &T)> {
        let head = self.head;
        self.slots.iter().enumerate().map(move |(i, (v, _))| (EntryId(head + i as u64), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct Blob(&'static str, usize);

    impl Footprint for Blob {
        fn footprint(&self) -> usize {
            self.1
        }
    }

    fn names(ring: &RingBuffer<Blob>) -> Vec<&'static str> {
        ring.iter().map(|(_, b)| b.0).collect()
    }

    #[test]
    fn empty_ring_has_no_ends() {
        let ring: RingBuffer<Blob> = RingBuffer::with_capacity(16);
        assert!(ring.is_empty());
        assert_eq!(ring.first(), None);
        assert_eq!(ring.last(), None);
    }

    #[test]
    fn traversal_follows_append_order() {
        let mut ring = RingBuffer::with_capacity(100);
        let a = ring.push(Blob("a", 1));
        let b = ring.push(Blob("b", 1));
        let c = ring.push(Blob("c", 1));

        assert_eq!(ring.first(), Some(a));
        assert_eq!(ring.last(), Some(c));
        assert_eq!(ring.next(a), Some(b));
        assert_eq!(ring.next(c), None);
        assert_eq!(ring.prev(c), Some(b));
        assert_eq!(ring.prev(a), None);
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        let mut ring = RingBuffer::with_capacity(10);
        let a = ring.push(Blob("a", 4));
        let b = ring.push(Blob("b", 4));
        let c = ring.push(Blob("c", 4));

        assert_eq!(names(&ring), vec!["b", "c"]);
        assert_eq!(ring.first(), Some(b));
        assert_eq!(ring.last(), Some(c));
        assert_eq!(ring.used, 8);
        assert_eq!(ring.get(a), Err(StaleEntry::Evicted(a)));
    }

    #[test]
    fn large_value_evicts_several() {
        let mut ring = RingBuffer::with_capacity(10);
        ring.push(Blob("a", 3));
        ring.push(Blob("b", 3));
        ring.push(Blob("c", 3));
        ring.push(Blob("d", 9));
        assert_eq!(names(&ring), vec!["d"]);
    }

    #[test]
    fn value_larger_than_capacity_is_stored_alone() {
        let mut ring = RingBuffer::with_capacity(4);
        ring.push(Blob("a", 2));
        let big = ring.push(Blob("big", 12));
        assert_eq!(names(&ring), vec!["big"]);
        assert_eq!(ring.first(), Some(big));

        ring.push(Blob("c", 1));
        assert_eq!(names(&ring), vec!["c"]);
    }

    #[test]
    fn evicted_handle_is_reported_not_reused() {
        let mut ring = RingBuffer::with_capacity(2);
        let a = ring.push(Blob("a", 1));
        ring.push(Blob("b", 1));
        ring.push(Blob("c", 1));

        assert!(!ring.contains(a));
        assert_eq!(ring.prev(a), None);
        // The logical successor of a gone entry is the oldest survivor.
        assert_eq!(ring.next(a), ring.first());
    }

    #[test]
    fn unwritten_handle_is_reported() {
        let mut ring = RingBuffer::with_capacity(8);
        let a = ring.push(Blob("a", 1));
        let future = EntryId(a.index() + 5);
        assert_eq!(ring.get(future), Err(StaleEntry::Unwritten(future)));
        assert_eq!(ring.prev(future), None);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut ring = RingBuffer::with_capacity(8);
        let a = ring.push(Blob("a", 1));
        ring.get_mut(a).unwrap().0 = "z";
        assert_eq!(ring.get(a).unwrap().0, "z");
    }
}
