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

//! Page layout for the chat scrollback.
//!
//! Pages are cut from the newest entry backwards: a page ends when the next
//! entry would rise above the top of the view. Page 0 is the newest.

use crate::store::{ChatLog, EntryId};

/// Where one entry lands inside the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: EntryId,
    /// Top row relative to the view.
    pub row: u16,
    pub height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackPage {
    /// The page actually laid out; lower than requested when the log is
    /// shorter than that.
    pub page: usize,
    /// Top to bottom.
    pub placements: Vec<Placement>,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn placement(id: EntryId, view_height: i32, offset: i32, height: i32) -> Placement {
    Placement { id, row: (view_height - offset).max(0) as u16, height: height as u16 }
}

/// Lay out `requested_page` of `log` for a view of `view_height` rows and
/// `width` columns. Entry heights come from `measure` and are cached on the
/// entries.
///
/// The requested page is placed bottom-up while walking back from the newest
/// entry. When the log runs out first, the last page reached is used instead
/// and placed top-down from the oldest entry. An entry taller than the whole
/// view gets a page to itself.
pub fn layout_page(
    log: &mut ChatLog,
    requested_page: usize,
    view_height: u16,
    width: u16,
    measure: impl Fn(&str, u16) -> u16,
) -> ScrollbackPage {
    let view = i32::from(view_height);
    let mut cursor = log.last();
    let mut page = 0usize;

    loop {
        let mut offset = 0i32;
        let mut placements = Vec::new();

        while let Some(id) = cursor {
            let height = i32::from(log.line_height(id, width, &measure));
            if offset > 0 && offset + height > view {
                break;
            }
            offset += height;
            if page == requested_page {
                placements.push(placement(id, view, offset, height));
            }
            cursor = log.prev(id);
        }

        if cursor.is_none() && page < requested_page {
            tracing::debug!(requested_page, page, "scrollback page clamped");
            return ScrollbackPage { page, placements: top_down(log, offset, view, width, &measure) };
        }
        if page == requested_page {
            placements.reverse();
            return ScrollbackPage { page, placements };
        }
        page += 1;
    }
}

/// Place the oldest entries filling `offset` rows, walking forward.
fn top_down(
    log: &mut ChatLog,
    mut offset: i32,
    view: i32,
    width: u16,
    measure: &impl Fn(&str, u16) -> u16,
) -> Vec<Placement> {
    let mut placements = Vec::new();
    let mut cursor = log.first();
    while offset > 0 {
        let Some(id) = cursor else { break };
        let height = i32::from(log.line_height(id, width, measure));
        placements.push(placement(id, view, offset, height));
        offset -= height;
        cursor = log.next(id);
    }
    placements
}

/// Number of pages `log` spans at this view size.
pub fn page_count(
    log: &mut ChatLog,
    view_height: u16,
    width: u16,
    measure: impl Fn(&str, u16) -> u16,
) -> usize {
    if log.is_empty() {
        return 1;
    }
    layout_page(log, usize::MAX, view_height, width, measure).page + 1
}
