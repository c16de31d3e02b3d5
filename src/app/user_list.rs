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

use crate::transport::Transport;

/// Names beyond this are not shown.
pub const MAX_USERS: usize = 128;

/// User list widget state, owned by the overlay and handed to the renderer.
#[derive(Debug, Default)]
pub struct UserListState {
    users: Vec<String>,
    pub selected: usize,
    pub scroll_offset: usize,
}

impl UserListState {
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Pull the roster from the transport. A refreshed roster drops the cached
    /// list; an empty cache is rebuilt sorted, with the own nickname selected.
    pub fn sync(&mut self, transport: &mut impl Transport) {
        let nick = transport.nickname().to_owned();
        let roster = transport.users();
        if roster.refreshed {
            self.users.clear();
        }
        if !self.users.is_empty() || roster.names.is_empty() {
            return;
        }

        self.users = roster.names.iter().take(MAX_USERS).cloned().collect();
        self.users.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        self.selected = self.users.iter().position(|u| *u == nick).unwrap_or(0);
        self.scroll_offset = self.scroll_offset.min(self.users.len().saturating_sub(1));
        tracing::debug!(count = self.users.len(), "user list rebuilt");
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.users.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::LoopbackTransport;
    use pretty_assertions::assert_eq;

    #[test]
    fn rebuild_sorts_case_insensitively_and_selects_self() {
        let mut transport = LoopbackTransport::new("me");
        transport.join("Zed");
        transport.join("alice");
        transport.join("Bob");
        let mut list = UserListState::default();
        list.sync(&mut transport);
        assert_eq!(list.users(), ["alice", "Bob", "me", "Zed"]);
        assert_eq!(list.selected, 2);
    }

    #[test]
    fn unchanged_roster_keeps_cache_and_selection() {
        let mut transport = LoopbackTransport::new("me");
        transport.join("alice");
        let mut list = UserListState::default();
        list.sync(&mut transport);
        list.select_prev();
        list.sync(&mut transport);
        assert_eq!(list.selected, 0);
        assert_eq!(list.users().len(), 2);
    }

    #[test]
    fn refresh_rebuilds() {
        let mut transport = LoopbackTransport::new("me");
        let mut list = UserListState::default();
        list.sync(&mut transport);
        transport.join("alice");
        list.sync(&mut transport);
        assert_eq!(list.users(), ["alice", "me"]);

        transport.part("alice");
        list.sync(&mut transport);
        assert_eq!(list.users(), ["me"]);
    }

    #[test]
    fn roster_is_capped() {
        let mut transport = LoopbackTransport::new("me");
        for i in 0..200 {
            transport.join(format!("user{i:03}"));
        }
        let mut list = UserListState::default();
        list.sync(&mut transport);
        assert_eq!(list.users().len(), MAX_USERS);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut transport = LoopbackTransport::new("me");
        transport.join("zoe");
        let mut list = UserListState::default();
        list.sync(&mut transport);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected, 1);
    }
}
