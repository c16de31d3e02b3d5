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

//! The chat transport collaborator and a local loopback implementation.

use tokio::sync::mpsc;

/// Snapshot of the channel roster handed to the user list.
#[derive(Debug, Clone, Copy)]
pub struct Roster<'a> {
    /// The roster changed since the previous read.
    pub refreshed: bool,
    pub names: &'a [String],
}

/// Outgoing side of a chat connection. Implementations must not block;
/// delivery happens on their own schedule.
pub trait Transport {
    fn send(&mut self, text: &str);

    fn is_connected(&self) -> bool;

    /// Current roster. Reading clears the refreshed flag.
    fn users(&mut self) -> Roster<'_>;

    fn nickname(&self) -> &str;
}

/// Events a transport pushes back to the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Line(String),
}

/// Most recent sent lines the loopback keeps around.
pub const SENT_LINES_KEPT: usize = 64;

/// In-process transport: every sent line is echoed back as if the server had
/// relayed it.
#[derive(Debug)]
pub struct LoopbackTransport {
    nickname: String,
    users: Vec<String>,
    users_refreshed: bool,
    connected: bool,
    sent: Vec<String>,
    echo: Option<mpsc::UnboundedSender<TransportEvent>>,
}

impl LoopbackTransport {
    pub fn new(nickname: impl Into<String>) -> Self {
        let nickname = nickname.into();
        Self {
            users: vec![nickname.clone()],
            nickname,
            users_refreshed: true,
            connected: true,
            sent: Vec::new(),
            echo: None,
        }
    }

    #[must_use]
    pub fn with_echo(mut self, tx: mpsc::UnboundedSender<TransportEvent>) -> Self {
        self.echo = Some(tx);
        self
    }

    pub fn join(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.users.contains(&name) {
            self.users.push(name);
            self.users_refreshed = true;
        }
    }

    pub fn part(&mut self, name: &str) {
        let before = self.users.len();
        self.users.retain(|u| u != name);
        if self.users.len() != before {
            self.users_refreshed = true;
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// The last [`SENT_LINES_KEPT`] lines passed to [`Transport::send`],
    /// oldest first.
    #[must_use]
    pub fn sent(&self) -> &[String] {
        &self.sent
    }
}

impl Transport for LoopbackTransport {
    fn send(&mut self, text: &str) {
        tracing::debug!(len = text.len(), "loopback send");
        if self.sent.len() == SENT_LINES_KEPT {
            self.sent.remove(0);
        }
        self.sent.push(text.to_owned());
        if let Some(tx) = &self.echo {
            let line = format!("{}: {text}", self.nickname);
            if tx.send(TransportEvent::Line(line)).is_err() {
                tracing::warn!("loopback echo receiver dropped");
                self.echo = None;
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn users(&mut self) -> Roster<'_> {
        let refreshed = std::mem::take(&mut self.users_refreshed);
        Roster { refreshed, names: &self.users }
    }

    fn nickname(&self) -> &str {
        &self.nickname
    }
}
