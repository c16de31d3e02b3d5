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

use super::history_nav::HistoryCursor;
use super::input::InputLine;
use super::scrollback::{self, ScrollbackPage};
use super::user_list::UserListState;
use crate::commands::{CommandError, CommandRegistry};
use crate::config::{ResolvedConfig, UiColor};
use crate::panel::Panel;
use crate::store::{ChatLog, EntryId, InputHistory};
use crate::transport::{LoopbackTransport, Transport, TransportEvent};
use tokio::sync::mpsc;

/// Name under which the overlay registers its toggle command.
pub const TOGGLE_COMMAND: &str = "toggle_irc";

#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub channel: String,
    pub log_capacity: usize,
    pub history_capacity: usize,
    pub anim_step: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

impl From<&ResolvedConfig> for OverlaySettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            channel: config.channel.clone(),
            log_capacity: config.log_capacity,
            history_capacity: config.history_capacity,
            anim_step: config.anim_step,
        }
    }
}

/// The chat overlay: panel animation, scrollback, input line and history,
/// user list, all in front of a transport.
#[derive(Debug)]
pub struct Overlay<T> {
    pub(super) panel: Panel,
    pub(super) chat_log: ChatLog,
    pub(super) history: InputHistory,
    pub(super) history_cursor: HistoryCursor,
    pub(super) input: InputLine,
    /// Requested scrollback page, 0 = newest. Clamped at layout time.
    pub(super) page: usize,
    pub(super) user_list: UserListState,
    pub(super) transport: T,
    channel: String,
}

impl<T: Transport> Overlay<T> {
    pub fn new(transport: T, settings: OverlaySettings) -> Self {
        Self {
            panel: Panel::new(settings.anim_step),
            chat_log: ChatLog::with_capacity(settings.log_capacity),
            history: InputHistory::with_capacity(settings.history_capacity),
            history_cursor: HistoryCursor::default(),
            input: InputLine::new(),
            page: 0,
            user_list: UserListState::default(),
            transport,
            channel: settings.channel,
        }
    }

    pub fn toggle(&mut self) {
        self.panel.toggle();
    }

    /// Advance the panel animation by one frame.
    pub fn tick(&mut self) {
        self.panel.tick();
    }

    pub fn print_line(&mut self, line: &str) -> EntryId {
        self.chat_log.print_line(line)
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn chat_log(&self) -> &ChatLog {
        &self.chat_log
    }

    pub fn history(&self) -> &InputHistory {
        &self.history
    }

    pub fn history_cursor(&self) -> HistoryCursor {
        self.history_cursor
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn user_list(&self) -> &UserListState {
        &self.user_list
    }

    /// Refresh the user list from the transport roster and hand it out for
    /// rendering.
    pub fn sync_users(&mut self) -> &mut UserListState {
        self.user_list.sync(&mut self.transport);
        &mut self.user_list
    }

    /// Lay out the current scrollback page, clamping the page counter when
    /// the log is shorter than requested.
    pub fn layout_scrollback(
        &mut self,
        view_height: u16,
        width: u16,
        measure: impl Fn(&str, u16) -> u16,
    ) -> ScrollbackPage {
        let laid_out =
            scrollback::layout_page(&mut self.chat_log, self.page, view_height, width, measure);
        self.page = laid_out.page;
        laid_out
    }

    /// Insert pasted text while the overlay has focus.
    pub fn paste(&mut self, text: &str) -> bool {
        if !self.panel.captures_input() {
            return false;
        }
        self.input.insert_str(text);
        true
    }

    pub fn register_commands(registry: &mut CommandRegistry<Self>) -> Result<(), CommandError> {
        registry.register(TOGGLE_COMMAND, "Toggle the irc chat", Self::toggle)
    }
}

pub struct App {
    pub overlay: Overlay<LoopbackTransport>,
    pub commands: CommandRegistry<Overlay<LoopbackTransport>>,
    pub ui_color: UiColor,
    pub should_quit: bool,
    /// Force a full terminal clear on next render frame.
    pub force_redraw: bool,
    pub frame_count: u64,
    pub event_rx: mpsc::UnboundedReceiver<TransportEvent>,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut transport = LoopbackTransport::new(config.nickname.clone()).with_echo(event_tx);
        for user in &config.users {
            transport.join(user.clone());
        }

        let mut overlay = Overlay::new(transport, OverlaySettings::from(config));
        overlay.print_line(&format!("*** Now talking in {} as {}", config.channel, config.nickname));

        let mut commands: CommandRegistry<Overlay<LoopbackTransport>> = CommandRegistry::new();
        if let Err(e) = Overlay::register_commands(&mut commands) {
            tracing::error!("Failed to register overlay commands: {e}");
        }

        Self {
            overlay,
            commands,
            ui_color: config.ui_color,
            should_quit: false,
            force_redraw: false,
            frame_count: 0,
            event_rx,
        }
    }

    /// App with default settings and no terminal, for tests.
    pub fn test_default() -> Self {
        Self::new(&ResolvedConfig::default())
    }

    /// Run a registered command, logging failures.
    pub fn run_command(&mut self, line: &str) {
        if let Err(e) = self.commands.execute_line(line, &mut self.overlay) {
            tracing::warn!("{e}");
        }
    }
}
