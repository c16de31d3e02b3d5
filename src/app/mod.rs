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

mod events;
mod history_nav;
mod input;
mod input_submit;
mod keys;
mod scrollback;
mod state;
mod user_list;

pub use events::{handle_terminal_event, handle_transport_event};
pub use history_nav::{HistoryCursor, Recall};
pub use input::{InputLine, MAX_INPUT_CHARS};
pub use scrollback::{Placement, ScrollbackPage, layout_page, page_count};
pub use state::{App, Overlay, OverlaySettings, TOGGLE_COMMAND};
pub use user_list::{MAX_USERS, UserListState};

use crate::error::AppError;
use anyhow::Context as _;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init().context(AppError::TerminalSetup)?;

    // Bracketed paste lets a pasted block arrive as one event (ignore error on unsupported terminals)
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableBracketedPaste);

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    let result = loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
            }
            Some(event) = app.event_rx.recv() => {
                events::handle_transport_event(app, event);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking)
        loop {
            // Try terminal events first (keeps typing responsive)
            if let Some(Some(Ok(event))) = events.next().now_or_never() {
                events::handle_terminal_event(app, event);
                continue;
            }
            match app.event_rx.try_recv() {
                Ok(event) => events::handle_transport_event(app, event),
                Err(_) => break,
            }
        }

        if app.should_quit {
            break Ok(());
        }

        // Phase 3: render once, then advance the panel by one frame
        if app.force_redraw {
            if let Err(e) = terminal.clear() {
                break Err(e.into());
            }
            app.force_redraw = false;
        }
        if let Err(e) = terminal.draw(|f| crate::ui::render(f, app)) {
            break Err(e.into());
        }
        app.overlay.tick();
        app.frame_count = app.frame_count.wrapping_add(1);
        last_render = Instant::now();
    };

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
    ratatui::restore();

    tracing::debug!(frames = app.frame_count, "tui loop finished");
    result
}
