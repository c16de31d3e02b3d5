use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use irc_overlay::app::{App, handle_terminal_event, handle_transport_event};
use irc_overlay::panel::PanelState;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

/// Build a minimal `App` for integration testing.
/// Loopback transport, no TUI -- just state.
pub fn test_app() -> App {
    App::test_default()
}

pub fn press(app: &mut App, code: KeyCode) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Toggle the overlay through the host binding and run frames until it is open.
pub fn open_overlay(app: &mut App) {
    press(app, KeyCode::F(2));
    while app.overlay.panel().state() != PanelState::Open {
        app.overlay.tick();
    }
}

/// Feed every queued loopback echo back into the app. Returns how many arrived.
pub fn drain_echoes(app: &mut App) -> usize {
    let mut count = 0;
    while let Ok(event) = app.event_rx.try_recv() {
        handle_transport_event(app, event);
        count += 1;
    }
    count
}

pub fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| irc_overlay::ui::render(f, app)).unwrap();
    terminal
}

pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (buffer.area.left()..buffer.area.right())
        .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_owned()))
        .collect()
}

pub fn screen_text(buffer: &Buffer) -> String {
    (buffer.area.top()..buffer.area.bottom())
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Position of the first cell of `needle`, assuming single-width symbols.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (buffer.area.top()..buffer.area.bottom()).find_map(|y| {
        let row = row_text(buffer, y);
        let byte = row.find(needle)?;
        let col = u16::try_from(row[..byte].chars().count()).ok()?;
        Some((buffer.area.left() + col, y))
    })
}
