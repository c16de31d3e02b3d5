// =====
// TESTS: 8
// =====
//
// Full-frame rendering through ratatui's TestBackend.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use irc_overlay::app::{App, handle_terminal_event};
use irc_overlay::config::ResolvedConfig;
use ratatui::layout::Position;
use ratatui::style::Color;

use crate::helpers::{draw, find_text, open_overlay, screen_text, test_app, type_text};

const WIDTH: u16 = 102;
const HEIGHT: u16 = 32;

#[test]
fn closed_overlay_shows_only_the_host_screen() {
    let mut app = test_app();
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let screen = screen_text(terminal.backend().buffer());
    assert!(screen.contains("F2 or t toggles chat"));
    assert!(!screen.contains("Userlist"));
    assert!(!screen.contains("#lobby"));
}

#[test]
fn open_overlay_draws_all_panels() {
    let mut app = test_app();
    open_overlay(&mut app);
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let screen = screen_text(terminal.backend().buffer());
    assert!(screen.contains("#lobby"));
    assert!(screen.contains("Userlist"));
    assert!(screen.contains("player"));
    assert!(screen.contains("*** Now talking in #lobby as player"));
}

#[test]
fn panels_start_offscreen_when_opening() {
    let mut app = test_app();
    app.overlay.toggle();
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let screen = screen_text(terminal.backend().buffer());
    assert!(!screen.contains("Userlist"));
    assert!(!screen.contains("Now talking"));
}

#[test]
fn cursor_sits_in_the_input_line_when_open() {
    let mut app = test_app();
    open_overlay(&mut app);
    type_text(&mut app, "abc");
    let mut terminal = draw(&mut app, WIDTH, HEIGHT);
    // input panel rests at (1, 28); its text starts one cell inside the border
    assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(5, 29));
    assert_eq!(find_text(terminal.backend().buffer(), "abc"), Some((2, 29)));
}

#[test]
fn highlighted_lines_use_the_highlight_color() {
    let mut app = test_app();
    app.overlay.print_line("alice: hey player");
    app.overlay.print_line("bob: unrelated");
    open_overlay(&mut app);
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let buffer = terminal.backend().buffer();

    let (x, y) = find_text(buffer, "alice: hey player").unwrap();
    assert_eq!(buffer.cell((x, y)).unwrap().fg, Color::Rgb(255, 77, 77));
    let (x, y) = find_text(buffer, "bob: unrelated").unwrap();
    assert_eq!(buffer.cell((x, y)).unwrap().fg, Color::White);
}

#[test]
fn disconnected_transport_shows_not_connected() {
    let mut app = test_app();
    app.overlay.transport_mut().set_connected(false);
    open_overlay(&mut app);
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let screen = screen_text(terminal.backend().buffer());
    assert!(screen.contains("Not Connected"));
}

#[test]
fn paging_back_shows_older_lines_and_page_title() {
    let config = ResolvedConfig { channel: "#busy".to_owned(), ..ResolvedConfig::default() };
    let mut app = App::new(&config);
    for i in 0..60 {
        app.overlay.print_line(&format!("line {i:02}"));
    }
    open_overlay(&mut app);
    app.overlay.handle_key(crossterm::event::KeyEvent::from(crossterm::event::KeyCode::PageUp));

    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let screen = screen_text(terminal.backend().buffer());
    // 24 rows of scrollback per page
    assert!(screen.contains("line 35"));
    assert!(!screen.contains("line 36"));
    assert!(screen.contains("page 1"));
}

#[test]
fn user_list_scrolls_to_the_selected_name() {
    let config = ResolvedConfig {
        nickname: "aaa".to_owned(),
        users: (0..60).map(|i| format!("user{i:02}")).collect(),
        ..ResolvedConfig::default()
    };
    let mut app = App::new(&config);
    open_overlay(&mut app);
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    assert!(!screen_text(terminal.backend().buffer()).contains("user59"));

    for _ in 0..70 {
        handle_terminal_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::CONTROL)),
        );
    }
    let terminal = draw(&mut app, WIDTH, HEIGHT);
    let buffer = terminal.backend().buffer();
    assert!(screen_text(buffer).contains("user59"));
    assert!(!screen_text(buffer).contains("user00"));
    assert_eq!(app.overlay.user_list().selected, 60);
    assert!(app.overlay.user_list().scroll_offset > 0);
    let (x, y) = find_text(buffer, "user59").unwrap();
    assert_eq!(buffer.cell((x, y)).unwrap().fg, Color::Yellow);
}
