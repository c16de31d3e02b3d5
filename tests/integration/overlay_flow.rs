// =====
// TESTS: 8
// =====
//
// Key routing and chat round trips through the host app.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use irc_overlay::app::{TOGGLE_COMMAND, handle_terminal_event};
use irc_overlay::commands::CommandError;
use irc_overlay::panel::PanelState;
use pretty_assertions::assert_eq;

use crate::helpers::{drain_echoes, open_overlay, press, test_app, type_text};

fn log_texts(app: &irc_overlay::app::App) -> Vec<String> {
    app.overlay.chat_log().iter().map(|(_, e)| e.text().to_owned()).collect()
}

#[test]
fn startup_prints_status_line() {
    let app = test_app();
    assert_eq!(log_texts(&app), vec!["*** Now talking in #lobby as player".to_owned()]);
}

#[test]
fn sent_line_comes_back_as_echo() {
    let mut app = test_app();
    open_overlay(&mut app);
    type_text(&mut app, "hello there");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.overlay.transport().sent(), ["hello there".to_owned()]);
    assert_eq!(drain_echoes(&mut app), 1);
    assert_eq!(log_texts(&app).last().map(String::as_str), Some("player: hello there"));
}

#[test]
fn typed_t_is_not_a_toggle_while_open() {
    let mut app = test_app();
    open_overlay(&mut app);
    type_text(&mut app, "tt");
    assert_eq!(app.overlay.panel().state(), PanelState::Open);
    assert_eq!(app.overlay.input().text(), "tt");
}

#[test]
fn escape_then_ticks_close_the_panel() {
    let mut app = test_app();
    open_overlay(&mut app);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.overlay.panel().state(), PanelState::Closing);
    while app.overlay.panel().state() != PanelState::Closed {
        app.overlay.tick();
    }
    assert_eq!(app.overlay.panel().progress(), 0.0);

    // Closed again: host keys work.
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.overlay.panel().state(), PanelState::Opening);
}

#[test]
fn history_survives_across_toggles() {
    let mut app = test_app();
    open_overlay(&mut app);
    type_text(&mut app, "remember me");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    app.overlay.tick();

    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::Up);
    assert_eq!(app.overlay.input().text(), "remember me");
}

#[test]
fn toggle_command_is_registered() {
    let mut app = test_app();
    let names: Vec<&str> = app.commands.iter().map(|spec| spec.name).collect();
    assert_eq!(names, vec![TOGGLE_COMMAND]);

    app.run_command(TOGGLE_COMMAND);
    assert_eq!(app.overlay.panel().state(), PanelState::Opening);
}

#[test]
fn command_with_arguments_is_rejected() {
    let mut app = test_app();
    let err = app.commands.execute_line("toggle_irc now", &mut app.overlay).unwrap_err();
    assert!(matches!(err, CommandError::UnexpectedArguments { .. }));
    assert_eq!(app.overlay.panel().state(), PanelState::Closed);
}

#[test]
fn ctrl_c_quits() {
    let mut app = test_app();
    handle_terminal_event(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(app.should_quit);
}
