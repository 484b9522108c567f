//! Landing input handling

use super::state::LandingState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Exit the application
    Exit,
    /// Execute a panel command
    Command(String),
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle terminal input and update state
pub fn handle_input(state: &mut LandingState, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut LandingState, key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }

    if !state.panel.is_open() {
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return InputAction::None;
        }
        return match key.code {
            KeyCode::Char('q') => InputAction::Exit,
            KeyCode::Char('c') | KeyCode::Enter => {
                state.panel.open();
                InputAction::None
            }
            _ => InputAction::None,
        };
    }

    if state.panel.is_loading() {
        // Input stays frozen until the reply lands; closing is still allowed.
        if key.code == KeyCode::Esc {
            state.panel.close();
        }
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => {
                state.clear_input();
                InputAction::None
            }
            KeyCode::Char('u') => InputAction::ScrollTop,
            KeyCode::Char('d') => InputAction::ScrollBottom,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Enter => {
            if state.is_command() {
                return InputAction::Command(state.take_input());
            }
            InputAction::Submit
        }
        KeyCode::Esc => {
            if state.panel.input().is_empty() {
                state.panel.close();
            } else {
                state.clear_input();
            }
            InputAction::None
        }
        KeyCode::Backspace => {
            state.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char(c) => {
            state.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Parse a panel command
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches('/');
    let name = cmd
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "reset" | "clear" | "new" => CommandResult::Reset,
        "close" | "hide" => CommandResult::Close,
        "exit" | "quit" | "bye" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    Reset,
    Close,
    Exit,
    Unknown(String),
}
