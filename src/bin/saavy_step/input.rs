//! Keyboard mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use saavy_step::Command;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Forward to the session as-is
    Session(Command),
    /// Move the grid cursor by (steps, tracks)
    Cursor(isize, isize),
    /// Toggle the cell under the cursor
    ToggleCell,
    /// Nudge the tempo by this many BPM
    Tempo(i32),
    /// Open the settings modal for the cursor's track
    OpenSettings,
    CloseSettings,
    /// Move the modal selection up or down
    SelectField(isize),
    /// Nudge the selected slider by this many notches
    AdjustField(i32),
    Quit,
}

/// Keys while the grid has focus.
pub fn grid_action(key: KeyEvent) -> Option<Action> {
    let command = |c| Some(Action::Session(c));

    match key.code {
        KeyCode::Char(' ') => command(Command::TogglePlay),
        KeyCode::Esc => command(Command::Stop),
        KeyCode::Char('c') | KeyCode::Char('C') if is_command_key(key.modifiers) => {
            command(Command::Clear)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(-1, 0)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(1, 0)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(0, -1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(0, 1)),
        KeyCode::Enter | KeyCode::Char('x') => Some(Action::ToggleCell),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Tempo(1)),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::Tempo(-1)),
        KeyCode::PageUp => Some(Action::Tempo(10)),
        KeyCode::PageDown => Some(Action::Tempo(-10)),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::OpenSettings),
        _ => None,
    }
}

/// Keys while the settings modal is open.
pub fn settings_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(Action::CloseSettings)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectField(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectField(1)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::AdjustField(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::AdjustField(1)),
        KeyCode::PageDown => Some(Action::AdjustField(-10)),
        KeyCode::PageUp => Some(Action::AdjustField(10)),
        // Transport stays reachable from the modal
        KeyCode::Char(' ') => Some(Action::Session(Command::TogglePlay)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        _ => None,
    }
}

/// Ctrl on most terminals, Cmd where the terminal reports it.
fn is_command_key(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}
