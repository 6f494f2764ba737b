use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};
use crate::scroll::Command;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Navigation command for the viewport
    Command(Command),
    /// Open or close the help popup
    ToggleHelp,
    /// Leave the help popup
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Ctrl+C still quits; any other key closes help
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Command(Command::Quit);
        }
        return Action::ExitMode;
    }

    keymap
        .get(&KeyBinding::from_event(&key))
        .unwrap_or(Action::None)
}
