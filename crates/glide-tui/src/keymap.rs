use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use glide_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;
use crate::scroll::Command;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Binding for a terminal key event
    ///
    /// Terminals disagree on whether shifted characters carry SHIFT, so
    /// uppercase letters always get it and other characters never do.
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers;
        if let KeyCode::Char(c) = key.code {
            if c.is_ascii_uppercase() {
                modifiers.insert(KeyModifiers::SHIFT);
            } else if !c.is_alphabetic() {
                modifiers.remove(KeyModifiers::SHIFT);
            }
        }
        Self::new(key.code, modifiers)
    }
}

/// Runtime keymap for efficient key-to-action lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Configured key labels in declaration order, for the help popup
    entries: Vec<(String, Action)>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();
        let mut entries = Vec::new();

        // Helper to add binding with conflict detection
        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                    entries.push((key_str.trim().to_string(), action));
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.line_down, Action::Command(Command::LineDown));
        add_binding(&config.line_up, Action::Command(Command::LineUp));
        add_binding(&config.page_down, Action::Command(Command::PageDown));
        add_binding(
            &config.smooth_half_page_down,
            Action::Command(Command::HalfPageDownAnimated),
        );
        add_binding(
            &config.smooth_half_page_up,
            Action::Command(Command::HalfPageUpAnimated),
        );
        add_binding(&config.full_page_down, Action::Command(Command::FullPageDown));
        add_binding(&config.full_page_up, Action::Command(Command::FullPageUp));
        add_binding(&config.half_page_down, Action::Command(Command::HalfPageDown));
        add_binding(&config.half_page_up, Action::Command(Command::HalfPageUp));
        add_binding(&config.jump_to_start, Action::Command(Command::JumpToStart));
        add_binding(&config.jump_to_end, Action::Command(Command::JumpToEnd));
        add_binding(&config.scroll_left, Action::Command(Command::ScrollLeft));
        add_binding(&config.scroll_right, Action::Command(Command::ScrollRight));
        add_binding(&config.help, Action::ToggleHelp);
        add_binding(&config.quit, Action::Command(Command::Quit));

        // Ctrl+C always quits
        bindings.insert(
            KeyBinding::ctrl(KeyCode::Char('c')),
            Action::Command(Command::Quit),
        );
        // Navigation keys stay available as alternatives
        let fallbacks = [
            (KeyCode::Down, Command::LineDown),
            (KeyCode::Up, Command::LineUp),
            (KeyCode::PageDown, Command::PageDown),
            (KeyCode::PageUp, Command::FullPageUp),
            (KeyCode::Home, Command::JumpToStart),
            (KeyCode::End, Command::JumpToEnd),
            (KeyCode::Left, Command::ScrollLeft),
            (KeyCode::Right, Command::ScrollRight),
            // vi "1G" shorthand
            (KeyCode::Char('1'), Command::JumpToStart),
        ];
        for (code, command) in fallbacks {
            bindings
                .entry(KeyBinding::simple(code))
                .or_insert(Action::Command(command));
        }

        Self { bindings, entries }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<Action> {
        self.bindings.get(binding).copied()
    }

    /// Configured bindings in declaration order
    pub fn entries(&self) -> &[(String, Action)] {
        &self.entries
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "j", "k", "q", "?", etc.
/// - Uppercase (Shift): "G"
/// - Ctrl: "<C-d>", "<C-u>"
/// - Shift: "<S-g>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<PageDown>", "<Home>", ...
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    // Handle special notation <...>
    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    // Uppercase letters are Shift+letter
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    // Handle modifiers: C- (Ctrl), S- (Shift)
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = match parse_key_name(rest)? {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_uppercase()),
            other => other,
        };
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "d" in "<C-d>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }
    }
}
