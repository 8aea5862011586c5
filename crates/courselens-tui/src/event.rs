//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    /// Move focus to the other button column.
    SwitchColumn,

    /// Activate the button under the cursor.
    Activate,
    /// Activate the n-th button (zero-based) of the focused column.
    ActivateNth(usize),

    ToggleHelp,
    ToggleTheme,
    Cancel,
    Quit,
    /// Quit from any mode.
    ForceQuit,

    None,
}

impl KeyAction {
    /// Map a key event to an action.
    ///
    /// Keys held with Ctrl or Alt are ignored, except `Ctrl-c`.
    pub fn from_key_event(event: KeyEvent) -> Self {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Self::ForceQuit,
                _ => Self::None,
            };
        }
        if event.modifiers.contains(KeyModifiers::ALT) {
            return Self::None;
        }

        match event.code {
            KeyCode::Up | KeyCode::Char('k') => Self::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => Self::MoveDown,
            KeyCode::Home | KeyCode::Char('g') => Self::JumpToTop,
            KeyCode::End | KeyCode::Char('G') => Self::JumpToBottom,
            KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => Self::SwitchColumn,
            KeyCode::Enter | KeyCode::Char(' ') => Self::Activate,
            KeyCode::Char(c @ '1'..='9') => Self::ActivateNth(c as usize - '1' as usize),
            KeyCode::Char('?') => Self::ToggleHelp,
            KeyCode::Char('t') => Self::ToggleTheme,
            KeyCode::Esc => Self::Cancel,
            KeyCode::Char('q') => Self::Quit,
            _ => Self::None,
        }
    }
}

/// Key bindings by section, as `(keys, description)` pairs.
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/k ↑/↓", "Move up/down"),
            ("g/G", "First/last button"),
            ("Tab h/l", "Switch plugin column"),
        ],
    ),
    (
        "Plugins",
        &[
            ("Enter/Space", "Load or show plugin"),
            ("1-9", "Activate n-th plugin"),
        ],
    ),
    (
        "Display",
        &[
            ("t", "Toggle dark/light theme"),
            ("?", "Show this help"),
            ("q Ctrl-c", "Quit"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyAction {
        KeyAction::from_key_event(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_number_keys() {
        assert_eq!(key(KeyCode::Char('1'), KeyModifiers::NONE), KeyAction::ActivateNth(0));
        assert_eq!(key(KeyCode::Char('9'), KeyModifiers::NONE), KeyAction::ActivateNth(8));
        assert_eq!(key(KeyCode::Char('0'), KeyModifiers::NONE), KeyAction::None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key(KeyCode::Char('q'), KeyModifiers::NONE), KeyAction::Quit);
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::ForceQuit);
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::NONE), KeyAction::None);
        assert_eq!(key(KeyCode::Char('q'), KeyModifiers::ALT), KeyAction::None);
    }

    #[test]
    fn test_shifted_keys() {
        assert_eq!(key(KeyCode::Char('G'), KeyModifiers::SHIFT), KeyAction::JumpToBottom);
        assert_eq!(key(KeyCode::Char('?'), KeyModifiers::SHIFT), KeyAction::ToggleHelp);
        assert_eq!(key(KeyCode::BackTab, KeyModifiers::SHIFT), KeyAction::SwitchColumn);
    }

    #[test]
    fn test_column_switching() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), KeyAction::SwitchColumn);
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), KeyAction::SwitchColumn);
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), KeyAction::Activate);
    }
}
