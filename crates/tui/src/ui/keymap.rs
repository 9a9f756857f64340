use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    NextField,
    Submit,
    Backspace,
    Delete,
    Up,
    Down,
    Input(char),
    None,
}

/// Letters are always form input, so every command lives on a special key or
/// a Ctrl chord.
pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppAction::Quit,
            KeyCode::Char('d') => AppAction::Delete,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => AppAction::Quit,
        KeyCode::Tab | KeyCode::BackTab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Delete => AppAction::Delete,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn letters_are_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            AppAction::Input('q')
        );
        assert_eq!(
            map_key(key(KeyCode::Char('D'), KeyModifiers::SHIFT)),
            AppAction::Input('D')
        );
    }

    #[test]
    fn control_chords() {
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
        assert_eq!(
            map_key(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            AppAction::Delete
        );
        assert_eq!(
            map_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            AppAction::None
        );
    }

    #[test]
    fn special_keys() {
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), AppAction::Quit);
        assert_eq!(map_key(key(KeyCode::Tab, KeyModifiers::NONE)), AppAction::NextField);
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE)), AppAction::Submit);
        assert_eq!(map_key(key(KeyCode::Delete, KeyModifiers::NONE)), AppAction::Delete);
    }
}
