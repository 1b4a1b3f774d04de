//! Key mapping from terminal events to command characters.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to the character the game understands.
///
/// Character keys pass through lower-cased. Arrow keys stand in for
/// `w`/`a`/`s`/`d`; Ctrl-C and Esc give `x`, since raw mode swallows the interrupt.
/// Release and repeat events are dropped.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some('x')
        }
        KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
        KeyCode::Up => Some('w'),
        KeyCode::Down => Some('s'),
        KeyCode::Left => Some('a'),
        KeyCode::Right => Some('d'),
        KeyCode::Esc => Some('x'),
        _ => None,
    }
}
