use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    StartGame,
}

/// Browser key codes for each action: arrows, WASD, vi keys, Enter and Space.
const KEYS: &[(Action, &[u32])] = &[
    (Action::Turn(Direction::Up), &[38, 75, 87]),
    (Action::Turn(Direction::Down), &[40, 74, 83]),
    (Action::Turn(Direction::Left), &[37, 65, 72]),
    (Action::Turn(Direction::Right), &[39, 68, 76]),
    (Action::StartGame, &[13, 32]),
];

pub fn action_for(key_code: u32) -> Option<Action> {
    KEYS.iter()
        .find(|(_, codes)| codes.contains(&key_code))
        .map(|(action, _)| *action)
}

/// Translates a terminal key into the key code a browser would report.
pub fn key_code_of(code: &KeyCode) -> Option<u32> {
    match code {
        KeyCode::Up => Some(38),
        KeyCode::Down => Some(40),
        KeyCode::Left => Some(37),
        KeyCode::Right => Some(39),
        KeyCode::Enter => Some(13),
        KeyCode::Char(' ') => Some(32),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase() as u32),
        _ => None,
    }
}

pub fn is_quit(ev: &KeyEvent) -> bool {
    match ev.code {
        KeyCode::Char('c') => ev.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

/// Only presses count; releases and repeats reported by some terminals do not.
pub fn is_press(ev: &KeyEvent) -> bool {
    ev.kind == KeyEventKind::Press
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn arrows_wasd_and_vi_keys_turn() {
        for (codes, dir) in [([38, 75, 87], Up), ([40, 74, 83], Down), ([37, 65, 72], Left), ([39, 68, 76], Right)] {
            for code in codes {
                assert_eq!(action_for(code), Some(Action::Turn(dir)), "code {}", code);
            }
        }
    }

    #[test]
    fn enter_and_space_start() {
        assert_eq!(action_for(13), Some(Action::StartGame));
        assert_eq!(action_for(32), Some(Action::StartGame));
    }

    #[test]
    fn unmapped_codes() {
        for code in [0, 27, 81, 999] {
            assert_eq!(action_for(code), None);
        }
    }

    #[test]
    fn terminal_keys_translate_to_browser_codes() {
        assert_eq!(key_code_of(&KeyCode::Left).and_then(action_for), Some(Action::Turn(Left)));
        assert_eq!(key_code_of(&KeyCode::Char('w')).and_then(action_for), Some(Action::Turn(Up)));
        assert_eq!(key_code_of(&KeyCode::Char('J')).and_then(action_for), Some(Action::Turn(Down)));
        assert_eq!(key_code_of(&KeyCode::Char('l')).and_then(action_for), Some(Action::Turn(Right)));
        assert_eq!(key_code_of(&KeyCode::Char(' ')).and_then(action_for), Some(Action::StartGame));
        assert_eq!(key_code_of(&KeyCode::Enter).and_then(action_for), Some(Action::StartGame));
        assert_eq!(key_code_of(&KeyCode::Tab), None);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)));
    }
}
