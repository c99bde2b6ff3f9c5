//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Quit keys are checked separately with [`should_quit`] so that Ctrl-C is never
/// read as a rotation.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('c')
        | KeyCode::Char('C')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::RotateCw),
        KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(GameAction::RotateCcw),

        // Swap in the preview piece
        KeyCode::Char(' ') => Some(GameAction::SpawnNext),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Down), Some(GameAction::SoftDrop));

        assert_eq!(key(KeyCode::Char('H')), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('a')), Some(GameAction::MoveLeft));
        assert_eq!(key(KeyCode::Char('L')), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Char('d')), Some(GameAction::MoveRight));
        assert_eq!(key(KeyCode::Char('J')), Some(GameAction::SoftDrop));
        assert_eq!(key(KeyCode::Char('s')), Some(GameAction::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('c')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('W')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('k')), Some(GameAction::RotateCw));
        assert_eq!(key(KeyCode::Char('x')), Some(GameAction::RotateCcw));
        assert_eq!(key(KeyCode::Char('Z')), Some(GameAction::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::SpawnNext));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(key(KeyCode::Char('p')), None);
        assert_eq!(key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_ctrl_c_maps_to_quit_not_rotate() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameAction::Quit)
        );
    }
}
