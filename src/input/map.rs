//! Key mapping from terminal events to input commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Dir;

/// Frontend-level commands produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Move the selection cursor
    Move(Dir),
    /// Select the cell under the cursor
    Confirm,
    Pause,
    Restart,
    /// Toggle the winning autopilot
    AutoWin,
    /// Toggle the losing autopilot
    AutoLose,
}

/// Map keyboard input to input commands
pub fn map_key(key: KeyEvent) -> Option<InputCommand> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputCommand::Move(Dir::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputCommand::Move(Dir::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(InputCommand::Move(Dir::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputCommand::Move(Dir::Down))
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputCommand::Confirm),

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),

        // Autopilots
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputCommand::AutoWin),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(InputCommand::AutoLose),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(InputCommand::Move(Dir::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(InputCommand::Move(Dir::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('K'))),
            Some(InputCommand::Move(Dir::Up))
        );
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(InputCommand::Confirm)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputCommand::Confirm)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }
}
