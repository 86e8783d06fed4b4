//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Commands accepted outside of play (title and game-over screens).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Start a fresh session
    Confirm,
    Quit,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right => Some(GameAction::Move(Direction::Right)),
        KeyCode::Down => Some(GameAction::Move(Direction::Down)),

        KeyCode::Up | KeyCode::Char(' ') => Some(GameAction::Rotate),

        _ => None,
    }
}

/// Map keyboard input on the title and game-over screens.
///
/// Space doubles as a quit key here since it only rotates during play.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(MenuCommand::Quit);
    }
    match key.code {
        KeyCode::Enter => Some(MenuCommand::Confirm),
        KeyCode::Char(' ') => Some(MenuCommand::Quit),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
