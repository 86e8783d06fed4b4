//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] during play and
//! into [`MenuCommand`] on the title and game-over screens. Holds no state: every
//! key press is exactly one action, matching terminals without key-release events.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, handle_menu_key, should_quit, MenuCommand};
