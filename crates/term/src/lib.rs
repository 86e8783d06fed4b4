//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout libraries and renders into a simple framebuffer that is
//! diffed and flushed to a crossterm backend.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Screen, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
