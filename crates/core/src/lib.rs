//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, so the same session can be driven by
//! the terminal host, a test, or a benchmark.
//!
//! # Module Structure
//!
//! - [`board`]: 13x20 color grid with collision checks, commit and row clearing
//! - [`game_state`]: Session state: active piece, score, level, game-over latch, events
//! - [`pieces`]: The seven shapes and clockwise rotation
//! - [`rng`]: Injectable random source plus a seeded LCG and a scripted sequence
//! - [`scoring`]: Row rewards, level stepping and gravity cadence
//! - [`effects`]: Cosmetic particles emitted on line clears
//! - [`snapshot`]: Read-only copies for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centered on the top row with a random shape and color.
//! - Rotation is clockwise only and is rejected outright on collision (no wall kicks).
//! - A piece that cannot fall locks immediately; full rows clear for 10 points each.
//! - Level `n` advances once score reaches `10 * n`, at most one level per tick.
//! - A spawn that collides ends the session for good.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SequenceRng};
//! use blockfall_types::{Direction, GameAction};
//!
//! // Always an O piece (index 6) with color tag 1
//! let mut game = GameState::new(SequenceRng::new(vec![6, 0]));
//! game.apply_action(GameAction::Move(Direction::Left));
//! let snap = game.apply_action(GameAction::Tick);
//!
//! let active = snap.active.unwrap();
//! assert_eq!((active.x, active.y), (4, 1));
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Logic ticks run at `2 + level` per second, never faster than one per 50ms.
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod board;
pub mod effects;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use effects::{Effects, Particle};
pub use game_state::{ActivePiece, EventQueue, GameState};
pub use pieces::{Shape, ShapeKind};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::{line_clear_score, next_level, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
