//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, event logging).
//!
//! # Grid Dimensions
//!
//! The playfield mirrors a 390 × 600 pixel window cut into 30 pixel cells:
//!
//! - **Width**: 13 columns (indexed 0-12)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Cell size**: 30 pixels (particle effects live in pixel space)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame interval (~60 FPS) |
//! | `BASE_TICKS_PER_SECOND` | 2 | Logic ticks per second before the level bonus |
//! | `MIN_TICK_INTERVAL_MS` | 50 | Fastest gravity cadence |
//!
//! A session at level `n` runs `2 + n` logic ticks per second.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Direction::Right.offset(), (1, 0));
//!
//! assert_eq!(GRID_WIDTH, 13);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (13 columns)
pub const GRID_WIDTH: u8 = 13;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Size of one grid cell in pixel space.
pub const CELL_SIZE: u16 = 30;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Logic ticks per second at level 0; each level adds one.
pub const BASE_TICKS_PER_SECOND: u32 = 2;

/// Floor for the gravity interval.
pub const MIN_TICK_INTERVAL_MS: u32 = 50;

/// Points awarded per cleared row.
pub const SCORE_PER_ROW: u32 = 10;

/// Score span of one level: level `n` ends once score reaches `n * LEVEL_SCORE_STEP`.
pub const LEVEL_SCORE_STEP: u32 = 10;

/// Level of a freshly constructed session.
pub const START_LEVEL: u32 = 1;

/// Upper bound on live particles.
pub const MAX_PARTICLES: usize = 256;

/// A cell on the board.
///
/// - `0`: empty
/// - `1..=PALETTE_COLORS`: occupied, drawn with `PALETTE[tag]`
pub type CellTag = u8;

/// Empty cell tag.
pub const EMPTY: CellTag = 0;

/// Number of non-background palette entries (valid piece colors are `1..=PALETTE_COLORS`).
pub const PALETTE_COLORS: u8 = 7;

/// Palette as RGB triples. Index 0 is the background.
///
/// black, gold, cyan, green, orange, red, purple, blue
pub const PALETTE: [(u8, u8, u8); PALETTE_COLORS as usize + 1] = [
    (0x00, 0x00, 0x00),
    (0xFF, 0xD7, 0x00),
    (0x00, 0xFF, 0xFF),
    (0x00, 0xFF, 0x00),
    (0xFF, 0xA5, 0x00),
    (0xFF, 0x00, 0x00),
    (0x80, 0x00, 0x80),
    (0x00, 0x00, 0xFF),
];

/// Horizontal or downward translation of the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Grid offset `(dx, dy)` for this direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Direction;
    ///
    /// assert_eq!(Direction::Left.offset(), (-1, 0));
    /// assert_eq!(Direction::Down.offset(), (0, 1));
    /// ```
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Game actions that can be applied to a session
///
/// Produced by the input layer and by tests. Restart and quit are host
/// concerns and deliberately absent: restarting replaces the session value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Translate the active piece one cell
    Move(Direction),
    /// Rotate the active piece 90° clockwise
    Rotate,
    /// Run one logic tick (gravity, effects, level progression)
    Tick,
}

/// Core-side event emitted for presentation and audio triggers.
///
/// The session queues these; the host drains them once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new session was constructed and its first piece spawned.
    SessionStarted,
    /// One or more rows were cleared by a single lock.
    LinesCleared { rows: u32, score: u32 },
    /// A freshly spawned piece collided; the session is over.
    GameOver { score: u32, level: u32 },
}

impl GameEvent {
    /// Stable event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::SessionStarted => "session_start",
            GameEvent::LinesCleared { .. } => "line_clear",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}
