//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, shapes, RNG, scoring
//! and effects. Each logic tick runs the cycle
//!
//! ```text
//! FALLING --(can't move down)--> LOCKING -> CLEARING -> SPAWNING --+--> FALLING
//!                                                                   +--> GAME_OVER
//! ```
//!
//! Game over is a one-way latch. Restarting means constructing a new
//! [`GameState`] and dropping the old one.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::effects::{Effects, Particle};
use crate::pieces::{Shape, ShapeKind};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{line_clear_score, next_level, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Pending events between two host drains; the oldest is dropped on overflow.
const EVENT_CAPACITY: usize = 8;

/// Events queued since the last [`GameState::take_events`].
pub type EventQueue = ArrayVec<GameEvent, EVENT_CAPACITY>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub color: CellTag,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece horizontally centered on the top row
    pub fn spawn(shape: Shape, color: CellTag) -> Self {
        Self {
            shape,
            color,
            x: (GRID_WIDTH / 2) as i8 - (shape.width() / 2) as i8,
            y: 0,
        }
    }

    /// Check the piece offset by (dx, dy), optionally with a replacement shape
    ///
    /// Valid iff every filled cell lands inside the grid on an empty cell.
    pub fn is_valid_move(&self, board: &Board, dx: i8, dy: i8, candidate: Option<&Shape>) -> bool {
        let shape = candidate.unwrap_or(&self.shape);
        shape
            .filled_cells()
            .all(|(cx, cy)| !board.is_occupied(self.x + cx + dx, self.y + cy + dy))
    }

    /// The shape rotated 90° clockwise; anchor unchanged
    pub fn rotated(&self) -> Shape {
        self.shape.rotated_cw()
    }

    /// Absolute grid coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    board: Board,
    active: ActivePiece,
    effects: Effects,
    rng: R,
    score: u32,
    level: u32,
    game_over: bool,
    gravity_timer_ms: u32,
    ticks: u64,
    events: EventQueue,
}

impl GameState<SimpleRng> {
    /// Create a new session driven by the built-in LCG
    pub fn with_seed(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new session and spawn its first piece
    pub fn new(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            // Placeholder; replaced by the spawn below.
            active: ActivePiece::spawn(ShapeKind::O.shape(), 1),
            effects: Effects::new(),
            rng,
            score: 0,
            level: START_LEVEL,
            game_over: false,
            gravity_timer_ms: 0,
            ticks: 0,
            events: EventQueue::new(),
        };
        state.push_event(GameEvent::SessionStarted);
        state.spawn_piece();
        state
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn particles(&self) -> &[Particle] {
        self.effects.particles()
    }

    /// Current gravity interval
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.particles.clear();
        out.particles.extend_from_slice(self.effects.particles());
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.game_over;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Drain events queued since the last call
    pub fn take_events(&mut self) -> EventQueue {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Spawn a random piece; latches game over if it collides
    fn spawn_piece(&mut self) -> bool {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::LEN as u32) as usize];
        let color = 1 + self.rng.next_range(u32::from(PALETTE_COLORS)) as CellTag;
        self.active = ActivePiece::spawn(kind.shape(), color);

        if !self.active.is_valid_move(&self.board, 0, 0, None) {
            self.game_over = true;
            self.push_event(GameEvent::GameOver {
                score: self.score,
                level: self.level,
            });
            return false;
        }
        true
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over || !self.active.is_valid_move(&self.board, dx, dy, None) {
            return false;
        }
        self.active.x += dx;
        self.active.y += dy;
        true
    }

    /// Rotate the active piece 90° clockwise in place
    ///
    /// Rejected outright (no kick) when the rotated shape would collide.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.active.rotated();
        if !self.active.is_valid_move(&self.board, 0, 0, Some(&rotated)) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.move_piece(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_piece(Direction::Right)
    }

    /// Move down one row, or lock the piece if it is resting
    ///
    /// Returns false only when the session is already over.
    pub fn move_down(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    pub fn move_piece(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Down => self.move_down(),
            sideways => {
                let (dx, dy) = sideways.offset();
                self.try_move(dx, dy)
            }
        }
    }

    /// Commit the active piece, clear rows, then spawn the next piece
    fn lock_piece(&mut self) {
        let piece = self.active;
        self.board.commit(&piece.shape, piece.x, piece.y, piece.color);

        let cleared_rows = self.board.clear_full_rows();
        if !cleared_rows.is_empty() {
            self.score = self
                .score
                .saturating_add(line_clear_score(cleared_rows.len()));
            self.effects.burst(&mut self.rng);
            self.push_event(GameEvent::LinesCleared {
                rows: cleared_rows.len() as u32,
                score: self.score,
            });
        }

        self.spawn_piece();
    }

    /// Run one logic tick: gravity, effects, then level progression
    ///
    /// The level check also runs on the tick that tops out; the pending
    /// game-over event is updated so it reports the final level.
    ///
    /// Returns false (and changes nothing) once the session is over.
    pub fn advance(&mut self) -> bool {
        if !self.move_down() {
            return false;
        }
        self.effects.step();
        self.level = next_level(self.score, self.level);
        if self.game_over {
            if let Some(GameEvent::GameOver { level, .. }) = self.events.last_mut() {
                *level = self.level;
            }
        }
        self.ticks += 1;
        true
    }

    /// Feed elapsed host time; runs as many logic ticks as the level cadence allows
    ///
    /// Returns whether at least one tick ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }
        self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);

        let mut advanced = false;
        while !self.game_over {
            let interval = self.tick_interval_ms();
            if self.gravity_timer_ms < interval {
                break;
            }
            self.gravity_timer_ms -= interval;
            advanced |= self.advance();
        }
        advanced
    }

    /// Apply a game action and return the resulting state
    pub fn apply_action(&mut self, action: GameAction) -> GameSnapshot {
        match action {
            GameAction::Move(direction) => {
                self.move_piece(direction);
            }
            GameAction::Rotate => {
                self.rotate();
            }
            GameAction::Tick => {
                self.advance();
            }
        }
        self.snapshot()
    }
}
