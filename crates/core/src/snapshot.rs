//! Read-only copies of session state for renderers and hosts.

use crate::effects::Particle;
use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::{CellTag, EMPTY, GRID_HEIGHT, GRID_WIDTH, START_LEVEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: CellTag,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute grid coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[CellTag; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    /// Logic ticks run so far
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[EMPTY; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.active = None;
        self.particles.clear();
        self.score = 0;
        self.level = START_LEVEL;
        self.game_over = false;
        self.ticks = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Number of non-empty board cells
    pub fn filled_cells(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY)
            .count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            particles: Vec::new(),
            score: 0,
            level: START_LEVEL,
            game_over: false,
            ticks: 0,
        }
    }
}
