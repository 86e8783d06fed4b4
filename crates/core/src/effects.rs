//! Effects module - cosmetic particles emitted on line clears
//!
//! Particles live in pixel space (`CELL_SIZE` pixels per grid cell) and are never
//! read by gameplay. A burst drops one particle from the top of every column;
//! each step a particle falls by its speed and then loses `decay` speed, and it
//! is discarded once its speed is no longer positive.

use crate::rng::RandomSource;
use crate::types::{CELL_SIZE, GRID_WIDTH, MAX_PARTICLES, PALETTE};

/// Initial fall speed range, pixels per step.
const SPEED_RANGE: (f32, f32) = (1.0, 3.0);
/// Speed lost per step.
const DECAY_RANGE: (f32, f32) = (0.1, 0.5);
/// Heading in degrees. Carried for renderers; the fall itself is vertical.
const ANGLE_RANGE: (f32, f32) = (0.0, 360.0);
/// Square side in pixels, inclusive.
const SIZE_MIN: u8 = 6;
const SIZE_MAX: u8 = 12;

/// A single cosmetic particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub angle: f32,
    pub decay: f32,
    pub size: u8,
    /// Palette index, background included
    pub color: u8,
}

impl Particle {
    fn spawn(column: u8, rng: &mut impl RandomSource) -> Self {
        let speed = rng.uniform(SPEED_RANGE.0, SPEED_RANGE.1);
        let angle = rng.uniform(ANGLE_RANGE.0, ANGLE_RANGE.1);
        let size = SIZE_MIN + rng.next_range(u32::from(SIZE_MAX - SIZE_MIN) + 1) as u8;
        let color = rng.next_range(PALETTE.len() as u32) as u8;
        let decay = rng.uniform(DECAY_RANGE.0, DECAY_RANGE.1);
        Self {
            x: f32::from(u16::from(column) * CELL_SIZE + CELL_SIZE / 2),
            y: 0.0,
            speed,
            angle,
            decay,
            size,
            color,
        }
    }

    /// Advance one step
    pub fn update(&mut self) {
        self.y += self.speed;
        self.speed -= self.decay;
    }

    pub fn is_alive(&self) -> bool {
        self.speed > 0.0
    }
}

/// The live particle list
#[derive(Debug, Clone, Default)]
pub struct Effects {
    particles: Vec<Particle>,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one particle at the top of every grid column
    pub fn burst(&mut self, rng: &mut impl RandomSource) {
        self.particles
            .extend((0..GRID_WIDTH).map(|column| Particle::spawn(column, rng)));
        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }

    /// Advance every particle and drop the spent ones
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.update();
        }
        self.particles.retain(Particle::is_alive);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }
}
