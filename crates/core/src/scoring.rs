//! Scoring module - row rewards, level stepping and gravity cadence
//!
//! - Every cleared row is worth a flat [`SCORE_PER_ROW`] points.
//! - Level `n` is complete once score reaches `n * LEVEL_SCORE_STEP`; the level
//!   advances by at most one per tick, even when a clear jumps several thresholds.
//! - The session runs `BASE_TICKS_PER_SECOND + level` logic ticks per second.

use crate::types::{
    BASE_TICKS_PER_SECOND, LEVEL_SCORE_STEP, MIN_TICK_INTERVAL_MS, SCORE_PER_ROW,
};

/// Points for clearing `rows` rows in one lock
pub fn line_clear_score(rows: usize) -> u32 {
    (rows as u32).saturating_mul(SCORE_PER_ROW)
}

/// Level after one progression check
///
/// Steps by a single level when `score >= level * LEVEL_SCORE_STEP`.
pub fn next_level(score: u32, level: u32) -> u32 {
    if score >= level.saturating_mul(LEVEL_SCORE_STEP) {
        level.saturating_add(1)
    } else {
        level
    }
}

/// Gravity interval for a level, in milliseconds per logic tick
pub fn tick_interval_ms(level: u32) -> u32 {
    let ticks_per_second = BASE_TICKS_PER_SECOND.saturating_add(level);
    (1000 / ticks_per_second).max(MIN_TICK_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 10);
        assert_eq!(line_clear_score(4), 40);
    }

    #[test]
    fn test_next_level_threshold() {
        assert_eq!(next_level(0, 1), 1);
        assert_eq!(next_level(9, 1), 1);
        assert_eq!(next_level(10, 1), 2);
        assert_eq!(next_level(19, 2), 2);
        assert_eq!(next_level(20, 2), 3);
    }

    #[test]
    fn test_next_level_single_step() {
        // 40 points crosses thresholds for levels 1..=4, but only one step is taken.
        assert_eq!(next_level(40, 1), 2);
        assert_eq!(next_level(40, 2), 3);
    }

    #[test]
    fn test_tick_interval_by_level() {
        assert_eq!(tick_interval_ms(0), 500);
        assert_eq!(tick_interval_ms(1), 333);
        assert_eq!(tick_interval_ms(2), 250);
        assert_eq!(tick_interval_ms(8), 100);
        assert_eq!(tick_interval_ms(100), MIN_TICK_INTERVAL_MS);
    }

    #[test]
    fn test_tick_interval_non_increasing() {
        let mut prev = tick_interval_ms(1);
        for level in 2..200 {
            let next = tick_interval_ms(level);
            assert!(next <= prev, "level {} slower than {}", level, level - 1);
            prev = next;
        }
    }
}
