//! Game session tests - invariants, scripted scenarios and the game-over latch

use blockfall::core::{GameState, RandomSource, SequenceRng, ShapeKind, SimpleRng};
use blockfall::types::{Direction, GameAction, GameEvent, EMPTY, GRID_HEIGHT, GRID_WIDTH};

/// Session that always spawns `kind` with color tag `1 + color_roll`.
fn always(kind: ShapeKind, color_roll: u32) -> GameState<SequenceRng> {
    GameState::new(SequenceRng::new(vec![kind as u32, color_roll]))
}

/// Move down until the active piece locks.
fn drop_piece<R: RandomSource>(game: &mut GameState<R>) {
    loop {
        let y = game.active().y;
        game.move_down();
        if game.game_over() || game.active().y <= y {
            break;
        }
    }
}

fn assert_active_valid<R: RandomSource>(game: &GameState<R>) {
    for (x, y) in game.active().cells() {
        assert!(
            (0..GRID_WIDTH as i8).contains(&x) && (0..GRID_HEIGHT as i8).contains(&y),
            "active cell ({}, {}) out of bounds",
            x,
            y
        );
        assert_eq!(game.board().get(x, y), Some(EMPTY), "active overlaps ({}, {})", x, y);
    }
}

#[test]
fn test_new_session() {
    let mut game = GameState::with_seed(99);
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert!(!game.game_over());
    assert!(game.particles().is_empty());
    assert_eq!(game.board().cells().iter().filter(|&&c| c != EMPTY).count(), 0);
    assert_active_valid(&game);
    assert_eq!(game.take_events().as_slice(), &[GameEvent::SessionStarted]);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::with_seed(2024);
    let mut b = GameState::with_seed(2024);
    for _ in 0..300 {
        a.advance();
        b.advance();
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_o_piece_falls_and_locks() {
    // Shape index 6 is O; color roll 2 gives tag 3.
    let mut game = always(ShapeKind::O, 2);
    assert_eq!(game.active().x, 5);
    assert_eq!(game.active().y, 0);

    for _ in 0..18 {
        assert!(game.advance());
    }
    assert_eq!(game.active().y, 18);
    assert_eq!(game.board().cells().iter().filter(|&&c| c != EMPTY).count(), 0);

    assert!(game.advance());
    for (x, y) in [(5, 18), (6, 18), (5, 19), (6, 19)] {
        assert_eq!(game.board().get(x, y), Some(3));
    }
    assert_eq!(game.board().cells().iter().filter(|&&c| c != EMPTY).count(), 4);
    assert_eq!((game.active().x, game.active().y), (5, 0));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_scripted_line_clear() {
    let mut game = always(ShapeKind::I, 0);
    game.take_events();

    // Three horizontal bars cover columns 0..12 of the bottom row.
    for _ in 0..4 {
        assert!(game.move_left());
    }
    drop_piece(&mut game);
    drop_piece(&mut game);
    for _ in 0..4 {
        assert!(game.move_right());
    }
    drop_piece(&mut game);
    assert_eq!(game.score(), 0);

    // A vertical bar in the last column completes it.
    assert!(game.rotate());
    for _ in 0..8 {
        assert!(game.move_right());
    }
    assert!(!game.move_right());
    drop_piece(&mut game);

    assert_eq!(game.score(), 10);
    assert_eq!(
        game.take_events().as_slice(),
        &[GameEvent::LinesCleared { rows: 1, score: 10 }]
    );
    assert!(!game.particles().is_empty());
    for y in 17..20 {
        assert_eq!(game.board().get(12, y), Some(1));
    }
    assert_eq!(game.board().cells().iter().filter(|&&c| c != EMPTY).count(), 3);

    // Leveling happens on the next logic tick, not on the player's move.
    assert_eq!(game.level(), 1);
    game.advance();
    assert_eq!(game.level(), 2);
}

#[test]
fn test_invariants_under_random_play() {
    for seed in 1..=20u32 {
        let mut game = GameState::with_seed(seed);
        let mut driver = SimpleRng::new(seed.wrapping_mul(7919));
        let (mut score, mut level, mut ticks) = (game.score(), game.level(), 0u64);

        for _ in 0..2000 {
            if game.game_over() {
                break;
            }
            let action = match driver.next_range(5) {
                0 => GameAction::Move(Direction::Left),
                1 => GameAction::Move(Direction::Right),
                2 => GameAction::Move(Direction::Down),
                3 => GameAction::Rotate,
                _ => GameAction::Tick,
            };
            let snap = game.apply_action(action);

            assert!(snap.score >= score);
            assert!(snap.level == level || snap.level == level + 1);
            assert!(snap.ticks >= ticks);
            (score, level, ticks) = (snap.score, snap.level, snap.ticks);

            if !snap.game_over {
                assert_active_valid(&game);
            }
            assert!(game.board().cells().iter().all(|&c| c <= 7));
        }
    }
}

#[test]
fn test_game_over_latch() {
    let mut game = GameState::with_seed(5);
    let mut guard = 0;
    while !game.game_over() {
        game.advance();
        guard += 1;
        assert!(guard < 10_000, "stacking in place should top out");
    }

    let events = game.take_events();
    let last = events.last().copied();
    assert_eq!(
        last,
        Some(GameEvent::GameOver {
            score: game.score(),
            level: game.level(),
        })
    );

    let frozen = game.snapshot();
    assert!(!frozen.playable());
    for action in [
        GameAction::Move(Direction::Left),
        GameAction::Move(Direction::Right),
        GameAction::Move(Direction::Down),
        GameAction::Rotate,
        GameAction::Tick,
    ] {
        assert_eq!(game.apply_action(action), frozen);
    }
    assert!(!game.tick(60_000));
    assert_eq!(game.snapshot(), frozen);
    assert!(game.take_events().is_empty());
}

#[test]
fn test_restart_replaces_session() {
    let mut game = GameState::with_seed(5);
    while !game.game_over() {
        game.advance();
    }

    game = GameState::with_seed(6);
    assert!(!game.game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.level(), 1);
    assert_eq!(game.snapshot().filled_cells(), 0);
    assert_eq!(game.take_events().as_slice(), &[GameEvent::SessionStarted]);
}

#[test]
fn test_tick_cadence_follows_level() {
    let mut game = GameState::with_seed(8);
    assert_eq!(game.tick_interval_ms(), 333);

    let mut frames = 0;
    while !game.tick(16) {
        frames += 1;
    }
    // 333ms at 16ms per frame: the 21st frame crosses the interval.
    assert_eq!(frames, 20);
    assert_eq!(game.snapshot().ticks, 1);
}

#[test]
fn test_apply_action_moves_and_rotates() {
    let mut game = always(ShapeKind::T, 0);
    let snap = game.apply_action(GameAction::Move(Direction::Right));
    assert_eq!(snap.active.map(|a| a.x), Some(6));

    let snap = game.apply_action(GameAction::Rotate);
    let active = snap.active.unwrap();
    assert_eq!((active.shape.width(), active.shape.height()), (2, 3));
}

#[test]
fn test_level_steps_on_final_tick() {
    // O pieces stack in columns 5..=6 until the spawn collides; no row ever fills.
    let mut game = always(ShapeKind::O, 0);
    while !game.game_over() {
        game.advance();
    }
    let last = game.take_events().last().copied();
    assert_eq!(
        last,
        Some(GameEvent::GameOver {
            score: game.score(),
            level: game.level(),
        })
    );
}
