//! End-to-end runner simulation tests: avoidance polarity, pass-once
//! scoring, difficulty scaling, and the frozen game-over state.

use folio::arcade::runner::logic::{check_collision, process_input, tick_runner, RunnerInput};
use folio::arcade::runner::types::{
    Obstacle, ObstacleKind, RunnerGame, Stance, GROUND_ROW, INITIAL_SPAWN_INTERVAL, PLAYER_COL,
    PLAYER_WIDTH, SPAWN_INTERVAL_FLOOR,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME_MS: u64 = 16;

/// A game that is playing (past the start gate) and will not spawn any
/// obstacles on its own, so tests control the field exactly.
fn quiet_game() -> RunnerGame {
    let mut game = RunnerGame::new();
    game.waiting_to_start = false;
    game.spawn_timer = u32::MAX;
    game.spawn_interval = u32::MAX;
    game
}

fn low_obstacle(x: f64) -> Obstacle {
    Obstacle {
        x,
        kind: ObstacleKind::Low,
        width: 1,
        height: 1,
        passed: false,
    }
}

fn high_obstacle(x: f64) -> Obstacle {
    Obstacle {
        x,
        kind: ObstacleKind::High,
        width: 2,
        height: 8,
        passed: false,
    }
}

#[test]
fn test_jump_clears_low_obstacle_and_scores_once() {
    // Scenario: jump issued the instant the obstacle's leading edge
    // reaches the player's leading edge
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    game.obstacles.push(low_obstacle((PLAYER_COL + PLAYER_WIDTH) as f64));

    process_input(&mut game, RunnerInput::Jump);

    let mut last_score = game.score;
    for _ in 0..200 {
        tick_runner(&mut game, FRAME_MS, &mut rng);
        assert!(!game.game_over, "a timed jump must clear a low obstacle");
        // Score never decreases during an active run
        assert!(game.score >= last_score);
        last_score = game.score;
        if game.obstacles.is_empty() {
            break;
        }
    }

    assert_eq!(game.score, 1, "passing one obstacle scores exactly one point");
    assert!(game.obstacles.is_empty(), "cleared obstacle is removed off-screen");
}

#[test]
fn test_low_obstacle_hits_grounded_player() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    game.obstacles.push(low_obstacle((PLAYER_COL + 1) as f64));

    tick_runner(&mut game, FRAME_MS, &mut rng);

    assert!(game.game_over, "standing into a low obstacle ends the run");
}

#[test]
fn test_collision_polarity_all_four_branches() {
    // Low obstacle overlapping the player's column span
    let mut game = quiet_game();
    game.obstacles.push(low_obstacle(PLAYER_COL as f64));

    game.stance = Stance::Running;
    game.player_y = GROUND_ROW as f64;
    assert!(check_collision(&game), "standing vs low: hit");

    game.stance = Stance::Airborne;
    game.player_y = GROUND_ROW as f64 - 2.0;
    assert!(!check_collision(&game), "airborne vs low: clear");

    // High obstacle in the same column span
    game.obstacles.clear();
    game.obstacles.push(high_obstacle(PLAYER_COL as f64));

    game.stance = Stance::Running;
    game.player_y = GROUND_ROW as f64;
    assert!(check_collision(&game), "standing vs high: hit");

    game.stance = Stance::Ducking;
    assert!(!check_collision(&game), "ducking vs high: clear");
}

#[test]
fn test_ducking_into_low_obstacle_still_hits() {
    let mut game = quiet_game();
    game.obstacles.push(low_obstacle(PLAYER_COL as f64));
    game.stance = Stance::Ducking;
    assert!(check_collision(&game), "a duck does not avoid ground obstacles");
}

#[test]
fn test_obstacles_travel_monotonically_left() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    game.stance = Stance::Airborne;
    game.player_y = 5.0;
    game.velocity = 0.0;
    game.obstacles.push(low_obstacle(40.0));
    game.obstacles.push(high_obstacle(55.0));

    let mut previous: Vec<f64> = game.obstacles.iter().map(|o| o.x).collect();
    for _ in 0..30 {
        // Re-float the player each frame so nothing collides mid-test
        game.stance = Stance::Airborne;
        game.player_y = 5.0;
        game.velocity = 0.0;
        tick_runner(&mut game, FRAME_MS, &mut rng);
        for (obs, prev) in game.obstacles.iter().zip(previous.iter()) {
            assert!(obs.x < *prev, "obstacles only ever move toward the player");
        }
        previous = game.obstacles.iter().map(|o| o.x).collect();
    }
}

#[test]
fn test_spawn_interval_steps_down_and_respects_floor() {
    // Scenario: crossing the pace-up threshold tightens spawning
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    game.spawn_interval = INITIAL_SPAWN_INTERVAL;
    game.score = 10;

    tick_runner(&mut game, FRAME_MS, &mut rng);

    assert!(
        game.spawn_interval < INITIAL_SPAWN_INTERVAL,
        "crossing the threshold strictly decreases the spawn interval"
    );
    assert!(game.notices.iter().any(|n| n.label == "PACE UP"));

    // Pile on far more thresholds than the range allows
    game.score = 10_000;
    tick_runner(&mut game, FRAME_MS, &mut rng);
    assert_eq!(
        game.spawn_interval, SPAWN_INTERVAL_FLOOR,
        "the interval bottoms out at the floor"
    );

    let settled = game.spawn_interval;
    game.score += 10;
    tick_runner(&mut game, FRAME_MS, &mut rng);
    assert_eq!(game.spawn_interval, settled, "never below the floor");
}

#[test]
fn test_game_over_freezes_everything_until_restart() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    game.obstacles.push(low_obstacle(30.0));
    game.score = 4;
    game.game_over = true;

    let frozen_x = game.obstacles[0].x;
    let frozen_ticks = game.tick_count;
    for _ in 0..50 {
        process_input(&mut game, RunnerInput::Jump);
        tick_runner(&mut game, FRAME_MS, &mut rng);
    }

    assert_eq!(game.obstacles[0].x, frozen_x);
    assert_eq!(game.score, 4);
    assert_eq!(game.tick_count, frozen_ticks);
    assert_eq!(game.stance, Stance::Running, "inputs are ignored while frozen");

    // Restart is the one accepted action
    process_input(&mut game, RunnerInput::Restart);
    assert!(!game.game_over);
    assert_eq!(game.score, 0);
    assert!(game.obstacles.is_empty());
}

#[test]
fn test_restart_ignored_while_playing() {
    let mut game = quiet_game();
    game.score = 7;
    process_input(&mut game, RunnerInput::Restart);
    assert_eq!(game.score, 7, "restart outside game-over is a no-op");
}

#[test]
fn test_pass_flag_fires_exactly_once() {
    let mut game = quiet_game();
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    game.stance = Stance::Airborne;
    game.player_y = 5.0;

    // Already behind the player's leading edge but not yet off-screen
    game.obstacles.push(low_obstacle(2.0));

    for _ in 0..5 {
        game.stance = Stance::Airborne;
        game.player_y = 5.0;
        game.velocity = 0.0;
        tick_runner(&mut game, FRAME_MS, &mut rng);
    }
    assert_eq!(game.score, 1, "an already-passed obstacle scores once, not per frame");
}
