//! Endless runner simulation.
//!
//! All rules live here, decoupled from rendering and key handling. The host
//! feeds wall-clock deltas into [`tick_runner`], which steps fixed-length
//! physics frames so behavior is identical at any terminal frame rate.

use crate::arcade::runner::types::*;
use rand::Rng;

/// Length of one physics frame in milliseconds.
pub const PHYSICS_TICK_MS: u64 = 16;

/// Cap on a single wall-clock delta. A stall (window drag, suspend) should
/// not translate into a burst of catch-up frames.
pub const MAX_FRAME_TIME_MS: u64 = 100;

/// Player actions, already translated from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerInput {
    Jump,
    DuckStart,
    DuckEnd,
    Restart,
}

/// Apply a player action to the game state.
///
/// Inputs take effect between physics frames: a jump is buffered until the
/// next frame, duck changes stance immediately.
pub fn process_input(game: &mut RunnerGame, input: RunnerInput) {
    if game.game_over {
        if input == RunnerInput::Restart {
            game.restart();
        }
        return;
    }

    if game.waiting_to_start {
        if input == RunnerInput::Jump {
            game.waiting_to_start = false;
        }
        return;
    }

    match input {
        RunnerInput::Jump => {
            // Jump overrides a duck. The queue is sticky so a press just
            // before landing still fires on touchdown.
            if game.stance == Stance::Ducking {
                game.stance = Stance::Running;
                game.duck_hold_frames = 0;
            }
            game.jump_queued = true;
        }
        RunnerInput::DuckStart => match game.stance {
            Stance::Running => {
                game.stance = Stance::Ducking;
                game.duck_hold_frames = DUCK_HOLD_FRAMES;
            }
            // Key auto-repeat lands here and keeps the duck held
            Stance::Ducking => game.duck_hold_frames = DUCK_HOLD_FRAMES,
            // No air-ducking
            Stance::Airborne => {}
        },
        RunnerInput::DuckEnd => {
            if game.stance == Stance::Ducking {
                game.stance = Stance::Running;
                game.duck_hold_frames = 0;
            }
        }
        RunnerInput::Restart => {}
    }
}

/// Advance the simulation by a wall-clock delta.
///
/// Returns true if at least one physics frame ran. Does nothing while the
/// game is over or waiting for its first jump.
pub fn tick_runner<R: Rng>(game: &mut RunnerGame, delta_ms: u64, rng: &mut R) -> bool {
    if game.game_over || game.waiting_to_start {
        return false;
    }

    game.accumulated_ms += delta_ms.min(MAX_FRAME_TIME_MS);

    let mut stepped = false;
    while game.accumulated_ms >= PHYSICS_TICK_MS {
        game.accumulated_ms -= PHYSICS_TICK_MS;
        step_frame(game, rng);
        stepped = true;
        if game.game_over {
            break;
        }
    }
    stepped
}

/// One fixed physics frame.
fn step_frame<R: Rng>(game: &mut RunnerGame, rng: &mut R) {
    game.tick_count += 1;

    // 1. Consume a queued jump when grounded
    if game.jump_queued && game.stance == Stance::Running {
        game.velocity = JUMP_IMPULSE;
        game.stance = Stance::Airborne;
        game.jump_queued = false;
    }

    // 2. Count down the duck hold window
    if game.stance == Stance::Ducking {
        game.duck_hold_frames = game.duck_hold_frames.saturating_sub(1);
        if game.duck_hold_frames == 0 {
            game.stance = Stance::Running;
        }
    }

    // 3. Gravity while airborne, capped at terminal velocity
    if game.stance == Stance::Airborne {
        game.velocity = (game.velocity + GRAVITY).min(TERMINAL_VELOCITY);
    }

    // 4. Apply vertical velocity
    game.player_y += game.velocity;

    // 5. Land on the ground row
    if game.player_y >= GROUND_ROW as f64 {
        game.player_y = GROUND_ROW as f64;
        game.velocity = 0.0;
        if game.stance == Stance::Airborne {
            game.stance = Stance::Running;
        }
    }

    // 6. Scroll obstacles toward the player
    for obs in &mut game.obstacles {
        obs.x -= game.scroll_speed;
    }

    // 7. Score obstacles whose trailing edge passed the player's leading edge
    let player_lead = (PLAYER_COL + PLAYER_WIDTH) as f64;
    for obs in &mut game.obstacles {
        if !obs.passed && obs.x + (obs.width as f64) < player_lead {
            obs.passed = true;
            game.score += 1;
        }
    }

    // 8. Tighten the spawn interval as the score crosses thresholds
    while game.score >= game.next_pace_up_at {
        game.next_pace_up_at += PACE_UP_SCORE_STEP;
        let lowered = game
            .spawn_interval
            .saturating_sub(SPAWN_INTERVAL_STEP)
            .max(SPAWN_INTERVAL_FLOOR);
        if lowered < game.spawn_interval {
            game.spawn_interval = lowered;
            game.notices.push(Notice {
                label: "PACE UP",
                life: NOTICE_LIFE_FRAMES,
            });
        }
    }

    // 9. Spawn a new obstacle when the timer runs out
    game.spawn_timer = game.spawn_timer.saturating_sub(1);
    if game.spawn_timer == 0 {
        game.spawn_obstacle(rng);
        game.spawn_timer = game.spawn_interval;
    }

    // 10. Drop obstacles that scrolled off the left edge
    game.obstacles.retain(|o| o.x + o.width as f64 > 0.0);

    // 11. Step up the scroll speed on schedule
    if game.tick_count.is_multiple_of(SPEED_STEP_FRAMES) {
        let bumped = (game.scroll_speed + SPEED_STEP).min(MAX_SPEED);
        if bumped > game.scroll_speed {
            game.scroll_speed = bumped;
            game.notices.push(Notice {
                label: "SPEED UP",
                life: NOTICE_LIFE_FRAMES,
            });
        }
    }

    // 12. Age out scaling notices
    for notice in &mut game.notices {
        notice.life = notice.life.saturating_sub(1);
    }
    game.notices.retain(|n| n.life > 0);

    // 13. Advance the run animation
    if game.tick_count.is_multiple_of(8) {
        game.run_anim_frame = (game.run_anim_frame + 1) % RUN_ANIM_FRAMES;
    }

    // 14. Collision ends the run
    if check_collision(game) {
        game.game_over = true;
    }
}

/// Axis-aligned overlap test between the player's hitbox and all obstacles.
///
/// The hitbox shrinks to one row while ducking, which is what lets a duck
/// slip under a high obstacle. Low obstacles rest on the ground row, high
/// obstacles hang down to [`HIGH_BAND_ROW`].
pub fn check_collision(game: &RunnerGame) -> bool {
    let player_left = PLAYER_COL as f64;
    let player_right = (PLAYER_COL + PLAYER_WIDTH) as f64;
    let player_bottom = game.player_y;
    let player_top = game.player_y - (game.hitbox_height() - 1) as f64;

    for obs in &game.obstacles {
        let obs_left = obs.x;
        let obs_right = obs.x + obs.width as f64;
        if obs_right <= player_left || obs_left >= player_right {
            continue;
        }

        let obs_bottom = match obs.kind {
            ObstacleKind::Low => GROUND_ROW,
            ObstacleKind::High => HIGH_BAND_ROW,
        } as f64;
        let obs_top = obs_bottom - (obs.height - 1) as f64;

        if player_bottom >= obs_top && player_top <= obs_bottom {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn playing_game() -> RunnerGame {
        let mut game = RunnerGame::new();
        game.waiting_to_start = false;
        game
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn tick_frames(game: &mut RunnerGame, frames: u32, rng: &mut ChaCha8Rng) {
        for _ in 0..frames {
            tick_runner(game, PHYSICS_TICK_MS, rng);
        }
    }

    fn low_obstacle(x: f64, width: u16) -> Obstacle {
        Obstacle {
            x,
            kind: ObstacleKind::Low,
            width,
            height: 1,
            passed: false,
        }
    }

    fn high_obstacle(x: f64, width: u16) -> Obstacle {
        Obstacle {
            x,
            kind: ObstacleKind::High,
            width,
            height: 8,
            passed: false,
        }
    }

    // ── Input handling ──

    #[test]
    fn test_jump_starts_game_from_waiting() {
        let mut game = RunnerGame::new();
        assert!(game.waiting_to_start);

        process_input(&mut game, RunnerInput::Jump);

        assert!(!game.waiting_to_start);
        // The starting press itself does not queue a jump
        assert!(!game.jump_queued);
    }

    #[test]
    fn test_duck_does_not_start_game() {
        let mut game = RunnerGame::new();
        process_input(&mut game, RunnerInput::DuckStart);
        assert!(game.waiting_to_start);
        assert_eq!(game.stance, Stance::Running);
    }

    #[test]
    fn test_jump_queued_then_consumed_on_next_frame() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::Jump);
        assert!(game.jump_queued);
        assert_eq!(game.stance, Stance::Running);

        tick_frames(&mut game, 1, &mut rng);
        assert!(!game.jump_queued);
        assert_eq!(game.stance, Stance::Airborne);
        assert!(game.velocity < 0.0);
        assert!(game.player_y < GROUND_ROW as f64);
    }

    #[test]
    fn test_jump_buffered_in_air_fires_on_landing() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::Jump);
        tick_frames(&mut game, 10, &mut rng);
        assert_eq!(game.stance, Stance::Airborne);

        // Press again mid-air; stays queued until touchdown
        process_input(&mut game, RunnerInput::Jump);
        assert!(game.jump_queued);

        for _ in 0..200 {
            tick_frames(&mut game, 1, &mut rng);
            if !game.jump_queued {
                break;
            }
        }
        // Queue consumed by a second lift-off
        assert!(!game.jump_queued);
        assert_eq!(game.stance, Stance::Airborne);
    }

    #[test]
    fn test_duck_start_sets_stance_and_window() {
        let mut game = playing_game();
        process_input(&mut game, RunnerInput::DuckStart);
        assert_eq!(game.stance, Stance::Ducking);
        assert_eq!(game.duck_hold_frames, DUCK_HOLD_FRAMES);
    }

    #[test]
    fn test_duck_repeat_refreshes_hold_window() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::DuckStart);
        tick_frames(&mut game, 10, &mut rng);
        assert!(game.duck_hold_frames < DUCK_HOLD_FRAMES);

        process_input(&mut game, RunnerInput::DuckStart);
        assert_eq!(game.duck_hold_frames, DUCK_HOLD_FRAMES);
        assert_eq!(game.stance, Stance::Ducking);
    }

    #[test]
    fn test_duck_ignored_while_airborne() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::Jump);
        tick_frames(&mut game, 5, &mut rng);
        assert_eq!(game.stance, Stance::Airborne);

        process_input(&mut game, RunnerInput::DuckStart);
        assert_eq!(game.stance, Stance::Airborne);
        assert_eq!(game.duck_hold_frames, 0);
    }

    #[test]
    fn test_duck_end_releases_immediately() {
        let mut game = playing_game();
        process_input(&mut game, RunnerInput::DuckStart);
        process_input(&mut game, RunnerInput::DuckEnd);
        assert_eq!(game.stance, Stance::Running);
        assert_eq!(game.duck_hold_frames, 0);
    }

    #[test]
    fn test_jump_cancels_duck() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::DuckStart);
        process_input(&mut game, RunnerInput::Jump);
        assert_eq!(game.stance, Stance::Running);
        assert!(game.jump_queued);

        tick_frames(&mut game, 1, &mut rng);
        assert_eq!(game.stance, Stance::Airborne);
    }

    #[test]
    fn test_inputs_ignored_after_game_over() {
        let mut game = playing_game();
        game.game_over = true;

        process_input(&mut game, RunnerInput::Jump);
        assert!(!game.jump_queued);

        process_input(&mut game, RunnerInput::DuckStart);
        assert_eq!(game.stance, Stance::Running);
    }

    #[test]
    fn test_restart_is_noop_while_playing() {
        let mut game = playing_game();
        game.score = 7;

        process_input(&mut game, RunnerInput::Restart);

        assert_eq!(game.score, 7);
        assert!(!game.waiting_to_start);
        assert!(!game.game_over);
    }

    #[test]
    fn test_restart_from_game_over_begins_fresh_run() {
        let mut game = playing_game();
        game.score = 12;
        game.game_over = true;
        game.obstacles.push(low_obstacle(6.0, 2));

        process_input(&mut game, RunnerInput::Restart);

        assert!(!game.game_over);
        assert!(!game.waiting_to_start);
        assert_eq!(game.score, 0);
        assert!(game.obstacles.is_empty());
    }

    // ── Physics ──

    #[test]
    fn test_gravity_builds_while_airborne() {
        let mut game = playing_game();
        let mut rng = rng();
        game.stance = Stance::Airborne;
        game.player_y = 8.0;
        game.velocity = 0.0;

        tick_frames(&mut game, 1, &mut rng);

        assert_eq!(game.velocity, GRAVITY);
        assert!(game.player_y > 8.0);
    }

    #[test]
    fn test_terminal_velocity_cap() {
        let mut game = playing_game();
        let mut rng = rng();
        game.stance = Stance::Airborne;
        game.player_y = -100.0;
        game.velocity = TERMINAL_VELOCITY - 0.001;

        tick_frames(&mut game, 10, &mut rng);

        assert_eq!(game.velocity, TERMINAL_VELOCITY);
    }

    #[test]
    fn test_jump_arc_rises_and_returns_to_ground() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::Jump);

        let mut min_y = GROUND_ROW as f64;
        for _ in 0..200 {
            tick_frames(&mut game, 1, &mut rng);
            min_y = min_y.min(game.player_y);
            if game.stance == Stance::Running && game.tick_count > 1 {
                break;
            }
        }

        // Cleared at least a couple of rows at the apex, then landed clean
        assert!(min_y < (GROUND_ROW - 2) as f64);
        assert_eq!(game.stance, Stance::Running);
        assert_eq!(game.player_y, GROUND_ROW as f64);
        assert_eq!(game.velocity, 0.0);
    }

    #[test]
    fn test_no_double_jump_midair() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::Jump);
        tick_frames(&mut game, 5, &mut rng);
        let v_before = game.velocity;

        // A second press must not add a second impulse mid-air
        process_input(&mut game, RunnerInput::Jump);
        tick_frames(&mut game, 1, &mut rng);
        assert!(game.velocity > v_before);
        assert_ne!(game.velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_waiting_blocks_physics() {
        let mut game = RunnerGame::new();
        let mut rng = rng();

        let stepped = tick_runner(&mut game, 1000, &mut rng);

        assert!(!stepped);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_game_over_blocks_physics() {
        let mut game = playing_game();
        let mut rng = rng();
        game.game_over = true;
        game.obstacles.push(low_obstacle(30.0, 2));

        let stepped = tick_runner(&mut game, 100, &mut rng);

        assert!(!stepped);
        assert_eq!(game.obstacles[0].x, 30.0);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut game = playing_game();
        let mut rng = rng();

        tick_runner(&mut game, 10_000, &mut rng);

        assert!(game.tick_count <= MAX_FRAME_TIME_MS / PHYSICS_TICK_MS);
    }

    #[test]
    fn test_small_deltas_accumulate() {
        let mut game = playing_game();
        let mut rng = rng();

        assert!(!tick_runner(&mut game, 8, &mut rng));
        assert_eq!(game.tick_count, 0);

        assert!(tick_runner(&mut game, 8, &mut rng));
        assert_eq!(game.tick_count, 1);
    }

    #[test]
    fn test_duck_hold_auto_releases() {
        let mut game = playing_game();
        let mut rng = rng();

        process_input(&mut game, RunnerInput::DuckStart);
        tick_frames(&mut game, DUCK_HOLD_FRAMES as u32, &mut rng);

        assert_eq!(game.stance, Stance::Running);
    }

    // ── Obstacles and scoring ──

    #[test]
    fn test_obstacles_scroll_left() {
        let mut game = playing_game();
        let mut rng = rng();
        game.obstacles.push(low_obstacle(40.0, 2));

        tick_frames(&mut game, 10, &mut rng);

        let expected = 40.0 - 10.0 * INITIAL_SPEED;
        assert!((game.obstacles[0].x - expected).abs() < 1e-9);
    }

    #[test]
    fn test_offscreen_obstacles_removed() {
        let mut game = playing_game();
        let mut rng = rng();
        let mut obs = low_obstacle(-1.9, 2);
        obs.passed = true;
        game.obstacles.push(obs);

        tick_frames(&mut game, 1, &mut rng);

        assert!(game.obstacles.is_empty());
    }

    #[test]
    fn test_spawn_timer_spawns_and_resets() {
        let mut game = playing_game();
        let mut rng = rng();
        game.spawn_timer = 1;

        tick_frames(&mut game, 1, &mut rng);

        assert_eq!(game.obstacles.len(), 1);
        assert_eq!(game.spawn_timer, game.spawn_interval);
    }

    #[test]
    fn test_score_increments_once_per_obstacle() {
        let mut game = playing_game();
        let mut rng = rng();
        // Trailing edge already behind the player's leading edge
        game.obstacles.push(low_obstacle(3.9, 1));

        tick_frames(&mut game, 1, &mut rng);
        assert_eq!(game.score, 1);
        assert!(game.obstacles[0].passed);

        tick_frames(&mut game, 5, &mut rng);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_no_score_before_pass() {
        let mut game = playing_game();
        let mut rng = rng();
        game.obstacles.push(low_obstacle(20.0, 2));

        tick_frames(&mut game, 1, &mut rng);

        assert_eq!(game.score, 0);
        assert!(!game.obstacles[0].passed);
    }

    // ── Difficulty scaling ──

    #[test]
    fn test_pace_up_at_score_threshold() {
        let mut game = playing_game();
        let mut rng = rng();
        game.score = PACE_UP_SCORE_STEP - 1;
        game.obstacles.push(low_obstacle(3.9, 1));

        tick_frames(&mut game, 1, &mut rng);

        assert_eq!(game.score, PACE_UP_SCORE_STEP);
        assert_eq!(
            game.spawn_interval,
            INITIAL_SPAWN_INTERVAL - SPAWN_INTERVAL_STEP
        );
        assert_eq!(game.next_pace_up_at, 2 * PACE_UP_SCORE_STEP);
        assert!(game.notices.iter().any(|n| n.label == "PACE UP"));
    }

    #[test]
    fn test_spawn_interval_respects_floor() {
        let mut game = playing_game();
        let mut rng = rng();
        game.spawn_interval = SPAWN_INTERVAL_FLOOR;
        game.score = PACE_UP_SCORE_STEP - 1;
        game.obstacles.push(low_obstacle(3.9, 1));

        tick_frames(&mut game, 1, &mut rng);

        assert_eq!(game.spawn_interval, SPAWN_INTERVAL_FLOOR);
        // At the floor the event is silent
        assert!(game.notices.is_empty());
    }

    #[test]
    fn test_speed_steps_on_schedule() {
        let mut game = playing_game();
        let mut rng = rng();
        game.tick_count = SPEED_STEP_FRAMES - 1;

        tick_frames(&mut game, 1, &mut rng);

        assert!((game.scroll_speed - (INITIAL_SPEED + SPEED_STEP)).abs() < 1e-9);
        assert!(game.notices.iter().any(|n| n.label == "SPEED UP"));
    }

    #[test]
    fn test_speed_capped_at_max() {
        let mut game = playing_game();
        let mut rng = rng();
        game.scroll_speed = MAX_SPEED;
        game.tick_count = SPEED_STEP_FRAMES - 1;

        tick_frames(&mut game, 1, &mut rng);

        assert_eq!(game.scroll_speed, MAX_SPEED);
        assert!(game.notices.is_empty());
    }

    #[test]
    fn test_notices_decay_and_expire() {
        let mut game = playing_game();
        let mut rng = rng();
        game.notices.push(Notice {
            label: "SPEED UP",
            life: 2,
        });

        tick_frames(&mut game, 1, &mut rng);
        assert_eq!(game.notices.len(), 1);
        assert_eq!(game.notices[0].life, 1);

        tick_frames(&mut game, 1, &mut rng);
        assert!(game.notices.is_empty());
    }

    // ── Collision ──

    #[test]
    fn test_standing_hit_by_low() {
        let mut game = playing_game();
        game.obstacles.push(low_obstacle(5.5, 2));
        assert!(check_collision(&game));
    }

    #[test]
    fn test_ducking_hit_by_low() {
        let mut game = playing_game();
        game.stance = Stance::Ducking;
        game.obstacles.push(low_obstacle(5.5, 2));
        assert!(check_collision(&game));
    }

    #[test]
    fn test_airborne_clears_low() {
        let mut game = playing_game();
        game.stance = Stance::Airborne;
        game.player_y = 10.0;
        game.obstacles.push(low_obstacle(5.5, 2));
        assert!(!check_collision(&game));
    }

    #[test]
    fn test_barely_airborne_clears_height_one_low() {
        let mut game = playing_game();
        game.stance = Stance::Airborne;
        game.player_y = GROUND_ROW as f64 - 0.3;
        game.obstacles.push(low_obstacle(5.5, 1));
        assert!(!check_collision(&game));
    }

    #[test]
    fn test_standing_hit_by_high() {
        let mut game = playing_game();
        game.obstacles.push(high_obstacle(5.5, 2));
        assert!(check_collision(&game));
    }

    #[test]
    fn test_ducking_clears_high() {
        let mut game = playing_game();
        game.stance = Stance::Ducking;
        game.obstacles.push(high_obstacle(5.5, 2));
        assert!(!check_collision(&game));
    }

    #[test]
    fn test_jumping_into_high_is_fatal() {
        let mut game = playing_game();
        game.stance = Stance::Airborne;
        // Near the top of the arc, still inside the hanging obstacle
        game.player_y = 9.5;
        game.obstacles.push(high_obstacle(5.5, 2));
        assert!(check_collision(&game));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let mut game = playing_game();
        game.obstacles.push(low_obstacle(7.0, 2));
        assert!(!check_collision(&game));

        game.obstacles.clear();
        game.obstacles.push(low_obstacle(2.0, 3));
        assert!(!check_collision(&game));
    }

    #[test]
    fn test_collision_sets_game_over_and_freezes_world() {
        let mut game = playing_game();
        let mut rng = rng();
        game.obstacles.push(low_obstacle(6.5, 2));

        tick_frames(&mut game, 1, &mut rng);
        assert!(game.game_over);

        let frozen_x = game.obstacles[0].x;
        let frozen_score = game.score;
        tick_frames(&mut game, 10, &mut rng);
        assert_eq!(game.obstacles[0].x, frozen_x);
        assert_eq!(game.score, frozen_score);
    }
}
