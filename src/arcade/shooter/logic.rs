//! Meteor shooter simulation.
//!
//! Movement and firing apply immediately on input; the world itself only
//! advances on fixed ticks driven by the arcade host. Because bullets and
//! meteorites both move a full cell per tick, collision resolution has to
//! catch pairs that swap cells as well as pairs that land on the same cell.

use crate::arcade::shooter::types::*;
use rand::Rng;

/// Player actions, already translated from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterInput {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

/// Apply a player action. Movement and firing take effect immediately,
/// between world ticks.
pub fn process_input(game: &mut ShooterGame, input: ShooterInput) {
    if game.game_over {
        if input == ShooterInput::Restart {
            *game = ShooterGame::new();
        }
        return;
    }

    match input {
        ShooterInput::MoveLeft => {
            game.player_x = (game.player_x - 1).max(0);
            if player_struck(game) {
                game.game_over = true;
            }
        }
        ShooterInput::MoveRight => {
            game.player_x = (game.player_x + 1).min(GRID_WIDTH - 1);
            if player_struck(game) {
                game.game_over = true;
            }
        }
        ShooterInput::Fire => {
            let spawn = GridPos::new(game.player_x, PLAYER_ROW - 1);
            // Point-blank shot: a meteorite already in the muzzle cell is
            // destroyed outright and no bullet enters play
            if let Some(i) = game.meteorites.iter().position(|m| *m == spawn) {
                game.meteorites.remove(i);
                game.score += KILL_SCORE;
            } else {
                game.bullets.push(spawn);
            }
        }
        ShooterInput::Restart => {}
    }
}

/// Advance the world by one fixed tick.
pub fn tick_shooter<R: Rng>(game: &mut ShooterGame, rng: &mut R) {
    if game.game_over {
        return;
    }
    game.tick_count += 1;

    // 1. Bullets climb
    for bullet in &mut game.bullets {
        bullet.y -= 1;
    }

    // 2. Meteorites fall
    for meteor in &mut game.meteorites {
        meteor.y += 1;
    }

    // 3. Resolve hits. After both sides moved, a pair has collided if it
    //    shares a cell or swapped cells (meteorite now one below the bullet).
    let mut dead_bullets = vec![false; game.bullets.len()];
    let mut dead_meteorites = vec![false; game.meteorites.len()];
    for (bi, bullet) in game.bullets.iter().enumerate() {
        for (mi, meteor) in game.meteorites.iter().enumerate() {
            if dead_meteorites[mi] {
                continue;
            }
            let crossed = meteor.y == bullet.y || meteor.y == bullet.y + 1;
            if bullet.x == meteor.x && crossed {
                dead_bullets[bi] = true;
                dead_meteorites[mi] = true;
                game.score += KILL_SCORE;
                if rng.gen_bool(LOOT_DROP_CHANCE) {
                    game.loot.push(*meteor);
                }
                break;
            }
        }
    }
    let mut bi = 0;
    game.bullets.retain(|_| {
        let keep = !dead_bullets[bi];
        bi += 1;
        keep
    });
    let mut mi = 0;
    game.meteorites.retain(|_| {
        let keep = !dead_meteorites[mi];
        mi += 1;
        keep
    });

    // 4. Bullets off the top are gone
    game.bullets.retain(|b| b.y >= 0);

    // 5. Loot falls and is collected on the ship's cell
    for piece in &mut game.loot {
        piece.y += 1;
    }
    let ship = GridPos::new(game.player_x, PLAYER_ROW);
    let mut collected = 0u32;
    game.loot.retain(|piece| {
        if *piece == ship {
            collected += 1;
            return false;
        }
        piece.y < GRID_HEIGHT
    });
    game.score += collected * PICKUP_SCORE;

    // 6. A meteorite on the ship's cell ends the run. State is left frozen
    //    so the impact stays on screen.
    if player_struck(game) {
        game.game_over = true;
        return;
    }
    game.meteorites.retain(|m| m.y < GRID_HEIGHT);

    // 7. Spawn at most one meteorite per tick on the top row
    if rng.gen_bool(METEOR_SPAWN_CHANCE) {
        let x = rng.gen_range(0..GRID_WIDTH);
        game.meteorites.push(GridPos::new(x, 0));
    }
}

fn player_struck(game: &ShooterGame) -> bool {
    game.meteorites
        .iter()
        .any(|m| m.x == game.player_x && m.y == PLAYER_ROW)
}
