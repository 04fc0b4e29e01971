//! Meteor shooter data structures.
//!
//! A fixed-cadence grid game: the ship slides along the bottom row and
//! shoots upward while meteorites fall from the top.

/// Grid dimensions in cells. Signed so bullet math can pass through -1
/// before cleanup.
pub const GRID_WIDTH: i16 = 24;
pub const GRID_HEIGHT: i16 = 16;

/// Row the ship lives on.
pub const PLAYER_ROW: i16 = GRID_HEIGHT - 1;

/// Points for shooting down a meteorite.
pub const KILL_SCORE: u32 = 10;
/// Points for catching a piece of loot.
pub const PICKUP_SCORE: u32 = 25;

/// Chance a meteorite spawns on a given tick.
pub const METEOR_SPAWN_CHANCE: f64 = 0.35;
/// Chance a destroyed meteorite leaves loot behind.
pub const LOOT_DROP_CHANCE: f64 = 0.30;

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: i16,
    pub y: i16,
}

impl GridPos {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Main shooter state. Unlike the runner there is no start gate: the game
/// begins on the first tick after launch.
#[derive(Debug, Clone)]
pub struct ShooterGame {
    /// Ship column on [`PLAYER_ROW`].
    pub player_x: i16,
    /// Player shots, moving up one row per tick.
    pub bullets: Vec<GridPos>,
    /// Falling rocks, moving down one row per tick.
    pub meteorites: Vec<GridPos>,
    /// Dropped pickups, falling one row per tick.
    pub loot: Vec<GridPos>,
    pub score: u32,
    pub game_over: bool,
    pub tick_count: u64,
}

impl ShooterGame {
    pub fn new() -> Self {
        Self {
            player_x: GRID_WIDTH / 2,
            bullets: Vec::new(),
            meteorites: Vec::new(),
            loot: Vec::new(),
            score: 0,
            game_over: false,
            tick_count: 0,
        }
    }
}

impl Default for ShooterGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = ShooterGame::new();
        assert_eq!(game.player_x, GRID_WIDTH / 2);
        assert!(game.bullets.is_empty());
        assert!(game.meteorites.is_empty());
        assert!(game.loot.is_empty());
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_player_row_is_bottom_row() {
        assert_eq!(PLAYER_ROW, GRID_HEIGHT - 1);
    }

    #[test]
    fn test_grid_pos_equality() {
        assert_eq!(GridPos::new(3, 4), GridPos::new(3, 4));
        assert_ne!(GridPos::new(3, 4), GridPos::new(4, 3));
    }
}
