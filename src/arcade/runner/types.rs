//! Endless runner data structures.
//!
//! A side-scrolling obstacle dodger: the player holds a fixed column while
//! obstacles scroll in from the right. Low obstacles are jumped over, high
//! ones are ducked under.

use rand::Rng;

/// Play field dimensions in cells.
pub const FIELD_WIDTH: u16 = 64;
pub const FIELD_HEIGHT: u16 = 16;

/// Ground row (0-indexed). The player's feet rest here.
pub const GROUND_ROW: u16 = 13;

/// Player fixed horizontal position (left edge).
pub const PLAYER_COL: u16 = 5;

/// Player dimensions.
pub const PLAYER_WIDTH: u16 = 2;
pub const PLAYER_STANDING_HEIGHT: u16 = 2; // standing: rows 12-13
pub const PLAYER_DUCKING_HEIGHT: u16 = 1; // ducking: row 13 only

/// Lower edge of high obstacles. A standing player's head is on this row,
/// so ducking (which drops the hitbox to the ground row) slips underneath.
/// High obstacles extend upward from here, which keeps them impossible to
/// jump over.
pub const HIGH_BAND_ROW: u16 = 12;

// -- Fixed rule set --

/// Gravity (velocity change per physics frame, positive = downward).
pub const GRAVITY: f64 = 0.012;
/// Jump impulse (negative = upward, sets velocity directly).
pub const JUMP_IMPULSE: f64 = -0.30;
/// Maximum downward speed per frame.
pub const TERMINAL_VELOCITY: f64 = 0.40;

/// Initial scroll speed in cols/frame.
pub const INITIAL_SPEED: f64 = 0.12;
/// Scroll speed cap.
pub const MAX_SPEED: f64 = 0.30;
/// Scroll speed increase applied at each speed-up event.
pub const SPEED_STEP: f64 = 0.03;
/// Frames between speed-up events (10 s at the 16 ms physics rate).
pub const SPEED_STEP_FRAMES: u64 = 625;

/// Frames between obstacle spawns at the start of a run.
pub const INITIAL_SPAWN_INTERVAL: u32 = 110;
/// Spawn interval reduction applied at each pace-up event.
pub const SPAWN_INTERVAL_STEP: u32 = 10;
/// Spawn interval never drops below this.
pub const SPAWN_INTERVAL_FLOOR: u32 = 60;
/// Points between pace-up events.
pub const PACE_UP_SCORE_STEP: u32 = 10;

/// Chance that a spawned obstacle is a high one.
pub const HIGH_OBSTACLE_CHANCE: f64 = 0.40;

/// Frames a duck stays held after the last duck keypress. Terminals only
/// report key presses, so key auto-repeat refreshing this window is the
/// closest available stand-in for hold/release.
pub const DUCK_HOLD_FRAMES: u8 = 45;

/// Lifetime of a scaling notice, in physics frames.
pub const NOTICE_LIFE_FRAMES: u16 = 90;

/// Run animation frame count (alternates between 2 frames).
pub const RUN_ANIM_FRAMES: u32 = 2;

/// Player vertical state. Ducking and jumping are mutually exclusive,
/// so the three modes form a single enum rather than two booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Running,
    Airborne,
    Ducking,
}

/// Obstacle kinds and the move that avoids them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Sits on the ground row. Jump over it.
    Low,
    /// Hangs overhead with its lower edge at head height. Duck under it.
    High,
}

/// A single obstacle scrolling toward the player.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// X position (float for smooth scrolling, cols from left edge).
    pub x: f64,
    pub kind: ObstacleKind,
    /// Width in cols (randomized at spawn).
    pub width: u16,
    /// Height in rows. Low obstacles rise from the ground row, high ones
    /// hang down to HIGH_BAND_ROW.
    pub height: u16,
    /// Whether the player has cleared this obstacle (for scoring).
    pub passed: bool,
}

/// Transient on-screen notice for a difficulty scaling event.
#[derive(Debug, Clone)]
pub struct Notice {
    pub label: &'static str,
    /// Remaining frames. Rendering dims the text as this decays.
    pub life: u16,
}

/// Main runner state.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub game_over: bool,
    /// True until the player presses the jump key to begin. Physics paused.
    pub waiting_to_start: bool,

    // -- Player state --
    pub stance: Stance,
    /// Vertical position of the player's feet in rows (float for smooth
    /// physics). GROUND_ROW = on ground, lower values = higher in the air.
    pub player_y: f64,
    /// Current vertical velocity in rows/frame (negative = upward).
    pub velocity: f64,
    /// Jump input buffered for the next physics frame.
    pub jump_queued: bool,
    /// Frames left before a held duck auto-releases.
    pub duck_hold_frames: u8,
    /// Animation frame for running (alternates every few frames).
    pub run_anim_frame: u32,

    // -- Obstacle state --
    pub obstacles: Vec<Obstacle>,
    /// Frames until the next obstacle spawns.
    pub spawn_timer: u32,
    /// Current frames-between-spawns (shrinks as the score climbs).
    pub spawn_interval: u32,

    // -- Difficulty and scoring --
    pub score: u32,
    /// Current scroll speed in cols/frame (steps up over time).
    pub scroll_speed: f64,
    /// Score threshold for the next pace-up event.
    pub next_pace_up_at: u32,
    /// Active scaling notices.
    pub notices: Vec<Notice>,

    // -- Timing --
    /// Sub-frame time accumulator (milliseconds).
    pub accumulated_ms: u64,
    /// Total physics frames elapsed.
    pub tick_count: u64,
}

impl RunnerGame {
    pub fn new() -> Self {
        Self {
            game_over: false,
            waiting_to_start: true,

            stance: Stance::Running,
            player_y: GROUND_ROW as f64,
            velocity: 0.0,
            jump_queued: false,
            duck_hold_frames: 0,
            run_anim_frame: 0,

            obstacles: Vec::new(),
            spawn_timer: INITIAL_SPAWN_INTERVAL,
            spawn_interval: INITIAL_SPAWN_INTERVAL,

            score: 0,
            scroll_speed: INITIAL_SPEED,
            next_pace_up_at: PACE_UP_SCORE_STEP,
            notices: Vec::new(),

            accumulated_ms: 0,
            tick_count: 0,
        }
    }

    /// Reset to initial values and begin immediately. The best score lives
    /// outside the game state, so nothing here survives a restart.
    pub fn restart(&mut self) {
        *self = Self::new();
        self.waiting_to_start = false;
    }

    pub fn is_airborne(&self) -> bool {
        self.stance == Stance::Airborne
    }

    pub fn is_ducking(&self) -> bool {
        self.stance == Stance::Ducking
    }

    /// Current hitbox height in rows.
    pub fn hitbox_height(&self) -> u16 {
        if self.is_ducking() {
            PLAYER_DUCKING_HEIGHT
        } else {
            PLAYER_STANDING_HEIGHT
        }
    }

    /// Spawn a new obstacle just past the right edge.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let kind = if rng.gen_bool(HIGH_OBSTACLE_CHANCE) {
            ObstacleKind::High
        } else {
            ObstacleKind::Low
        };
        let (width, height) = match kind {
            ObstacleKind::Low => (rng.gen_range(1..=3), 1),
            ObstacleKind::High => (rng.gen_range(2..=3), rng.gen_range(6..=10)),
        };

        self.obstacles.push(Obstacle {
            x: (FIELD_WIDTH + width) as f64,
            kind,
            width,
            height,
            passed: false,
        });
    }
}

impl Default for RunnerGame {
    fn default() -> Self {
        Self::new()
    }
}
