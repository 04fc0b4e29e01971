//! Arcade host: owns whichever game is on screen and drives its clock.
//!
//! The two games run on different clocks. The runner integrates wall-clock
//! deltas into 16 ms physics frames on its own; the shooter expects fixed
//! ticks, so the host accumulates time and fires whole ticks at it. Quitting
//! unloads the game synchronously, so a tick that was already scheduled by
//! the event loop lands on nothing.

use rand::Rng;

use crate::arcade::runner::{self, RunnerGame};
use crate::arcade::shooter::{self, ShooterGame};
use crate::arcade::ArcadeKind;
use crate::constants::{MAX_FRAME_DT_MS, SHOOTER_TICK_MS};

/// The game currently loaded in the arcade.
#[derive(Debug, Clone)]
pub enum ActiveArcade {
    Runner(RunnerGame),
    Shooter(ShooterGame),
}

#[derive(Debug, Default)]
pub struct ArcadeHost {
    pub game: Option<ActiveArcade>,
    /// Milliseconds banked toward the next shooter tick.
    shooter_acc: u64,
    /// Set once a finished run has been written to the score table, so a
    /// game-over screen left open does not record twice.
    result_recorded: bool,
}

impl ArcadeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_runner(&mut self) {
        self.game = Some(ActiveArcade::Runner(RunnerGame::new()));
        self.shooter_acc = 0;
        self.result_recorded = false;
    }

    pub fn start_shooter(&mut self) {
        self.game = Some(ActiveArcade::Shooter(ShooterGame::new()));
        self.shooter_acc = 0;
        self.result_recorded = false;
    }

    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// Advance the loaded game by a wall-clock delta. No-op when nothing
    /// is loaded.
    pub fn advance<R: Rng>(&mut self, delta_ms: u64, rng: &mut R) {
        // A restarted run is underway again: re-arm the recording latch
        if !self.loaded_game_over() {
            self.result_recorded = false;
        }

        match &mut self.game {
            Some(ActiveArcade::Runner(game)) => {
                runner::tick_runner(game, delta_ms, rng);
            }
            Some(ActiveArcade::Shooter(game)) => {
                self.shooter_acc += delta_ms.min(MAX_FRAME_DT_MS);
                while self.shooter_acc >= SHOOTER_TICK_MS {
                    self.shooter_acc -= SHOOTER_TICK_MS;
                    shooter::tick_shooter(game, rng);
                }
            }
            None => {}
        }
    }

    /// Unload the current game and hand its final state to the caller.
    /// Any advance that arrives afterwards finds nothing to tick.
    pub fn quit(&mut self) -> Option<ActiveArcade> {
        self.shooter_acc = 0;
        self.game.take()
    }

    /// A finished run that has not been recorded yet, if any.
    pub fn finished_run(&self) -> Option<(ArcadeKind, u32)> {
        if self.result_recorded {
            return None;
        }
        match &self.game {
            Some(ActiveArcade::Runner(game)) if game.game_over => {
                Some((ArcadeKind::Runner, game.score))
            }
            Some(ActiveArcade::Shooter(game)) if game.game_over => {
                Some((ArcadeKind::Shooter, game.score))
            }
            _ => None,
        }
    }

    pub fn mark_recorded(&mut self) {
        self.result_recorded = true;
    }

    fn loaded_game_over(&self) -> bool {
        match &self.game {
            Some(ActiveArcade::Runner(game)) => game.game_over,
            Some(ActiveArcade::Shooter(game)) => game.game_over,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_start_loads_fresh_game() {
        let mut host = ArcadeHost::new();
        assert!(!host.is_active());

        host.start_runner();
        assert!(matches!(host.game, Some(ActiveArcade::Runner(_))));

        host.start_shooter();
        assert!(matches!(host.game, Some(ActiveArcade::Shooter(_))));
    }

    #[test]
    fn test_shooter_ticks_accumulate_to_cadence() {
        let mut host = ArcadeHost::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        host.start_shooter();

        // Under one tick's worth of time: nothing happens
        host.advance(SHOOTER_TICK_MS - 1, &mut rng);
        if let Some(ActiveArcade::Shooter(game)) = &host.game {
            assert_eq!(game.tick_count, 0);
        } else {
            panic!("shooter should be loaded");
        }

        // The remainder completes exactly one tick
        host.advance(1, &mut rng);
        if let Some(ActiveArcade::Shooter(game)) = &host.game {
            assert_eq!(game.tick_count, 1);
        } else {
            panic!("shooter should be loaded");
        }
    }

    #[test]
    fn test_quit_unloads_and_advance_is_noop() {
        let mut host = ArcadeHost::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        host.start_runner();

        let taken = host.quit();
        assert!(taken.is_some());
        assert!(!host.is_active());

        host.advance(1000, &mut rng);
        assert!(!host.is_active());
    }

    #[test]
    fn test_finished_run_reports_once() {
        let mut host = ArcadeHost::new();
        host.start_runner();
        if let Some(ActiveArcade::Runner(game)) = &mut host.game {
            game.score = 9;
            game.game_over = true;
        }

        assert_eq!(host.finished_run(), Some((ArcadeKind::Runner, 9)));
        host.mark_recorded();
        assert_eq!(host.finished_run(), None);
    }

    #[test]
    fn test_restart_rearms_result_latch() {
        let mut host = ArcadeHost::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        host.start_shooter();
        if let Some(ActiveArcade::Shooter(game)) = &mut host.game {
            game.game_over = true;
        }
        host.mark_recorded();
        assert_eq!(host.finished_run(), None);

        // Player restarts from the game-over screen
        if let Some(ActiveArcade::Shooter(game)) = &mut host.game {
            shooter::process_input(game, shooter::ShooterInput::Restart);
        }
        host.advance(SHOOTER_TICK_MS, &mut rng);
        if let Some(ActiveArcade::Shooter(game)) = &mut host.game {
            game.score = 50;
            game.game_over = true;
        }
        assert_eq!(host.finished_run(), Some((ArcadeKind::Shooter, 50)));
    }
}
