//! Best-score table, persisted as JSON under the data directory.

use serde::{Deserialize, Serialize};
use std::io;

use crate::arcade::ArcadeKind;
use crate::utils::persistence::{load_json_or_default, save_json};

pub const SCORES_FILE: &str = "scores.json";

/// One best score per arcade game. Missing fields deserialize to zero so
/// older files keep working when a game is added.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BestScores {
    #[serde(default)]
    pub runner: u32,
    #[serde(default)]
    pub shooter: u32,
}

impl BestScores {
    pub fn load() -> Self {
        load_json_or_default(SCORES_FILE)
    }

    pub fn best_for(&self, kind: ArcadeKind) -> u32 {
        match kind {
            ArcadeKind::Runner => self.runner,
            ArcadeKind::Shooter => self.shooter,
        }
    }

    /// Fold a finished run into the table. Returns true if it set a new best.
    pub fn note(&mut self, kind: ArcadeKind, score: u32) -> bool {
        let slot = match kind {
            ArcadeKind::Runner => &mut self.runner,
            ArcadeKind::Shooter => &mut self.shooter,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(SCORES_FILE, self)
    }

    /// Note a finished run and persist the table when it improved.
    pub fn record(&mut self, kind: ArcadeKind, score: u32) -> io::Result<bool> {
        let improved = self.note(kind, score);
        if improved {
            self.save()?;
        }
        Ok(improved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_keeps_higher_score() {
        let mut scores = BestScores::default();

        assert!(scores.note(ArcadeKind::Runner, 12));
        assert_eq!(scores.runner, 12);

        assert!(!scores.note(ArcadeKind::Runner, 8));
        assert_eq!(scores.runner, 12);

        assert!(scores.note(ArcadeKind::Runner, 30));
        assert_eq!(scores.runner, 30);
    }

    #[test]
    fn test_equal_score_is_not_an_improvement() {
        let mut scores = BestScores::default();
        scores.shooter = 100;
        assert!(!scores.note(ArcadeKind::Shooter, 100));
    }

    #[test]
    fn test_games_track_separately() {
        let mut scores = BestScores::default();
        scores.note(ArcadeKind::Runner, 5);
        scores.note(ArcadeKind::Shooter, 90);

        assert_eq!(scores.best_for(ArcadeKind::Runner), 5);
        assert_eq!(scores.best_for(ArcadeKind::Shooter), 90);
    }

    #[test]
    fn test_partial_file_deserializes_with_defaults() {
        let scores: BestScores = serde_json::from_str(r#"{"runner": 17}"#).unwrap();
        assert_eq!(scores.runner, 17);
        assert_eq!(scores.shooter, 0);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let mut scores = BestScores::default();
        scores.note(ArcadeKind::Runner, 42);
        scores.note(ArcadeKind::Shooter, 310);

        let text = serde_json::to_string(&scores).unwrap();
        let back: BestScores = serde_json::from_str(&text).unwrap();
        assert_eq!(back.runner, 42);
        assert_eq!(back.shooter, 310);
    }
}
