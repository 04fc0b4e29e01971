//! Arcade games and the host plumbing that drives them.

pub mod host;
pub mod runner;
pub mod scores;
pub mod shooter;

/// Which arcade game a score or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeKind {
    Runner,
    Shooter,
}

impl ArcadeKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArcadeKind::Runner => "Runner",
            ArcadeKind::Shooter => "Meteor Shooter",
        }
    }
}
