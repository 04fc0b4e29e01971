//! Meteor shooter arcade game.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_shooter, ShooterInput};
pub use types::ShooterGame;
