//! Endless runner arcade game.

pub mod logic;
pub mod types;

pub use logic::{process_input, tick_runner, RunnerInput};
pub use types::RunnerGame;
