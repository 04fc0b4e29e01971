//! folio - a developer portfolio for the terminal.
//!
//! Exposes the simulation and command-session logic for integration tests.

pub mod api;
pub mod arcade;
pub mod build_info;
pub mod constants;
pub mod dashboard;
pub mod input;
pub mod profile;
pub mod projects;
pub mod terminal;
pub mod ui;
pub mod utils;
