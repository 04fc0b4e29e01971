//! Scene rendering, one module per screen. Every render function takes
//! the screen's state by reference and never mutates it.

pub mod dashboard_scene;
pub mod game_common;
pub mod projects_scene;
pub mod runner_scene;
pub mod shooter_scene;
pub mod terminal_scene;
