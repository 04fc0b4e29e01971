//! Key dispatch for every screen.
//!
//! Raw crossterm events are translated here into small per-screen enums so
//! the rest of the app never touches key codes. Each handler is a pure
//! table except the terminal prompt, which edits the session in place.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::arcade::runner::RunnerInput;
use crate::arcade::shooter::ShooterInput;
use crate::terminal::command::{complete, Completion};
use crate::terminal::session::TerminalSession;

/// Outcome of a key on the terminal prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalKey {
    /// Enter was pressed; the submitted line, already echoed and recorded
    /// in history.
    Submitted(String),
    /// The key edited the prompt or scrollback.
    Handled,
    /// Not a prompt key.
    Ignored,
}

/// Apply a key to the terminal session.
///
/// Priority: 1. submit, 2. completion, 3. history, 4. cursor movement,
/// 5. editing. Everything else is ignored.
pub fn handle_terminal_key(session: &mut TerminalSession, key: KeyEvent) -> TerminalKey {
    if key.kind == KeyEventKind::Release {
        return TerminalKey::Ignored;
    }

    // Ctrl-C abandons the current line, Ctrl-L clears, like a shell
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => {
                session.set_input("");
                TerminalKey::Handled
            }
            KeyCode::Char('l') => {
                session.clear_screen();
                TerminalKey::Handled
            }
            _ => TerminalKey::Ignored,
        };
    }

    match key.code {
        KeyCode::Enter => TerminalKey::Submitted(session.take_input()),
        KeyCode::Tab => {
            apply_completion(session);
            TerminalKey::Handled
        }
        KeyCode::Up => {
            session.history_prev();
            TerminalKey::Handled
        }
        KeyCode::Down => {
            session.history_next();
            TerminalKey::Handled
        }
        KeyCode::Left => {
            session.move_left();
            TerminalKey::Handled
        }
        KeyCode::Right => {
            session.move_right();
            TerminalKey::Handled
        }
        KeyCode::Home => {
            session.move_home();
            TerminalKey::Handled
        }
        KeyCode::End => {
            session.move_end();
            TerminalKey::Handled
        }
        KeyCode::Backspace => {
            session.backspace();
            TerminalKey::Handled
        }
        KeyCode::Char(c) => {
            session.insert_char(c);
            TerminalKey::Handled
        }
        _ => TerminalKey::Ignored,
    }
}

/// Tab completion: a unique match replaces the input, an ambiguous one
/// lists the candidates in the scrollback.
fn apply_completion(session: &mut TerminalSession) {
    match complete(&session.input) {
        Completion::None => {}
        Completion::Single(name) => session.set_input(name),
        Completion::Multiple(names) => {
            session.push_output(names.join("  "));
        }
    }
}

/// What a key means on the projects gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsKey {
    Up,
    Down,
    Refresh,
    Back,
    None,
}

pub fn projects_key(key: KeyEvent) -> ProjectsKey {
    if key.kind == KeyEventKind::Release {
        return ProjectsKey::None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => ProjectsKey::Up,
        KeyCode::Down | KeyCode::Char('j') => ProjectsKey::Down,
        KeyCode::Char('r') => ProjectsKey::Refresh,
        KeyCode::Esc | KeyCode::Char('q') => ProjectsKey::Back,
        _ => ProjectsKey::None,
    }
}

/// What a key means on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardKey {
    NextTab,
    PrevTab,
    Refresh,
    Back,
    None,
}

pub fn dashboard_key(key: KeyEvent) -> DashboardKey {
    if key.kind == KeyEventKind::Release {
        return DashboardKey::None;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => DashboardKey::NextTab,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => DashboardKey::PrevTab,
        KeyCode::Char('r') => DashboardKey::Refresh,
        KeyCode::Esc | KeyCode::Char('q') => DashboardKey::Back,
        _ => DashboardKey::None,
    }
}

/// What a key means inside the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKey {
    Play(RunnerInput),
    Quit,
    None,
}

pub fn runner_key(key: KeyEvent) -> RunnerKey {
    // Terminals that report key releases end the duck exactly on release;
    // everywhere else the hold window in the simulation takes over.
    if key.kind == KeyEventKind::Release {
        return match key.code {
            KeyCode::Down | KeyCode::Char('s') => RunnerKey::Play(RunnerInput::DuckEnd),
            _ => RunnerKey::None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char(' ') => {
            RunnerKey::Play(RunnerInput::Jump)
        }
        KeyCode::Down | KeyCode::Char('s') => RunnerKey::Play(RunnerInput::DuckStart),
        KeyCode::Char('r') => RunnerKey::Play(RunnerInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') => RunnerKey::Quit,
        _ => RunnerKey::None,
    }
}

/// What a key means inside the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterKey {
    Play(ShooterInput),
    Quit,
    None,
}

pub fn shooter_key(key: KeyEvent) -> ShooterKey {
    if key.kind == KeyEventKind::Release {
        return ShooterKey::None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('a') => ShooterKey::Play(ShooterInput::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => ShooterKey::Play(ShooterInput::MoveRight),
        KeyCode::Up | KeyCode::Char(' ') => ShooterKey::Play(ShooterInput::Fire),
        KeyCode::Char('r') => ShooterKey::Play(ShooterInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') => ShooterKey::Quit,
        _ => ShooterKey::None,
    }
}
