//! Runs parsed commands against the session.
//!
//! Commands that only print do their printing here; anything that changes
//! screens, launches a game, or needs the network is returned as an
//! [`AppAction`] for the app layer to carry out.

use crate::arcade::scores::BestScores;
use crate::arcade::ArcadeKind;
use crate::build_info;
use crate::profile::Profile;
use crate::terminal::command::{self, Command, ParseOutcome, COMMANDS};
use crate::terminal::session::TerminalSession;

/// Background work the app runs off-thread after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTask {
    Quote,
    Weather,
}

/// What the app should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    OpenProjects,
    OpenDashboard,
    LaunchRunner,
    LaunchShooter,
    Fetch(FetchTask),
    Quit,
}

/// Parse and execute one input line.
pub fn execute(
    session: &mut TerminalSession,
    profile: &Profile,
    scores: &BestScores,
    line: &str,
) -> AppAction {
    match command::parse(line) {
        ParseOutcome::Empty => AppAction::None,
        ParseOutcome::Unknown(word) => {
            session.push_error(format!("unknown command: {word}"));
            session.push_output("Type 'help' for the command list.");
            AppAction::None
        }
        ParseOutcome::Known(cmd) => run(session, profile, scores, cmd),
    }
}

fn run(
    session: &mut TerminalSession,
    profile: &Profile,
    scores: &BestScores,
    cmd: Command,
) -> AppAction {
    match cmd {
        Command::Help => {
            session.push_output("");
            for spec in COMMANDS {
                session.push_output(format!("  {:<10} {}", spec.name, spec.blurb));
            }
            session.push_output("");
            AppAction::None
        }
        Command::About => {
            session.push_output("");
            session.push_output(format!("{} :: {}", profile.name, profile.title));
            session.push_output(profile.location.clone());
            session.push_output("");
            for line in &profile.summary {
                session.push_output(line.clone());
            }
            session.push_output("");
            AppAction::None
        }
        Command::Skills => {
            session.push_output("");
            for group in &profile.skills {
                session.push_output(format!("  {:<10} {}", group.label, group.items.join(", ")));
            }
            session.push_output("");
            AppAction::None
        }
        Command::Contact => {
            session.push_output("");
            for link in &profile.contact {
                session.push_output(format!("  {:<8} {}", link.label, link.value));
            }
            session.push_output("");
            AppAction::None
        }
        Command::Projects => {
            session.push_system("Opening the projects gallery. Esc comes back here.");
            AppAction::OpenProjects
        }
        Command::Dashboard => {
            session.push_system("Opening the dashboard. Esc comes back here.");
            AppAction::OpenDashboard
        }
        Command::Weather => {
            session.push_system("Checking current conditions...");
            AppAction::Fetch(FetchTask::Weather)
        }
        Command::Quote => {
            session.push_system("Finding a quote...");
            AppAction::Fetch(FetchTask::Quote)
        }
        Command::Run => {
            session.push_system("Launching the runner. Jump low obstacles, duck high ones.");
            AppAction::LaunchRunner
        }
        Command::Shooter => {
            session.push_system("Launching the meteor shooter. Don't get hit.");
            AppAction::LaunchShooter
        }
        Command::Scores => {
            session.push_output("");
            for kind in [ArcadeKind::Runner, ArcadeKind::Shooter] {
                session.push_output(format!(
                    "  {:<16} {}",
                    kind.label(),
                    scores.best_for(kind)
                ));
            }
            session.push_output("");
            AppAction::None
        }
        Command::Clear => {
            session.clear_screen();
            AppAction::None
        }
        Command::Version => {
            session.push_output(format!(
                "folio {} ({}, built {})",
                env!("CARGO_PKG_VERSION"),
                build_info::BUILD_COMMIT,
                build_info::BUILD_DATE
            ));
            AppAction::None
        }
        Command::Exit => AppAction::Quit,
    }
}
