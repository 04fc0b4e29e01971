mod api;
mod arcade;
mod build_info;
mod constants;
mod dashboard;
mod input;
mod profile;
mod projects;
mod terminal;
mod ui;
mod utils;

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::arcade::host::{ActiveArcade, ArcadeHost};
use crate::arcade::scores::BestScores;
use crate::arcade::{runner, shooter};
use crate::constants::{ARCADE_POLL_MS, IDLE_POLL_MS};
use crate::dashboard::DashboardScreen;
use crate::input::{
    dashboard_key, handle_terminal_key, projects_key, runner_key, shooter_key, DashboardKey,
    ProjectsKey, RunnerKey, ShooterKey, TerminalKey,
};
use crate::profile::Profile;
use crate::projects::ProjectsScreen;
use crate::terminal::exec::{self, AppAction, FetchTask};
use crate::terminal::session::TerminalSession;

/// Which full-screen view is showing when no arcade game is loaded.
enum Screen {
    Terminal,
    Projects(ProjectsScreen),
    Dashboard(DashboardScreen),
}

/// Everything the event loop owns.
struct App {
    profile: Profile,
    session: TerminalSession,
    scores: BestScores,
    host: ArcadeHost,
    screen: Screen,
    offline: bool,
    /// In-flight `weather`/`quote` command, producing scrollback lines.
    fetch: Option<JoinHandle<Vec<String>>>,
    should_quit: bool,
}

impl App {
    fn new(offline: bool) -> Self {
        let profile = Profile::load();
        let session = TerminalSession::with_banner(&profile);
        Self {
            profile,
            session,
            scores: BestScores::load(),
            host: ArcadeHost::new(),
            screen: Screen::Terminal,
            offline,
            fetch: None,
            should_quit: false,
        }
    }

    fn apply_action(&mut self, action: AppAction) {
        match action {
            AppAction::None => {}
            AppAction::OpenProjects => {
                self.screen = Screen::Projects(ProjectsScreen::open(
                    &self.profile.github_login,
                    self.offline,
                ));
            }
            AppAction::OpenDashboard => {
                self.screen = Screen::Dashboard(DashboardScreen::open(self.offline));
            }
            AppAction::LaunchRunner => self.host.start_runner(),
            AppAction::LaunchShooter => self.host.start_shooter(),
            AppAction::Fetch(task) => self.start_fetch(task),
            AppAction::Quit => self.should_quit = true,
        }
    }

    fn start_fetch(&mut self, task: FetchTask) {
        // One inline fetch at a time; the prompt stays usable meanwhile
        if self.fetch.is_some() {
            self.session.push_error("still waiting on the last fetch");
            return;
        }
        let offline = self.offline;
        self.fetch = Some(thread::spawn(move || match task {
            FetchTask::Quote => {
                let (quote, source) = api::quotes::load_quote(&mut rand::thread_rng(), offline);
                vec![
                    format!("\"{}\"", quote.text),
                    format!("    -- {} ({})", quote.author, source.label()),
                    String::new(),
                ]
            }
            FetchTask::Weather => {
                let (fix, _) = api::geo::load_geo(offline, false);
                let (report, source) =
                    api::weather::load_weather(fix.lat, fix.lon, offline, false);
                vec![
                    format!(
                        "{} {}, {:.1} C, wind {:.0} km/h in {} ({})",
                        api::weather::glyph(report.code, report.is_day),
                        api::weather::describe(report.code),
                        report.temperature_c,
                        report.windspeed_kmh,
                        fix.city,
                        source.label()
                    ),
                    String::new(),
                ]
            }
        }));
    }

    /// Collect a finished inline fetch into the scrollback. Never blocks.
    fn poll_fetch(&mut self) {
        let finished = self
            .fetch
            .as_ref()
            .map(|handle| handle.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }
        if let Some(handle) = self.fetch.take() {
            match handle.join() {
                Ok(lines) => {
                    for line in lines {
                        self.session.push_output(line);
                    }
                }
                Err(_) => self.session.push_error("fetch worker failed"),
            }
        }
    }

    /// Persist a finished run's score if it beats the stored best.
    fn record_finished_run(&mut self) {
        if let Some((kind, score)) = self.host.finished_run() {
            self.host.mark_recorded();
            match self.scores.record(kind, score) {
                Ok(true) => self
                    .session
                    .push_system(format!("New best {} score: {score}", kind.label())),
                Ok(false) => {}
                Err(err) => self
                    .session
                    .push_error(format!("could not save scores: {err}")),
            }
        }
    }

    fn leave_game(&mut self) {
        // Record before the state is dropped; quit() guarantees no tick
        // runs afterwards
        self.record_finished_run();
        if let Some(state) = self.host.quit() {
            // A run abandoned mid-game still counts toward the best score
            let (kind, score, over) = match state {
                ActiveArcade::Runner(game) => {
                    (arcade::ArcadeKind::Runner, game.score, game.game_over)
                }
                ActiveArcade::Shooter(game) => {
                    (arcade::ArcadeKind::Shooter, game.score, game.game_over)
                }
            };
            if !over {
                if let Err(err) = self.scores.record(kind, score) {
                    self.session
                        .push_error(format!("could not save scores: {err}"));
                }
            }
        }
    }

    fn handle_game_key(&mut self, key: crossterm::event::KeyEvent) {
        match &mut self.host.game {
            Some(ActiveArcade::Runner(game)) => match runner_key(key) {
                RunnerKey::Play(action) => runner::process_input(game, action),
                RunnerKey::Quit => self.leave_game(),
                RunnerKey::None => {}
            },
            Some(ActiveArcade::Shooter(game)) => match shooter_key(key) {
                ShooterKey::Play(action) => shooter::process_input(game, action),
                ShooterKey::Quit => self.leave_game(),
                ShooterKey::None => {}
            },
            None => {}
        }
    }

    fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        if self.host.is_active() {
            self.handle_game_key(key);
            return;
        }
        match &mut self.screen {
            Screen::Terminal => {
                if let TerminalKey::Submitted(line) = handle_terminal_key(&mut self.session, key) {
                    let action =
                        exec::execute(&mut self.session, &self.profile, &self.scores, &line);
                    self.apply_action(action);
                }
            }
            Screen::Projects(screen) => match projects_key(key) {
                ProjectsKey::Up => screen.move_up(),
                ProjectsKey::Down => screen.move_down(),
                ProjectsKey::Refresh => screen.refresh(&self.profile.github_login, self.offline),
                ProjectsKey::Back => self.screen = Screen::Terminal,
                ProjectsKey::None => {}
            },
            Screen::Dashboard(screen) => match dashboard_key(key) {
                DashboardKey::NextTab => screen.next_tab(),
                DashboardKey::PrevTab => screen.prev_tab(),
                DashboardKey::Refresh => screen.refresh(self.offline),
                DashboardKey::Back => self.screen = Screen::Terminal,
                DashboardKey::None => {}
            },
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        let area = frame.size();
        match &self.host.game {
            Some(ActiveArcade::Runner(game)) => {
                ui::runner_scene::render_runner_scene(
                    frame,
                    area,
                    game,
                    self.scores.best_for(arcade::ArcadeKind::Runner),
                );
            }
            Some(ActiveArcade::Shooter(game)) => {
                ui::shooter_scene::render_shooter_scene(
                    frame,
                    area,
                    game,
                    self.scores.best_for(arcade::ArcadeKind::Shooter),
                );
            }
            None => match &self.screen {
                Screen::Terminal => {
                    ui::terminal_scene::render_terminal_scene(frame, area, &self.session)
                }
                Screen::Projects(screen) => {
                    ui::projects_scene::render_projects_scene(frame, area, screen)
                }
                Screen::Dashboard(screen) => {
                    ui::dashboard_scene::render_dashboard_scene(frame, area, screen)
                }
            },
        }
    }
}

fn print_help() {
    println!("folio - a developer portfolio for the terminal\n");
    println!("Usage: folio [option]\n");
    println!("Options:");
    println!("  --offline  Skip all network fetches (cache and sample data only)");
    println!("  --version  Show version information");
    println!("  --help     Show this help message");
}

fn main() -> io::Result<()> {
    let mut offline = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--offline" => offline = true,
            "--version" | "-v" => {
                println!(
                    "folio {} ({}, built {})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_COMMIT,
                    build_info::BUILD_DATE
                );
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {other}");
                eprintln!("Run 'folio --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, offline);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    offline: bool,
) -> io::Result<()> {
    let mut app = App::new(offline);
    let mut last_frame = Instant::now();

    loop {
        // Input first, so actions land before this frame's tick
        let timeout = if app.host.is_active() {
            Duration::from_millis(ARCADE_POLL_MS)
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        if app.should_quit {
            break;
        }

        // Advance whichever game is loaded by the elapsed wall time
        let delta_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        app.host.advance(delta_ms, &mut rand::thread_rng());
        app.record_finished_run();

        // Collect background work
        app.poll_fetch();
        match &mut app.screen {
            Screen::Projects(screen) => screen.poll(),
            Screen::Dashboard(screen) => screen.poll(),
            Screen::Terminal => {}
        }

        terminal.draw(|frame| app.draw(frame))?;
    }

    if app.host.is_active() {
        app.leave_game();
    }
    Ok(())
}
