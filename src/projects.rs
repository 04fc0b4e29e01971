//! Projects gallery screen state.
//!
//! The repo list loads on a background thread so the gallery opens
//! instantly; the scene shows a spinner until [`ProjectsScreen::poll`]
//! collects the result.

use std::thread::{self, JoinHandle};

use crate::api::github::{self, Project};
use crate::api::DataSource;

pub struct ProjectsScreen {
    handle: Option<JoinHandle<(Vec<Project>, DataSource)>>,
    pub projects: Vec<Project>,
    pub source: DataSource,
    pub selected: usize,
    pub loaded: bool,
}

impl ProjectsScreen {
    /// Open the gallery and start loading in the background.
    pub fn open(login: &str, offline: bool) -> Self {
        let mut screen = Self {
            handle: None,
            projects: Vec::new(),
            source: DataSource::Sample,
            selected: 0,
            loaded: false,
        };
        screen.spawn(login, offline, false);
        screen
    }

    fn spawn(&mut self, login: &str, offline: bool, force_refresh: bool) {
        let login = login.to_string();
        self.loaded = false;
        self.handle = Some(thread::spawn(move || {
            github::load_projects(&login, offline, force_refresh)
        }));
    }

    /// Collect a finished fetch, if any. Called once per event-loop pass;
    /// never blocks.
    pub fn poll(&mut self) {
        let finished = self
            .handle
            .as_ref()
            .map(|handle| handle.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }
        if let Some(handle) = self.handle.take() {
            match handle.join() {
                Ok((projects, source)) => {
                    self.projects = projects;
                    self.source = source;
                }
                // A panicked worker falls back to the built-in gallery
                Err(_) => {
                    self.projects = github::sample_projects();
                    self.source = DataSource::Sample;
                }
            }
            self.selected = self.selected.min(self.projects.len().saturating_sub(1));
            self.loaded = true;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.handle.is_some()
    }

    /// Re-fetch past the cache. Ignored while a load is already running.
    pub fn refresh(&mut self, login: &str, offline: bool) {
        if self.is_loading() {
            return;
        }
        self.spawn(login, offline, true);
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.projects.len() {
            self.selected += 1;
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.projects.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn loaded_screen(count: usize) -> ProjectsScreen {
        let projects = github::sample_projects().into_iter().take(count).collect();
        ProjectsScreen {
            handle: None,
            projects,
            source: DataSource::Sample,
            selected: 0,
            loaded: true,
        }
    }

    #[test]
    fn test_navigation_clamps_to_list() {
        let mut screen = loaded_screen(3);

        screen.move_up();
        assert_eq!(screen.selected, 0);

        screen.move_down();
        screen.move_down();
        assert_eq!(screen.selected, 2);
        screen.move_down();
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn test_navigation_on_empty_list() {
        let mut screen = loaded_screen(0);
        screen.move_down();
        screen.move_up();
        assert_eq!(screen.selected, 0);
        assert!(screen.selected_project().is_none());
    }

    #[test]
    fn test_selected_project_follows_cursor() {
        let mut screen = loaded_screen(3);
        screen.move_down();
        let name = screen.selected_project().map(|p| p.name.clone());
        assert_eq!(name, Some(screen.projects[1].name.clone()));
    }

    #[test]
    fn test_open_offline_eventually_loads() {
        let mut screen = ProjectsScreen::open("octocat", true);
        assert!(screen.is_loading());

        for _ in 0..200 {
            screen.poll();
            if screen.loaded {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }

        assert!(screen.loaded);
        assert!(!screen.is_loading());
        assert!(!screen.projects.is_empty());
    }

    #[test]
    fn test_refresh_ignored_while_loading() {
        let mut screen = ProjectsScreen::open("octocat", true);
        // Whatever state the first load is in, a second refresh call must
        // never stack a second worker on top of it
        screen.refresh("octocat", true);
        assert!(screen.is_loading());
        for _ in 0..200 {
            screen.poll();
            if screen.loaded {
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        assert!(screen.loaded);
    }
}
