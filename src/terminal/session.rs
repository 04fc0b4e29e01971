//! Session state: scrollback, the input line, and command history.
//!
//! Cursor positions are in characters, not bytes, so editing works with
//! any input the terminal delivers.

use std::collections::VecDeque;

use crate::constants::{MAX_HISTORY_ENTRIES, MAX_SCROLLBACK_LINES};
use crate::profile::Profile;

/// How a scrollback line gets styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted input line.
    Command,
    Output,
    Error,
    /// Banner text and app-generated notes.
    System,
}

#[derive(Debug, Clone)]
pub struct SessionLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct TerminalSession {
    pub lines: VecDeque<SessionLine>,
    pub input: String,
    /// Cursor position within `input`, in chars.
    pub cursor: usize,
    history: Vec<String>,
    /// Index into `history` while browsing, None at the live prompt.
    history_cursor: Option<usize>,
    /// Draft input stashed while browsing history.
    stash: String,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session opening with the welcome banner.
    pub fn with_banner(profile: &Profile) -> Self {
        let mut session = Self::new();
        session.push_system(format!("{} :: {}", profile.name, profile.title));
        session.push_system("Welcome to my terminal portfolio.");
        session.push_system("Type 'help' for the command list, Tab to complete.");
        session.push_output("");
        session
    }

    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push_back(SessionLine {
            kind,
            text: text.into(),
        });
        while self.lines.len() > MAX_SCROLLBACK_LINES {
            self.lines.pop_front();
        }
    }

    pub fn push_output(&mut self, text: impl Into<String>) {
        self.push(LineKind::Output, text);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(LineKind::Error, text);
    }

    pub fn push_system(&mut self, text: impl Into<String>) {
        self.push(LineKind::System, text);
    }

    // -- Input line editing --

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.input.remove(at);
        self.cursor -= 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Replace the input line wholesale (tab completion).
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.char_count();
    }

    /// Submit the input line: echo it into scrollback, remember it in
    /// history, reset the prompt, and hand the trimmed text back.
    pub fn take_input(&mut self) -> String {
        let raw = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.history_cursor = None;
        self.stash.clear();

        let trimmed = raw.trim().to_string();
        self.push(LineKind::Command, trimmed.clone());

        let repeat = self.history.last().map(|last| last.as_str()) == Some(trimmed.as_str());
        if !trimmed.is_empty() && !repeat {
            self.history.push(trimmed.clone());
            while self.history.len() > MAX_HISTORY_ENTRIES {
                self.history.remove(0);
            }
        }
        trimmed
    }

    // -- History browsing --

    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_cursor {
            None => {
                self.stash = self.input.clone();
                self.history_cursor = Some(self.history.len() - 1);
            }
            Some(0) => {}
            Some(i) => self.history_cursor = Some(i - 1),
        }
        if let Some(i) = self.history_cursor {
            self.input = self.history[i].clone();
            self.cursor = self.char_count();
        }
    }

    pub fn history_next(&mut self) {
        match self.history_cursor {
            None => {}
            Some(i) if i + 1 < self.history.len() => {
                self.history_cursor = Some(i + 1);
                self.input = self.history[i + 1].clone();
                self.cursor = self.char_count();
            }
            Some(_) => {
                // Walked past the newest entry: back to the stashed draft
                self.history_cursor = None;
                self.input = std::mem::take(&mut self.stash);
                self.cursor = self.char_count();
            }
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear_screen(&mut self) {
        self.lines.clear();
    }
}
