//! The command table: names, parsing, and tab completion.

/// Everything the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Contact,
    Projects,
    Dashboard,
    Weather,
    Quote,
    Run,
    Shooter,
    Scores,
    Clear,
    Version,
    Exit,
}

pub struct CommandSpec {
    pub name: &'static str,
    pub command: Command,
    pub blurb: &'static str,
}

/// Visible command table, in `help` display order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        command: Command::Help,
        blurb: "List available commands",
    },
    CommandSpec {
        name: "about",
        command: Command::About,
        blurb: "Who I am",
    },
    CommandSpec {
        name: "skills",
        command: Command::Skills,
        blurb: "Tools and technologies I work with",
    },
    CommandSpec {
        name: "contact",
        command: Command::Contact,
        blurb: "Ways to reach me",
    },
    CommandSpec {
        name: "projects",
        command: Command::Projects,
        blurb: "Open the projects gallery",
    },
    CommandSpec {
        name: "dashboard",
        command: Command::Dashboard,
        blurb: "Location, weather and exchange rates",
    },
    CommandSpec {
        name: "weather",
        command: Command::Weather,
        blurb: "Current conditions in one line",
    },
    CommandSpec {
        name: "quote",
        command: Command::Quote,
        blurb: "A random quote",
    },
    CommandSpec {
        name: "run",
        command: Command::Run,
        blurb: "Play the endless runner",
    },
    CommandSpec {
        name: "shooter",
        command: Command::Shooter,
        blurb: "Play the meteor shooter",
    },
    CommandSpec {
        name: "scores",
        command: Command::Scores,
        blurb: "Arcade best scores",
    },
    CommandSpec {
        name: "clear",
        command: Command::Clear,
        blurb: "Clear the screen",
    },
    CommandSpec {
        name: "version",
        command: Command::Version,
        blurb: "Build information",
    },
    CommandSpec {
        name: "exit",
        command: Command::Exit,
        blurb: "Leave the session",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Empty,
    Known(Command),
    /// First word of the line, as typed, for the error message.
    Unknown(String),
}

/// Parse an input line. Only the first word selects the command; the
/// match is case-insensitive and trailing words are ignored.
pub fn parse(line: &str) -> ParseOutcome {
    let mut words = line.trim().split_whitespace();
    let word = match words.next() {
        Some(word) => word,
        None => return ParseOutcome::Empty,
    };
    let lowered = word.to_lowercase();

    // Muscle-memory alias, kept out of the help table
    if lowered == "quit" {
        return ParseOutcome::Known(Command::Exit);
    }

    for spec in COMMANDS {
        if spec.name == lowered {
            return ParseOutcome::Known(spec.command);
        }
    }
    ParseOutcome::Unknown(word.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    None,
    /// Exactly one command matches the prefix.
    Single(&'static str),
    /// Several commands match; candidates in table order.
    Multiple(Vec<&'static str>),
}

/// Tab completion over the command table.
pub fn complete(prefix: &str) -> Completion {
    let lowered = prefix.trim().to_lowercase();
    if lowered.is_empty() {
        return Completion::None;
    }
    let matches: Vec<&'static str> = COMMANDS
        .iter()
        .map(|spec| spec.name)
        .filter(|name| name.starts_with(&lowered))
        .collect();
    match matches.len() {
        0 => Completion::None,
        1 => Completion::Single(matches[0]),
        _ => Completion::Multiple(matches),
    }
}
