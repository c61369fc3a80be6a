//! Command Parsing
//!
//! Recognizes prefixed commands ahead of plain guess traffic. Anything
//! without the prefix is a regular chat message and flows to the running
//! session instead.

/// A parsed chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `anagrams 6` / `anagrams 7`
    StartRandom { length: usize },
    /// `anagrams <word>`
    StartCustom { word: String },
    /// `status`
    Status,
    /// `help`
    Help,
    /// `anagrams` with no argument
    MissingArgument,
    /// Prefixed, but not a command we know
    Unrecognized,
}

/// Parse a prefixed command; returns `None` for plain messages.
pub fn parse(prefix: &str, content: &str) -> Option<Command> {
    let rest = content.strip_prefix(prefix)?;
    let mut parts = rest.split_whitespace();

    let command = match parts.next() {
        Some("anagrams") => match parts.next() {
            Some("6") => Command::StartRandom { length: 6 },
            Some("7") => Command::StartRandom { length: 7 },
            Some(word) => Command::StartCustom {
                word: word.to_string(),
            },
            None => Command::MissingArgument,
        },
        Some("status") => Command::Status,
        Some("help") => Command::Help,
        _ => Command::Unrecognized,
    };
    Some(command)
}
