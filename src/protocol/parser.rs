//! Player command parser.
//!
//! Turns one line of player input into a structured `Command`. The menu
//! numbers of the classic game (`1` attack, `2` mission, `0` quit) and
//! word aliases are both accepted. Territory positions are typed 1-based
//! and converted to 0-based registry indices here.

use tracing::debug;

use crate::engine::Intent;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `1 <from> <to>` or `attack <from> <to>`.
    Attack { attacker: usize, defender: usize },

    /// `2` or `mission`.
    CheckMission,

    /// `0` or `quit`.
    Quit,

    /// Show the map again. Not a turn.
    Map,

    /// Show the menu again. Not a turn.
    Help,

    /// Anything else, kept for the error report.
    Invalid(String),
}

impl Command {
    /// Maps the command onto a game intent. Display-only commands return None.
    pub fn intent(&self) -> Option<Intent> {
        match *self {
            Command::Attack { attacker, defender } => Some(Intent::Attack { attacker, defender }),
            Command::CheckMission => Some(Intent::CheckMission),
            Command::Quit => Some(Intent::Quit),
            Command::Invalid(_) => Some(Intent::Invalid),
            Command::Map | Command::Help => None,
        }
    }
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for blank lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let cmd = match tokens[0].to_ascii_lowercase().as_str() {
        "1" | "attack" | "a" => parse_attack(&tokens, trimmed),
        "2" | "mission" | "m" => Command::CheckMission,
        "0" | "quit" | "q" | "exit" => Command::Quit,
        "map" => Command::Map,
        "help" | "menu" | "?" => Command::Help,
        other => {
            debug!(command = other, "unknown command");
            Command::Invalid(trimmed.to_string())
        }
    };
    Some(cmd)
}

/// Parses `attack <from> <to>` with 1-based positions.
fn parse_attack(tokens: &[&str], raw: &str) -> Command {
    if tokens.len() != 3 {
        debug!("malformed attack: expected 'attack <from> <to>'");
        return Command::Invalid(raw.to_string());
    }
    match (parse_position(tokens[1]), parse_position(tokens[2])) {
        (Some(attacker), Some(defender)) => Command::Attack { attacker, defender },
        _ => {
            debug!(input = raw, "attack positions must be whole numbers starting at 1");
            Command::Invalid(raw.to_string())
        }
    }
}

/// Converts a 1-based position into a 0-based index.
fn parse_position(token: &str) -> Option<usize> {
    token.parse::<usize>().ok()?.checked_sub(1)
}
