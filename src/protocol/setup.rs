//! Territory setup lines.
//!
//! Each territory is entered on one line as `<troops> <color> <name...>`.
//! The name is everything after the color, so it may contain spaces.

use crate::board::{RegistryError, Territory};

/// Errors that can occur while parsing a setup line.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("missing {0} in territory line; expected '<troops> <color> <name>'")]
    MissingField(&'static str),

    #[error("invalid troop count: '{0}'")]
    InvalidTroops(String),

    #[error(transparent)]
    Territory(#[from] RegistryError),
}

/// Parses `<troops> <color> <name...>` into a territory.
pub fn parse_territory_line(line: &str) -> Result<Territory, SetupError> {
    let (troops_str, rest) = split_token(line).ok_or(SetupError::MissingField("troops"))?;
    let troops = troops_str
        .parse::<i32>()
        .map_err(|_| SetupError::InvalidTroops(troops_str.to_string()))?;

    let (color, name) = split_token(rest).ok_or(SetupError::MissingField("color"))?;
    if name.trim().is_empty() {
        return Err(SetupError::MissingField("name"));
    }

    Ok(Territory::new(name, color, troops)?)
}

/// Splits off the first whitespace-delimited token.
fn split_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], &s[idx..])),
        None => Some((s, "")),
    }
}
