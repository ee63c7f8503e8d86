//! A complete game played over a line-oriented text stream.
//!
//! Reads territory setup (unless the config presets it), then runs the turn
//! loop until the player wins, quits, or input ends. Used by the binary with
//! stdin/stdout and by tests with in-memory buffers.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::board::{RegistryError, TerritoryRegistry};
use crate::config::GameConfig;
use crate::dice::RandomSource;
use crate::engine::{Game, TurnOutcome};
use crate::protocol::{
    parse_command, parse_territory_line, write_map, write_menu, write_mission, write_outcome,
    Command,
};

/// Fatal errors that stop a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to build the map: {0}")]
    Registry(#[from] RegistryError),

    #[error("input ended after {received} of {expected} territories")]
    IncompleteSetup { expected: usize, received: usize },
}

/// Plays one game, returning it in its final state.
pub fn run_session<R, W, S>(
    config: &GameConfig,
    input: R,
    out: &mut W,
    source: S,
) -> Result<Game<S>, SessionError>
where
    R: BufRead,
    W: Write,
    S: RandomSource,
{
    let mut lines = input.lines();
    let registry = build_registry(config, &mut lines, out)?;

    let mut game = Game::new(
        registry,
        config.player_color.clone(),
        config.rules.clone(),
        source,
    );

    writeln!(out, "=== STRATEGIC WAR ===")?;
    writeln!(out, "Your army: {}", game.player_color())?;
    write_map(out, game.registry())?;
    write_mission(out, &game.mission_description())?;
    write_menu(out, game.registry().len())?;
    out.flush()?;

    for line in lines {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd.intent() {
            None => match cmd {
                Command::Map => write_map(out, game.registry())?,
                _ => {
                    write_mission(out, &game.mission_description())?;
                    write_menu(out, game.registry().len())?;
                }
            },
            Some(intent) => {
                let outcome = game.play(intent);
                write_outcome(out, &outcome)?;
                if matches!(outcome, TurnOutcome::Combat(_)) {
                    write_map(out, game.registry())?;
                }
            }
        }
        out.flush()?;

        if game.is_over() {
            break;
        }
    }

    if !game.is_over() {
        info!(turns = game.turns(), "input closed before the game ended");
    }
    Ok(game)
}

/// Fills the registry from the config presets or from setup lines.
fn build_registry<B, W>(
    config: &GameConfig,
    lines: &mut io::Lines<B>,
    out: &mut W,
) -> Result<TerritoryRegistry, SessionError>
where
    B: BufRead,
    W: Write,
{
    let mut registry = TerritoryRegistry::with_capacity(config.territory_count)?;

    if !config.territories.is_empty() {
        for setup in &config.territories {
            registry.push(setup.to_territory()?)?;
        }
        return Ok(registry);
    }

    writeln!(out, "=== TERRITORY SETUP ===")?;
    while !registry.is_full() {
        writeln!(
            out,
            "Territory {} (<troops> <color> <name>):",
            registry.len() + 1
        )?;
        out.flush()?;

        let line = loop {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
                None => {
                    return Err(SessionError::IncompleteSetup {
                        expected: registry.capacity(),
                        received: registry.len(),
                    })
                }
            }
        };

        match parse_territory_line(&line) {
            Ok(territory) => {
                registry.push(territory)?;
            }
            Err(e) => {
                warn!(input = %line, error = %e, "rejected territory line");
                writeln!(out, "{}", e)?;
            }
        }
    }
    Ok(registry)
}
