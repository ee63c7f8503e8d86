//! Text rendering of game state and turn outcomes.
//!
//! Everything here writes to a caller-supplied `Write`; nothing prints
//! directly.

use std::io::{self, Write};

use crate::board::TerritoryRegistry;
use crate::engine::{TurnError, TurnOutcome};
use crate::resolve::{BattleResult, CombatOutcome};

/// Writes the map as a table with 1-based positions.
pub fn write_map<W: Write>(out: &mut W, registry: &TerritoryRegistry) -> io::Result<()> {
    writeln!(out, "=== CURRENT MAP ===")?;
    writeln!(out, "{:>2}  {:<20} | {:<15} | {}", "#", "Territory", "Color", "Troops")?;
    writeln!(out, "{}", "-".repeat(52))?;
    for (i, t) in registry.iter().enumerate() {
        writeln!(out, "{:>2}  {:<20} | {:<15} | {}", i + 1, t.name, t.color, t.troops)?;
    }
    Ok(())
}

/// Writes the player's mission.
pub fn write_mission<W: Write>(out: &mut W, description: &str) -> io::Result<()> {
    writeln!(out, "=== YOUR MISSION ===")?;
    writeln!(out, "{}", description)
}

/// Writes the action menu.
pub fn write_menu<W: Write>(out: &mut W, territory_count: usize) -> io::Result<()> {
    writeln!(out, "=== MAIN MENU ===")?;
    writeln!(out, "1 <from> <to> - Attack (positions 1 to {})", territory_count)?;
    writeln!(out, "2 - Check mission")?;
    writeln!(out, "0 - Quit")
}

/// Writes the narration for one turn.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &TurnOutcome) -> io::Result<()> {
    match outcome {
        TurnOutcome::Combat(combat) => write_combat(out, combat),
        TurnOutcome::Mission { fulfilled: true } => {
            writeln!(out, "Congratulations! You fulfilled your mission and won the war!")
        }
        TurnOutcome::Mission { fulfilled: false } => {
            writeln!(out, "You have not fulfilled your mission yet. Keep fighting!")
        }
        TurnOutcome::Rejected(e) => write_rejection(out, e),
        TurnOutcome::InvalidChoice => writeln!(out, "Invalid choice! Try again."),
        TurnOutcome::Quit => writeln!(out, "Leaving the game..."),
    }
}

fn write_combat<W: Write>(out: &mut W, combat: &CombatOutcome) -> io::Result<()> {
    writeln!(out, "=== ATTACK ===")?;
    writeln!(
        out,
        "{} ({}) attacks {} ({})",
        combat.attacker, combat.attacker_color, combat.defender, combat.defender_color
    )?;
    writeln!(out, "Attack die: {}", combat.attack_roll)?;
    writeln!(out, "Defense die: {}", combat.defense_roll)?;
    match combat.result {
        BattleResult::AttackerWon => {
            writeln!(out, "Attack succeeded! The defender loses 1 troop.")?;
        }
        BattleResult::DefenderHeld => {
            writeln!(out, "Attack failed! The attacker loses 1 troop.")?;
        }
    }
    if let Some(owner) = &combat.new_owner {
        writeln!(out, "{} was conquered by {}!", combat.defender, owner)?;
    }
    Ok(())
}

fn write_rejection<W: Write>(out: &mut W, error: &TurnError) -> io::Result<()> {
    match error {
        TurnError::InvalidIndex { .. } => writeln!(out, "Invalid territory positions!"),
        TurnError::SelfAttack(_) => writeln!(out, "A territory cannot attack itself!"),
        TurnError::GameOver => writeln!(out, "The game is over."),
    }
}
