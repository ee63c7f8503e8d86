//! One-shot dice combat between two territories.
//!
//! Each attack rolls one die per side. The attacker wins ties. A defender
//! driven to zero troops is conquered: it keeps a garrison of exactly one
//! troop, changes to the attacker's color, and the attacker pays one troop
//! for the advance. The attacker's own count is never clamped, so it can end
//! at zero or below after conquering with its last troop.

use serde::Serialize;
use tracing::{debug, info};

use crate::board::Territory;
use crate::dice::RandomSource;

/// Which side lost a troop in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BattleResult {
    /// Attack roll met or beat the defense roll; the defender lost a troop.
    AttackerWon,
    /// Defense roll was higher; the attacker lost a troop.
    DefenderHeld,
}

/// Troop count of one side before and after a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TroopChange {
    pub before: i32,
    pub after: i32,
}

impl TroopChange {
    /// Signed change in troops (negative for a loss).
    pub const fn delta(self) -> i32 {
        self.after.saturating_sub(self.before)
    }
}

/// Narration of a single resolved attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatOutcome {
    pub attacker: String,
    pub defender: String,
    pub attacker_color: String,
    /// Defender's color before the battle.
    pub defender_color: String,
    pub attack_roll: u8,
    pub defense_roll: u8,
    pub result: BattleResult,
    pub attacker_troops: TroopChange,
    pub defender_troops: TroopChange,
    pub conquered: bool,
    /// The defender's new color when it was conquered.
    pub new_owner: Option<String>,
}

/// Rolls attack and defense dice from `source` and resolves the battle.
///
/// The caller guarantees the two territories are different entries.
pub fn resolve_attack<S: RandomSource + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    source: &mut S,
) -> CombatOutcome {
    let attack_roll = source.roll_die();
    let defense_roll = source.roll_die();
    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defense_roll,
        "dice rolled"
    );
    apply_rolls(attacker, defender, attack_roll, defense_roll)
}

/// Resolves a battle with already-rolled dice.
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defense_roll: u8,
) -> CombatOutcome {
    let attacker_before = attacker.troops;
    let defender_before = defender.troops;
    let defender_color = defender.color.clone();

    let mut conquered = false;
    let result = if attack_roll >= defense_roll {
        defender.troops = defender.troops.saturating_sub(1);
        if defender.troops <= 0 {
            conquered = true;
            attacker.troops = attacker.troops.saturating_sub(1);
            defender.troops = 1;
            defender.color.clone_from(&attacker.color);
            info!(
                territory = %defender.name,
                from = %defender_color,
                to = %attacker.color,
                "territory conquered"
            );
        }
        BattleResult::AttackerWon
    } else {
        attacker.troops = attacker.troops.saturating_sub(1);
        BattleResult::DefenderHeld
    };

    CombatOutcome {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        attacker_color: attacker.color.clone(),
        defender_color,
        attack_roll,
        defense_roll,
        result,
        attacker_troops: TroopChange {
            before: attacker_before,
            after: attacker.troops,
        },
        defender_troops: TroopChange {
            before: defender_before,
            after: defender.troops,
        },
        conquered,
        new_owner: conquered.then(|| attacker.color.clone()),
    }
}
