//! Attack resolution.
//!
//! Resolves a single dice battle between two territories and reports what
//! happened as a [`CombatOutcome`].

pub mod combat;

pub use combat::{apply_rolls, resolve_attack, BattleResult, CombatOutcome, TroopChange};
