//! Game controller.
//!
//! Owns the territory registry, the player's color, the secret mission and
//! the random source for one game, and turns player intents into outcomes.
//! It never reads input or writes output; the shell renders whatever
//! [`TurnOutcome`] a turn produces.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::board::{bound_color, TerritoryRegistry};
use crate::dice::RandomSource;
use crate::mission::{check_victory, describe_mission, Mission, MissionRules};
use crate::resolve::{resolve_attack, CombatOutcome};

/// What the player asked to do this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Attack `defender` from `attacker` (0-based registry indices).
    Attack { attacker: usize, defender: usize },
    CheckMission,
    Quit,
    /// Input that did not map to any known action.
    Invalid,
}

/// Reasons a turn was rejected without touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum TurnError {
    #[error("territory index {index} is out of range (0..{count})")]
    InvalidIndex { index: usize, count: usize },

    #[error("territory {0} cannot attack itself")]
    SelfAttack(usize),

    #[error("the game is already over")]
    GameOver,
}

/// The single result produced by a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TurnOutcome {
    Combat(CombatOutcome),
    Mission { fulfilled: bool },
    Rejected(TurnError),
    InvalidChoice,
    Quit,
}

/// Whether the game is still being played and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    Running,
    Victory,
    Quit,
}

/// Holds the mutable state of one game.
#[derive(Debug)]
pub struct Game<S> {
    registry: TerritoryRegistry,
    player_color: String,
    mission_id: usize,
    rules: MissionRules,
    source: S,
    status: GameStatus,
    turns: u32,
}

impl<S: RandomSource> Game<S> {
    /// Starts a game, drawing the player's secret mission from `source`.
    pub fn new(
        registry: TerritoryRegistry,
        player_color: impl AsRef<str>,
        rules: MissionRules,
        mut source: S,
    ) -> Self {
        let mission_id = source.choose_mission();
        Self::with_mission(registry, player_color, mission_id, rules, source)
    }

    /// Starts a game with a mission chosen by the caller.
    ///
    /// The player color and target faction are bounded like territory colors
    /// so they compare equal to what the registry stores.
    pub fn with_mission(
        registry: TerritoryRegistry,
        player_color: impl AsRef<str>,
        mission_id: usize,
        mut rules: MissionRules,
        source: S,
    ) -> Self {
        let player_color = bound_color(player_color.as_ref());
        rules.target_faction = bound_color(&rules.target_faction);
        info!(
            player = %player_color,
            mission = mission_id,
            territories = registry.len(),
            "game started"
        );
        Game {
            registry,
            player_color,
            mission_id,
            rules,
            source,
            status: GameStatus::Running,
            turns: 0,
        }
    }

    pub fn registry(&self) -> &TerritoryRegistry {
        &self.registry
    }

    pub fn player_color(&self) -> &str {
        &self.player_color
    }

    pub fn mission_id(&self) -> usize {
        self.mission_id
    }

    /// The drawn mission, or None if its id is unknown.
    pub fn mission(&self) -> Option<Mission> {
        Mission::from_id(self.mission_id)
    }

    pub fn mission_description(&self) -> String {
        describe_mission(self.mission_id, &self.rules)
    }

    pub fn rules(&self) -> &MissionRules {
        &self.rules
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Running
    }

    /// Number of turns played so far, rejected ones included.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Plays one turn.
    pub fn play(&mut self, intent: Intent) -> TurnOutcome {
        if self.is_over() {
            warn!(?intent, "turn attempted after the game ended");
            return TurnOutcome::Rejected(TurnError::GameOver);
        }
        self.turns += 1;
        debug!(turn = self.turns, ?intent, "playing turn");

        match intent {
            Intent::Attack { attacker, defender } => match self.attack(attacker, defender) {
                Ok(outcome) => TurnOutcome::Combat(outcome),
                Err(e) => TurnOutcome::Rejected(e),
            },
            Intent::CheckMission => TurnOutcome::Mission {
                fulfilled: self.check_mission(),
            },
            Intent::Quit => {
                self.status = GameStatus::Quit;
                info!(turns = self.turns, "player quit");
                TurnOutcome::Quit
            }
            Intent::Invalid => {
                warn!("invalid choice");
                TurnOutcome::InvalidChoice
            }
        }
    }

    /// Validates the pair of indices and resolves one battle between them.
    fn attack(&mut self, attacker: usize, defender: usize) -> Result<CombatOutcome, TurnError> {
        let count = self.registry.len();
        for index in [attacker, defender] {
            if index >= count {
                warn!(index, count, "attack with out-of-range territory");
                return Err(TurnError::InvalidIndex { index, count });
            }
        }
        if attacker == defender {
            warn!(index = attacker, "territory tried to attack itself");
            return Err(TurnError::SelfAttack(attacker));
        }

        let (from, to) = self
            .registry
            .pair_mut(attacker, defender)
            .ok_or(TurnError::InvalidIndex { index: attacker, count })?;
        Ok(resolve_attack(from, to, &mut self.source))
    }

    /// Evaluates the mission; a fulfilled mission ends the game.
    fn check_mission(&mut self) -> bool {
        let fulfilled = check_victory(&self.registry, self.mission_id, &self.player_color, &self.rules);
        if fulfilled {
            self.status = GameStatus::Victory;
            info!(turns = self.turns, mission = self.mission_id, "mission fulfilled");
        }
        fulfilled
    }
}
