//! Secret missions and victory checks.
//!
//! A mission is drawn once per game by id. Ids outside the known range are
//! legal values: they describe as an unknown mission and are never fulfilled.

use serde::{Deserialize, Serialize};

use crate::board::TerritoryRegistry;

/// Number of known missions; valid ids are `0..MISSION_COUNT`.
pub const MISSION_COUNT: usize = 2;

/// Faction targeted by the elimination mission unless configured otherwise.
pub const DEFAULT_TARGET_FACTION: &str = "Verde";

/// Territories needed for the conquest mission unless configured otherwise.
pub const DEFAULT_TERRITORY_GOAL: usize = 3;

/// A victory condition assigned to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mission {
    /// No territory of the target faction may keep a living garrison.
    EliminateFaction,
    /// The player must hold at least the territory goal.
    ConquerTerritories,
}

/// All known missions, indexed by id.
pub const ALL_MISSIONS: [Mission; MISSION_COUNT] =
    [Mission::EliminateFaction, Mission::ConquerTerritories];

/// Parameters shared by every mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionRules {
    pub target_faction: String,
    pub territory_goal: usize,
}

impl Default for MissionRules {
    fn default() -> Self {
        MissionRules {
            target_faction: DEFAULT_TARGET_FACTION.to_string(),
            territory_goal: DEFAULT_TERRITORY_GOAL,
        }
    }
}

impl Mission {
    /// Looks up a mission by id.
    pub fn from_id(id: usize) -> Option<Mission> {
        ALL_MISSIONS.get(id).copied()
    }

    pub const fn id(self) -> usize {
        match self {
            Mission::EliminateFaction => 0,
            Mission::ConquerTerritories => 1,
        }
    }

    /// Player-facing description of the mission.
    pub fn describe(self, rules: &MissionRules) -> String {
        match self {
            Mission::EliminateFaction => {
                format!("Destroy the {} army completely!", rules.target_faction)
            }
            Mission::ConquerTerritories => {
                format!("Conquer at least {} territories!", rules.territory_goal)
            }
        }
    }

    /// Returns true if `my_color` has fulfilled this mission on `registry`.
    pub fn is_fulfilled(self, registry: &TerritoryRegistry, my_color: &str, rules: &MissionRules) -> bool {
        match self {
            Mission::EliminateFaction => !registry
                .iter()
                .any(|t| t.has_living_presence(&rules.target_faction)),
            Mission::ConquerTerritories => registry.count_held_by(my_color) >= rules.territory_goal,
        }
    }
}

/// Checks whether the mission with id `mission_id` is fulfilled.
///
/// Unknown ids are never fulfilled. This only reads the registry.
pub fn check_victory(
    registry: &TerritoryRegistry,
    mission_id: usize,
    my_color: &str,
    rules: &MissionRules,
) -> bool {
    match Mission::from_id(mission_id) {
        Some(mission) => mission.is_fulfilled(registry, my_color, rules),
        None => false,
    }
}

/// Describes the mission with id `mission_id`, including unknown ids.
pub fn describe_mission(mission_id: usize, rules: &MissionRules) -> String {
    match Mission::from_id(mission_id) {
        Some(mission) => mission.describe(rules),
        None => "Unknown mission!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Territory;

    fn registry(entries: &[(&str, &str, i32)]) -> TerritoryRegistry {
        let territories = entries
            .iter()
            .map(|(name, color, troops)| Territory::new(name, color, *troops).unwrap())
            .collect();
        TerritoryRegistry::with_territories(territories).unwrap()
    }

    #[test]
    fn ids_roundtrip() {
        for mission in ALL_MISSIONS {
            assert_eq!(Mission::from_id(mission.id()), Some(mission));
        }
        assert_eq!(Mission::from_id(MISSION_COUNT), None);
    }

    #[test]
    fn default_rules_match_classic_game() {
        let rules = MissionRules::default();
        assert_eq!(rules.target_faction, "Verde");
        assert_eq!(rules.territory_goal, 3);
    }

    #[test]
    fn conquer_goal_flips_at_threshold() {
        let rules = MissionRules::default();
        let mut map = registry(&[
            ("Chile", "Azul", 2),
            ("Peru", "Azul", 1),
            ("Bolivia", "Verde", 4),
            ("Equador", "Preto", 1),
            ("Colombia", "Verde", 2),
        ]);
        assert!(!check_victory(&map, 1, "Azul", &rules));

        map.get_mut(2).unwrap().color = "Azul".to_string();
        assert!(check_victory(&map, 1, "Azul", &rules));
    }

    #[test]
    fn conquer_goal_is_parameterized() {
        let rules = MissionRules {
            territory_goal: 1,
            ..MissionRules::default()
        };
        let map = registry(&[("Chile", "Azul", 2), ("Peru", "Verde", 1)]);
        assert!(check_victory(&map, 1, "Azul", &rules));
        assert!(!check_victory(&map, 1, "Roxo", &rules));
    }

    #[test]
    fn conquer_goal_counts_territories_without_troops() {
        let rules = MissionRules {
            territory_goal: 2,
            ..MissionRules::default()
        };
        let mut map = registry(&[("Chile", "Azul", 0), ("Peru", "Azul", 1), ("Bolivia", "Verde", 2)]);
        map.get_mut(1).unwrap().troops = -1;
        assert!(check_victory(&map, 1, "Azul", &rules));
    }

    #[test]
    fn single_surviving_target_blocks_elimination() {
        let rules = MissionRules::default();
        let map = registry(&[("Chile", "Azul", 5), ("Peru", "Verde", 1), ("Bolivia", "Preto", 2)]);
        assert!(!check_victory(&map, 0, "Azul", &rules));
    }

    #[test]
    fn elimination_ignores_empty_target_territories() {
        let rules = MissionRules::default();
        let mut map = registry(&[("Chile", "Azul", 5), ("Peru", "Verde", 1)]);
        map.get_mut(1).unwrap().troops = 0;
        assert!(check_victory(&map, 0, "Azul", &rules));
    }

    #[test]
    fn elimination_succeeds_with_no_target_on_map() {
        let rules = MissionRules {
            target_faction: "Amarelo".to_string(),
            ..MissionRules::default()
        };
        let map = registry(&[("Chile", "Azul", 5), ("Peru", "Verde", 1)]);
        assert!(check_victory(&map, 0, "Azul", &rules));
    }

    #[test]
    fn unknown_mission_is_never_fulfilled() {
        let rules = MissionRules {
            territory_goal: 0,
            ..MissionRules::default()
        };
        let map = registry(&[("Chile", "Azul", 5)]);
        for id in [2, 7, usize::MAX] {
            assert!(!check_victory(&map, id, "Azul", &rules));
        }
    }

    #[test]
    fn descriptions_use_rules() {
        let rules = MissionRules {
            target_faction: "Roxo".to_string(),
            territory_goal: 4,
        };
        assert_eq!(describe_mission(0, &rules), "Destroy the Roxo army completely!");
        assert_eq!(describe_mission(1, &rules), "Conquer at least 4 territories!");
        assert_eq!(describe_mission(9, &rules), "Unknown mission!");
    }
}
