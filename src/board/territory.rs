//! Territory records.
//!
//! A territory is a named piece of land held by one faction color with a
//! garrison of troops. Names and colors are bounded in length; longer input
//! is truncated at a character boundary.

use serde::{Deserialize, Serialize};

use super::registry::RegistryError;

/// Maximum number of characters kept in a territory name.
pub const NAME_MAX_LEN: usize = 49;

/// Maximum number of characters kept in a faction color.
pub const COLOR_MAX_LEN: usize = 19;

/// A single territory on the map.
///
/// `troops` is signed: an attacker that conquers with its last troop is left
/// at zero or below and is not clamped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Territory {
    pub name: String,
    pub color: String,
    pub troops: i32,
}

impl Territory {
    /// Builds a territory, trimming and truncating the name and color.
    ///
    /// Fails if either is empty after trimming or if `troops` is negative.
    pub fn new(name: &str, color: &str, troops: i32) -> Result<Self, RegistryError> {
        if troops < 0 {
            return Err(RegistryError::NegativeTroops(troops));
        }
        let name = bounded(name, NAME_MAX_LEN);
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        let color = bounded(color, COLOR_MAX_LEN);
        if color.is_empty() {
            return Err(RegistryError::EmptyColor);
        }
        Ok(Territory {
            name,
            color,
            troops,
        })
    }

    /// Returns true if this territory is held by `color`.
    pub fn is_held_by(&self, color: &str) -> bool {
        self.color == color
    }

    /// Returns true if `color` holds this territory with at least one troop.
    pub fn has_living_presence(&self, color: &str) -> bool {
        self.is_held_by(color) && self.troops > 0
    }
}

/// Normalises a faction color the same way territory colors are stored.
pub fn bound_color(raw: &str) -> String {
    bounded(raw, COLOR_MAX_LEN)
}

/// Trims surrounding whitespace and keeps at most `max` characters.
pub(crate) fn bounded(raw: &str, max: usize) -> String {
    raw.trim().chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_whitespace() {
        let t = Territory::new("  Brasil \n", " Azul ", 3).unwrap();
        assert_eq!(t.name, "Brasil");
        assert_eq!(t.color, "Azul");
        assert_eq!(t.troops, 3);
    }

    #[test]
    fn new_truncates_long_fields() {
        let long_name = "x".repeat(80);
        let long_color = "Vermelho-Escarlate-Profundo";
        let t = Territory::new(&long_name, long_color, 1).unwrap();
        assert_eq!(t.name.chars().count(), NAME_MAX_LEN);
        assert_eq!(t.color.chars().count(), COLOR_MAX_LEN);
        assert_eq!(t.color, "Vermelho-Escarlate-");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let name = "á".repeat(60);
        let t = Territory::new(&name, "Azul", 1).unwrap();
        assert_eq!(t.name.chars().count(), NAME_MAX_LEN);
        assert!(t.name.chars().all(|c| c == 'á'));
    }

    #[test]
    fn new_rejects_empty_name_and_color() {
        assert!(matches!(
            Territory::new("   ", "Azul", 1),
            Err(RegistryError::EmptyName)
        ));
        assert!(matches!(
            Territory::new("Chile", "", 1),
            Err(RegistryError::EmptyColor)
        ));
    }

    #[test]
    fn new_rejects_negative_troops() {
        assert!(matches!(
            Territory::new("Peru", "Verde", -1),
            Err(RegistryError::NegativeTroops(-1))
        ));
        assert!(matches!(
            Territory::new("Peru", "Verde", i32::MIN),
            Err(RegistryError::NegativeTroops(i32::MIN))
        ));
        assert_eq!(Territory::new("Peru", "Verde", 0).unwrap().troops, 0);
    }

    #[test]
    fn bound_color_matches_stored_color() {
        let long = "Vermelho-Escarlate-Profundo";
        let t = Territory::new("Peru", long, 1).unwrap();
        assert_eq!(bound_color(long), t.color);
        assert_eq!(bound_color("  Azul "), "Azul");
    }

    #[test]
    fn living_presence_requires_troops() {
        let mut t = Territory::new("Peru", "Verde", 1).unwrap();
        assert!(t.has_living_presence("Verde"));
        assert!(!t.has_living_presence("Azul"));
        t.troops = 0;
        assert!(t.is_held_by("Verde"));
        assert!(!t.has_living_presence("Verde"));
    }
}
