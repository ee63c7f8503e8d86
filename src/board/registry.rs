//! The territory registry.
//!
//! Holds the fixed-capacity, index-addressed collection of territories for
//! one game. Capacity is reserved up front and never grows.

use std::collections::TryReserveError;

use super::territory::Territory;

/// Number of territories on the default map.
pub const TERRITORY_COUNT: usize = 5;

/// Errors raised while building the registry or its territories.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to reserve space for {capacity} territories")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("a registry needs room for at least one territory")]
    ZeroCapacity,

    #[error("registry is full ({0} territories)")]
    Full(usize),

    #[error("territory name must not be empty")]
    EmptyName,

    #[error("faction color must not be empty")]
    EmptyColor,

    #[error("troop count must not be negative, got {0}")]
    NegativeTroops(i32),
}

/// Ordered, fixed-capacity collection of territories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryRegistry {
    capacity: usize,
    territories: Vec<Territory>,
}

impl TerritoryRegistry {
    /// Reserves room for exactly `capacity` territories.
    pub fn with_capacity(capacity: usize) -> Result<Self, RegistryError> {
        if capacity == 0 {
            return Err(RegistryError::ZeroCapacity);
        }
        let mut territories = Vec::new();
        territories
            .try_reserve_exact(capacity)
            .map_err(|source| RegistryError::Allocation { capacity, source })?;
        Ok(TerritoryRegistry {
            capacity,
            territories,
        })
    }

    /// Builds a full registry whose capacity equals the number of territories given.
    pub fn with_territories(territories: Vec<Territory>) -> Result<Self, RegistryError> {
        let mut registry = Self::with_capacity(territories.len())?;
        for territory in territories {
            registry.push(territory)?;
        }
        Ok(registry)
    }

    /// Appends a territory and returns its index.
    pub fn push(&mut self, territory: Territory) -> Result<usize, RegistryError> {
        if self.is_full() {
            return Err(RegistryError::Full(self.capacity));
        }
        self.territories.push(territory);
        Ok(self.territories.len() - 1)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Returns true once every reserved slot has been filled.
    pub fn is_full(&self) -> bool {
        self.territories.len() == self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Territory> {
        self.territories.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Borrows two distinct territories mutably at once.
    ///
    /// Returns None if the indices are equal or either is out of range.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if first == second || first >= len || second >= len {
            return None;
        }
        if first < second {
            let (head, tail) = self.territories.split_at_mut(second);
            Some((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first);
            Some((&mut tail[0], &mut head[second]))
        }
    }

    /// Counts the territories held by `color`, regardless of troop count.
    pub fn count_held_by(&self, color: &str) -> usize {
        self.territories.iter().filter(|t| t.is_held_by(color)).count()
    }
}

impl<'a> IntoIterator for &'a TerritoryRegistry {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.territories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn territory(name: &str, color: &str, troops: i32) -> Territory {
        Territory::new(name, color, troops).unwrap()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            TerritoryRegistry::with_capacity(0),
            Err(RegistryError::ZeroCapacity)
        ));
    }

    #[test]
    fn huge_capacity_reports_allocation_failure() {
        let result = TerritoryRegistry::with_capacity(usize::MAX);
        assert!(matches!(result, Err(RegistryError::Allocation { .. })));
    }

    #[test]
    fn push_fills_up_to_capacity() {
        let mut registry = TerritoryRegistry::with_capacity(2).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.push(territory("Chile", "Azul", 2)).unwrap(), 0);
        assert!(!registry.is_full());
        assert_eq!(registry.push(territory("Peru", "Verde", 1)).unwrap(), 1);
        assert!(registry.is_full());
        assert!(matches!(
            registry.push(territory("Bolivia", "Preto", 1)),
            Err(RegistryError::Full(2))
        ));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.capacity(), 2);
    }

    #[test]
    fn get_is_index_addressed() {
        let registry = TerritoryRegistry::with_territories(vec![
            territory("Chile", "Azul", 2),
            territory("Peru", "Verde", 1),
        ])
        .unwrap();
        assert_eq!(registry.get(1).unwrap().name, "Peru");
        assert!(registry.get(2).is_none());
    }

    #[test]
    fn pair_mut_returns_both_in_requested_order() {
        let mut registry = TerritoryRegistry::with_territories(vec![
            territory("Chile", "Azul", 2),
            territory("Peru", "Verde", 1),
            territory("Bolivia", "Preto", 4),
        ])
        .unwrap();

        let (a, b) = registry.pair_mut(2, 0).unwrap();
        assert_eq!(a.name, "Bolivia");
        assert_eq!(b.name, "Chile");
        a.troops = 9;

        let (a, b) = registry.pair_mut(0, 2).unwrap();
        assert_eq!(a.name, "Chile");
        assert_eq!(b.troops, 9);
    }

    #[test]
    fn pair_mut_rejects_same_or_out_of_range() {
        let mut registry = TerritoryRegistry::with_territories(vec![
            territory("Chile", "Azul", 2),
            territory("Peru", "Verde", 1),
        ])
        .unwrap();
        assert!(registry.pair_mut(1, 1).is_none());
        assert!(registry.pair_mut(0, 2).is_none());
        assert!(registry.pair_mut(5, 0).is_none());
    }

    #[test]
    fn count_held_by_ignores_troops() {
        let mut registry = TerritoryRegistry::with_territories(vec![
            territory("Chile", "Azul", 2),
            territory("Peru", "Azul", 1),
            territory("Bolivia", "Verde", 4),
        ])
        .unwrap();
        registry.get_mut(1).unwrap().troops = 0;
        assert_eq!(registry.count_held_by("Azul"), 2);
        assert_eq!(registry.count_held_by("Verde"), 1);
        assert_eq!(registry.count_held_by("Roxo"), 0);
    }
}
