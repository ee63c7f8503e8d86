//! Board representation.
//!
//! Contains the territory record and the fixed-capacity registry that owns
//! every territory for the lifetime of a game.

pub mod registry;
pub mod territory;

pub use registry::{RegistryError, TerritoryRegistry, TERRITORY_COUNT};
pub use territory::{bound_color, Territory, COLOR_MAX_LEN, NAME_MAX_LEN};
