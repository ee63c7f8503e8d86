//! Text protocol for the terminal shell.
//!
//! Parses player commands and territory setup lines, and renders the map,
//! the mission and turn outcomes. The game engine itself never performs
//! input or output.

pub mod parser;
pub mod render;
pub mod setup;

pub use parser::{parse_command, Command};
pub use render::{write_map, write_menu, write_mission, write_outcome};
pub use setup::{parse_territory_line, SetupError};
