//! Conquista engine library.
//!
//! Exposes the territory board, dice, combat resolver, missions and game
//! controller, plus the text protocol and session driver used by the
//! binary entry point.

pub mod board;
pub mod config;
pub mod dice;
pub mod engine;
pub mod logging;
pub mod mission;
pub mod protocol;
pub mod resolve;
pub mod session;
