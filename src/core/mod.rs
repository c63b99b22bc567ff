//! Core types: player identity, per-player storage, seeded RNG.
//!
//! Everything here is game-logic-free plumbing the rest of the engine is
//! built on.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
