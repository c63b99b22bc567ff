//! Session composition: shop + players + grid + action history.

pub mod record;
pub mod session;

pub use record::{Action, ActionRecord};
pub use session::{Game, GameError};
