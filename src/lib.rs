//! # ankhor
//!
//! An authoritative rules engine for the tile-drafting board game Ankh'or
//! (2-4 players): a shared marketplace of tiles priced in colored tokens, a
//! shared token economy with scarcity limits, and a per-player placement
//! grid with adjacency constraints.
//!
//! ## Design Principles
//!
//! 1. **Authoritative Shop**: all token and tile ownership changes go
//!    through `Shop` transactions. Players never mutate their own pools.
//!
//! 2. **Atomic Transactions**: every transaction validates against
//!    pre-transaction state, then commits. A failed call leaves every pool,
//!    deck, queue, and grid exactly as it was.
//!
//! 3. **Deterministic Construction**: shuffling is driven by a seeded
//!    `GameRng` owned by the construction path. No global random state, so
//!    sessions are reproducible and safe to build in parallel.
//!
//! 4. **Typed Failures**: every rejection is a variant of a closed error
//!    enum. Callers branch on kind, not on message text, and can tell
//!    programmer errors (bad index) from legal-but-unaffordable moves.
//!
//! ## Modules
//!
//! - `core`: player identity, per-player storage, seeded RNG
//! - `tokens`: token colors, count vectors, capacity-checked resource pools
//! - `tiles`: tile data model, the tile/code bijection, the two draw stacks
//! - `grid`: the per-player placement grid and its legality rules
//! - `shop`: the transaction engine (buy / destroy / draw resources)
//! - `game`: session composition with an action history

pub mod core;
pub mod game;
pub mod grid;
pub mod shop;
pub mod tiles;
pub mod tokens;

// Re-export commonly used types
pub use crate::core::{GameRng, Player, PlayerId, PlayerMap};

pub use crate::tokens::{
    PoolCaps, PoolError, PoolState, ResourcePool, Token, TokenColor, TokenCounts,
};

pub use crate::tiles::{Deck, DeckError, StackId, Tile, TileColor, TileSymbol};

pub use crate::grid::{Grid, GridCoord, PlacementError};

pub use crate::shop::{PriceBasket, Shop, ShopError, ShopSnapshot};

pub use crate::game::{Action, ActionRecord, Game, GameError};
