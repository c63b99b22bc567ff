//! A full game session.
//!
//! `Game` wires the shop, the seated players and the grid together and
//! exposes per-player wrappers around the shop and grid operations. It
//! adds no rules of its own: no turn order, no phases, no scoring. Each
//! committed action lands in an append-only history backed by `im::Vector`,
//! so cloning a session for search is cheap.
//!
//! Sessions are fully isolated from one another; within a session the
//! caller serializes calls (one game loop advancing move by move).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Player, PlayerId, PlayerMap};
use crate::grid::{Grid, PlacementError};
use crate::shop::{Shop, ShopError};
use crate::tiles::{StackId, Tile};
use crate::tokens::Token;

use super::record::{Action, ActionRecord};

/// A session-level rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    /// The player id does not name a seat in this session.
    #[error("unknown {player}")]
    UnknownPlayer {
        /// The offending id.
        player: PlayerId,
    },

    /// A shop transaction rejection.
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// A grid placement rejection.
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A complete 2-4 player session: shop, players, grid, history.
///
/// ```
/// use ankhor::game::Game;
/// use ankhor::core::PlayerId;
/// use ankhor::tokens::{Token, TokenColor};
///
/// let mut game = Game::new(2, 42);
/// game.draw_tokens(PlayerId::new(0), &[Token::new(TokenColor::Red)]).unwrap();
/// assert_eq!(game.history().len(), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    shop: Shop,
    players: PlayerMap<Player>,
    grid: Grid,
    history: Vector<ActionRecord>,
    sequence: u32,
}

impl Game {
    /// Create a session for `player_count` players from a seed.
    ///
    /// Equal seeds and player counts build identical sessions.
    ///
    /// Panics unless `player_count` is 2-4 (the shop enforces it).
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self {
            shop: Shop::new(seed, player_count),
            players: PlayerMap::new(player_count, Player::new),
            grid: Grid::new(player_count),
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Read access to the shop.
    #[must_use]
    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Read access to the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read access to a seated player.
    ///
    /// Panics on an unknown id; the mutating operations return
    /// `GameError::UnknownPlayer` instead, since they face agent input.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Committed actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Buy the tile at queue slot `tile_index` for `player`.
    pub fn buy(
        &mut self,
        player: PlayerId,
        tile_index: usize,
        restock: StackId,
    ) -> Result<Tile, GameError> {
        self.ensure_seated(player)?;
        let tile = self
            .shop
            .buy(tile_index, self.players[player].pool_mut(), restock)?;
        self.record(player, Action::Buy { tile_index, restock });
        Ok(tile)
    }

    /// Discard the queue head for one of `player`'s Ankh tokens.
    pub fn destroy(&mut self, player: PlayerId, restock: StackId) -> Result<(), GameError> {
        self.ensure_seated(player)?;
        self.shop
            .destroy(self.players[player].pool_mut(), restock)?;
        self.record(player, Action::Destroy { restock });
        Ok(())
    }

    /// Take one to three tokens from the shop for `player`.
    pub fn draw_tokens(&mut self, player: PlayerId, tokens: &[Token]) -> Result<(), GameError> {
        self.ensure_seated(player)?;
        self.shop
            .draw_resources(self.players[player].pool_mut(), tokens)?;
        self.record(
            player,
            Action::DrawTokens {
                tokens: SmallVec::from_slice(tokens),
            },
        );
        Ok(())
    }

    /// Put an acquired tile on `player`'s plane.
    pub fn place_tile(
        &mut self,
        player: PlayerId,
        tile: Tile,
        position: usize,
    ) -> Result<(), GameError> {
        self.ensure_seated(player)?;
        self.grid.place(player, tile, position)?;
        self.record(player, Action::Place { tile, position });
        Ok(())
    }

    fn ensure_seated(&self, player: PlayerId) -> Result<(), GameError> {
        if self.players.contains(player) {
            Ok(())
        } else {
            Err(GameError::UnknownPlayer { player })
        }
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.sequence));
        self.sequence += 1;
    }
}
