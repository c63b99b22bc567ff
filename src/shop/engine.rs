//! The shop: the authoritative transaction engine.
//!
//! The shop owns the global resource pool, the deck, the fixed price list
//! and the rotating six-tile queue, and exposes the only operations that
//! move tokens or tiles between owners. Every transaction validates
//! against pre-transaction state, then commits through
//! `ResourcePool::transfer` and the queue rotation; a failed call mutates
//! nothing. The caller (one game loop) serializes calls; nothing here
//! blocks or suspends.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameRng;
use crate::tiles::{Deck, DeckError, StackId, Tile, TileColor};
use crate::tokens::{PoolCaps, PoolError, PoolState, ResourcePool, Token, TokenColor, TokenCounts};

use super::price::{shuffled_price_list, PriceBasket};

/// A shop transaction rejection.
///
/// Argument errors (`InvalidTileIndex`, `InvalidTokenCount`,
/// `Deck(InvalidStack)`) mean the caller passed something malformed; the
/// remaining variants are legal-but-currently-impossible moves a caller is
/// expected to handle by re-prompting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ShopError {
    /// The tile index is outside the queue.
    #[error("invalid tile index {index}")]
    InvalidTileIndex {
        /// The offending index.
        index: usize,
    },

    /// A resource draw must request one to three tokens.
    #[error("a resource draw must request 1 to 3 tokens, got {count}")]
    InvalidTokenCount {
        /// The offending request length.
        count: usize,
    },

    /// The player cannot pay the required tokens.
    #[error("not enough {color} tokens to pay")]
    InsufficientFunds {
        /// The color the player is short of.
        color: TokenColor,
    },

    /// The shop cannot supply the requested tokens.
    #[error("the shop has no {color} token left")]
    ShopDepleted {
        /// The color the shop is out of.
        color: TokenColor,
    },

    /// A pool capacity or availability rejection.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A deck rejection (bad stack choice, or the chosen stack ran out).
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Read-only snapshot of the shop for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSnapshot {
    /// The six purchasable tiles, queue order.
    pub tiles_queue: Vec<Tile>,
    /// The per-color cost of each queue slot.
    pub prices: Vec<TokenCounts>,
    /// The shop pool's per-color counts.
    pub pool: PoolState,
    /// Each draw stack's head color, `None` per empty stack.
    pub next_tiles: [Option<TileColor>; 2],
}

/// The shared marketplace: global pool, deck, price list, tile queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pool: ResourcePool,
    deck: Deck,
    price_list: Vec<PriceBasket>,
    tiles_queue: Vec<Tile>,
}

impl Shop {
    /// Queue and price-list length, invariant across every transaction.
    pub const QUEUE_LEN: usize = 6;

    /// Build a shop for `player_count` players from a seed.
    ///
    /// One seeded generator drives the deck shuffle, the price shuffle and
    /// the stack choices for the initial queue, so equal seeds build equal
    /// shops. The pool starts with `3 + player_count` tokens of every
    /// color, which is also its per-color cap.
    ///
    /// Panics unless `player_count` is 2-4.
    #[must_use]
    pub fn new(seed: u64, player_count: usize) -> Self {
        assert!(
            (2..=4).contains(&player_count),
            "Ankh'or seats 2-4 players"
        );

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::shuffled(&mut rng);

        let n = 3 + player_count as u8;
        let pool = ResourcePool::new(
            n,
            n,
            PoolCaps {
                per_regular: n,
                special: n,
                regular_total: 5 * n,
            },
        );

        let price_list = shuffled_price_list(&mut rng);

        let mut tiles_queue = Vec::with_capacity(Self::QUEUE_LEN);
        for _ in 0..Self::QUEUE_LEN {
            let stack = StackId::ALL[rng.gen_index(StackId::ALL.len())];
            let tile = deck
                .draw(stack)
                .expect("fresh stacks cannot run out while dealing the queue");
            tiles_queue.push(tile);
        }

        Self {
            pool,
            deck,
            price_list,
            tiles_queue,
        }
    }

    /// Build a shop from explicit parts, for scripted setups and tests.
    ///
    /// Panics unless the price list and tile queue both have exactly
    /// `QUEUE_LEN` entries.
    #[must_use]
    pub fn from_parts(
        pool: ResourcePool,
        deck: Deck,
        price_list: Vec<PriceBasket>,
        tiles_queue: Vec<Tile>,
    ) -> Self {
        assert_eq!(price_list.len(), Self::QUEUE_LEN, "price list must have 6 baskets");
        assert_eq!(tiles_queue.len(), Self::QUEUE_LEN, "tile queue must have 6 tiles");
        Self {
            pool,
            deck,
            price_list,
            tiles_queue,
        }
    }

    /// Read access to the shop's pool.
    #[must_use]
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Read access to the deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The six purchasable tiles, queue order.
    #[must_use]
    pub fn tiles_queue(&self) -> &[Tile] {
        &self.tiles_queue
    }

    /// The six fixed price baskets, slot order.
    #[must_use]
    pub fn price_list(&self) -> &[PriceBasket] {
        &self.price_list
    }

    /// Snapshot for the presentation layer.
    #[must_use]
    pub fn state(&self) -> ShopSnapshot {
        ShopSnapshot {
            tiles_queue: self.tiles_queue.clone(),
            prices: self.price_list.iter().map(PriceBasket::cost).collect(),
            pool: self.pool.state(),
            next_tiles: self.deck.tiles_available(),
        }
    }

    /// The per-color token cost of queue slot `index`.
    pub fn get_tile_price(&self, index: usize) -> Result<TokenCounts, ShopError> {
        self.price_list
            .get(index)
            .map(PriceBasket::cost)
            .ok_or(ShopError::InvalidTileIndex { index })
    }

    /// Buy the tile at queue slot `index`.
    ///
    /// The price basket moves from the player's pool into the shop's, the
    /// bought tile leaves the queue, and the queue is replenished from
    /// `restock`. Returns the bought tile. On any rejection nothing moves:
    /// argument checks, the player's funds, the shop's capacity and the
    /// restock stack are all validated before the first mutation.
    pub fn buy(
        &mut self,
        index: usize,
        player_pool: &mut ResourcePool,
        restock: StackId,
    ) -> Result<Tile, ShopError> {
        let price = self.get_tile_price(index)?;

        for (color, amount) in price.iter_nonzero() {
            if player_pool.count(color) < amount {
                return Err(ShopError::InsufficientFunds { color });
            }
        }
        // Token conservation guarantees the shop can re-absorb a price
        // basket, but the atomicity contract must not rest on that.
        self.pool.can_accept(&price)?;
        if self.deck.is_empty(restock) {
            return Err(DeckError::StackEmpty { stack: restock }.into());
        }

        ResourcePool::transfer(player_pool, &mut self.pool, &price)?;
        let bought = self.tiles_queue.remove(index);
        self.replenish(restock)?;
        Ok(bought)
    }

    /// Discard the head of the tile queue for one Ankh token.
    ///
    /// The discarded tile is permanently removed from play and is *not*
    /// handed to the caller; the queue is replenished from `restock`.
    pub fn destroy(
        &mut self,
        player_pool: &mut ResourcePool,
        restock: StackId,
    ) -> Result<(), ShopError> {
        if player_pool.count(TokenColor::Ankh) < 1 {
            return Err(ShopError::InsufficientFunds {
                color: TokenColor::Ankh,
            });
        }
        let mut fee = TokenCounts::new();
        fee.add(TokenColor::Ankh, 1);
        self.pool.can_accept(&fee)?;
        if self.deck.is_empty(restock) {
            return Err(DeckError::StackEmpty { stack: restock }.into());
        }

        ResourcePool::transfer(player_pool, &mut self.pool, &fee)?;
        let _discarded = self.tiles_queue.remove(0);
        self.replenish(restock)?;
        Ok(())
    }

    /// Take one to three tokens from the shop's pool in one transaction.
    ///
    /// Validation runs per color against pre-transaction state: the shop
    /// must hold every requested amount, and the whole demand must fit the
    /// player's per-color and aggregate caps. All-or-nothing.
    pub fn draw_resources(
        &mut self,
        player_pool: &mut ResourcePool,
        tokens: &[Token],
    ) -> Result<(), ShopError> {
        if !(1..=3).contains(&tokens.len()) {
            return Err(ShopError::InvalidTokenCount {
                count: tokens.len(),
            });
        }
        let demand = TokenCounts::from_tokens(tokens);

        for (color, amount) in demand.iter_nonzero() {
            if self.pool.count(color) < amount {
                return Err(ShopError::ShopDepleted { color });
            }
        }
        player_pool.can_accept(&demand)?;

        ResourcePool::transfer(&mut self.pool, player_pool, &demand)?;
        Ok(())
    }

    /// Append a fresh draw to the queue; callers have already checked the
    /// stack.
    fn replenish(&mut self, restock: StackId) -> Result<(), ShopError> {
        let fresh = self.deck.draw(restock)?;
        self.tiles_queue.push(fresh);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::tiles::TileSymbol;

    fn scripted_shop() -> Shop {
        // Queue: six distinct tiles; prices: slot 0 costs 2 Red, the rest
        // are 2- and 3-token baskets in dealt order.
        let tiles_queue: Vec<Tile> = [
            (TileColor::Red, TileSymbol::Bird),
            (TileColor::Blue, TileSymbol::Dog),
            (TileColor::Green, TileSymbol::Scarab),
            (TileColor::Black, TileSymbol::Scrib),
            (TileColor::White, TileSymbol::Storage),
            (TileColor::Red, TileSymbol::Desert),
        ]
        .into_iter()
        .map(|(c, s)| Tile::new(c, s))
        .collect();

        let price_list = vec![
            PriceBasket::from_colors(&[TokenColor::Red, TokenColor::Red]),
            PriceBasket::from_colors(&[TokenColor::Green, TokenColor::Blue]),
            PriceBasket::from_colors(&[TokenColor::Black, TokenColor::White]),
            PriceBasket::from_colors(&[TokenColor::Red, TokenColor::Green, TokenColor::Blue]),
            PriceBasket::from_colors(&[TokenColor::Black, TokenColor::Black, TokenColor::White]),
            PriceBasket::from_colors(&[TokenColor::Green, TokenColor::Green, TokenColor::White]),
        ];

        let first = vec![
            Tile::new(TileColor::Green, TileSymbol::Bonus),
            Tile::new(TileColor::Blue, TileSymbol::Bird),
        ];
        let second = vec![Tile::new(TileColor::White, TileSymbol::Dog)];

        // Start below the caps: scripted players are funded out of thin
        // air, so the conservation argument does not bound the shop pool
        // here the way it does in a seeded game.
        let pool = ResourcePool::new(
            3,
            3,
            PoolCaps {
                per_regular: 8,
                special: 8,
                regular_total: 40,
            },
        );

        Shop::from_parts(pool, Deck::from_stacks(first, second), price_list, tiles_queue)
    }

    fn funded_player(red: u8, ankh: u8) -> Player {
        let mut player = Player::new(crate::core::PlayerId::new(0));
        for _ in 0..red {
            player.pool_mut().fill(TokenColor::Red).unwrap();
        }
        for _ in 0..ankh {
            player.pool_mut().fill(TokenColor::Ankh).unwrap();
        }
        player
    }

    #[test]
    fn test_seeded_construction_is_deterministic() {
        let a = Shop::new(42, 2);
        let b = Shop::new(42, 2);
        assert_eq!(a, b);

        let c = Shop::new(43, 2);
        assert_ne!(a, c);
    }

    #[test]
    fn test_seeded_construction_shape() {
        let shop = Shop::new(42, 3);

        assert_eq!(shop.tiles_queue().len(), Shop::QUEUE_LEN);
        assert_eq!(shop.price_list().len(), Shop::QUEUE_LEN);
        // Pool sizing: n = 3 + players.
        for color in TokenColor::ALL {
            assert_eq!(shop.pool().count(color), 6);
        }
        // Six of the 55 tiles are already on offer.
        assert_eq!(shop.deck().total_remaining(), 55 - Shop::QUEUE_LEN);
    }

    #[test]
    fn test_get_tile_price() {
        let shop = scripted_shop();

        let price = shop.get_tile_price(0).unwrap();
        assert_eq!(price.count(TokenColor::Red), 2);
        assert_eq!(price.total(), 2);

        assert_eq!(
            shop.get_tile_price(6),
            Err(ShopError::InvalidTileIndex { index: 6 })
        );
    }

    #[test]
    fn test_buy_transfers_and_rotates() {
        let mut shop = scripted_shop();
        let mut player = funded_player(2, 0);
        let expected = shop.tiles_queue()[0];
        let shop_red_before = shop.pool().count(TokenColor::Red);

        let bought = shop
            .buy(0, player.pool_mut(), StackId::First)
            .unwrap();

        assert_eq!(bought, expected);
        assert_eq!(player.pool().count(TokenColor::Red), 0);
        assert_eq!(shop.pool().count(TokenColor::Red), shop_red_before + 2);
        assert_eq!(shop.tiles_queue().len(), Shop::QUEUE_LEN);
        // The fresh tile fills the last slot from stack 0's head.
        assert_eq!(
            shop.tiles_queue()[5],
            Tile::new(TileColor::Green, TileSymbol::Bonus)
        );
    }

    #[test]
    fn test_buy_insufficient_funds_mutates_nothing() {
        let mut shop = scripted_shop();
        let mut player = funded_player(1, 0);
        let shop_before = shop.clone();
        let player_before = player.clone();

        assert_eq!(
            shop.buy(0, player.pool_mut(), StackId::First),
            Err(ShopError::InsufficientFunds {
                color: TokenColor::Red
            })
        );
        assert_eq!(shop, shop_before);
        assert_eq!(player, player_before);
    }

    #[test]
    fn test_buy_checks_restock_stack_before_paying() {
        let mut shop = scripted_shop();
        let mut player = funded_player(2, 0);
        // Drain the one-tile second stack first.
        shop.deck.draw(StackId::Second).unwrap();
        let player_before = player.clone();

        assert_eq!(
            shop.buy(0, player.pool_mut(), StackId::Second),
            Err(ShopError::Deck(DeckError::StackEmpty {
                stack: StackId::Second
            }))
        );
        assert_eq!(player, player_before);
        assert_eq!(shop.tiles_queue().len(), Shop::QUEUE_LEN);
    }

    #[test]
    fn test_buy_invalid_index() {
        let mut shop = scripted_shop();
        let mut player = funded_player(2, 0);

        assert_eq!(
            shop.buy(9, player.pool_mut(), StackId::First),
            Err(ShopError::InvalidTileIndex { index: 9 })
        );
    }

    #[test]
    fn test_destroy_discards_without_returning() {
        let mut shop = scripted_shop();
        let mut player = funded_player(0, 1);
        let discarded = shop.tiles_queue()[0];
        let ankh_before = shop.pool().count(TokenColor::Ankh);

        shop.destroy(player.pool_mut(), StackId::First).unwrap();

        assert_eq!(player.pool().count(TokenColor::Ankh), 0);
        assert_eq!(shop.pool().count(TokenColor::Ankh), ankh_before + 1);
        assert_eq!(shop.tiles_queue().len(), Shop::QUEUE_LEN);
        // The discarded tile is gone from the queue, not re-queued.
        assert!(!shop.tiles_queue().contains(&discarded));
    }

    #[test]
    fn test_destroy_requires_an_ankh() {
        let mut shop = scripted_shop();
        let mut player = funded_player(3, 0);
        let shop_before = shop.clone();

        assert_eq!(
            shop.destroy(player.pool_mut(), StackId::First),
            Err(ShopError::InsufficientFunds {
                color: TokenColor::Ankh
            })
        );
        assert_eq!(shop, shop_before);
    }

    #[test]
    fn test_draw_resources_transfers() {
        let mut shop = scripted_shop();
        let mut player = Player::new(crate::core::PlayerId::new(0));

        shop.draw_resources(
            player.pool_mut(),
            &[
                Token::new(TokenColor::Red),
                Token::new(TokenColor::Red),
                Token::new(TokenColor::Ankh),
            ],
        )
        .unwrap();

        assert_eq!(player.pool().count(TokenColor::Red), 2);
        assert_eq!(player.pool().count(TokenColor::Ankh), 1);
        assert_eq!(shop.pool().count(TokenColor::Red), 1);
        assert_eq!(shop.pool().count(TokenColor::Ankh), 2);
    }

    #[test]
    fn test_draw_resources_rejects_bad_lengths() {
        let mut shop = scripted_shop();
        let mut player = Player::new(crate::core::PlayerId::new(0));

        assert_eq!(
            shop.draw_resources(player.pool_mut(), &[]),
            Err(ShopError::InvalidTokenCount { count: 0 })
        );
        let four = [Token::new(TokenColor::Red); 4];
        assert_eq!(
            shop.draw_resources(player.pool_mut(), &four),
            Err(ShopError::InvalidTokenCount { count: 4 })
        );
    }

    #[test]
    fn test_draw_resources_is_all_or_nothing() {
        let mut shop = scripted_shop();
        let mut player = Player::new(crate::core::PlayerId::new(0));
        // Fill the player to 4 regular tokens: one more fits the aggregate
        // cap of 5, two more do not.
        for color in [TokenColor::Red, TokenColor::Green, TokenColor::Blue, TokenColor::Black] {
            player.pool_mut().fill(color).unwrap();
        }
        let shop_before = shop.clone();
        let player_before = player.clone();

        assert_eq!(
            shop.draw_resources(
                player.pool_mut(),
                &[Token::new(TokenColor::White), Token::new(TokenColor::Red)],
            ),
            Err(ShopError::Pool(PoolError::RegularCapExceeded))
        );
        assert_eq!(shop, shop_before);
        assert_eq!(player, player_before);
    }

    #[test]
    fn test_draw_resources_shop_depleted() {
        let mut shop = scripted_shop();
        let mut player = Player::new(crate::core::PlayerId::new(0));
        // Drain the shop's Ankh supply into nowhere.
        for _ in 0..3 {
            shop.pool.draw(TokenColor::Ankh).unwrap();
        }

        assert_eq!(
            shop.draw_resources(player.pool_mut(), &[Token::new(TokenColor::Ankh)]),
            Err(ShopError::ShopDepleted {
                color: TokenColor::Ankh
            })
        );
        assert_eq!(player.pool().state().total(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let shop = scripted_shop();
        let snapshot = shop.state();

        assert_eq!(snapshot.tiles_queue, shop.tiles_queue());
        assert_eq!(snapshot.prices[0].count(TokenColor::Red), 2);
        assert_eq!(snapshot.pool, shop.pool().state());
        assert_eq!(
            snapshot.next_tiles,
            [Some(TileColor::Green), Some(TileColor::White)]
        );
    }

    #[test]
    #[should_panic(expected = "Ankh'or seats 2-4 players")]
    fn test_new_rejects_player_count() {
        let _ = Shop::new(42, 5);
    }
}
