//! Price baskets.
//!
//! Each slot in the shop's tile queue is paid for with a fixed basket of
//! regular tokens. The six baskets are dealt once, at shop construction,
//! from a shuffled multiset of 15 regular tokens (three of each color)
//! chunked into sizes [2, 2, 2, 3, 3, 3], and never change afterwards.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;
use crate::tokens::{Token, TokenColor, TokenCounts};

/// Basket sizes of the six queue slots, cheapest first.
pub const BASKET_SIZES: [usize; 6] = [2, 2, 2, 3, 3, 3];

/// The fixed token cost of one tile-queue slot.
///
/// A basket holds at most three tokens; `SmallVec` keeps it off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBasket {
    tokens: SmallVec<[Token; 3]>,
}

impl PriceBasket {
    /// Create a basket from explicit token colors.
    #[must_use]
    pub fn from_colors(colors: &[TokenColor]) -> Self {
        Self {
            tokens: colors.iter().map(|&c| Token::new(c)).collect(),
        }
    }

    /// The tokens in this basket, in dealt order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in this basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the basket is empty (never true for a dealt basket).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The per-color cost of this basket.
    #[must_use]
    pub fn cost(&self) -> TokenCounts {
        TokenCounts::from_tokens(&self.tokens)
    }
}

/// Shuffle the 15-token price pool and deal the six baskets.
#[must_use]
pub fn shuffled_price_list(rng: &mut GameRng) -> Vec<PriceBasket> {
    let mut pool: Vec<Token> = TokenColor::REGULAR
        .iter()
        .flat_map(|&c| std::iter::repeat(Token::new(c)).take(3))
        .collect();
    rng.shuffle(&mut pool);

    let mut baskets = Vec::with_capacity(BASKET_SIZES.len());
    let mut dealt = pool.into_iter();
    for size in BASKET_SIZES {
        baskets.push(PriceBasket {
            tokens: dealt.by_ref().take(size).collect(),
        });
    }
    baskets
}
