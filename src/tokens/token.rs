//! Token colors and per-color count vectors.
//!
//! Tokens are the game's currency: five regular colors plus the scarce
//! special color, Ankh. `TokenCounts` is the shared count-per-color vector
//! used for price baskets, draw demands, and pool snapshots.

use serde::{Deserialize, Serialize};

/// A token color: five regular colors plus the special color Ankh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColor {
    Red,
    Green,
    Blue,
    Black,
    White,
    /// The scarce currency color, governed by its own smaller cap.
    Ankh,
}

impl TokenColor {
    /// Number of token colors, special color included.
    pub const COUNT: usize = 6;

    /// All token colors, regular colors first.
    pub const ALL: [TokenColor; 6] = [
        TokenColor::Red,
        TokenColor::Green,
        TokenColor::Blue,
        TokenColor::Black,
        TokenColor::White,
        TokenColor::Ankh,
    ];

    /// The five regular colors.
    pub const REGULAR: [TokenColor; 5] = [
        TokenColor::Red,
        TokenColor::Green,
        TokenColor::Blue,
        TokenColor::Black,
        TokenColor::White,
    ];

    /// Dense index in `0..COUNT`, usable as an array key.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the five regular colors.
    #[must_use]
    pub const fn is_regular(self) -> bool {
        !matches!(self, TokenColor::Ankh)
    }

    /// Whether this is the special color.
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, TokenColor::Ankh)
    }
}

impl std::fmt::Display for TokenColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenColor::Red => "Red",
            TokenColor::Green => "Green",
            TokenColor::Blue => "Blue",
            TokenColor::Black => "Black",
            TokenColor::White => "White",
            TokenColor::Ankh => "Ankh",
        };
        write!(f, "{name}")
    }
}

/// A single token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The token's color.
    pub color: TokenColor,
}

impl Token {
    /// Create a token of the given color.
    #[must_use]
    pub const fn new(color: TokenColor) -> Self {
        Self { color }
    }
}

/// Per-color token counts.
///
/// One vector type serves every "how many of each color" role in the
/// engine: tile prices, resource-draw demands, and pool snapshots.
///
/// ```
/// use ankhor::tokens::{Token, TokenColor, TokenCounts};
///
/// let demand = TokenCounts::from_tokens(&[
///     Token::new(TokenColor::Red),
///     Token::new(TokenColor::Red),
///     Token::new(TokenColor::Ankh),
/// ]);
/// assert_eq!(demand.count(TokenColor::Red), 2);
/// assert_eq!(demand.count(TokenColor::Ankh), 1);
/// assert_eq!(demand.regular_total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenCounts {
    counts: [u8; TokenColor::COUNT],
}

impl TokenCounts {
    /// An all-zero count vector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; TokenColor::COUNT],
        }
    }

    /// Tally a list of tokens into per-color counts.
    #[must_use]
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = Self::new();
        for token in tokens {
            counts.add(token.color, 1);
        }
        counts
    }

    /// The count for one color.
    #[must_use]
    pub const fn count(&self, color: TokenColor) -> u8 {
        self.counts[color.index()]
    }

    /// Add `amount` tokens of `color`.
    pub fn add(&mut self, color: TokenColor, amount: u8) {
        self.counts[color.index()] += amount;
    }

    /// Remove `amount` tokens of `color`.
    ///
    /// Panics if fewer than `amount` are held; callers validate first.
    pub fn remove(&mut self, color: TokenColor, amount: u8) {
        let held = self.counts[color.index()];
        assert!(held >= amount, "count underflow for {color}");
        self.counts[color.index()] = held - amount;
    }

    /// Total count across the five regular colors.
    #[must_use]
    pub fn regular_total(&self) -> u8 {
        TokenColor::REGULAR
            .iter()
            .map(|&c| self.count(c))
            .sum()
    }

    /// Total count across all colors.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Iterate over `(color, count)` pairs, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (TokenColor, u8)> + '_ {
        TokenColor::ALL.into_iter().map(move |c| (c, self.count(c)))
    }

    /// Iterate over `(color, count)` pairs with non-zero counts.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (TokenColor, u8)> + '_ {
        self.iter().filter(|&(_, n)| n > 0)
    }
}
