//! The two draw stacks.
//!
//! The full 55-tile multiset is shuffled once at construction and split
//! into two disjoint FIFO piles. Players choose which pile the shop
//! replenishes from; only each pile's head color is public, so callers
//! surface `tiles_available` before offering the choice.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameRng;

use super::tile::{Tile, TileColor, TileSymbol};

/// One of the two draw stacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackId {
    /// The first pile.
    First,
    /// The second pile.
    Second,
}

impl StackId {
    /// Both stacks, in index order.
    pub const ALL: [StackId; 2] = [StackId::First, StackId::Second];

    /// Dense index in `0..2`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert a raw stack index, as it arrives from an agent's action
    /// space.
    pub const fn from_index(index: usize) -> Result<StackId, DeckError> {
        match index {
            0 => Ok(StackId::First),
            1 => Ok(StackId::Second),
            _ => Err(DeckError::InvalidStack { choice: index }),
        }
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stack {}", self.index())
    }
}

/// A deck rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum DeckError {
    /// The stack choice is not 0 or 1.
    #[error("invalid stack choice {choice}")]
    InvalidStack {
        /// The offending raw index.
        choice: usize,
    },

    /// The chosen stack has no tiles left.
    #[error("{stack} is empty")]
    StackEmpty {
        /// The empty stack.
        stack: StackId,
    },
}

/// Two disjoint FIFO draw piles of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    stacks: [VecDeque<Tile>; 2],
}

impl Deck {
    /// Build the full tile multiset, shuffle it with `rng`, and split it
    /// into the two piles (first half / second half).
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut tiles = Vec::with_capacity(55);
        for color in TileColor::ALL {
            for symbol in TileSymbol::ALL {
                for _ in 0..symbol.copies_per_color() {
                    tiles.push(Tile::new(color, symbol));
                }
            }
        }
        rng.shuffle(&mut tiles);

        let second = tiles.split_off(tiles.len() / 2);
        Self::from_stacks(tiles, second)
    }

    /// Build a deck from explicit piles, for scripted setups and tests.
    #[must_use]
    pub fn from_stacks(first: Vec<Tile>, second: Vec<Tile>) -> Self {
        Self {
            stacks: [first.into(), second.into()],
        }
    }

    /// Pop and return the head tile of the chosen stack.
    pub fn draw(&mut self, stack: StackId) -> Result<Tile, DeckError> {
        self.stacks[stack.index()]
            .pop_front()
            .ok_or(DeckError::StackEmpty { stack })
    }

    /// The color of each stack's head tile, `None` per empty stack.
    ///
    /// This is what a caller shows a player before asking for a
    /// replenishment choice.
    #[must_use]
    pub fn tiles_available(&self) -> [Option<TileColor>; 2] {
        [self.head_color(StackId::First), self.head_color(StackId::Second)]
    }

    /// Number of tiles left in one stack.
    #[must_use]
    pub fn len(&self, stack: StackId) -> usize {
        self.stacks[stack.index()].len()
    }

    /// Whether one stack is out of tiles.
    #[must_use]
    pub fn is_empty(&self, stack: StackId) -> bool {
        self.stacks[stack.index()].is_empty()
    }

    /// Total tiles left across both stacks.
    #[must_use]
    pub fn total_remaining(&self) -> usize {
        self.stacks.iter().map(VecDeque::len).sum()
    }

    fn head_color(&self, stack: StackId) -> Option<TileColor> {
        self.stacks[stack.index()].front().map(|t| t.color())
    }
}
