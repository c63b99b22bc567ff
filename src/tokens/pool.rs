//! Capacity-checked token pools.
//!
//! A `ResourcePool` is a per-owner multiset of tokens by color with three
//! independent ceilings: a per-regular-color cap, a special-color cap, and
//! an aggregate cap over all regular colors together. The caps are enforced
//! on every mutation, so no sequence of calls can produce an over-capacity
//! pool; that is what makes pools safe to hand by reference into
//! transactions that touch two of them at once.
//!
//! `ResourcePool::transfer` is the atomic primitive the shop's transaction
//! engine is built on: it validates the whole movement against the
//! pre-transaction state of both pools and only then commits, so a failed
//! transfer moves nothing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::token::{TokenColor, TokenCounts};

/// Snapshot of a pool's per-color counts.
///
/// The sole way other components read pool contents; nothing reaches into
/// another pool's internals.
pub type PoolState = TokenCounts;

/// Capacity ceilings for a pool, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCaps {
    /// Maximum tokens of each regular color.
    pub per_regular: u8,
    /// Maximum tokens of the special color.
    pub special: u8,
    /// Maximum regular tokens summed across all regular colors.
    pub regular_total: u8,
}

impl PoolCaps {
    /// The ceiling for a single color.
    #[must_use]
    pub const fn for_color(&self, color: TokenColor) -> u8 {
        if color.is_special() {
            self.special
        } else {
            self.per_regular
        }
    }
}

/// A pool mutation rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PoolError {
    /// The per-color cap for this color is already reached.
    #[error("capacity reached for {color} tokens")]
    ColorCapExceeded {
        /// The color whose cap would be exceeded.
        color: TokenColor,
    },

    /// The aggregate cap over all regular colors is already reached.
    #[error("aggregate regular-token capacity reached")]
    RegularCapExceeded,

    /// The pool holds no token of this color.
    #[error("no {color} token left")]
    Depleted {
        /// The color that ran out.
        color: TokenColor,
    },
}

/// A per-owner multiset of tokens by color with capacity ceilings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    counts: TokenCounts,
    caps: PoolCaps,
}

impl ResourcePool {
    /// Create a pool holding `initial_regular` tokens of each regular color
    /// and `initial_special` special tokens.
    ///
    /// Panics if the initial contents already violate `caps`; that is a
    /// construction-time programmer error, not a game state.
    #[must_use]
    pub fn new(initial_regular: u8, initial_special: u8, caps: PoolCaps) -> Self {
        assert!(
            initial_regular <= caps.per_regular,
            "initial per-color count exceeds cap"
        );
        assert!(
            initial_special <= caps.special,
            "initial special count exceeds cap"
        );
        assert!(
            initial_regular as u16 * TokenColor::REGULAR.len() as u16 <= caps.regular_total as u16,
            "initial regular total exceeds aggregate cap"
        );

        let mut counts = TokenCounts::new();
        for color in TokenColor::REGULAR {
            counts.add(color, initial_regular);
        }
        counts.add(TokenColor::Ankh, initial_special);

        Self { counts, caps }
    }

    /// The count of one color.
    #[must_use]
    pub fn count(&self, color: TokenColor) -> u8 {
        self.counts.count(color)
    }

    /// Total tokens across the five regular colors.
    #[must_use]
    pub fn regular_total(&self) -> u8 {
        self.counts.regular_total()
    }

    /// This pool's capacity ceilings.
    #[must_use]
    pub fn caps(&self) -> PoolCaps {
        self.caps
    }

    /// Snapshot of the per-color counts.
    #[must_use]
    pub fn state(&self) -> PoolState {
        self.counts
    }

    /// Add one token of `color`.
    ///
    /// Fails without side effect when the per-color cap is reached, or (for
    /// regular colors) when the aggregate regular cap is reached.
    pub fn fill(&mut self, color: TokenColor) -> Result<(), PoolError> {
        if self.count(color) >= self.caps.for_color(color) {
            return Err(PoolError::ColorCapExceeded { color });
        }
        if color.is_regular() && self.regular_total() >= self.caps.regular_total {
            return Err(PoolError::RegularCapExceeded);
        }
        self.counts.add(color, 1);
        Ok(())
    }

    /// Remove one token of `color`.
    ///
    /// Fails without side effect when the pool holds none.
    pub fn draw(&mut self, color: TokenColor) -> Result<(), PoolError> {
        if self.count(color) == 0 {
            return Err(PoolError::Depleted { color });
        }
        self.counts.remove(color, 1);
        Ok(())
    }

    /// Check that the whole of `demand` would fit under this pool's caps.
    ///
    /// Per-color caps and the aggregate regular cap are both checked
    /// against the current (pre-transaction) counts, so a demand can never
    /// be partially acceptable.
    pub fn can_accept(&self, demand: &TokenCounts) -> Result<(), PoolError> {
        for (color, amount) in demand.iter_nonzero() {
            if self.count(color) + amount > self.caps.for_color(color) {
                return Err(PoolError::ColorCapExceeded { color });
            }
        }
        if self.regular_total() + demand.regular_total() > self.caps.regular_total {
            return Err(PoolError::RegularCapExceeded);
        }
        Ok(())
    }

    /// Check that this pool currently holds the whole of `demand`.
    pub fn can_provide(&self, demand: &TokenCounts) -> Result<(), PoolError> {
        for (color, amount) in demand.iter_nonzero() {
            if self.count(color) < amount {
                return Err(PoolError::Depleted { color });
            }
        }
        Ok(())
    }

    /// Atomically move `demand` from one pool to another.
    ///
    /// Both sides are validated against pre-transaction state before any
    /// count changes; on failure neither pool is touched.
    pub fn transfer(
        from: &mut ResourcePool,
        to: &mut ResourcePool,
        demand: &TokenCounts,
    ) -> Result<(), PoolError> {
        from.can_provide(demand)?;
        to.can_accept(demand)?;
        for (color, amount) in demand.iter_nonzero() {
            from.counts.remove(color, amount);
            to.counts.add(color, amount);
        }
        Ok(())
    }
}
