//! The token economy: colors, count vectors, capacity-checked pools.

pub mod pool;
pub mod token;

pub use pool::{PoolCaps, PoolError, PoolState, ResourcePool};
pub use token::{Token, TokenColor, TokenCounts};
