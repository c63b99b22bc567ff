//! Action records for the session history.
//!
//! Successful moves are appended to the session's history so a driving
//! agent can replay, debug, or condition on what actually happened. Only
//! committed actions are recorded; rejections leave no trace.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::tiles::{StackId, Tile};
use crate::tokens::Token;

/// One move a player can submit to the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Buy the tile at a queue slot, replenishing from `restock`.
    Buy {
        /// Queue slot of the bought tile.
        tile_index: usize,
        /// Stack the queue is replenished from.
        restock: StackId,
    },
    /// Discard the queue head for one Ankh, replenishing from `restock`.
    Destroy {
        /// Stack the queue is replenished from.
        restock: StackId,
    },
    /// Take one to three tokens from the shop's pool.
    DrawTokens {
        /// The requested tokens; never more than three.
        tokens: SmallVec<[Token; 3]>,
    },
    /// Put an acquired tile on the player's plane.
    Place {
        /// The placed tile.
        tile: Tile,
        /// Linear grid position.
        position: usize,
    },
}

/// A committed action with its metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who moved.
    pub player: PlayerId,
    /// The committed action.
    pub action: Action,
    /// Session-wide ordering, starting at 0.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
