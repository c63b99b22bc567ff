//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Ankh'or seats 2-4 players; `PlayerId` is
//! 0-based.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access. Used for the
//! session's player table and the grid's per-player planes.
//!
//! ## Player
//!
//! A seat at the table: an id plus a resource pool with the player-side
//! caps. The pool is only ever mutated through `Shop` transactions.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::tokens::{PoolCaps, ResourcePool};

/// Player identifier, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use ankhor::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access, one entry per player.
///
/// ## Example
///
/// ```
/// use ankhor::core::{Player, PlayerId, PlayerMap};
///
/// let players: PlayerMap<Player> = PlayerMap::new(2, Player::new);
/// assert_eq!(players[PlayerId::new(1)].id(), PlayerId::new(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new map with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` is a valid seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat at the table: an id and a resource pool with player-side caps.
///
/// Players start with no tokens. The pool's caps are much tighter than the
/// shop's: 5 per regular color, 2 Ankh, 5 regular tokens in total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    pool: ResourcePool,
}

impl Player {
    /// Per-player pool caps: 5 per regular color, 2 Ankh, 5 regular total.
    pub const POOL_CAPS: PoolCaps = PoolCaps {
        per_regular: 5,
        special: 2,
        regular_total: 5,
    };

    /// Create a player with an empty, player-capped pool.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            pool: ResourcePool::new(0, 0, Self::POOL_CAPS),
        }
    }

    /// This player's id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Read access to the player's pool.
    #[must_use]
    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    /// Mutable access to the player's pool.
    ///
    /// Exists so a caller can hand the pool to a `Shop` transaction; no
    /// other code should mutate it.
    pub fn pool_mut(&mut self) -> &mut ResourcePool {
        &mut self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenColor;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_player_map_factory_and_index() {
        let map: PlayerMap<usize> = PlayerMap::new(4, |p| p.index() * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
    }

    #[test]
    fn test_player_map_contains() {
        let map: PlayerMap<usize> = PlayerMap::new(2, |p| p.index());

        assert!(map.contains(PlayerId::new(0)));
        assert!(map.contains(PlayerId::new(1)));
        assert!(!map.contains(PlayerId::new(2)));
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::new(2, |_| 0);

        map[PlayerId::new(1)] = 7;
        assert_eq!(map[PlayerId::new(1)], 7);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<usize> = PlayerMap::new(3, |p| p.index());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_player_starts_empty() {
        let player = Player::new(PlayerId::new(1));

        assert_eq!(player.id(), PlayerId::new(1));
        for color in TokenColor::ALL {
            assert_eq!(player.pool().count(color), 0);
        }
    }

    #[test]
    fn test_player_pool_caps() {
        let player = Player::new(PlayerId::new(0));

        assert_eq!(player.pool().caps(), Player::POOL_CAPS);
    }
}
