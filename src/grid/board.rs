//! The placement grid and its legality rules.
//!
//! Every player owns one SIDE x SIDE plane of cell codes (0 = empty, see
//! `Tile::code`). Placement legality depends on the address kind:
//!
//! - **Cell** (even row): free on a plane's first placement; afterwards the
//!   tile must touch at least one placed tile orthogonally, two columns or
//!   rows away (the next cell over on the same lattice).
//! - **Basis** (odd row): the four diagonal neighbours must all hold real
//!   tiles, and the placed tile's color must match at least one of them.
//!
//! Validation never mutates; `place` commits a validated move and flips
//! the plane's empty flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{PlayerId, PlayerMap};
use crate::tiles::{Tile, TileColor};

use super::coord::{GridCoord, SIDE};

/// A placement rejection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlacementError {
    /// The linear position lies outside the board.
    #[error("position {position} is outside the grid")]
    OutOfBounds {
        /// The offending position.
        position: usize,
    },

    /// The linear position is odd: the seam between placeable cells.
    #[error("position {position} lies between tiles")]
    BetweenTiles {
        /// The offending position.
        position: usize,
    },

    /// The target cell already holds a tile.
    #[error("position {position} is already occupied")]
    CellOccupied {
        /// The occupied position.
        position: usize,
    },

    /// A basis placement whose four diagonal cells are not all filled.
    #[error("the basis under position {position} is missing at least one tile")]
    IncompleteBasis {
        /// The basis position.
        position: usize,
    },

    /// A basis placement whose tile color matches none of the four
    /// supporting tiles.
    #[error("a {color} tile matches no color in the basis under position {position}")]
    ColorMismatch {
        /// The basis position.
        position: usize,
        /// The color of the rejected tile.
        color: TileColor,
    },

    /// A regular placement on a non-empty plane that touches no tile.
    #[error("position {position} touches no placed tile")]
    NoAdjacentTile {
        /// The isolated position.
        position: usize,
    },
}

/// One player's placement surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Plane {
    /// Cell codes in row-major order, `Tile::EMPTY_CODE` when vacant.
    cells: Vec<u8>,
    /// Cleared by the first successful placement, never set again.
    ///
    /// Tracked separately from cell contents: the first move is
    /// unconstrained, and contents alone cannot distinguish "nothing
    /// placed yet" once rules beyond placement enter the picture.
    empty: bool,
}

impl Plane {
    fn new() -> Self {
        Self {
            cells: vec![Tile::EMPTY_CODE; SIDE * SIDE],
            empty: true,
        }
    }

    fn code_at(&self, row: usize, col: usize) -> u8 {
        self.cells[row * SIDE + col]
    }

    /// The code at a neighbour offset, or `None` off the board.
    fn code_at_offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<u8> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        if r >= SIDE || c >= SIDE {
            return None;
        }
        Some(self.code_at(r, c))
    }
}

/// Per-player placement grids with adjacency rules.
///
/// ```
/// use ankhor::core::PlayerId;
/// use ankhor::grid::Grid;
/// use ankhor::tiles::{Tile, TileColor, TileSymbol};
///
/// let mut grid = Grid::new(2);
/// let tile = Tile::new(TileColor::Red, TileSymbol::Bird);
///
/// // The first placement on an empty plane is unconstrained.
/// grid.place(PlayerId::new(0), tile, 0).unwrap();
/// assert!(!grid.is_plane_empty(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    planes: PlayerMap<Plane>,
}

impl Grid {
    /// Diagonal neighbour offsets of a basis junction.
    const BASIS_OFFSETS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

    /// Orthogonal neighbour offsets of a regular cell, two apart on the
    /// same lattice.
    const CELL_OFFSETS: [(isize, isize); 4] = [(-2, 0), (0, -2), (0, 2), (2, 0)];

    /// Create empty planes for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            planes: PlayerMap::new(player_count, |_| Plane::new()),
        }
    }

    /// Number of planes.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.planes.player_count()
    }

    /// Whether `player` has not placed anything yet.
    #[must_use]
    pub fn is_plane_empty(&self, player: PlayerId) -> bool {
        self.planes[player].empty
    }

    /// The tile at a decoded address, `None` when vacant.
    #[must_use]
    pub fn tile_at(&self, player: PlayerId, coord: GridCoord) -> Option<Tile> {
        Tile::from_code(self.planes[player].code_at(coord.row(), coord.col()))
    }

    /// Decide whether `player` may put `tile` at the linear `position`.
    ///
    /// Checks run in order: address validity, vacancy, then the
    /// kind-specific adjacency rule. Never mutates.
    pub fn is_move_valid(
        &self,
        player: PlayerId,
        tile: Tile,
        position: usize,
    ) -> Result<(), PlacementError> {
        self.validate(player, tile, position).map(|_| ())
    }

    /// Validate and commit a placement, clearing the plane's empty flag.
    pub fn place(
        &mut self,
        player: PlayerId,
        tile: Tile,
        position: usize,
    ) -> Result<(), PlacementError> {
        let coord = self.validate(player, tile, position)?;
        let plane = &mut self.planes[player];
        plane.cells[coord.row() * SIDE + coord.col()] = tile.code();
        plane.empty = false;
        Ok(())
    }

    fn validate(
        &self,
        player: PlayerId,
        tile: Tile,
        position: usize,
    ) -> Result<GridCoord, PlacementError> {
        let coord = GridCoord::from_linear(position)?;
        let plane = &self.planes[player];

        if plane.code_at(coord.row(), coord.col()) != Tile::EMPTY_CODE {
            return Err(PlacementError::CellOccupied { position });
        }

        match coord {
            GridCoord::Basis { row, col } => {
                Self::check_basis(plane, row, col, tile, position)?;
            }
            GridCoord::Cell { row, col } => {
                if !plane.empty {
                    Self::check_adjacency(plane, row, col, position)?;
                }
            }
        }

        Ok(coord)
    }

    /// A basis tile bridges four diagonal cells: all four must hold real
    /// tiles, and the placed tile must share a color with at least one.
    ///
    /// Basis junctions sit at odd row and column, so their diagonal
    /// neighbours are always on the board.
    fn check_basis(
        plane: &Plane,
        row: usize,
        col: usize,
        tile: Tile,
        position: usize,
    ) -> Result<(), PlacementError> {
        let mut matches_color = false;
        for (dr, dc) in Self::BASIS_OFFSETS {
            let code = plane
                .code_at_offset(row, col, dr, dc)
                .unwrap_or(Tile::EMPTY_CODE);
            let Some(neighbour) = Tile::from_code(code) else {
                return Err(PlacementError::IncompleteBasis { position });
            };
            if neighbour.color() == tile.color() {
                matches_color = true;
            }
        }
        if !matches_color {
            return Err(PlacementError::ColorMismatch {
                position,
                color: tile.color(),
            });
        }
        Ok(())
    }

    /// A regular placement on a non-empty plane must touch at least one
    /// placed tile; neighbours beyond the board edge do not count.
    fn check_adjacency(
        plane: &Plane,
        row: usize,
        col: usize,
        position: usize,
    ) -> Result<(), PlacementError> {
        let occupied = Self::CELL_OFFSETS.iter().any(|&(dr, dc)| {
            plane
                .code_at_offset(row, col, dr, dc)
                .is_some_and(|code| code != Tile::EMPTY_CODE)
        });
        if occupied {
            Ok(())
        } else {
            Err(PlacementError::NoAdjacentTile { position })
        }
    }
}
