//! Grid addressing.
//!
//! The board folds two interleaved lattices into one linear index space:
//! cell positions (even row) where tiles sit, and basis positions (odd
//! row) that represent the junction between four diagonal cells. Odd
//! linear indices denote the seams between placeable cells and are never a
//! real address.
//!
//! `GridCoord` decodes a linear position once, at the boundary, into a
//! parity-tagged address. Downstream code matches on the variant instead
//! of re-deriving parities, and an illegal address cannot reach it.

use serde::{Deserialize, Serialize};

use super::board::PlacementError;

/// Side length of every player's plane.
pub const SIDE: usize = 49;

/// Largest valid linear position.
pub const MAX_POSITION: usize = SIDE * SIDE - 1;

/// A decoded, validated grid address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridCoord {
    /// A regular cell (even row): a tile can sit here once it touches an
    /// already-placed tile, except for a plane's very first placement.
    Cell {
        /// Row index, even.
        row: usize,
        /// Column index, even.
        col: usize,
    },
    /// A basis junction (odd row): bridges four diagonal cells, all of
    /// which must already be filled.
    Basis {
        /// Row index, odd.
        row: usize,
        /// Column index, odd.
        col: usize,
    },
}

impl GridCoord {
    /// Decode a linear position.
    ///
    /// Rejects positions beyond the board (`OutOfBounds`) and odd linear
    /// positions (`BetweenTiles`). Because the side length is odd, an even
    /// linear position always has row and column of equal parity, so the
    /// variant fixes both.
    pub const fn from_linear(position: usize) -> Result<GridCoord, PlacementError> {
        if position > MAX_POSITION {
            return Err(PlacementError::OutOfBounds { position });
        }
        if position % 2 == 1 {
            return Err(PlacementError::BetweenTiles { position });
        }
        let row = position / SIDE;
        let col = position % SIDE;
        if row % 2 == 1 {
            Ok(GridCoord::Basis { row, col })
        } else {
            Ok(GridCoord::Cell { row, col })
        }
    }

    /// Row index.
    #[must_use]
    pub const fn row(self) -> usize {
        match self {
            GridCoord::Cell { row, .. } | GridCoord::Basis { row, .. } => row,
        }
    }

    /// Column index.
    #[must_use]
    pub const fn col(self) -> usize {
        match self {
            GridCoord::Cell { col, .. } | GridCoord::Basis { col, .. } => col,
        }
    }

    /// Re-encode as a linear position.
    #[must_use]
    pub const fn to_linear(self) -> usize {
        self.row() * SIDE + self.col()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_positions_beyond_the_board() {
        assert_eq!(
            GridCoord::from_linear(MAX_POSITION + 1),
            Err(PlacementError::OutOfBounds {
                position: MAX_POSITION + 1
            })
        );
    }

    #[test]
    fn test_rejects_odd_positions() {
        for position in [1, 3, 49, 2399] {
            assert_eq!(
                GridCoord::from_linear(position),
                Err(PlacementError::BetweenTiles { position })
            );
        }
    }

    #[test]
    fn test_even_row_decodes_to_cell() {
        assert_eq!(
            GridCoord::from_linear(0),
            Ok(GridCoord::Cell { row: 0, col: 0 })
        );
        assert_eq!(
            GridCoord::from_linear(2 * SIDE + 4),
            Ok(GridCoord::Cell { row: 2, col: 4 })
        );
    }

    #[test]
    fn test_odd_row_decodes_to_basis() {
        assert_eq!(
            GridCoord::from_linear(SIDE + 1),
            Ok(GridCoord::Basis { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_row_and_col_parities_agree() {
        for position in (0..=MAX_POSITION).step_by(2) {
            let coord = GridCoord::from_linear(position).unwrap();
            assert_eq!(coord.row() % 2, coord.col() % 2);
            assert_eq!(coord.to_linear(), position);
        }
    }
}
