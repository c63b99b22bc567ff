//! Tiles: a color/symbol pair and its grid-cell encoding.
//!
//! A `Tile` is always a real tile; the "empty" sentinel exists only in the
//! grid's cell encoding, where code 0 means "nothing placed here". Real
//! tiles map bijectively onto codes `1..=35` with colors and symbols in
//! lexicographic order, so a cell value uniquely identifies one
//! (color, symbol) pair.

use serde::{Deserialize, Serialize};

/// A tile color.
///
/// Declared in lexicographic order; the declaration order defines the
/// color half of the tile/code bijection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Black,
    Blue,
    Green,
    Red,
    White,
}

impl TileColor {
    /// Number of tile colors.
    pub const COUNT: usize = 5;

    /// All tile colors in bijection order.
    pub const ALL: [TileColor; 5] = [
        TileColor::Black,
        TileColor::Blue,
        TileColor::Green,
        TileColor::Red,
        TileColor::White,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileColor::Black => "Black",
            TileColor::Blue => "Blue",
            TileColor::Green => "Green",
            TileColor::Red => "Red",
            TileColor::White => "White",
        };
        write!(f, "{name}")
    }
}

/// A tile symbol.
///
/// Declared in lexicographic order; the declaration order defines the
/// symbol half of the tile/code bijection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSymbol {
    Bird,
    Bonus,
    Desert,
    Dog,
    Scarab,
    Scrib,
    Storage,
}

impl TileSymbol {
    /// Number of tile symbols.
    pub const COUNT: usize = 7;

    /// All tile symbols in bijection order.
    pub const ALL: [TileSymbol; 7] = [
        TileSymbol::Bird,
        TileSymbol::Bonus,
        TileSymbol::Desert,
        TileSymbol::Dog,
        TileSymbol::Scarab,
        TileSymbol::Scrib,
        TileSymbol::Storage,
    ];

    /// Dense index in `0..COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// How many copies of this symbol exist per color in the full tile set.
    ///
    /// The full set is 11 tiles per color, 55 tiles total.
    #[must_use]
    pub const fn copies_per_color(self) -> usize {
        match self {
            TileSymbol::Bird | TileSymbol::Bonus | TileSymbol::Dog | TileSymbol::Scarab => 2,
            TileSymbol::Desert | TileSymbol::Scrib | TileSymbol::Storage => 1,
        }
    }
}

impl std::fmt::Display for TileSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TileSymbol::Bird => "Bird",
            TileSymbol::Bonus => "Bonus",
            TileSymbol::Desert => "Desert",
            TileSymbol::Dog => "Dog",
            TileSymbol::Scarab => "Scarab",
            TileSymbol::Scrib => "Scrib",
            TileSymbol::Storage => "Storage",
        };
        write!(f, "{name}")
    }
}

/// A game tile: a color and a symbol. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    color: TileColor,
    symbol: TileSymbol,
}

impl Tile {
    /// The grid-cell code meaning "no tile placed".
    pub const EMPTY_CODE: u8 = 0;

    /// Create a tile.
    #[must_use]
    pub const fn new(color: TileColor, symbol: TileSymbol) -> Self {
        Self { color, symbol }
    }

    /// This tile's color.
    #[must_use]
    pub const fn color(self) -> TileColor {
        self.color
    }

    /// This tile's symbol.
    #[must_use]
    pub const fn symbol(self) -> TileSymbol {
        self.symbol
    }

    /// The cell code for this tile, in `1..=35`.
    ///
    /// ```
    /// use ankhor::tiles::{Tile, TileColor, TileSymbol};
    ///
    /// let tile = Tile::new(TileColor::Black, TileSymbol::Bird);
    /// assert_eq!(tile.code(), 1);
    /// assert_eq!(Tile::from_code(1), Some(tile));
    /// assert_eq!(Tile::from_code(Tile::EMPTY_CODE), None);
    /// ```
    #[must_use]
    pub const fn code(self) -> u8 {
        1 + (self.color.index() * TileSymbol::COUNT + self.symbol.index()) as u8
    }

    /// Decode a cell code; `None` for the empty sentinel or out-of-range
    /// values.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Tile> {
        if code == Self::EMPTY_CODE
            || code as usize > TileColor::COUNT * TileSymbol::COUNT
        {
            return None;
        }
        let ordinal = (code - 1) as usize;
        Some(Tile {
            color: TileColor::ALL[ordinal / TileSymbol::COUNT],
            symbol: TileSymbol::ALL[ordinal % TileSymbol::COUNT],
        })
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.symbol)
    }
}
