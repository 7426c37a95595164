//! Ship definitions, layout decoding and placed ships tracked on a `Grid`.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Grid;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::square::Square;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Where a ship lies: origin square, length and orientation. The origin is
/// the leftmost (horizontal) or topmost (vertical) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    origin: Square,
    length: usize,
    orientation: Orientation,
}

impl Placement {
    /// Validate that the whole ship lies on the board.
    pub fn new(origin: Square, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 || length > BOARD_SIZE as usize {
            return Err(BoardError::InvalidLength);
        }
        let end = match orientation {
            Orientation::Horizontal => origin.col(),
            Orientation::Vertical => origin.row(),
        } + length;
        if end > BOARD_SIZE as usize {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self {
            origin,
            length,
            orientation,
        })
    }

    /// Decode one layout entry: `|code|` is the 1-based origin square and a
    /// negative code marks a vertical ship.
    pub fn from_code(code: i32, length: i32) -> Result<Self, BoardError> {
        let orientation = if code < 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let origin = Square::from_one_based(code.unsigned_abs() as usize)
            .map_err(|_| BoardError::OriginOutOfRange)?;
        let length = usize::try_from(length).map_err(|_| BoardError::InvalidLength)?;
        Self::new(origin, length, orientation)
    }

    pub fn origin(&self) -> Square {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Squares covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Square> + '_ {
        let (row, col) = (self.origin.row(), self.origin.col());
        (0..self.length).filter_map(move |i| match self.orientation {
            Orientation::Horizontal => Square::from_row_col(row, col + i).ok(),
            Orientation::Vertical => Square::from_row_col(row + i, col).ok(),
        })
    }
}

/// Decode a flat `[code, length, code, length, ...]` layout. An empty
/// layout has no fleet to sink and is rejected.
pub fn parse_layout(codes: &[i32]) -> Result<Vec<Placement>, BoardError> {
    if codes.is_empty() || codes.len() % 2 != 0 {
        return Err(BoardError::MalformedLayout);
    }
    codes
        .chunks_exact(2)
        .map(|pair| Placement::from_code(pair[0], pair[1]))
        .collect()
}

/// A ship placed on the board, with hits tracked in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    placement: Placement,
    mask: Grid,
    hits: Grid,
}

impl Ship {
    pub fn new(placement: Placement) -> Result<Self, BoardError> {
        let mut mask = Grid::new();
        for cell in placement.cells() {
            mask.insert(cell)?;
        }
        // Every segment must land on the board.
        if mask.count_ones() != placement.length {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            placement,
            mask,
            hits: Grid::new(),
        })
    }

    /// Register a shot. Returns `true` if it struck this ship.
    pub fn guess(&mut self, square: Square) -> bool {
        if self.mask.contains(square) {
            let _ = self.hits.insert(square);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.placement.length
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> Grid {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, length: {}, orientation: {:?}, hits: {} }}",
            self.placement.origin,
            self.placement.length,
            self.placement.orientation,
            self.hits.count_ones(),
        )
    }
}
