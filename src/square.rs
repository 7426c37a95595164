//! Grid coordinates on the 10×10 board.
//!
//! Squares are stored as a 0-based linear index (`row * 10 + col`). The
//! 1-based numbering used at the caller boundary is only produced and
//! accepted through [`Square::one_based`] and [`Square::from_one_based`].

use core::fmt;
use rand::Rng;

use crate::common::AgentError;
use crate::config::{BOARD_SIZE, CELL_COUNT};

const SIDE: usize = BOARD_SIZE as usize;

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

/// Orthogonal step directions, in the order neighbours are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl Square {
    /// Square from a 0-based index.
    pub fn new(index: usize) -> Result<Self, AgentError> {
        if index < CELL_COUNT {
            Ok(Square(index as u8))
        } else {
            Err(AgentError::SquareOutOfRange)
        }
    }

    /// Square from the 1-based number used by callers (1..=100).
    pub fn from_one_based(number: usize) -> Result<Self, AgentError> {
        match number.checked_sub(1) {
            Some(index) => Self::new(index),
            None => Err(AgentError::SquareOutOfRange),
        }
    }

    pub fn from_row_col(row: usize, col: usize) -> Result<Self, AgentError> {
        if row >= SIDE || col >= SIDE {
            return Err(AgentError::SquareOutOfRange);
        }
        Ok(Square((row * SIDE + col) as u8))
    }

    /// Iterator over all squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..CELL_COUNT as u8).map(Square)
    }

    /// Uniformly random square.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Square {
        Square(rng.random_range(0..CELL_COUNT as u8))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based square number (1..=100).
    #[inline]
    pub fn one_based(self) -> u8 {
        self.0 + 1
    }

    #[inline]
    pub fn row(self) -> usize {
        self.index() / SIDE
    }

    #[inline]
    pub fn col(self) -> usize {
        self.index() % SIDE
    }

    /// True for the checkerboard colour class searched in hunt mode.
    #[inline]
    pub fn is_hunt_color(self) -> bool {
        self.row() % 2 == self.col() % 2
    }

    /// The adjacent square in `dir`, or `None` at the board edge.
    pub fn step(self, dir: Direction) -> Option<Square> {
        let (row, col) = (self.row(), self.col());
        let (row, col) = match dir {
            Direction::Left => (row, col.checked_sub(1)?),
            Direction::Right => (row, col + 1),
            Direction::Up => (row.checked_sub(1)?, col),
            Direction::Down => (row + 1, col),
        };
        Square::from_row_col(row, col).ok()
    }

    /// In-bounds orthogonal neighbours: left, right, up, down.
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
