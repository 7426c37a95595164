//! Common types for the targeting agent: guess outcomes, modes and errors.

use core::fmt;
use core::str::FromStr;

use crate::bitboard::BitBoardError;

/// Result of a guess as reported by whoever checks the opponent's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Guess missed all ships.
    Miss,
    /// Guess hit a ship that is still afloat.
    Hit,
    /// Guess sank the ship currently being pursued.
    Sunk,
}

impl Outcome {
    /// Wire token, exactly as exchanged at the caller boundary.
    pub const fn token(self) -> &'static str {
        match self {
            Outcome::Miss => "MISS",
            Outcome::Hit => "HIT",
            Outcome::Sunk => "SUNK",
        }
    }
}

impl FromStr for Outcome {
    type Err = AgentError;

    /// Tokens are case-sensitive; anything else is a caller error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MISS" => Ok(Outcome::Miss),
            "HIT" => Ok(Outcome::Hit),
            "SUNK" => Ok(Outcome::Sunk),
            _ => Err(AgentError::InvalidOutcome),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Search phase of a targeting agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// No unresolved hit; guesses come from the hunt order.
    #[default]
    Hunt,
    /// Pursuing a ship after a hit; guesses come from the candidate queue.
    Target,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Hunt => f.write_str("HUNT"),
            Mode::Target => f.write_str("TARGET"),
        }
    }
}

/// Errors returned by the targeting agent. A call that fails leaves the
/// agent untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentError {
    /// Outcome token was not one of `HIT`, `MISS` or `SUNK`.
    InvalidOutcome,
    /// Square number outside the board.
    SquareOutOfRange,
    /// Follow-up hit shares neither row nor column with the first hit.
    OrientationConflict,
    /// Follow-up hit reported on the first hit square itself.
    DuplicateHit,
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::InvalidOutcome => write!(f, "Outcome must be one of HIT, MISS or SUNK"),
            AgentError::SquareOutOfRange => write!(f, "Square is outside the board"),
            AgentError::OrientationConflict => {
                write!(f, "Hit is not in line with the ship being pursued")
            }
            AgentError::DuplicateHit => write!(f, "Hit reported twice on the same square"),
        }
    }
}

/// Errors returned by target board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., index out of bounds).
    BitBoardError(BitBoardError),
    /// Layout list does not come in `[code, length]` pairs.
    MalformedLayout,
    /// Ship length is zero or larger than the board.
    InvalidLength,
    /// Origin square is outside the board.
    OriginOutOfRange,
    /// Ship would leave the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Guess was already made at this position.
    AlreadyGuessed,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::MalformedLayout => write!(f, "Layout must be a list of code/length pairs"),
            BoardError::InvalidLength => write!(f, "Ship length does not fit the board"),
            BoardError::OriginOutOfRange => write!(f, "Ship origin is outside the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::AlreadyGuessed => write!(f, "Guess was already made at this position"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AgentError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
